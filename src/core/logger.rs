//! Main logger implementation

use super::{
    error::Result,
    facility::Facility,
    header::{AppName, Header, HostName, MessageID, ProcessID, Version},
    message::Message,
    metadata::Metadata,
    metrics::LoggerMetrics,
    optional::Optional,
    payload::PayloadValue,
    priority::Priority,
    severity::Severity,
    timestamp::Timestamp,
    writer::Writer,
};
use crate::writers::ConsoleWriter;
use parking_lot::Mutex;

/// Builds one [`Message`] per call and hands it to a [`Writer`]
///
/// Every message carries the logger's facility, version, host, app name,
/// process id and metadata, a timestamp sampled at the call, and no
/// message id.
///
/// # Example
///
/// ```
/// use rust_syslog_logger::prelude::*;
///
/// let sink = MemoryWriter::new();
/// let logger = Logger::builder()
///     .facility(Facility::Local4)
///     .app_name("busybox")
///     .writer(sink.clone())
///     .build();
///
/// logger.notice(["hello, syslog!"]).unwrap();
/// assert!(sink.lines()[0].starts_with("<165>1 "));
/// ```
pub struct Logger {
    facility: Facility,
    version: Version,
    host_name: Optional<HostName>,
    app_name: Optional<AppName>,
    process_id: Optional<ProcessID>,
    metadata: Vec<Metadata>,
    max_severity: Severity,
    writer: Mutex<Box<dyn Writer>>,
    /// Metrics for observability (written, failed, skipped)
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger writing RFC5424 text to stderr with facility `user` and version 1
    #[must_use]
    pub fn default_logger(
        app_name: Optional<AppName>,
        host_name: Optional<HostName>,
        process_id: Optional<ProcessID>,
    ) -> Self {
        let mut builder = Logger::builder().writer(ConsoleWriter::stderr());
        builder.app_name = app_name;
        builder.host_name = host_name;
        builder.process_id = process_id;
        builder.build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn facility(&self) -> Facility {
        self.facility
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn host_name(&self) -> &Optional<HostName> {
        &self.host_name
    }

    pub fn app_name(&self) -> &Optional<AppName> {
        &self.app_name
    }

    pub fn process_id(&self) -> &Optional<ProcessID> {
        &self.process_id
    }

    pub fn metadata(&self) -> &[Metadata] {
        &self.metadata
    }

    pub fn max_severity(&self) -> Severity {
        self.max_severity
    }

    pub fn set_max_severity(&mut self, severity: Severity) {
        self.max_severity = severity;
    }

    /// Get the logger metrics
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Build the message a call at `severity` would write, stamped now
    pub fn message(&self, severity: Severity, payload: Vec<PayloadValue>) -> Message {
        let header = Header::new(
            Priority::new(self.facility, severity),
            self.version,
            Optional::present(Timestamp::now()),
            self.host_name.clone(),
            self.app_name.clone(),
            self.process_id.clone(),
            Optional::<MessageID>::absent(),
        );
        Message::new(header, self.metadata.clone(), payload)
    }

    /// Write a message at `severity`
    ///
    /// Messages less urgent than the configured maximum severity are
    /// skipped and report success. Writer errors are returned unchanged.
    pub fn log<I>(&self, severity: Severity, payload: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<PayloadValue>,
    {
        if severity > self.max_severity {
            self.metrics.record_skipped();
            return Ok(());
        }

        let message = self.message(severity, payload.into_iter().map(Into::into).collect());
        self.write(&message)
    }

    /// Hand an already built message to the writer
    pub fn write(&self, message: &Message) -> Result<()> {
        let result = self.writer.lock().write(message);
        if result.is_ok() {
            self.metrics.record_written();
        } else {
            self.metrics.record_failed();
        }
        result
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()
    }

    #[inline]
    pub fn emergency<I>(&self, payload: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<PayloadValue>,
    {
        self.log(Severity::Emergency, payload)
    }

    #[inline]
    pub fn alert<I>(&self, payload: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<PayloadValue>,
    {
        self.log(Severity::Alert, payload)
    }

    #[inline]
    pub fn critical<I>(&self, payload: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<PayloadValue>,
    {
        self.log(Severity::Critical, payload)
    }

    #[inline]
    pub fn error<I>(&self, payload: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<PayloadValue>,
    {
        self.log(Severity::Error, payload)
    }

    #[inline]
    pub fn warning<I>(&self, payload: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<PayloadValue>,
    {
        self.log(Severity::Warning, payload)
    }

    #[inline]
    pub fn notice<I>(&self, payload: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<PayloadValue>,
    {
        self.log(Severity::Notice, payload)
    }

    #[inline]
    pub fn informational<I>(&self, payload: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<PayloadValue>,
    {
        self.log(Severity::Informational, payload)
    }

    #[inline]
    pub fn debug<I>(&self, payload: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<PayloadValue>,
    {
        self.log(Severity::Debug, payload)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::default_logger(Optional::absent(), Optional::absent(), Optional::absent())
    }
}

/// Builder for creating a Logger with fluent API
///
/// # Example
///
/// ```
/// use rust_syslog_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .facility(Facility::Daemon)
///     .host_name("web01")
///     .app_name("api")
///     .process_id("4242")
///     .metadata(Metadata::new("origin").with_param("ip", "10.0.0.1"))
///     .max_severity(Severity::Informational)
///     .writer(ConsoleWriter::stdout())
///     .build();
///
/// assert_eq!(logger.facility(), Facility::Daemon);
/// ```
pub struct LoggerBuilder {
    facility: Facility,
    version: Version,
    host_name: Optional<HostName>,
    app_name: Optional<AppName>,
    process_id: Optional<ProcessID>,
    metadata: Vec<Metadata>,
    max_severity: Severity,
    writer: Option<Box<dyn Writer>>,
}

impl LoggerBuilder {
    /// Create a new builder: facility `user`, version 1, every severity
    /// written, stderr text output
    #[must_use]
    pub fn new() -> Self {
        Self {
            facility: Facility::User,
            version: Version::V1,
            host_name: Optional::absent(),
            app_name: Optional::absent(),
            process_id: Optional::absent(),
            metadata: Vec::new(),
            max_severity: Severity::Debug,
            writer: None,
        }
    }

    #[must_use]
    pub fn facility(mut self, facility: Facility) -> Self {
        self.facility = facility;
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<Version>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn host_name(mut self, host_name: impl Into<HostName>) -> Self {
        self.host_name = Optional::present(host_name.into());
        self
    }

    #[must_use]
    pub fn app_name(mut self, app_name: impl Into<AppName>) -> Self {
        self.app_name = Optional::present(app_name.into());
        self
    }

    #[must_use]
    pub fn process_id(mut self, process_id: impl Into<ProcessID>) -> Self {
        self.process_id = Optional::present(process_id.into());
        self
    }

    /// Attach a structured data element to every message
    ///
    /// May be called repeatedly; elements keep their insertion order.
    #[must_use]
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata.push(metadata);
        self
    }

    /// Least urgent severity that is still written
    #[must_use]
    pub fn max_severity(mut self, severity: Severity) -> Self {
        self.max_severity = severity;
        self
    }

    #[must_use]
    pub fn writer<W: Writer + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Build the logger
    #[must_use]
    pub fn build(self) -> Logger {
        let writer = self
            .writer
            .unwrap_or_else(|| Box::new(ConsoleWriter::stderr()));

        Logger {
            facility: self.facility,
            version: self.version,
            host_name: self.host_name,
            app_name: self.app_name,
            process_id: self.process_id,
            metadata: self.metadata,
            max_severity: self.max_severity,
            writer: Mutex::new(writer),
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use crate::writers::MemoryWriter;

    struct FailingWriter;

    impl Writer for FailingWriter {
        fn write(&mut self, _message: &Message) -> Result<()> {
            Err(LoggerError::writer("sink unavailable"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder().build();

        assert_eq!(logger.facility(), Facility::User);
        assert_eq!(logger.version(), Version::V1);
        assert!(logger.host_name().is_absent());
        assert!(logger.metadata().is_empty());
        assert_eq!(logger.max_severity(), Severity::Debug);
    }

    #[test]
    fn test_default_logger() {
        let logger = Logger::default_logger(
            Optional::present(AppName::from("busybox")),
            Optional::absent(),
            Optional::present(ProcessID::from("42")),
        );

        assert_eq!(logger.facility(), Facility::User);
        assert_eq!(logger.app_name(), &Optional::present(AppName::from("busybox")));
        assert!(logger.host_name().is_absent());
        assert_eq!(logger.process_id().value().map(ProcessID::as_str), Some("42"));
    }

    #[test]
    fn test_message_is_stamped_with_logger_fields() {
        let logger = Logger::builder()
            .facility(Facility::Local4)
            .host_name("localhost")
            .app_name("busybox")
            .metadata(Metadata::new("exampleSDID@0"))
            .build();

        let message = logger.message(Severity::Notice, vec!["hi".into()]);

        assert_eq!(message.header.priority.code(), 165);
        assert!(message.header.timestamp.is_present());
        assert!(message.header.message_id.is_absent());
        assert_eq!(message.metadata, vec![Metadata::new("exampleSDID@0")]);
        assert!(message.to_text().ends_with(" localhost busybox - - [exampleSDID@0] hi"));
    }

    #[test]
    fn test_severity_methods() {
        let sink = MemoryWriter::new();
        let logger = Logger::builder()
            .facility(Facility::Kernel)
            .writer(sink.clone())
            .build();

        logger.emergency(["m"]).unwrap();
        logger.alert(["m"]).unwrap();
        logger.critical(["m"]).unwrap();
        logger.error(["m"]).unwrap();
        logger.warning(["m"]).unwrap();
        logger.notice(["m"]).unwrap();
        logger.informational(["m"]).unwrap();
        logger.debug(["m"]).unwrap();

        let prefixes: Vec<String> = sink
            .lines()
            .iter()
            .map(|line| line.split(' ').next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(
            prefixes,
            vec!["<0>1", "<1>1", "<2>1", "<3>1", "<4>1", "<5>1", "<6>1", "<7>1"]
        );
        assert_eq!(logger.metrics().total_written(), 8);
    }

    #[test]
    fn test_max_severity_skips_less_urgent() {
        let sink = MemoryWriter::new();
        let logger = Logger::builder()
            .max_severity(Severity::Warning)
            .writer(sink.clone())
            .build();

        logger.error(["kept"]).unwrap();
        logger.debug(["dropped"]).unwrap();
        logger.informational(["dropped"]).unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(logger.metrics().skipped_count(), 2);
    }

    #[test]
    fn test_writer_error_is_returned() {
        let logger = Logger::builder().writer(FailingWriter).build();

        let err = logger.error(["boom"]).unwrap_err();
        assert!(matches!(err, LoggerError::WriterError(_)));
        assert_eq!(logger.metrics().failed_count(), 1);
        assert_eq!(logger.metrics().total_written(), 0);
    }

    #[test]
    fn test_logger_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }
}
