//! Injectable log sink.
//!
//! Commands report progress through a [`LogSink`] instead of printing
//! directly, so output stays testable and quiet runs stay quiet. The console
//! variant forwards to `tracing`; timestamps, level coloring, and filtering
//! belong to the subscriber installed in `main`.

/// Destination for progress and error messages.
pub trait LogSink {
    fn log(&self, message: &str);
    fn log_error(&self, message: &str);
}

/// Forwards messages to the tracing subscriber on stderr.
pub struct ConsoleLog;

impl LogSink for ConsoleLog {
    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn log_error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Discards all messages.
pub struct NullLog;

impl LogSink for NullLog {
    fn log(&self, _message: &str) {}

    fn log_error(&self, _message: &str) {}
}

/// Records messages for assertions in tests.
#[cfg(test)]
pub struct RecordingLog(pub std::cell::RefCell<Vec<String>>);

#[cfg(test)]
impl RecordingLog {
    pub fn new() -> Self {
        Self(std::cell::RefCell::new(Vec::new()))
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

#[cfg(test)]
impl LogSink for RecordingLog {
    fn log(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }

    fn log_error(&self, message: &str) {
        self.0.borrow_mut().push(format!("ERROR: {message}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_captures_messages_in_order() {
        let sink = RecordingLog::new();
        sink.log("first");
        sink.log_error("second");

        assert_eq!(sink.messages(), vec!["first", "ERROR: second"]);
    }

    #[test]
    fn null_sink_accepts_messages() {
        let sink = NullLog;
        sink.log("ignored");
        sink.log_error("also ignored");
    }
}
