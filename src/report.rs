use crate::error::TzMapError;
use log::{error, warn};

/// Diagnostic sink the host binds the editing session to.
///
/// The core reports every failure here with its full context (row, column,
/// offending value) and never decides process-level severity itself.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorSink {
    fn report(&mut self, error: &TzMapError);
}

/// Default sink: forwards to the `log` facade. Validation failures are
/// warnings (the cell is cleared and editing continues); everything else is
/// an error-level diagnostic.
#[derive(Debug, Default)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&mut self, err: &TzMapError) {
        match err {
            TzMapError::Validation { .. } => warn!("{}. Removing.", err),
            TzMapError::Load(_) | TzMapError::Save(_) | TzMapError::Structural(_) => {
                error!("{}", err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;

    struct Recording(Vec<String>);

    impl ErrorSink for Recording {
        fn report(&mut self, err: &TzMapError) {
            self.0.push(err.to_string());
        }
    }

    #[test]
    fn test_log_sink_forwards_without_panicking() {
        let mut sink = LogSink;
        sink.report(&TzMapError::load("unreadable file"));
        sink.report(&TzMapError::validation(0, Column::OrganiserTz, "y"));
    }

    #[test]
    fn test_sink_receives_full_cell_context() {
        let mut sink = Recording(Vec::new());
        sink.report(&TzMapError::validation(2, Column::SystemTz, "Narnia/Lamppost"));
        assert_eq!(sink.0.len(), 1);
        assert!(sink.0[0].contains("Cell[2][SystemTz]"));
        assert!(sink.0[0].contains("Narnia/Lamppost"));
    }
}
