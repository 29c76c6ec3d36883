//! Validation Feedback
//!
//! Inline mode renders the message stored in `TodoState::error`;
//! modal mode blocks on a `window.alert`.

use crate::config::ValidationMode;
use crate::error::TodoError;

pub fn report(mode: ValidationMode, action: &str, err: TodoError) {
    log::debug!("[TODO] {} rejected: {:?}", action, err);

    if mode == ValidationMode::Modal {
        alert(&err.to_string());
    }
}

fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::error!("[TODO] alert failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::sync::Mutex;

    struct Capture(Mutex<Vec<(Level, String)>>);

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    impl Log for Capture {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    #[test]
    fn test_rejection_logged_below_info() {
        log::set_logger(&CAPTURE).expect("only logger in this test binary");
        log::set_max_level(LevelFilter::Trace);

        report(ValidationMode::Inline, "commit", TodoError::EmptyText);

        let lines = CAPTURE.0.lock().unwrap();
        let (level, _) = lines
            .iter()
            .find(|(_, msg)| msg.starts_with("[TODO] commit rejected"))
            .expect("rejection logged");
        assert_eq!(*level, Level::Debug);
        assert!(*level > Level::Info);
    }
}
