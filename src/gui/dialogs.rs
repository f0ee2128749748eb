//! User-facing notifications for whole-operation failures.

use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Sink for modal warnings and errors.
pub trait Notifier {
    fn warning(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Native modal message boxes.
#[derive(Default)]
pub struct NativeDialogs;

impl NativeDialogs {
    fn show(level: MessageLevel, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl Notifier for NativeDialogs {
    fn warning(&mut self, message: &str) {
        log::warn!("{message}");
        Self::show(MessageLevel::Warning, "Warning", message);
    }

    fn error(&mut self, message: &str) {
        log::error!("{message}");
        Self::show(MessageLevel::Error, "Error", message);
    }
}

/// Collects messages instead of showing them.
#[cfg(test)]
#[derive(Default, Debug)]
pub struct RecordingNotifier {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
