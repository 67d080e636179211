use crate::{config::Config, traits::Notifier};

/// Prints notifications as styled terminal lines, success to stdout and
/// errors to stderr.
pub struct TerminalNotifier {
    config: Config,
}

impl TerminalNotifier {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Notifier for TerminalNotifier {
    fn notify_success(&self, message: &str) {
        println!("{}", self.config.output_success.format_str(message));
    }

    fn notify_error(&self, message: &str) {
        eprintln!("{}", self.config.output_error.format_str(message));
    }
}
