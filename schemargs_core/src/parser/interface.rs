use crate::parser::{ArgsError, ErrorContext};

pub(crate) trait UserInterface {
    fn print_usage(&self, usage: String);
    fn print_error(&self, error: ArgsError);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print_usage(&self, usage: String) {
        eprintln!("{usage}");
    }

    fn print_error(&self, error: ArgsError) {
        eprintln!("Parse error: {error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}
