use std::env;

use crate::parser::interface::UserInterface;
use crate::parser::{Args, ErrorContext, Scanner, Schema};

/// The configured command line parser.
/// Built via `CommandLine::build` or `CommandLine::build_parser`.
pub struct ArgsParser {
    program: String,
    schema: Schema,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for ArgsParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgsParser")
            .field("program", &self.program)
            .field("schema", &self.schema)
            .finish()
    }
}

impl ArgsParser {
    pub(crate) fn new(
        program: impl Into<String>,
        schema: Schema,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            schema,
            user_interface,
        }
    }

    /// Run the command line parser against the input tokens.
    ///
    /// Every token beginning with `-` is scanned for flags, and each value-bearing flag claims the following token as its operand.
    /// Other tokens are ignored.
    ///
    /// If the parser encounters an error (ex: an undeclared flag, a missing or un-convertible operand), it displays the error with its context and returns `Err(1)`.
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<Args, i32> {
        let ArgsParser {
            program,
            schema,
            user_interface,
        } = self;
        invoke(&program, schema, tokens, &*user_interface)
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// If the parser encounters an error (ex: an undeclared flag, a missing or un-convertible operand), it exits with error code `1` (via `std::process::exit`).
    pub fn parse(self) -> Args {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(args) => args,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}

fn invoke(
    program: &str,
    schema: Schema,
    tokens: &[&str],
    user_interface: &(impl UserInterface + ?Sized),
) -> Result<Args, i32> {
    let usage = schema.usage();

    match Scanner::new(schema).consume(tokens) {
        Ok(args) => Ok(args),
        Err((offset, error)) => {
            user_interface.print_error(error);
            user_interface.print_error_context(ErrorContext::new(offset, tokens));
            user_interface.print_usage(format!("usage: {program} {usage}").trim_end().to_string());
            Err(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::InMemoryInterface;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[rstest]
    #[case(vec![])]
    #[case(vec!["-l"])]
    #[case(vec!["-l", "-p", "8080"])]
    #[case(vec!["-lp", "8080", "-d", "/tmp"])]
    #[case(vec!["ignored", "-d", "-l"])]
    fn invoke_complete(#[case] tokens: Vec<&str>) {
        // Setup
        let schema = Schema::compile("l,p#,d*").unwrap();
        let interface = InMemoryInterface::default();

        // Execute
        let result = invoke("program", schema, tokens.as_slice(), &interface);

        // Verify
        assert!(result.is_ok());
        let (usage, error, error_context) = interface.consume();
        assert_eq!(usage, None);
        assert_eq!(error, None);
        assert_eq!(error_context, None);
    }

    #[rstest]
    #[case(vec!["-x"], "Argument -x unexpected.", 1)]
    #[case(vec!["-lx"], "Argument -x unexpected.", 2)]
    #[case(vec!["-p"], "Could not find integer parameter for -p.", 2)]
    #[case(vec!["-p", "abc"], "Argument -p expects an integer but was 'abc'.", 2)]
    #[case(vec!["-l", "-d"], "Could not find string parameter for -d.", 4)]
    fn invoke_error(#[case] tokens: Vec<&str>, #[case] message: &str, #[case] offset: usize) {
        // Setup
        let schema = Schema::compile("l,p#,d*").unwrap();
        let interface = InMemoryInterface::default();

        // Execute
        let result = invoke("program", schema, tokens.as_slice(), &interface);

        // Verify
        assert_eq!(result.unwrap_err(), 1);
        let (usage, error, error_context) = interface.consume();
        assert_eq!(usage.unwrap(), "usage: program -[l,p#,d*]");
        let error = error.unwrap();
        assert_contains!(error, "Parse error: ");
        assert_contains!(error, message);
        assert_eq!(
            error_context.unwrap(),
            ErrorContext::new(offset, tokens.as_slice())
        );
    }

    #[test]
    fn invoke_error_empty_schema() {
        // Setup
        let schema = Schema::compile("").unwrap();
        let interface = InMemoryInterface::default();

        // Execute
        let result = invoke("program", schema, &["-x"], &interface);

        // Verify
        assert_eq!(result.unwrap_err(), 1);
        let (usage, error, _) = interface.consume();
        assert_eq!(usage.unwrap(), "usage: program");
        assert_eq!(error.unwrap(), "Parse error: Argument -x unexpected.");
    }

    #[test]
    fn parse_tokens() {
        // Setup
        let parser = ArgsParser::new(
            "program",
            Schema::compile("l,p#").unwrap(),
            Box::new(InMemoryInterface::default()),
        );

        // Execute
        let args = parser.parse_tokens(&["-l", "-p", "42"]).unwrap();

        // Verify
        assert!(args.get_bool('l'));
        assert_eq!(args.get_int('p'), 42);
    }

    #[test]
    fn parse_tokens_error() {
        let parser = ArgsParser::new(
            "program",
            Schema::compile("l").unwrap(),
            Box::new(InMemoryInterface::default()),
        );

        assert_eq!(parser.parse_tokens(&["-z"]).unwrap_err(), 1);
    }
}
