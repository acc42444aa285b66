use crate::parser::{ArgsError, ArgsParser, ConsoleInterface, Schema, UserInterface};

/// The base command line parser.
///
/// ### Example
/// ```
/// # use schemargs_core as schemargs;
/// use schemargs::CommandLine;
///
/// let parser = CommandLine::new("program", "l,p#,d*")
///     .build();
/// let args = parser.parse_tokens(&["-l", "-p", "8080"]).unwrap();
///
/// assert!(args.get_bool('l'));
/// assert_eq!(args.get_int('p'), 8080);
/// ```
#[derive(Debug)]
pub struct CommandLine {
    program: String,
    schema: String,
}

impl CommandLine {
    /// Create a command line parser for the `program`, recognizing the flags declared in the `schema`.
    ///
    /// The schema is a comma separated list of elements, each a single letter identifier optionally followed by a kind suffix:
    /// none for a boolean, `*` for a string, `#` for an integer, `##` for a double.
    pub fn new(program: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            schema: schema.into(),
        }
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<ArgsParser, ArgsError> {
        let schema = Schema::compile(&self.schema)?;
        Ok(ArgsParser::new(self.program, schema, user_interface))
    }

    /// Build the command line parser as a Result.
    /// This compiles the schema and checks for errors (ex: a non-alphabetic identifier).
    ///
    /// ### Example
    /// ```
    /// # use schemargs_core as schemargs;
    /// use schemargs::{CommandLine, ErrorCode};
    ///
    /// let error = CommandLine::new("program", "f~").build_parser().unwrap_err();
    /// assert_eq!(error.code(), ErrorCode::InvalidFormat);
    /// ```
    pub fn build_parser(self) -> Result<ArgsParser, ArgsError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This compiles the schema and checks for errors (ex: a non-alphabetic identifier).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> ArgsParser {
        match self.build_parser() {
            Ok(parser) => parser,
            Err(e) => {
                eprintln!("Schema error: {e}");
                std::process::exit(1);
            }
        }
    }
}
