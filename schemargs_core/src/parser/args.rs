use std::collections::BTreeSet;

use crate::api::Value;
use crate::model::Kind;
use crate::parser::{ArgsError, Scanner, Schema};

/// The successfully parsed flags.
///
/// Getters are keyed by flag identifier and are permissive: an undeclared identifier, or one declared with a different kind, gives the kind's zero value.
/// Query each flag with the kind your schema declares for it.
///
/// ### Example
/// ```
/// # use schemargs_core::Args;
/// let args = Args::parse("l,p#,d*", &["-l", "-p", "8080", "-d", "/tmp"]).unwrap();
///
/// assert!(args.get_bool('l'));
/// assert_eq!(args.get_int('p'), 8080);
/// assert_eq!(args.get_string('d'), "/tmp");
/// assert_eq!(args.cardinality(), 3);
/// assert_eq!(args.usage(), "-[l,p#,d*]");
/// ```
#[derive(Debug)]
pub struct Args {
    schema: Schema,
    found: BTreeSet<char>,
}

impl Args {
    pub(crate) fn new(schema: Schema, found: BTreeSet<char>) -> Self {
        Self { schema, found }
    }

    /// Compile the `schema` and scan the `tokens` against it.
    ///
    /// Either every specified flag is valid and an `Args` is produced, or the first failure (from either step) is returned.
    /// Tokens which do not begin with `-` (and are not claimed as an operand) are ignored.
    ///
    /// ### Example
    /// ```
    /// # use schemargs_core::{Args, ArgsError};
    /// let error = Args::parse("x##", &["-x", "Forty two"]).unwrap_err();
    ///
    /// assert_eq!(
    ///     error,
    ///     ArgsError::InvalidDouble {
    ///         argument: 'x',
    ///         parameter: "Forty two".to_string()
    ///     }
    /// );
    /// ```
    pub fn parse(schema: &str, tokens: &[&str]) -> Result<Self, ArgsError> {
        let schema = Schema::compile(schema)?;
        Scanner::new(schema)
            .consume(tokens)
            .map_err(|(_, error)| error)
    }

    /// The number of distinct flags specified.
    pub fn cardinality(&self) -> usize {
        self.found.len()
    }

    /// Whether the flag `argument` was specified.
    pub fn has(&self, argument: char) -> bool {
        self.found.contains(&argument)
    }

    /// The schema text presented as `-[<schema>]`, or the empty string for an empty schema.
    pub fn usage(&self) -> String {
        self.schema.usage()
    }

    /// The kind the schema declares for the flag `argument`, if any.
    pub fn kind(&self, argument: char) -> Option<Kind> {
        self.value(argument).map(|value| value.kind())
    }

    /// The value of the boolean flag `argument`.
    pub fn get_bool(&self, argument: char) -> bool {
        match self.value(argument) {
            Some(Value::Boolean(value)) => value,
            _ => false,
        }
    }

    /// The value of the string flag `argument`.
    pub fn get_string(&self, argument: char) -> &str {
        match self.value(argument) {
            Some(Value::String(value)) => value,
            _ => "",
        }
    }

    /// The value of the integer flag `argument`.
    pub fn get_int(&self, argument: char) -> i32 {
        match self.value(argument) {
            Some(Value::Integer(value)) => value,
            _ => 0,
        }
    }

    /// The value of the double flag `argument`.
    pub fn get_double(&self, argument: char) -> f64 {
        match self.value(argument) {
            Some(Value::Double(value)) => value,
            _ => 0.0,
        }
    }

    fn value(&self, argument: char) -> Option<Value<'_>> {
        self.schema
            .marshaler(argument)
            .map(|marshaler| marshaler.value())
    }
}
