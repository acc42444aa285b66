use thiserror::Error;

use crate::api::MarshalError;
use crate::model::ErrorCode;

/// The single failure of a schema compile or argument scan.
///
/// Each variant carries the flag identifier at fault.
/// Conversion failures (and bad schema suffixes) additionally carry the offending text, see [`ArgsError::parameter`].
/// The `Display` implementation renders the canonical message for each variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// The schema declares an identifier which is not alphabetic.
    #[error("'{argument}' is not a valid argument name.")]
    InvalidArgumentName {
        /// The offending identifier.
        argument: char,
    },

    /// The schema declares an unrecognized suffix.
    #[error("Argument -{argument} has invalid format: '{format}'.")]
    InvalidFormat {
        /// The identifier of the offending element.
        argument: char,
        /// The unrecognized suffix.
        format: String,
    },

    /// The input specifies a flag not declared by the schema.
    #[error("Argument -{argument} unexpected.")]
    UnexpectedArgument {
        /// The undeclared identifier.
        argument: char,
    },

    /// A string flag has no operand.
    #[error("Could not find string parameter for -{argument}.")]
    MissingString {
        /// The string flag.
        argument: char,
    },

    /// An integer flag has no operand.
    #[error("Could not find integer parameter for -{argument}.")]
    MissingInteger {
        /// The integer flag.
        argument: char,
    },

    /// An integer flag's operand cannot be converted.
    #[error("Argument -{argument} expects an integer but was '{parameter}'.")]
    InvalidInteger {
        /// The integer flag.
        argument: char,
        /// The operand as it appeared in the input.
        parameter: String,
    },

    /// A double flag has no operand.
    #[error("Could not find double parameter for -{argument}.")]
    MissingDouble {
        /// The double flag.
        argument: char,
    },

    /// A double flag's operand cannot be converted.
    #[error("Argument -{argument} expects a double but was '{parameter}'.")]
    InvalidDouble {
        /// The double flag.
        argument: char,
        /// The operand as it appeared in the input.
        parameter: String,
    },
}

impl ArgsError {
    pub(crate) fn marshal(argument: char, error: MarshalError) -> Self {
        match error {
            MarshalError::MissingString => ArgsError::MissingString { argument },
            MarshalError::MissingInteger => ArgsError::MissingInteger { argument },
            MarshalError::InvalidInteger(parameter) => ArgsError::InvalidInteger {
                argument,
                parameter,
            },
            MarshalError::MissingDouble => ArgsError::MissingDouble { argument },
            MarshalError::InvalidDouble(parameter) => ArgsError::InvalidDouble {
                argument,
                parameter,
            },
        }
    }

    /// The code of this error.
    ///
    /// ### Example
    /// ```
    /// # use schemargs_core::{Args, ErrorCode};
    /// let error = Args::parse("x#", &["-x"]).unwrap_err();
    /// assert_eq!(error.code(), ErrorCode::MissingInteger);
    /// ```
    pub fn code(&self) -> ErrorCode {
        match self {
            ArgsError::InvalidArgumentName { .. } => ErrorCode::InvalidArgumentName,
            ArgsError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ArgsError::UnexpectedArgument { .. } => ErrorCode::UnexpectedArgument,
            ArgsError::MissingString { .. } => ErrorCode::MissingString,
            ArgsError::MissingInteger { .. } => ErrorCode::MissingInteger,
            ArgsError::InvalidInteger { .. } => ErrorCode::InvalidInteger,
            ArgsError::MissingDouble { .. } => ErrorCode::MissingDouble,
            ArgsError::InvalidDouble { .. } => ErrorCode::InvalidDouble,
        }
    }

    /// The flag identifier at fault.
    pub fn argument(&self) -> char {
        match self {
            ArgsError::InvalidArgumentName { argument }
            | ArgsError::InvalidFormat { argument, .. }
            | ArgsError::UnexpectedArgument { argument }
            | ArgsError::MissingString { argument }
            | ArgsError::MissingInteger { argument }
            | ArgsError::InvalidInteger { argument, .. }
            | ArgsError::MissingDouble { argument }
            | ArgsError::InvalidDouble { argument, .. } => *argument,
        }
    }

    /// The offending text, when there is one.
    ///
    /// This is the raw operand for `InvalidInteger`/`InvalidDouble`, and the unrecognized suffix for `InvalidFormat`.
    ///
    /// ### Example
    /// ```
    /// # use schemargs_core::Args;
    /// let error = Args::parse("x##", &["-x", "Forty two"]).unwrap_err();
    /// assert_eq!(error.parameter(), Some("Forty two"));
    /// ```
    pub fn parameter(&self) -> Option<&str> {
        match self {
            ArgsError::InvalidFormat { format, .. } => Some(format.as_str()),
            ArgsError::InvalidInteger { parameter, .. }
            | ArgsError::InvalidDouble { parameter, .. } => Some(parameter.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(MarshalError::MissingString, ArgsError::MissingString { argument: 'x' })]
    #[case(MarshalError::MissingInteger, ArgsError::MissingInteger { argument: 'x' })]
    #[case(MarshalError::MissingDouble, ArgsError::MissingDouble { argument: 'x' })]
    #[case(
        MarshalError::InvalidInteger("abc".to_string()),
        ArgsError::InvalidInteger { argument: 'x', parameter: "abc".to_string() }
    )]
    #[case(
        MarshalError::InvalidDouble("abc".to_string()),
        ArgsError::InvalidDouble { argument: 'x', parameter: "abc".to_string() }
    )]
    fn marshal(#[case] error: MarshalError, #[case] expected: ArgsError) {
        assert_eq!(ArgsError::marshal('x', error), expected);
    }

    #[rstest]
    #[case(
        ArgsError::InvalidArgumentName { argument: '1' },
        ErrorCode::InvalidArgumentName,
        '1',
        None,
        "'1' is not a valid argument name."
    )]
    #[case(
        ArgsError::InvalidFormat { argument: 'f', format: "~".to_string() },
        ErrorCode::InvalidFormat,
        'f',
        Some("~"),
        "Argument -f has invalid format: '~'."
    )]
    #[case(
        ArgsError::UnexpectedArgument { argument: 'x' },
        ErrorCode::UnexpectedArgument,
        'x',
        None,
        "Argument -x unexpected."
    )]
    #[case(
        ArgsError::MissingString { argument: 's' },
        ErrorCode::MissingString,
        's',
        None,
        "Could not find string parameter for -s."
    )]
    #[case(
        ArgsError::MissingInteger { argument: 'i' },
        ErrorCode::MissingInteger,
        'i',
        None,
        "Could not find integer parameter for -i."
    )]
    #[case(
        ArgsError::InvalidInteger { argument: 'i', parameter: "Forty two".to_string() },
        ErrorCode::InvalidInteger,
        'i',
        Some("Forty two"),
        "Argument -i expects an integer but was 'Forty two'."
    )]
    #[case(
        ArgsError::MissingDouble { argument: 'd' },
        ErrorCode::MissingDouble,
        'd',
        None,
        "Could not find double parameter for -d."
    )]
    #[case(
        ArgsError::InvalidDouble { argument: 'd', parameter: "Forty two".to_string() },
        ErrorCode::InvalidDouble,
        'd',
        Some("Forty two"),
        "Argument -d expects a double but was 'Forty two'."
    )]
    fn surface(
        #[case] error: ArgsError,
        #[case] code: ErrorCode,
        #[case] argument: char,
        #[case] parameter: Option<&str>,
        #[case] message: &str,
    ) {
        assert_eq!(error.code(), code);
        assert_eq!(error.argument(), argument);
        assert_eq!(error.parameter(), parameter);
        assert_eq!(error.to_string(), message);
    }
}
