use crate::api::{
    ArgumentMarshaler, BooleanMarshaler, DoubleMarshaler, IntegerMarshaler, StringMarshaler,
};
use crate::constant::*;

/// The kind of value a flag carries, as declared by its schema suffix.
///
/// | Suffix | Kind      | Zero value |
/// |--------|-----------|------------|
/// |        | `Boolean` | `false`    |
/// | `*`    | `String`  | `""`       |
/// | `#`    | `Integer` | `0`        |
/// | `##`   | `Double`  | `0.0`      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A flag which takes no operand; present means `true`.
    Boolean,
    /// A flag which takes one operand, kept verbatim.
    String,
    /// A flag which takes one operand, parsed as a base-10 `i32`.
    Integer,
    /// A flag which takes one operand, parsed as an `f64`.
    Double,
}

impl Kind {
    /// Match a schema element suffix to its kind.
    ///
    /// ### Example
    /// ```
    /// # use schemargs_core::Kind;
    /// assert_eq!(Kind::from_suffix(""), Some(Kind::Boolean));
    /// assert_eq!(Kind::from_suffix("##"), Some(Kind::Double));
    /// assert_eq!(Kind::from_suffix("~"), None);
    /// ```
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            BOOLEAN_SUFFIX => Some(Kind::Boolean),
            STRING_SUFFIX => Some(Kind::String),
            INTEGER_SUFFIX => Some(Kind::Integer),
            DOUBLE_SUFFIX => Some(Kind::Double),
            _ => None,
        }
    }

    /// Create the zero-valued marshaler for this kind.
    pub(crate) fn marshaler(&self) -> Box<dyn ArgumentMarshaler> {
        match self {
            Kind::Boolean => Box::new(BooleanMarshaler::default()),
            Kind::String => Box::new(StringMarshaler::default()),
            Kind::Integer => Box::new(IntegerMarshaler::default()),
            Kind::Double => Box::new(DoubleMarshaler::default()),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Boolean => write!(f, "boolean"),
            Kind::String => write!(f, "string"),
            Kind::Integer => write!(f, "integer"),
            Kind::Double => write!(f, "double"),
        }
    }
}

/// The code of an [`ArgsError`](crate::ArgsError), for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A schema element's identifier is not alphabetic.
    InvalidArgumentName,
    /// A schema element's suffix is not one of `*`, `#`, `##` (or empty).
    InvalidFormat,
    /// A flag was specified which the schema does not declare.
    UnexpectedArgument,
    /// A string flag was specified without a following operand.
    MissingString,
    /// An integer flag was specified without a following operand.
    MissingInteger,
    /// An integer flag's operand is not an integer.
    InvalidInteger,
    /// A double flag was specified without a following operand.
    MissingDouble,
    /// A double flag's operand is not a double.
    InvalidDouble,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCode::InvalidArgumentName => "INVALID_ARGUMENT_NAME",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::UnexpectedArgument => "UNEXPECTED_ARGUMENT",
            ErrorCode::MissingString => "MISSING_STRING",
            ErrorCode::MissingInteger => "MISSING_INTEGER",
            ErrorCode::InvalidInteger => "INVALID_INTEGER",
            ErrorCode::MissingDouble => "MISSING_DOUBLE",
            ErrorCode::InvalidDouble => "INVALID_DOUBLE",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Value;
    use rstest::rstest;

    #[rstest]
    #[case("", Some(Kind::Boolean))]
    #[case("*", Some(Kind::String))]
    #[case("#", Some(Kind::Integer))]
    #[case("##", Some(Kind::Double))]
    #[case("~", None)]
    #[case("###", None)]
    #[case("*#", None)]
    #[case(" ", None)]
    fn kind_from_suffix(#[case] suffix: &str, #[case] expected: Option<Kind>) {
        assert_eq!(Kind::from_suffix(suffix), expected);
    }

    #[rstest]
    #[case(Kind::Boolean, Value::Boolean(false))]
    #[case(Kind::String, Value::String(""))]
    #[case(Kind::Integer, Value::Integer(0))]
    #[case(Kind::Double, Value::Double(0.0))]
    fn kind_marshaler_zero(#[case] kind: Kind, #[case] expected: Value) {
        let marshaler = kind.marshaler();
        assert_eq!(marshaler.value(), expected);
        assert_eq!(marshaler.value().kind(), kind);
    }

    #[test]
    fn error_code_display() {
        assert_eq!(ErrorCode::InvalidArgumentName.to_string(), "INVALID_ARGUMENT_NAME");
        assert_eq!(ErrorCode::InvalidDouble.to_string(), "INVALID_DOUBLE");
    }
}
