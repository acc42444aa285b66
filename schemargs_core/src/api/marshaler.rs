use std::str::FromStr;
use thiserror::Error;

use crate::api::Operands;
use crate::model::Kind;

/// Behaviour to capture the value of a single flag from the input tokens.
/// One boxed implementation per `Kind`; the scanner only sees the trait.
pub(crate) trait ArgumentMarshaler {
    /// Declare that the flag has been specified, claiming its operand (if any) from the `operands`.
    fn set(&mut self, operands: &mut Operands<'_>) -> Result<(), MarshalError>;

    /// Get the current value.
    fn value(&self) -> Value<'_>;
}

/// A borrowed view onto the value held by an `ArgumentMarshaler`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Value<'a> {
    Boolean(bool),
    String(&'a str),
    Integer(i32),
    Double(f64),
}

impl Value<'_> {
    pub(crate) fn kind(&self) -> Kind {
        match self {
            Value::Boolean(_) => Kind::Boolean,
            Value::String(_) => Kind::String,
            Value::Integer(_) => Kind::Integer,
            Value::Double(_) => Kind::Double,
        }
    }
}

/// A marshaler failure, not yet associated with its flag.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MarshalError {
    #[error("no string operand remains.")]
    MissingString,
    #[error("no integer operand remains.")]
    MissingInteger,
    #[error("cannot convert '{0}' to integer.")]
    InvalidInteger(String),
    #[error("no double operand remains.")]
    MissingDouble,
    #[error("cannot convert '{0}' to double.")]
    InvalidDouble(String),
}

fn capture<T: FromStr>(
    operands: &mut Operands<'_>,
    missing: MarshalError,
    invalid: impl FnOnce(String) -> MarshalError,
) -> Result<T, MarshalError> {
    let token = operands.next().ok_or(missing)?;
    T::from_str(token).map_err(|_| invalid(token.to_string()))
}

#[derive(Debug, Default)]
pub(crate) struct BooleanMarshaler {
    value: bool,
}

impl ArgumentMarshaler for BooleanMarshaler {
    fn set(&mut self, _operands: &mut Operands<'_>) -> Result<(), MarshalError> {
        // Presence is the signal; nothing is claimed.
        self.value = true;
        Ok(())
    }

    fn value(&self) -> Value<'_> {
        Value::Boolean(self.value)
    }
}

#[derive(Debug, Default)]
pub(crate) struct StringMarshaler {
    value: String,
}

impl ArgumentMarshaler for StringMarshaler {
    fn set(&mut self, operands: &mut Operands<'_>) -> Result<(), MarshalError> {
        let token = operands.next().ok_or(MarshalError::MissingString)?;
        self.value = token.to_string();
        Ok(())
    }

    fn value(&self) -> Value<'_> {
        Value::String(&self.value)
    }
}

#[derive(Debug, Default)]
pub(crate) struct IntegerMarshaler {
    value: i32,
}

impl ArgumentMarshaler for IntegerMarshaler {
    fn set(&mut self, operands: &mut Operands<'_>) -> Result<(), MarshalError> {
        self.value = capture(
            operands,
            MarshalError::MissingInteger,
            MarshalError::InvalidInteger,
        )?;
        Ok(())
    }

    fn value(&self) -> Value<'_> {
        Value::Integer(self.value)
    }
}

#[derive(Debug, Default)]
pub(crate) struct DoubleMarshaler {
    value: f64,
}

impl ArgumentMarshaler for DoubleMarshaler {
    fn set(&mut self, operands: &mut Operands<'_>) -> Result<(), MarshalError> {
        self.value = capture(
            operands,
            MarshalError::MissingDouble,
            MarshalError::InvalidDouble,
        )?;
        Ok(())
    }

    fn value(&self) -> Value<'_> {
        Value::Double(self.value)
    }
}
