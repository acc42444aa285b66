use std::collections::BTreeSet;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{MarshalError, Operands};
use crate::constant::*;
use crate::parser::{Args, ArgsError, Schema};

/// Walks the input tokens against a compiled `Schema`, setting each specified flag's marshaler.
///
/// Only tokens beginning with `-` are scanned; every character after the marker is one flag identifier.
/// A flag which takes an operand claims the next unclaimed token, even from within a group:
/// `-xy a b` hands `a` to `-x` and `b` to `-y`.
/// A claimed token is never itself scanned for flags.
///
/// The scan halts on the first error.
pub(crate) struct Scanner {
    schema: Schema,
    found: BTreeSet<char>,
}

impl Scanner {
    pub(crate) fn new(schema: Schema) -> Self {
        Self {
            schema,
            found: BTreeSet::default(),
        }
    }

    /// Consume the tokens.
    /// On failure, the error is paired with the character offset (counted in chars over the un-spaced tokens) at which it occurred.
    pub(crate) fn consume(mut self, tokens: &[&str]) -> Result<Args, (usize, ArgsError)> {
        let mut operands = Operands::new(tokens);

        while let Some(token) = operands.next() {
            let group = match token.strip_prefix(FLAG_MARKER) {
                Some(group) => group,
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Skipping non-flag token '{token}'.");
                    }

                    continue;
                }
            };
            // Skip past the marker.
            let group_offset = operands.offset(operands.index() - 1) + 1;

            for (index, argument) in group.chars().enumerate() {
                self.scan_flag(argument, &mut operands)
                    .map_err(|(offset, error)| (offset.unwrap_or(group_offset + index), error))?;
            }
        }

        let Scanner { schema, found } = self;
        Ok(Args::new(schema, found))
    }

    fn scan_flag(
        &mut self,
        argument: char,
        operands: &mut Operands<'_>,
    ) -> Result<(), (Option<usize>, ArgsError)> {
        let marshaler = match self.schema.marshaler_mut(argument) {
            Some(marshaler) => marshaler,
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Flag -{argument} is not declared by the schema.");
                }

                return Err((None, ArgsError::UnexpectedArgument { argument }));
            }
        };

        match marshaler.set(operands) {
            Ok(()) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Flag -{argument} set to {:?}.", marshaler.value());
                }

                self.found.insert(argument);
                Ok(())
            }
            Err(error) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Flag -{argument} failed: {error}");
                }

                let offset = match &error {
                    // Point past the final token.
                    MarshalError::MissingString
                    | MarshalError::MissingInteger
                    | MarshalError::MissingDouble => operands.offset(operands.index()),
                    // Point at the claimed operand.
                    MarshalError::InvalidInteger(_) | MarshalError::InvalidDouble(_) => {
                        operands.offset(operands.index() - 1)
                    }
                };
                Err((Some(offset), ArgsError::marshal(argument, error)))
            }
        }
    }
}
