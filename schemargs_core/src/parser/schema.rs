use std::collections::BTreeMap;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::ArgumentMarshaler;
use crate::constant::*;
use crate::model::Kind;
use crate::parser::ArgsError;

/// A compiled schema: each declared flag identifier owns one zero-valued marshaler.
pub(crate) struct Schema {
    text: String,
    marshalers: BTreeMap<char, Box<dyn ArgumentMarshaler>>,
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("text", &self.text)
            .field("identifiers", &self.marshalers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Schema {
    /// Compile the schema text.
    ///
    /// The text is a comma separated list of elements; whitespace around an element is ignored, as are empty elements.
    /// Each element is an alphabetic identifier followed by an optional kind suffix (see [`Kind`]).
    /// Compiling stops at the first invalid element.
    pub(crate) fn compile(text: &str) -> Result<Self, ArgsError> {
        let mut marshalers: BTreeMap<char, Box<dyn ArgumentMarshaler>> = BTreeMap::default();

        for element in text.split(SCHEMA_SEPARATOR).map(str::trim) {
            let mut chars = element.chars();
            let argument = match chars.next() {
                Some(argument) => argument,
                None => continue,
            };

            if !argument.is_alphabetic() {
                return Err(ArgsError::InvalidArgumentName { argument });
            }

            let suffix = chars.as_str();
            let kind = Kind::from_suffix(suffix).ok_or_else(|| ArgsError::InvalidFormat {
                argument,
                format: suffix.to_string(),
            })?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Schema element '{element}' compiled to -{argument} ({kind}).");
            }

            if marshalers.insert(argument, kind.marshaler()).is_some() {
                // Last declaration wins.
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Schema re-declares -{argument}; replacing the earlier declaration.");
                }
            }
        }

        Ok(Self {
            text: text.to_string(),
            marshalers,
        })
    }

    #[cfg(test)]
    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// The schema text presented as `-[<schema>]`, or the empty string for an empty schema.
    pub(crate) fn usage(&self) -> String {
        if self.text.is_empty() {
            String::default()
        } else {
            format!("-[{}]", self.text)
        }
    }

    pub(crate) fn marshaler(&self, argument: char) -> Option<&dyn ArgumentMarshaler> {
        self.marshalers.get(&argument).map(|m| m.as_ref())
    }

    pub(crate) fn marshaler_mut(
        &mut self,
        argument: char,
    ) -> Option<&mut Box<dyn ArgumentMarshaler>> {
        self.marshalers.get_mut(&argument)
    }

    #[cfg(test)]
    pub(crate) fn kinds(&self) -> Vec<(char, Kind)> {
        self.marshalers
            .iter()
            .map(|(argument, marshaler)| (*argument, marshaler.value().kind()))
            .collect()
    }
}
