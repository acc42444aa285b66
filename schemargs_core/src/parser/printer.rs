/// The input tokens, with a caret pointing at the character where parsing failed.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    /// The `offset` counts characters over the un-spaced concatenation of the `tokens`.
    pub(crate) fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tokens_length = 0;
        let mut projection = String::default();
        let mut projection_offset = 0;

        for (i, token) in self.tokens.iter().enumerate() {
            tokens_length += token.chars().count();
            projection.push_str(token);

            if i + 1 < self.tokens.len() {
                projection.push(' ');

                if tokens_length <= self.offset {
                    projection_offset += 1;
                }
            }
        }

        // An offset at (or past) the end points one beyond the final character, where the missing operand belongs.
        let width = if self.offset >= tokens_length {
            tokens_length + projection_offset + usize::from(!self.tokens.is_empty())
        } else {
            self.offset + projection_offset
        };

        write!(f, "{projection}\n{:width$}^", "")
    }
}
