/// Cursor over the raw input tokens.
///
/// Shared between the scanner (which pulls flag token groups) and the marshalers (which pull their operands).
/// Whichever side pulls a token claims it; a claimed token is never seen by the other side.
#[derive(Debug)]
pub(crate) struct Operands<'t> {
    tokens: &'t [&'t str],
    position: usize,
}

impl<'t> Operands<'t> {
    pub(crate) fn new(tokens: &'t [&'t str]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// The index of the next unclaimed token.
    pub(crate) fn index(&self) -> usize {
        self.position
    }

    /// The character offset at which the token `index` begins, measured over the un-spaced concatenation of all tokens.
    /// An index beyond the final token gives the total length.
    pub(crate) fn offset(&self, index: usize) -> usize {
        self.tokens.iter().take(index).map(|token| token.chars().count()).sum()
    }
}

impl<'t> Iterator for Operands<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        let token = *self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn operands_empty() {
        let mut operands = Operands::new(&[]);
        assert_eq!(operands.next(), None);
        assert_eq!(operands.index(), 0);
        assert_eq!(operands.offset(0), 0);
    }

    #[test]
    fn operands_claim_in_order() {
        let tokens = ["-x", "abc", "-y"];
        let mut operands = Operands::new(&tokens);

        assert_eq!(operands.next(), Some("-x"));
        assert_eq!(operands.index(), 1);
        assert_eq!(operands.next(), Some("abc"));
        assert_eq!(operands.next(), Some("-y"));
        assert_eq!(operands.index(), 3);
        assert_eq!(operands.next(), None);
        // Exhaustion does not advance the cursor.
        assert_eq!(operands.index(), 3);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 2)]
    #[case(2, 5)]
    #[case(3, 7)]
    #[case(4, 7)]
    fn operands_offset(#[case] index: usize, #[case] expected: usize) {
        let tokens = ["-x", "abc", "-y"];
        let operands = Operands::new(&tokens);
        assert_eq!(operands.offset(index), expected);
    }

    #[rstest]
    #[case(1, 5)]
    #[case(2, 7)]
    fn operands_offset_multibyte(#[case] index: usize, #[case] expected: usize) {
        let tokens = ["héllo", "-z"];
        let operands = Operands::new(&tokens);
        assert_eq!(operands.offset(index), expected);
    }
}
