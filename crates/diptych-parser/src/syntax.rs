//! Statement shapes and token parsers shared by every dialect.
//!
//! Each dialect recognises a line as one [`Statement`] or not at all. The
//! combinators here work on a single trimmed line and never cut: a failure
//! simply backtracks so the caller can skip the line.

use winnow::{
    Parser as _,
    ascii::space0,
    combinator::{delimited, opt},
    error::{ContextError, ErrMode},
    token::{take_till, take_while},
};

/// Result type for the line parsers.
pub(crate) type PResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// A node mentioned in source text, with its inline label if one was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeRef<'src> {
    pub id: &'src str,
    pub label: Option<&'src str>,
}

impl<'src> NodeRef<'src> {
    /// A bare identifier without an inline label.
    pub fn bare(id: &'src str) -> Self {
        Self { id, label: None }
    }
}

/// One recognised line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Statement<'src> {
    /// `source <arrow> target`, optionally labelled.
    Connection {
        source: NodeRef<'src>,
        target: NodeRef<'src>,
        label: Option<&'src str>,
    },
    /// A node declared on its own line.
    Declaration(NodeRef<'src>),
    /// A label assigned to a node that may or may not have been seen yet.
    NodeLabel { id: &'src str, label: &'src str },
}

/// Returns `true` for characters allowed in an identifier: ASCII letters, digits and `_`.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parse an identifier made of word characters.
pub(crate) fn identifier<'src>(input: &mut &'src str) -> PResult<&'src str> {
    take_while(1.., is_word_char).parse_next(input)
}

/// Parse a non-empty `[label]`, returning the text between the brackets verbatim.
pub(crate) fn bracket_label<'src>(input: &mut &'src str) -> PResult<&'src str> {
    delimited("[", take_till(1.., ']'), "]").parse_next(input)
}

/// Parse a double-quoted string, returning the text between the quotes.
pub(crate) fn quoted<'src>(input: &mut &'src str) -> PResult<&'src str> {
    delimited("\"", take_till(0.., '"'), "\"").parse_next(input)
}

/// Parse the tail of a statement: optional whitespace and an optional `;`.
pub(crate) fn end_of_statement(input: &mut &str) -> PResult<()> {
    (space0, opt(";"), space0).void().parse_next(input)
}

/// Parse a whole line with `statement`, rejecting it if anything is left over.
pub(crate) fn whole_line<'src>(
    line: &'src str,
    statement: fn(&mut &'src str) -> PResult<Statement<'src>>,
) -> Option<Statement<'src>> {
    let mut input = line;
    let parsed = statement(&mut input).ok()?;
    input.is_empty().then_some(parsed)
}

/// Returns the first whitespace-separated word of a line.
pub(crate) fn first_word(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_accepts_word_characters() {
        let mut input = "user_2 rest";
        assert_eq!(identifier(&mut input), Ok("user_2"));
        assert_eq!(input, " rest");
    }

    #[test]
    fn test_identifier_rejects_punctuation() {
        let mut input = "-user";
        assert!(identifier(&mut input).is_err());

        let mut input = "Ünïcode";
        assert!(identifier(&mut input).is_err());
    }

    #[test]
    fn test_bracket_label_is_verbatim() {
        let mut input = "[(PDF)!] tail";
        assert_eq!(bracket_label(&mut input), Ok("(PDF)!"));
        assert_eq!(input, " tail");
    }

    #[test]
    fn test_bracket_label_rejects_empty() {
        let mut input = "[]";
        assert!(bracket_label(&mut input).is_err());
    }

    #[test]
    fn test_quoted() {
        let mut input = "\"Web App\"]";
        assert_eq!(quoted(&mut input), Ok("Web App"));
        assert_eq!(input, "]");

        let mut input = "\"\"";
        assert_eq!(quoted(&mut input), Ok(""));
    }

    #[test]
    fn test_end_of_statement_allows_semicolon() {
        let mut input = " ; ";
        assert!(end_of_statement(&mut input).is_ok());
        assert!(input.is_empty());

        let mut input = "x";
        assert!(end_of_statement(&mut input).is_ok());
        assert_eq!(input, "x");
    }

    #[test]
    fn test_first_word() {
        assert_eq!(first_word("flowchart LR"), "flowchart");
        assert_eq!(first_word("graph"), "graph");
        assert_eq!(first_word(""), "");
    }
}
