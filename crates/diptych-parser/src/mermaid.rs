//! Mermaid flowcharts.
//!
//! Recognised lines:
//!
//! ```text
//! flowchart LR                 header, skipped
//! A[User] --> B[App]           connection with inline labels
//! A -->|calls| B;              labelled connection
//! A --> |calls| B              space before the edge label
//! C[(Database)]                standalone declaration
//! A --> B %% note              trailing comment, ignored
//! %% note                      comment line, skipped
//! ```

use winnow::{
    Parser as _,
    ascii::space0,
    combinator::{alt, delimited, opt},
    token::{rest, take_till},
};

use crate::{
    dialect::Dialect,
    syntax::{NodeRef, PResult, Statement, bracket_label, end_of_statement, first_word, identifier},
};

pub(crate) struct Mermaid;

impl Dialect for Mermaid {
    const NAME: &'static str = "mermaid";

    fn is_directive(line: &str) -> bool {
        line.starts_with("%%") || matches!(first_word(line), "flowchart" | "graph")
    }

    fn statement<'src>(input: &mut &'src str) -> PResult<Statement<'src>> {
        alt((connection, declaration)).parse_next(input)
    }
}

fn node_ref<'src>(input: &mut &'src str) -> PResult<NodeRef<'src>> {
    (identifier, opt(bracket_label))
        .map(|(id, label)| NodeRef { id, label })
        .parse_next(input)
}

fn pipe_label<'src>(input: &mut &'src str) -> PResult<&'src str> {
    delimited("|", take_till(1.., '|'), "|").parse_next(input)
}

/// Parses a `%%` comment running to the end of the line.
fn comment(input: &mut &str) -> PResult<()> {
    ("%%", rest).void().parse_next(input)
}

fn connection<'src>(input: &mut &'src str) -> PResult<Statement<'src>> {
    (
        node_ref,
        space0,
        "-->",
        space0,
        opt(pipe_label),
        space0,
        node_ref,
        end_of_statement,
        opt(comment),
    )
        .map(|(source, _, _, _, label, _, target, _, _)| Statement::Connection {
            source,
            target,
            label,
        })
        .parse_next(input)
}

fn declaration<'src>(input: &mut &'src str) -> PResult<Statement<'src>> {
    (identifier, bracket_label, end_of_statement, opt(comment))
        .map(|(id, label, _, _)| {
            Statement::Declaration(NodeRef {
                id,
                label: Some(label),
            })
        })
        .parse_next(input)
}
