//! Graphviz DOT, restricted to one statement per line.
//!
//! ```text
//! digraph G {                          framing, skipped
//!   User -> App;                       connection
//!   App -> PDF [label="make"];         labelled connection
//!   User [label="End user", shape=box] node label, applied after all connections
//! }
//! ```
//!
//! Attribute lists are read in full but only `label` is kept.

use winnow::{
    Parser as _,
    ascii::space0,
    combinator::{alt, delimited, opt, preceded, repeat, terminated},
    token::{one_of, take_while},
};

use crate::{
    dialect::Dialect,
    syntax::{NodeRef, PResult, Statement, end_of_statement, first_word, identifier, quoted},
};

pub(crate) struct Graphviz;

impl Dialect for Graphviz {
    const NAME: &'static str = "graphviz";

    fn is_directive(line: &str) -> bool {
        line.starts_with('{') || line.starts_with('}') || first_word(line).starts_with("digraph")
    }

    fn statement<'src>(input: &mut &'src str) -> PResult<Statement<'src>> {
        alt((connection, node_label)).parse_next(input)
    }
}

fn bare_value<'src>(input: &mut &'src str) -> PResult<&'src str> {
    take_while(1.., |c: char| {
        !c.is_whitespace() && !matches!(c, ',' | ';' | ']')
    })
    .parse_next(input)
}

/// Parses one `key=value` pair; the value may be quoted or bare.
fn attribute<'src>(input: &mut &'src str) -> PResult<(&'src str, &'src str)> {
    (identifier, space0, "=", space0, alt((quoted, bare_value)))
        .map(|(key, _, _, _, value)| (key, value))
        .parse_next(input)
}

/// Parses `[key=value, ...]` and returns the last non-empty `label` value.
///
/// Pairs may be separated by `,`, `;` or plain whitespace.
fn attribute_list<'src>(input: &mut &'src str) -> PResult<Option<&'src str>> {
    delimited(
        ("[", space0),
        repeat(
            0..,
            terminated(attribute, (space0, opt(one_of([',', ';'])), space0)),
        ),
        "]",
    )
    .map(|attributes: Vec<(&'src str, &'src str)>| {
        attributes
            .into_iter()
            .filter(|(key, value)| *key == "label" && !value.is_empty())
            .map(|(_, value)| value)
            .last()
    })
    .parse_next(input)
}

fn connection<'src>(input: &mut &'src str) -> PResult<Statement<'src>> {
    (
        identifier,
        space0,
        "->",
        space0,
        identifier,
        opt(preceded(space0, attribute_list)),
        end_of_statement,
    )
        .map(|(source, _, _, _, target, label, _)| Statement::Connection {
            source: NodeRef::bare(source),
            target: NodeRef::bare(target),
            label: label.flatten(),
        })
        .parse_next(input)
}

/// A node statement is only kept when its attribute list carries a label.
fn node_label<'src>(input: &mut &'src str) -> PResult<Statement<'src>> {
    (identifier, space0, attribute_list, end_of_statement)
        .verify_map(|(id, _, label, _)| label.map(|label| Statement::NodeLabel { id, label }))
        .parse_next(input)
}
