//! D2 connections.
//!
//! Only `source -> target` lines are recognised, optionally followed by
//! `: label`. D2 has no framing lines and standalone shapes are not read.

use winnow::{
    Parser as _,
    ascii::space0,
    combinator::{opt, preceded},
    token::rest,
};

use crate::{
    dialect::Dialect,
    syntax::{NodeRef, PResult, Statement, end_of_statement, identifier},
};

pub(crate) struct D2;

impl Dialect for D2 {
    const NAME: &'static str = "d2";

    fn is_directive(_line: &str) -> bool {
        false
    }

    fn statement<'src>(input: &mut &'src str) -> PResult<Statement<'src>> {
        connection.parse_next(input)
    }
}

/// Parses `: text`, returning the left-trimmed remainder of the line.
///
/// An empty remainder yields `None`.
pub(crate) fn colon_label<'src>(input: &mut &'src str) -> PResult<Option<&'src str>> {
    preceded((space0, ":", space0), rest)
        .map(|label: &'src str| (!label.is_empty()).then_some(label))
        .parse_next(input)
}

fn connection<'src>(input: &mut &'src str) -> PResult<Statement<'src>> {
    (
        identifier,
        space0,
        "->",
        space0,
        identifier,
        opt(colon_label),
        end_of_statement,
    )
        .map(|(source, _, _, _, target, label, _)| Statement::Connection {
            source: NodeRef::bare(source),
            target: NodeRef::bare(target),
            label: label.flatten(),
        })
        .parse_next(input)
}
