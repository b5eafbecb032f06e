//! PlantUML sequence-style arrows.
//!
//! ```text
//! @startuml                    framing, skipped
//! User -> App: Request         solid arrow with label
//! PDF --> App: Document        dashed arrow with label
//! @enduml
//! ```

use winnow::{
    Parser as _,
    ascii::space0,
    combinator::{alt, opt},
};

use crate::{
    d2::colon_label,
    dialect::Dialect,
    syntax::{NodeRef, PResult, Statement, end_of_statement, identifier},
};

pub(crate) struct PlantUml;

impl Dialect for PlantUml {
    const NAME: &'static str = "plantuml";

    fn is_directive(line: &str) -> bool {
        line.starts_with("@start") || line.starts_with("@end")
    }

    fn statement<'src>(input: &mut &'src str) -> PResult<Statement<'src>> {
        connection.parse_next(input)
    }
}

fn connection<'src>(input: &mut &'src str) -> PResult<Statement<'src>> {
    (
        identifier,
        space0,
        alt(("->", "-->")),
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
