//! The line-by-line driver shared by every diagram language.

use log::{debug, trace};

use diptych_core::GraphModel;

use crate::{
    collector::GraphCollector,
    syntax::{PResult, Statement, whole_line},
};

/// A diagram language understood by the line driver.
pub(crate) trait Dialect {
    /// Name used in log output.
    const NAME: &'static str;

    /// Returns `true` for framing lines such as headers and braces.
    fn is_directive(line: &str) -> bool;

    /// Parses one statement from the start of a trimmed line.
    fn statement<'src>(input: &mut &'src str) -> PResult<Statement<'src>>;
}

/// Runs `D` over every line of `source`.
///
/// Lines are trimmed and blank lines dropped. Directive lines and lines that
/// do not fully match a statement are skipped. Node labels assigned by a
/// [`Statement::NodeLabel`] are applied after every line has been read, and
/// only to nodes that some connection or declaration introduced.
pub(crate) fn parse_with<D: Dialect>(source: &str) -> GraphModel {
    let mut collector = GraphCollector::default();
    let mut deferred_labels = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || D::is_directive(line) {
            continue;
        }

        match whole_line(line, D::statement) {
            Some(Statement::Connection {
                source,
                target,
                label,
            }) => collector.connect(source, target, label),
            Some(Statement::Declaration(node)) => collector.register(node),
            Some(Statement::NodeLabel { id, label }) => deferred_labels.push((id, label)),
            None => {
                skipped += 1;
                trace!(dialect = D::NAME, line_number = index + 1, line; "Skipping unrecognized line");
            }
        }
    }

    for (id, label) in deferred_labels {
        if !collector.relabel(id, label) {
            trace!(dialect = D::NAME, id; "Ignoring label for undeclared node");
        }
    }

    let graph = collector.finish();
    debug!(
        dialect = D::NAME,
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        skipped;
        "Parsed diagram source"
    );
    graph
}
