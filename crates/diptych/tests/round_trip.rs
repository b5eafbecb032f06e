//! Parse, generate, parse again.
//!
//! Generated text is not expected to match its input byte for byte, but the
//! graph it describes should survive. PlantUML output names nodes by label,
//! so for that language only edge count and labels are compared.

use proptest::prelude::*;

use diptych::{Engine, GraphModel, export::generate, parse};

type Connection = (String, String, Option<String>);

fn connections() -> impl Strategy<Value = Vec<Connection>> {
    prop::collection::vec(
        (
            "[a-z][a-z0-9]{0,3}",
            "[a-z][a-z0-9]{0,3}",
            prop::option::of("[A-Za-z]{1,8}"),
        ),
        1..10,
    )
}

fn source_for(engine: Engine, connections: &[Connection]) -> String {
    let lines = connections.iter().map(|(source, target, label)| match (engine, label) {
        (Engine::Mermaid, Some(label)) => format!("{source}[N{source}] -->|{label}| {target}[N{target}]"),
        (Engine::Mermaid, None) => format!("{source}[N{source}] --> {target}[N{target}]"),
        (Engine::Graphviz, Some(label)) => format!("{source} -> {target} [label=\"{label}\"];"),
        (Engine::Graphviz, None) => format!("{source} -> {target};"),
        (_, Some(label)) => format!("{source} -> {target}: {label}"),
        (_, None) => format!("{source} -> {target}"),
    });
    lines.collect::<Vec<_>>().join("\n")
}

fn node_summary(graph: &GraphModel) -> Vec<(String, String)> {
    graph
        .nodes()
        .iter()
        .map(|n| (n.id.clone(), n.label.clone()))
        .collect()
}

fn edge_summary(graph: &GraphModel) -> Vec<(String, Option<String>)> {
    graph
        .edges()
        .iter()
        .map(|e| (e.id.clone(), e.label.clone()))
        .collect()
}

#[test]
fn test_mermaid_sample_round_trip() {
    let first = parse(Engine::Mermaid, "flowchart LR\n  U[User] --> A[App]\n  A --> P[(PDF)]");
    let text = generate(&first, Engine::Mermaid);
    assert_eq!(
        text,
        "flowchart LR\n  U[User]\n  A[App]\n  P[(PDF)]\n  U --> A\n  A --> P\n"
    );

    let second = parse(Engine::Mermaid, &text);
    assert_eq!(second, first);
}

#[test]
fn test_graphviz_sample_round_trip() {
    let first = parse(Engine::Graphviz, "digraph G {\n  User -> App;\n  App -> PDF;\n}");
    let text = generate(&first, Engine::Graphviz);
    assert_eq!(
        text,
        "digraph G {\n  User [label=\"User\"];\n  App [label=\"App\"];\n  PDF [label=\"PDF\"];\n  User -> App;\n  App -> PDF;\n}"
    );
    assert_eq!(parse(Engine::Graphviz, &text), first);
}

#[test]
fn test_plantuml_sample_round_trip() {
    let source = "@startuml\nUser -> App: Request\nApp -> PDF: Generate\nPDF --> App: Document\nApp --> User: Response\n@enduml";
    let first = parse(Engine::PlantUml, source);
    let text = generate(&first, Engine::PlantUml);
    assert_eq!(
        text,
        "@startuml\nUser -> App: Request\nApp -> PDF: Generate\nPDF -> App: Document\nApp -> User: Response\n@enduml"
    );
    assert_eq!(parse(Engine::PlantUml, &text), first);
}

#[test]
fn test_plantuml_renames_ids_to_labels() {
    let first = parse(Engine::Mermaid, "U[User] -->|asks| A[App]");
    let second = parse(Engine::PlantUml, &generate(&first, Engine::PlantUml));

    let ids: Vec<_> = second.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["User", "App"]);
    assert_eq!(second.edges()[0].label.as_deref(), Some("asks"));
}

#[test]
fn test_cross_engine_conversion() {
    let first = parse(Engine::D2, "User -> App: Request\nApp -> PDF: Generate");
    let dot = generate(&first, Engine::Graphviz);
    let second = parse(Engine::Graphviz, &dot);

    assert_eq!(node_summary(&second), node_summary(&first));
    assert_eq!(edge_summary(&second), edge_summary(&first));
}

// =============================================================================
// Property-based tests
// =============================================================================

fn check_round_trip_preserves_graph(
    engine: Engine,
    connections: &[Connection],
) -> Result<(), TestCaseError> {
    let first = parse(engine, &source_for(engine, connections));
    let second = parse(engine, &generate(&first, engine));

    prop_assert_eq!(node_summary(&second), node_summary(&first));
    prop_assert_eq!(edge_summary(&second), edge_summary(&first));
    Ok(())
}

fn check_plantuml_keeps_edge_count_and_labels(
    connections: &[Connection],
) -> Result<(), TestCaseError> {
    let first = parse(Engine::Mermaid, &source_for(Engine::Mermaid, connections));
    let second = parse(Engine::PlantUml, &generate(&first, Engine::PlantUml));

    prop_assert_eq!(second.edges().len(), first.edges().len());
    let first_labels: Vec<_> = first.edges().iter().map(|e| e.label.clone()).collect();
    let second_labels: Vec<_> = second.edges().iter().map(|e| e.label.clone()).collect();
    prop_assert_eq!(second_labels, first_labels);

    let renamed: Vec<_> = first.nodes().iter().map(|n| n.label.as_str()).collect();
    let ids: Vec<_> = second.nodes().iter().map(|n| n.id.as_str()).collect();
    prop_assert_eq!(ids, renamed);
    Ok(())
}

proptest! {
    #[test]
    fn round_trip_preserves_graph(
        engine in prop::sample::select(vec![Engine::Mermaid, Engine::Graphviz, Engine::D2]),
        connections in connections(),
    ) {
        check_round_trip_preserves_graph(engine, &connections)?;
    }

    #[test]
    fn plantuml_keeps_edge_count_and_labels(connections in connections()) {
        check_plantuml_keeps_edge_count_and_labels(&connections)?;
    }
}
