//! Integration tests for the DiagramSession API
//!
//! These tests drive a session the way an editor front end would: edit text,
//! import, edit the graph, generate, save and reload.

use chrono::{TimeZone, Utc};
use float_cmp::approx_eq;

use diptych::{
    ChangeSet, DiagramSession, DiptychError, Engine, GraphError, ImportOutcome,
    config::{AppConfig, RenderConfig, SourcesConfig},
    geometry::{Position, Size},
};

fn session_on(engine: Engine) -> DiagramSession {
    let mut session = DiagramSession::default();
    session.set_engine(engine);
    session
}

#[test]
fn test_default_sources_import_for_every_engine() {
    for engine in Engine::ALL {
        let mut session = session_on(engine);
        let outcome = session.import();

        assert!(
            matches!(outcome, ImportOutcome::Imported { nodes: 3, .. }),
            "{engine}: {outcome:?}"
        );
        assert!(session.graph().validate().is_ok(), "{engine}");
    }
}

#[test]
fn test_configured_defaults() {
    let config = AppConfig::new(
        Engine::Graphviz,
        SourcesConfig::default().with(Engine::Graphviz, "digraph G {\n  x -> y;\n}"),
        RenderConfig::default(),
    );
    let mut session = DiagramSession::new(&config);

    assert_eq!(session.engine(), Engine::Graphviz);
    assert_eq!(session.import(), ImportOutcome::Imported { nodes: 2, edges: 1 });
}

#[test]
fn test_text_and_graph_do_not_sync_implicitly() {
    let mut session = session_on(Engine::D2);
    session.import();
    let graph = session.graph().clone();

    session.set_code("p -> q");
    assert_eq!(session.graph(), &graph, "editing text must not touch the graph");

    session.add_node(Some("Extra"));
    assert_eq!(session.code(), "p -> q", "editing the graph must not touch the text");
}

#[test]
fn test_editor_changes_then_generate() {
    let mut session = session_on(Engine::Mermaid);
    session.import();

    let changes: ChangeSet = serde_json::from_value(serde_json::json!({
        "nodes": [
            {"type": "position", "id": "U", "position": {"x": 42.5, "y": 17.0}},
            {"type": "dimensions", "id": "A", "dimensions": {"width": 10.0, "height": 200.0}},
            {"type": "select", "id": "P", "selected": true},
            {"type": "select", "id": "missing", "selected": true}
        ]
    }))
    .unwrap();
    let outcome = session.apply_changes(&changes);
    assert_eq!(outcome.applied, 3);
    assert_eq!(outcome.skipped, 1);

    let user = session.graph().node("U").unwrap();
    assert!(approx_eq!(f64, user.position.x, 42.5, ulps = 2));
    assert!(approx_eq!(f64, user.position.y, 17.0, ulps = 2));
    assert_eq!(session.graph().node("A").unwrap().size, Size::new(80.0, 200.0));

    let removed = session.delete_selected();
    assert_eq!(removed.nodes.len(), 1);
    assert_eq!(removed.edges.len(), 1, "A-P is cascaded with P");

    assert!(session.relabel("A", "Service"));
    assert_eq!(
        session.generate(),
        "flowchart LR\n  U[User]\n  A[Service]\n  U --> A\n"
    );
}

#[test]
fn test_connect_unknown_node_is_a_no_op() {
    let mut session = session_on(Engine::D2);
    session.import();
    let before = session.graph().clone();

    let err = session.connect("User", "Nobody").unwrap_err();
    assert!(matches!(
        err,
        DiptychError::Graph(GraphError::UnknownNode(ref id)) if id == "Nobody"
    ));
    assert_eq!(session.graph(), &before);
}

#[test]
fn test_snapshot_round_trip() {
    let mut original = session_on(Engine::PlantUml);
    original.import();
    original.relabel("PDF", "Report");
    let now = Utc.with_ymd_and_hms(2026, 5, 4, 3, 2, 1).unwrap();
    let json = original.export_snapshot(now).to_json().unwrap();

    let mut restored = DiagramSession::default();
    restored.import_snapshot(&json).unwrap();

    assert_eq!(restored.id(), original.id());
    assert_eq!(restored.created_at(), original.created_at());
    assert_eq!(restored.engine(), Engine::PlantUml);
    assert_eq!(restored.code(), original.code());
    assert_eq!(restored.graph(), original.graph());
}

#[test]
fn test_export_json_is_pretty_and_versioned() {
    let session = DiagramSession::default();
    let json = session.export_json().unwrap();

    assert!(json.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["version"], "1.0");
    assert_eq!(value["diagram"]["engine"], "mermaid");
    assert_eq!(value["diagram"]["id"], session.id());
    assert!(value["diagram"]["nodes"].as_array().unwrap().is_empty());
}

#[test]
fn test_duplicate_node_ids_are_rejected() {
    let mut session = DiagramSession::default();
    let result = session.import_snapshot_value(serde_json::json!({
        "version": "1.0",
        "diagram": {
            "engine": "d2",
            "code": "",
            "nodes": [
                {"id": "a", "label": "A", "position": {"x": 0, "y": 0}},
                {"id": "a", "label": "B", "position": {"x": 1, "y": 1}}
            ],
            "edges": []
        }
    }));

    assert!(matches!(result, Err(DiptychError::InvalidFormat(_))));
    assert_eq!(session.engine(), Engine::Mermaid);
}

#[test]
fn test_added_node_position_is_in_band() {
    let mut session = DiagramSession::default();
    let node = session.add_node(None);

    let Position { x, y } = node.position;
    assert!((100.0..500.0).contains(&x));
    assert!((100.0..400.0).contains(&y));
    assert_eq!(node.size, Size::DEFAULT);
}
