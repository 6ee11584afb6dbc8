use flow_api::{ApiError, FlowClient, FlowSession};
use flow_editor::{Graph, NodeBody, NodeKind, Viewport};
use glam::Vec2;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Trigger(keyword "oi") -> Message("Olá!") at the spec'd positions.
fn greeting_graph() -> Graph {
    let mut graph = Graph::default();
    let trigger = graph.add_node(
        NodeKind::Trigger,
        Some("keyword".into()),
        Vec2::new(100.0, 100.0),
    );
    if let Some(node) = graph.node_mut(trigger)
        && let NodeBody::Trigger { keyword, .. } = &mut node.body
    {
        *keyword = "oi".into();
    }
    let message = graph.add_node(NodeKind::Message, None, Vec2::new(300.0, 100.0));
    if let Some(node) = graph.node_mut(message)
        && let NodeBody::Message { content, .. } = &mut node.body
    {
        *content = "Olá!".into();
    }
    graph.add_edge(trigger, message);
    graph
}

#[tokio::test]
async fn test_list_flows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "flows": [
                {"id": "1", "name": "Saudação", "trigger_type": "keyword", "nodes": 3, "is_active": true},
                {"id": "2", "name": "Vazio", "trigger_type": "manual", "nodes": [], "is_active": false},
            ],
        })))
        .mount(&server)
        .await;

    let client = FlowClient::new(server.uri());
    let flows = client.list().await.unwrap();
    assert_eq!(flows.len(), 2);
    assert_eq!(flows[0].nodes.len(), 3);
    assert!(flows[1].nodes.is_empty());
}

#[tokio::test]
async fn test_list_surfaces_server_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "tenant suspended",
        })))
        .mount(&server)
        .await;

    let client = FlowClient::new(server.uri());
    match client.list().await {
        Err(ApiError::Rejected(msg)) => assert_eq!(msg, "tenant suspended"),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_save_posts_derived_trigger() {
    // Scenario: saving the greeting flow must POST trigger_type="keyword".
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/flows"))
        .and(body_partial_json(json!({
            "name": "Saudação",
            "trigger_type": "keyword",
            "trigger_value": "oi",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "flow": {"id": "42"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let graph = greeting_graph();
    let mut session = FlowSession::new(FlowClient::new(server.uri()));
    let id = session.save("Saudação", &graph).await.unwrap();
    assert_eq!(id, "42");
    assert_eq!(session.flow_id(), Some("42"));
}

#[tokio::test]
async fn test_second_save_updates_in_place() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/flows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "flow": {"id": "42"},
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/flows/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "flow": {"id": "42"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let graph = greeting_graph();
    let mut session = FlowSession::new(FlowClient::new(server.uri()));
    session.save("Saudação", &graph).await.unwrap();
    session.save("Saudação v2", &graph).await.unwrap();
}

#[tokio::test]
async fn test_flow_without_trigger_saves_as_manual() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/flows"))
        .and(body_partial_json(json!({"trigger_type": "manual"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "flow": {"id": "7"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut graph = Graph::default();
    graph.add_node(NodeKind::Message, None, Vec2::ZERO);
    let mut session = FlowSession::new(FlowClient::new(server.uri()));
    session.save("Sem gatilho", &graph).await.unwrap();
}

#[tokio::test]
async fn test_save_validation_is_local() {
    let server = MockServer::start().await;
    // No request may reach the server for either validation failure.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = FlowSession::new(FlowClient::new(server.uri()));

    let empty = Graph::default();
    assert!(matches!(
        session.save("Fluxo", &empty).await,
        Err(ApiError::Validation(_))
    ));

    let graph = greeting_graph();
    assert!(matches!(
        session.save("   ", &graph).await,
        Err(ApiError::Validation(_))
    ));
}

#[tokio::test]
async fn test_save_then_load_roundtrips() {
    let graph = greeting_graph();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flows/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "flow": {
                "id": "7",
                "name": "Saudação",
                "nodes": serde_json::to_value(&graph.nodes).unwrap(),
                "edges": serde_json::to_value(&graph.edges).unwrap(),
            },
        })))
        .mount(&server)
        .await;

    let mut session = FlowSession::new(FlowClient::new(server.uri()));
    let mut loaded = Graph::default();
    let mut view = Viewport::default();
    view.zoom = 1.5;

    let name = session.load("7", &mut loaded, &mut view).await.unwrap();
    assert_eq!(name, "Saudação");
    assert_eq!(loaded.nodes, graph.nodes);
    assert_eq!(loaded.edges, graph.edges);
    assert_eq!(view.zoom, 1.0);
    assert_eq!(session.flow_id(), Some("7"));
}

#[tokio::test]
async fn test_load_defaults_missing_edges_and_filters_bad_ones() {
    let graph = greeting_graph();
    let real = graph.edges[0];
    let server = MockServer::start().await;

    // Missing `edges` entirely.
    Mock::given(method("GET"))
        .and(path("/flows/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "flow": {
                "id": "1",
                "name": "Parcial",
                "nodes": serde_json::to_value(&graph.nodes).unwrap(),
            },
        })))
        .mount(&server)
        .await;

    // One valid edge plus one pointing at a node that is not in the flow.
    Mock::given(method("GET"))
        .and(path("/flows/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "flow": {
                "id": "2",
                "name": "Sujo",
                "nodes": serde_json::to_value(&graph.nodes).unwrap(),
                "edges": [
                    serde_json::to_value(real).unwrap(),
                    {
                        "source": real.source,
                        "target": "00000000-0000-0000-0000-000000000000",
                    },
                ],
            },
        })))
        .mount(&server)
        .await;

    let mut session = FlowSession::new(FlowClient::new(server.uri()));
    let mut loaded = Graph::default();
    let mut view = Viewport::default();

    session.load("1", &mut loaded, &mut view).await.unwrap();
    assert_eq!(loaded.nodes.len(), 2);
    assert!(loaded.edges.is_empty());

    session.load("2", &mut loaded, &mut view).await.unwrap();
    assert_eq!(loaded.edges, vec![real]);
}

#[tokio::test]
async fn test_failed_load_leaves_graph_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flows/9"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut session = FlowSession::new(FlowClient::new(server.uri()));
    let mut graph = greeting_graph();
    let nodes_before = graph.nodes.clone();
    let mut view = Viewport::default();
    view.pan = Vec2::new(30.0, 30.0);

    let result = session.load("9", &mut graph, &mut view).await;
    assert!(matches!(result, Err(ApiError::Http(_))));
    assert_eq!(graph.nodes, nodes_before);
    assert_eq!(view.pan, Vec2::new(30.0, 30.0));
    assert_eq!(session.flow_id(), None);
}

#[tokio::test]
async fn test_new_flow_unbinds_session() {
    let server = MockServer::start().await;
    let graph_src = greeting_graph();
    Mock::given(method("GET"))
        .and(path("/flows/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "flow": {
                "id": "7",
                "name": "Saudação",
                "nodes": serde_json::to_value(&graph_src.nodes).unwrap(),
                "edges": [],
            },
        })))
        .mount(&server)
        .await;

    let mut session = FlowSession::new(FlowClient::new(server.uri()));
    let mut graph = Graph::default();
    let mut view = Viewport::default();
    session.load("7", &mut graph, &mut view).await.unwrap();
    assert!(session.flow_id().is_some());

    session.new_flow(&mut graph, &mut view);
    assert!(graph.nodes.is_empty());
    assert_eq!(session.flow_id(), None);
}
