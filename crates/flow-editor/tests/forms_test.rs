use flow_editor::forms::{self, Field, FieldEdit};
use flow_editor::{Graph, NodeBody, NodeKind};
use glam::Vec2;

fn node_of(kind: NodeKind) -> (Graph, flow_editor::NodeId) {
    let mut graph = Graph::default();
    let id = graph.add_node(kind, None, Vec2::ZERO);
    (graph, id)
}

#[test]
fn test_every_form_starts_with_label() {
    for kind in [
        NodeKind::Trigger,
        NodeKind::Message,
        NodeKind::Wait,
        NodeKind::Condition,
        NodeKind::Delay,
        NodeKind::Transfer,
        NodeKind::Tag,
        NodeKind::Status,
        NodeKind::Webhook,
        NodeKind::End,
    ] {
        let (graph, id) = node_of(kind);
        let fields = forms::fields_for(graph.node(id).unwrap());
        assert!(
            matches!(&fields[0], Field::Text { key: "label", .. }),
            "{kind:?} form must start with the label field"
        );
    }
}

#[test]
fn test_end_form_is_label_only() {
    let (graph, id) = node_of(NodeKind::End);
    assert_eq!(forms::fields_for(graph.node(id).unwrap()).len(), 1);
}

#[test]
fn test_label_edit_writes_through() {
    let (mut graph, id) = node_of(NodeKind::Message);
    let node = graph.node_mut(id).unwrap();

    let changed = forms::apply(node, "label", FieldEdit::Text("Boas-vindas".into()));
    assert!(changed);
    assert_eq!(node.body.label(), "Boas-vindas");
}

#[test]
fn test_content_edit_updates_preview() {
    let (mut graph, id) = node_of(NodeKind::Message);
    let node = graph.node_mut(id).unwrap();

    let long = "a".repeat(60);
    assert!(forms::apply(node, "content", FieldEdit::Text(long)));
    let preview = node.body.preview();
    assert_eq!(preview.chars().count(), 51); // 50 chars + ellipsis
    assert!(preview.ends_with('…'));
}

#[test]
fn test_numeric_fields() {
    let (mut graph, id) = node_of(NodeKind::Delay);
    let node = graph.node_mut(id).unwrap();
    assert!(forms::apply(node, "seconds", FieldEdit::Number(12)));
    assert_eq!(node.body.preview(), "Aguardar 12s");

    let (mut graph, id) = node_of(NodeKind::Wait);
    let node = graph.node_mut(id).unwrap();
    assert!(forms::apply(node, "timeout", FieldEdit::Number(90)));
    assert_eq!(node.body.preview(), "Aguardar resposta (90s)");
}

#[test]
fn test_branch_list_editing() {
    let (mut graph, id) = node_of(NodeKind::Condition);
    let node = graph.node_mut(id).unwrap();

    assert!(forms::apply(node, "conditions", FieldEdit::AddBranch));
    assert!(forms::apply(node, "conditions", FieldEdit::AddBranch));
    assert!(forms::apply(
        node,
        "conditions",
        FieldEdit::EditBranch {
            index: 1,
            value: "sim".into(),
        },
    ));
    match &node.body {
        NodeBody::Condition { conditions, .. } => {
            assert_eq!(conditions.len(), 2);
            assert_eq!(conditions[1].value, "sim");
        }
        other => panic!("expected condition body, got {other:?}"),
    }
    assert_eq!(node.body.preview(), "2 condições");

    assert!(forms::apply(node, "conditions", FieldEdit::RemoveBranch(0)));
    assert_eq!(node.body.preview(), "1 condição");

    // Out-of-range indexes are ignored.
    assert!(!forms::apply(node, "conditions", FieldEdit::RemoveBranch(5)));
}

#[test]
fn test_status_select_has_four_fixed_stages() {
    let (mut graph, id) = node_of(NodeKind::Status);
    let fields = forms::fields_for(graph.node(id).unwrap());
    let Some(Field::Select { options, .. }) = fields.get(1) else {
        panic!("status form must expose a select");
    };
    assert_eq!(options.len(), 4);

    let node = graph.node_mut(id).unwrap();
    assert!(forms::apply(node, "status", FieldEdit::Text("ganho".into())));
    assert_eq!(node.body.preview(), "Status: Ganho");
    // Values outside the enumeration are rejected.
    assert!(!forms::apply(node, "status", FieldEdit::Text("outro".into())));
}

#[test]
fn test_unknown_key_is_ignored() {
    let (mut graph, id) = node_of(NodeKind::Tag);
    let node = graph.node_mut(id).unwrap();
    assert!(!forms::apply(node, "url", FieldEdit::Text("x".into())));
}

#[test]
fn test_insert_variable_at_caret() {
    assert_eq!(forms::insert_variable("Oi !", 3, "nome"), "Oi {{nome}}!");
    // Caret past the end appends.
    assert_eq!(forms::insert_variable("Oi", 99, "nome"), "Oi{{nome}}");
    // Caret counts characters, not bytes.
    assert_eq!(forms::insert_variable("Olá", 3, "nome"), "Olá{{nome}}");
}
