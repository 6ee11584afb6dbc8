use flow_editor::input::{InputState, MouseButtons};
use flow_editor::{Editor, EditorConfig, Graph, NodeKind};
use glam::Vec2;

fn main() {
    println!("=== flow_editor headless demo ===");

    let mut editor = Editor::new(EditorConfig::default());
    let mut graph = Graph::default();

    // Build a minimal greeting flow.
    let trigger = graph.add_node(
        NodeKind::Trigger,
        Some("keyword".into()),
        Vec2::new(100.0, 100.0),
    );
    let message = graph.add_node(NodeKind::Message, None, Vec2::new(400.0, 100.0));
    graph.add_edge(trigger, message);

    // Simulate a frame of idle input and inspect the draw list.
    let input = InputState::default();
    let (draw_list, _) = editor.update(&input, &mut graph);
    println!("idle frame: {} draw commands", draw_list.len());

    // Drag the message node 80px to the right.
    let mut input = InputState {
        mouse_pos: Vec2::new(450.0, 140.0),
        buttons: MouseButtons {
            primary: true,
            ..Default::default()
        },
        ..Default::default()
    };
    editor.update(&input, &mut graph);
    input.mouse_pos += Vec2::new(80.0, 0.0);
    editor.update(&input, &mut graph);
    input.buttons.primary = false;
    let (_, events) = editor.update(&input, &mut graph);
    println!("drag events: {events:?}");

    let moved = graph.node(message).unwrap().position;
    println!("message node now at ({}, {})", moved.x, moved.y);
}
