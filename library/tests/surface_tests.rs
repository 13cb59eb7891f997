//! Integration tests for the graph surface.
//!
//! Drives the surface the way the widget does: inject descriptors, then feed
//! pointer-down / move / up at computed pin and body positions.

use std::collections::HashSet;

use blueprint_graph::{
    GraphSurface, Interaction, NodeDescriptor, NodeKind, PinDirection, PinId, Point,
};
use uuid::Uuid;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Helper: the two-node scenario from a generated "jump" blueprint.
fn jump_surface() -> (GraphSurface, Uuid, Uuid) {
    init_logging();
    let mut surface = GraphSurface::new();
    let ids = surface
        .inject_json(
            r#"[
                {"name": "Event Jump", "kind": "event", "inputs": [], "outputs": ["Out"]},
                {"name": "Launch Character", "kind": "function", "inputs": ["In"], "outputs": []}
            ]"#,
        )
        .unwrap();
    (surface, ids[0], ids[1])
}

fn pin_pos(surface: &GraphSurface, node: Uuid, pin: &str, dir: PinDirection) -> Point {
    surface
        .pin_position(&PinId::new(node, pin), dir)
        .expect("pin should resolve")
}

/// Helper: a full press-move-release gesture between two points.
fn drag(surface: &mut GraphSurface, from: Point, to: Point) -> Option<Uuid> {
    surface.pointer_down(from);
    surface.pointer_move(Point::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0));
    surface.pointer_move(to);
    surface.pointer_up(to)
}

#[test]
fn test_jump_scenario() {
    let (mut surface, jump, launch) = jump_surface();

    // Two nodes at distinct staggered positions
    assert_eq!(surface.nodes().len(), 2);
    assert_ne!(
        surface.node(jump).unwrap().position,
        surface.node(launch).unwrap().position
    );

    let out = pin_pos(&surface, jump, "Out", PinDirection::Output);
    let inp = pin_pos(&surface, launch, "In", PinDirection::Input);

    let created = drag(&mut surface, out, inp);
    assert!(created.is_some());
    assert_eq!(surface.connections().len(), 1);
    let conn = &surface.connections()[0];
    assert_eq!(conn.from, PinId::new(jump, "Out"));
    assert_eq!(conn.to, PinId::new(launch, "In"));

    // Same drag again creates nothing
    assert_eq!(drag(&mut surface, out, inp), None);
    assert_eq!(surface.connections().len(), 1);

    // Deleting node 1 leaves node 2 and no connections
    surface.delete_node(jump).unwrap();
    assert_eq!(surface.nodes().len(), 1);
    assert_eq!(surface.nodes()[0].id, launch);
    assert!(surface.connections().is_empty());
}

#[test]
fn test_reverse_drag_is_normalized() {
    let (mut surface, jump, launch) = jump_surface();
    let out = pin_pos(&surface, jump, "Out", PinDirection::Output);
    let inp = pin_pos(&surface, launch, "In", PinDirection::Input);

    drag(&mut surface, inp, out).expect("input-to-output drag should connect");
    let conn = &surface.connections()[0];
    assert_eq!(conn.from, PinId::new(jump, "Out"));
    assert_eq!(conn.to, PinId::new(launch, "In"));

    // The opposite drag order is the same route
    assert_eq!(drag(&mut surface, out, inp), None);
    assert_eq!(surface.connections().len(), 1);
}

#[test]
fn test_input_to_input_is_rejected() {
    init_logging();
    let mut surface = GraphSurface::new();
    let ids = surface
        .inject(vec![
            NodeDescriptor::new("Set Health", NodeKind::Function).with_inputs(&["Exec", "Value"]),
            NodeDescriptor::new("Print String", NodeKind::Function).with_inputs(&["Exec"]),
        ])
        .unwrap();

    let a = pin_pos(&surface, ids[0], "Value", PinDirection::Input);
    let b = pin_pos(&surface, ids[1], "Exec", PinDirection::Input);
    assert_eq!(drag(&mut surface, a, b), None);
    assert!(surface.connections().is_empty());
    assert!(surface.pending_connection().is_none());
    assert!(surface.interaction().is_idle());
}

#[test]
fn test_same_node_pins_are_rejected() {
    init_logging();
    let mut surface = GraphSurface::new();
    let ids = surface
        .inject(vec![
            NodeDescriptor::new("Add", NodeKind::Function)
                .with_inputs(&["A", "B"])
                .with_outputs(&["Result"]),
        ])
        .unwrap();

    let out = pin_pos(&surface, ids[0], "Result", PinDirection::Output);
    let inp = pin_pos(&surface, ids[0], "B", PinDirection::Input);
    assert_eq!(drag(&mut surface, out, inp), None);
    assert_eq!(drag(&mut surface, inp, out), None);
    assert!(surface.connections().is_empty());
}

#[test]
fn test_node_drag_keeps_grab_offset_and_moves_pins() {
    let (mut surface, jump, launch) = jump_surface();
    let out = pin_pos(&surface, jump, "Out", PinDirection::Output);
    let inp = pin_pos(&surface, launch, "In", PinDirection::Input);
    drag(&mut surface, out, inp).unwrap();

    let origin = surface.node(launch).unwrap().position;
    let grab = Point::new(origin.x + 90.0, origin.y + 14.0);
    surface.pointer_down(grab);
    surface.pointer_move(Point::new(grab.x + 120.0, grab.y + 80.0));
    assert!(matches!(
        surface.interaction(),
        Interaction::DraggingNode { .. }
    ));
    // Release location is irrelevant for node drags
    assert_eq!(surface.pointer_up(out), None);

    let moved = surface.node(launch).unwrap().position;
    assert_eq!(moved, Point::new(origin.x + 120.0, origin.y + 80.0));

    let moved_pin = pin_pos(&surface, launch, "In", PinDirection::Input);
    assert_eq!(moved_pin, Point::new(inp.x + 120.0, inp.y + 80.0));

    let route = &surface.connection_routes()[0];
    assert_eq!(route.to, moved_pin);
    assert_eq!(surface.connections().len(), 1);
}

#[test]
fn test_cascade_delete_leaves_no_dangling_connections() {
    init_logging();
    let mut surface = GraphSurface::new();
    let ids = surface
        .inject(vec![
            NodeDescriptor::new("Begin Play", NodeKind::Event).with_outputs(&["Exec"]),
            NodeDescriptor::new("Branch", NodeKind::Macro)
                .with_inputs(&["Exec", "Condition"])
                .with_outputs(&["True", "False"]),
            NodeDescriptor::new("Is Alive", NodeKind::Variable).with_outputs(&["Value"]),
            NodeDescriptor::new("Respawn", NodeKind::Function).with_inputs(&["Exec"]),
        ])
        .unwrap();
    let (begin, branch, alive, respawn) = (ids[0], ids[1], ids[2], ids[3]);

    let pairs = [
        ((begin, "Exec"), (branch, "Exec")),
        ((alive, "Value"), (branch, "Condition")),
        ((branch, "False"), (respawn, "Exec")),
        ((begin, "Exec"), (respawn, "Exec")),
    ];
    for ((from, fp), (to, tp)) in pairs {
        let a = pin_pos(&surface, from, fp, PinDirection::Output);
        let b = pin_pos(&surface, to, tp, PinDirection::Input);
        drag(&mut surface, a, b).expect("valid connection");
    }
    assert_eq!(surface.connections().len(), 4);

    surface.delete_node(branch).unwrap();
    assert!(surface.node(branch).is_none());
    assert_eq!(surface.connections().len(), 1);
    assert!(
        surface
            .connections()
            .iter()
            .all(|c| c.from.node_id != branch && c.to.node_id != branch)
    );
    assert_eq!(surface.connection_routes().len(), 1);
}

#[test]
fn test_injection_assigns_distinct_ids_and_positions() {
    init_logging();
    let mut surface = GraphSurface::new();
    surface
        .inject(vec![NodeDescriptor::new("Seed", NodeKind::Event)])
        .unwrap();

    let batch: Vec<NodeDescriptor> = (0..7)
        .map(|i| NodeDescriptor::new(&format!("Node {}", i), NodeKind::Function))
        .collect();
    let ids = surface.inject(batch).unwrap();
    assert_eq!(ids.len(), 7);
    assert_eq!(surface.nodes().len(), 8);

    let unique_ids: HashSet<Uuid> = surface.nodes().iter().map(|n| n.id).collect();
    assert_eq!(unique_ids.len(), 8);

    let unique_positions: HashSet<(i64, i64)> = surface
        .nodes()
        .iter()
        .map(|n| (n.position.x as i64, n.position.y as i64))
        .collect();
    assert_eq!(unique_positions.len(), 8);
}

#[test]
fn test_malformed_payload_keeps_existing_graph() {
    let (mut surface, jump, launch) = jump_surface();
    let out = pin_pos(&surface, jump, "Out", PinDirection::Output);
    let inp = pin_pos(&surface, launch, "In", PinDirection::Input);
    drag(&mut surface, out, inp).unwrap();

    assert!(surface.inject_json("not json").is_err());
    assert!(surface.inject_json(r#"{"nodes": [{"name": "", "kind": "event"}]}"#).is_err());
    assert_eq!(surface.nodes().len(), 2);
    assert_eq!(surface.connections().len(), 1);
}

#[test]
fn test_press_on_empty_space_stays_idle() {
    let (mut surface, _, _) = jump_surface();
    assert_eq!(surface.pointer_down(Point::new(5.0, 5.0)), None);
    assert!(surface.interaction().is_idle());
    assert!(!surface.pointer_move(Point::new(50.0, 50.0)));
    assert_eq!(surface.pointer_up(Point::new(50.0, 50.0)), None);
}
