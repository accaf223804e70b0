use flowchart_editor::{
    connection_points, export_to_json, generate_id, snap_to_grid, Connection, EditorStores,
    FlowchartNode, NodeType, Position,
};

/// Builds a small flowchart through the stores and prints the JSON export.
fn main() -> Result<(), serde_json::Error> {
    // Set up logging for development
    env_logger::init();

    let mut stores = EditorStores::new();
    let grid = stores.grid.get();

    let start = FlowchartNode::new(
        generate_id(),
        NodeType::Input,
        snap_to_grid(Position::new(13.0, 48.0), grid),
        "Read input",
    );
    let check = FlowchartNode::new(
        generate_id(),
        NodeType::Decision,
        snap_to_grid(Position::new(207.0, 52.0), grid),
        "Valid?",
    );
    let done = FlowchartNode::new(
        generate_id(),
        NodeType::Output,
        snap_to_grid(Position::new(414.0, 46.0), grid),
        "Write result",
    );

    let first_hop = connection_points(&start, &check);
    let second_hop = connection_points(&check, &done);
    let connections = [
        Connection::new(
            generate_id(),
            start.id.clone(),
            check.id.clone(),
            first_hop.from,
            first_hop.to,
        ),
        Connection::new(
            generate_id(),
            check.id.clone(),
            done.id.clone(),
            second_hop.from,
            second_hop.to,
        ),
    ];

    stores.add_node(start);
    stores.add_node(check);
    stores.add_node(done);
    for connection in connections {
        stores.add_connection(connection);
    }

    println!("{}", export_to_json(stores.flowchart.value())?);
    Ok(())
}
