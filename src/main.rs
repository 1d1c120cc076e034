use anyhow::Result;
use propgraph::{Direction, Graph, Label, NodeId, PropertyMap};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Propgraph v{}", propgraph::version());
    println!("=========================");
    println!();

    let mut graph = Graph::new();

    // Idaho sits within the United States, within North America.
    let north_america = place(&mut graph, "Continent", "North America");
    let usa = place(&mut graph, "Country", "United States");
    let idaho = place(&mut graph, "State", "Idaho");
    graph.add_edge(usa, "WITHIN", north_america, PropertyMap::new())?;
    graph.add_edge(idaho, "WITHIN", usa, PropertyMap::new())?;

    // London sits within England, within Europe.
    let europe = place(&mut graph, "Continent", "Europe");
    let england = place(&mut graph, "Country", "England");
    let london = place(&mut graph, "City", "London");
    graph.add_edge(england, "WITHIN", europe, PropertyMap::new())?;
    graph.add_edge(london, "WITHIN", england, PropertyMap::new())?;

    // Lucy was born in Idaho but now lives in London.
    let lucy = graph.add_node(PropertyMap::from([
        ("type".to_string(), "Person".into()),
        ("name".to_string(), "Lucy".into()),
    ]));
    graph.add_edge(lucy, "BORN_IN", idaho, PropertyMap::new())?;
    graph.add_edge(lucy, "LIVES_IN", london, PropertyMap::new())?;

    println!(
        "Built scenario: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    println!();

    // Find every Person named Lucy and trace where she is from and where
    // she lives, following WITHIN edges up to the enclosing continent.
    let pattern = PropertyMap::from([
        ("type".to_string(), "Person".into()),
        ("name".to_string(), "Lucy".into()),
    ]);
    let within = Label::new("WITHIN");

    for person in graph.find_nodes(&pattern) {
        println!("Found {}:", describe(&graph, person.id)?);
        println!("  properties: {}", serde_json::to_string(&person.properties)?);

        for edge in graph.edges_with_label(person.id, &Label::new("BORN_IN"), Direction::Outgoing)? {
            match graph.follow_label_chain(edge.id, &within)? {
                Some(region) => println!(
                    "  born in {}, which lies in {}",
                    describe(&graph, edge.head)?,
                    describe(&graph, region)?
                ),
                None => println!("  born in {}", describe(&graph, edge.head)?),
            }
        }

        for edge in graph.edges_with_label(person.id, &Label::new("LIVES_IN"), Direction::Outgoing)? {
            match graph.follow_label_chain(edge.id, &within)? {
                Some(region) => println!(
                    "  lives in {}, which lies in {}",
                    describe(&graph, edge.head)?,
                    describe(&graph, region)?
                ),
                None => println!("  lives in {}", describe(&graph, edge.head)?),
            }
        }
    }

    Ok(())
}

/// Add a location node carrying a `type` and a `name` property.
fn place(graph: &mut Graph, kind: &str, name: &str) -> NodeId {
    graph.add_node(PropertyMap::from([
        ("type".to_string(), kind.into()),
        ("name".to_string(), name.into()),
    ]))
}

/// Render a node as "name (type)" for display.
fn describe(graph: &Graph, id: NodeId) -> Result<String> {
    let node = graph.get_node(id)?;
    let name = node
        .get_property("name")
        .and_then(|v| v.as_str())
        .unwrap_or("?");
    let kind = node
        .get_property("type")
        .and_then(|v| v.as_str())
        .unwrap_or("?");
    Ok(format!("{} ({})", name, kind))
}
