//! Generate a demo graph, then find a path across it.

use graphpath::*;

fn main() -> GraphResult<()> {
    // A small hand-written edge list
    let edges = [("home", "park"), ("park", "school"), ("home", "shop")];
    match find_path(&"shop", &"school", &edges)? {
        Some(path) => {
            println!("shop -> school in {} steps:", path.len());
            for step in &path {
                println!("  {}", step);
            }
        }
        None => println!("shop and school are not connected"),
    }

    // A reproducible random graph
    let config = GeneratorConfig {
        min_nodes: 8,
        max_nodes: 12,
        max_links: 2,
        seed: Some(2024),
    };
    let (nodes, links) = generate_graph(&config)?;
    let graph = UndirectedGraph::from_edges(&links);
    println!(
        "Generated {} nodes, {} links, {} components",
        nodes.len(),
        links.len(),
        graph.component_count()
    );

    let first = nodes[0].id;
    let last = nodes[nodes.len() - 1].id;
    match graph.shortest_path(&first, &last)? {
        Some(path) => println!("{} -> {}: {} steps", first, last, path.len()),
        None => println!("{} and {} are in different components", first, last),
    }

    Ok(())
}
