//! CLI command implementations.

use std::path::Path;

use crate::generate::{generate_graph, GeneratorConfig};
use crate::graph::{find_path, UndirectedGraph};
use crate::types::GraphResult;

use super::input::read_edge_list;

/// Find a shortest path between two nodes of an edge list file.
pub fn cmd_path(path: &Path, source: &str, target: &str, json: bool) -> GraphResult<()> {
    let edges = read_edge_list(path)?;
    let source = source.to_string();
    let target = target.to_string();
    let found = find_path(&source, &target, &edges)?;

    if json {
        let info = match &found {
            Some(steps) => serde_json::json!({
                "source": source,
                "target": target,
                "found": true,
                "length": steps.len(),
                "path": steps,
            }),
            None => serde_json::json!({
                "source": source,
                "target": target,
                "found": false,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        match found {
            Some(steps) if steps.is_empty() => {
                println!("{} is the target itself (length 0)", source);
            }
            Some(steps) => {
                println!("Path from {} to {} (length {}):", source, target, steps.len());
                for step in &steps {
                    println!("  {}", step);
                }
            }
            None => println!("No path from {} to {}", source, target),
        }
    }
    Ok(())
}

/// Generate a random graph and print it or write it to a file.
pub fn cmd_generate(
    config: &GeneratorConfig,
    pretty: bool,
    output: Option<&Path>,
) -> GraphResult<()> {
    let (nodes, links) = generate_graph(config)?;
    let doc = serde_json::json!({
        "nodes": nodes,
        "links": links,
    });
    let text = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };

    match output {
        Some(file) => {
            std::fs::write(file, text)?;
            log::info!(
                "wrote {} nodes and {} links to {}",
                nodes.len(),
                links.len(),
                file.display()
            );
        }
        None => println!("{}", text),
    }
    Ok(())
}

/// Summarize an edge list file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let records = read_edge_list(path)?;
    let graph = UndirectedGraph::from_edges(&records);

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "records": records.len(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "components": graph.component_count(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("File: {}", path.display());
        println!("Edge records: {}", records.len());
        println!("Nodes: {}", graph.node_count());
        println!("Distinct edges: {}", graph.edge_count());
        println!("Components: {}", graph.component_count());
    }
    Ok(())
}
