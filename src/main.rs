use std::{error::Error, io::Read};

use ds_coursework::parse;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut src = String::new();
    std::io::stdin().read_to_string(&mut src)?;

    let graph = parse(&src)?;
    let Some(first) = graph.vertices().first().map(|vertex| vertex.label()) else {
        return Ok(());
    };

    println!("BFS: {}", join(graph.bfs(first)?));
    println!("DFS: {}", join(graph.dfs(first)?));

    let tree = graph.minimum_spanning_tree();
    println!("MST (total weight {}):", tree.total_weight());
    for edge in tree.edges() {
        println!("{edge}");
    }

    let paths = graph.shortest_paths(first)?;
    println!("Distances from {first}:");
    for (label, distance) in paths.iter() {
        match distance {
            Some(distance) => println!("{label} {distance}"),
            None => println!("{label} unreachable"),
        }
    }
    Ok(())
}

fn join(labels: Vec<i64>) -> String {
    labels
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
