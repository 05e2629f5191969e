use matrix_graph::{Graph, Result};

fn weighted_graph() -> Result<Graph<char>> {
    let mut g = Graph::new('A'..='I');
    for (a, b, w) in [
        ('A', 'B', 2),
        ('A', 'C', 4),
        ('B', 'E', 9),
        ('B', 'F', 12),
        ('C', 'D', 6),
        ('C', 'E', 13),
        ('D', 'G', 2),
        ('E', 'F', 1),
        ('E', 'G', 11),
        ('E', 'H', 14),
        ('F', 'H', 3),
        ('G', 'H', 5),
        ('H', 'I', 10),
    ] {
        g.connect(&a, &b, w)?;
    }
    Ok(g)
}

fn unweighted_graph() -> Result<Graph<char>> {
    let mut g = Graph::new('A'..='L');
    for (a, b) in [
        ('A', 'B'),
        ('A', 'C'),
        ('B', 'D'),
        ('B', 'E'),
        ('C', 'E'),
        ('C', 'F'),
        ('D', 'G'),
        ('E', 'G'),
        ('E', 'H'),
        ('F', 'H'),
        ('G', 'I'),
        ('G', 'J'),
        ('H', 'K'),
        ('H', 'L'),
        ('I', 'J'),
        ('K', 'L'),
    ] {
        g.connect(&a, &b, 1)?;
    }
    Ok(g)
}

fn join(labels: &[char], sep: &str) -> String {
    labels
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

fn main() -> Result<()> {
    let g1 = weighted_graph()?;
    println!("Adjacency matrix of graph 1:\n{g1}");

    println!("BFS from A: {}", join(&g1.bfs(&'A')?, " "));
    println!("DFS from A: {}", join(&g1.dfs(&'A')?, " "));

    println!("\nShortest paths from A:");
    for route in g1.dijkstra(&'A')? {
        match route.distance {
            Some(d) => println!(
                "  A to {}: distance {d}, path {}",
                route.target,
                join(&route.path, "->")
            ),
            None => println!("  A to {}: unreachable", route.target),
        }
    }

    println!("\nMinimum spanning tree from A:");
    match g1.prim(&'A') {
        Ok(tree) => {
            for e in &tree.edges {
                println!("  {}-{} (weight {})", e.parent, e.child, e.weight);
            }
            println!("  total weight {}", tree.total_weight);
        }
        Err(e) => println!("  {e}"),
    }

    let mut g2 = unweighted_graph()?;
    let bc = g2.find_biconnected_components_and_articulation();
    println!(
        "\nArticulation points of graph 2: {}",
        if bc.articulation_points.is_empty() {
            "none".to_owned()
        } else {
            join(&bc.articulation_points, " ")
        }
    );
    println!("{} biconnected components:", bc.components.len());
    for (i, c) in bc.components.iter().enumerate() {
        let edges: Vec<_> = c.iter().map(|(a, b)| format!("{a}-{b}")).collect();
        println!("  component {}: {}", i + 1, edges.join(" "));
    }
    let bridges: Vec<_> = bc.bridges.iter().map(|(a, b)| format!("{a}-{b}")).collect();
    println!("Bridges: {}", bridges.join(" "));
    println!("{}", g2.tarjan_state().forest());
    Ok(())
}
