//! Breadth-first and depth-first traversal from a single start vertex.

use std::collections::VecDeque;

use crate::{
    error::{check_vertex, Result},
    storage::Adjacency,
};

/// Vertices reachable from start, in BFS order.
/// Neighbors are enqueued in increasing index order and marked when enqueued, so no vertex is queued twice.
pub fn bfs<A: Adjacency>(adj: &A, start: usize) -> Result<Vec<usize>> {
    check_vertex(start, adj.vertex_count())?;
    let mut visited = vec![false; adj.vertex_count()];
    let mut order = Vec::with_capacity(adj.vertex_count());
    let mut queue = VecDeque::from([start]);
    visited[start] = true;
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for (v, _) in adj.neighbors(u) {
            if !visited[v] {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }
    log::debug!(
        "bfs from {start} visited {} of {} vertices",
        order.len(),
        adj.vertex_count()
    );
    Ok(order)
}

/// Vertices reachable from start, in recursive DFS preorder.
pub fn dfs<A: Adjacency>(adj: &A, start: usize) -> Result<Vec<usize>> {
    check_vertex(start, adj.vertex_count())?;
    let mut visited = vec![false; adj.vertex_count()];
    let mut order = Vec::with_capacity(adj.vertex_count());
    dfs_visit(adj, start, &mut visited, &mut order);
    log::debug!(
        "dfs from {start} visited {} of {} vertices",
        order.len(),
        adj.vertex_count()
    );
    Ok(order)
}

// Recursion depth is at most the vertex count.
fn dfs_visit<A: Adjacency>(adj: &A, u: usize, visited: &mut [bool], order: &mut Vec<usize>) {
    visited[u] = true;
    order.push(u);
    for (v, _) in adj.neighbors(u) {
        if !visited[v] {
            dfs_visit(adj, v, visited, order);
        }
    }
}
