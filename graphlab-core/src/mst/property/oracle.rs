//! Exhaustive spanning-forest oracle.
//!
//! Enumerates every edge subset of the right size, keeps the acyclic ones
//! and reports the lightest. Only usable on graphs with a handful of edges.

/// Path-halving find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}

/// Counts the connected components induced by `edges`.
pub(super) fn component_count(vertex_count: usize, edges: &[(usize, usize, u32)]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for &(source, target, _) in edges {
        let left = find_root(&mut parent, source);
        let right = find_root(&mut parent, target);
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}

fn is_acyclic(vertex_count: usize, edges: impl Iterator<Item = (usize, usize)>) -> bool {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (source, target) in edges {
        let left = find_root(&mut parent, source);
        let right = find_root(&mut parent, target);
        if left == right {
            return false;
        }
        parent[right] = left;
    }
    true
}

/// Returns the smallest total weight over all spanning forests of the graph.
pub(super) fn brute_force_minimum_weight(
    vertex_count: usize,
    edges: &[(usize, usize, u32)],
) -> u64 {
    assert!(edges.len() < 32, "oracle enumerates subsets as a u32 mask");
    let forest_size = vertex_count - component_count(vertex_count, edges);

    let mut best: Option<u64> = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != forest_size {
            continue;
        }
        let chosen = || {
            edges
                .iter()
                .enumerate()
                .filter(move |&(index, _)| mask & (1 << index) != 0)
                .map(|(_, edge)| *edge)
        };
        if !is_acyclic(vertex_count, chosen().map(|(source, target, _)| (source, target))) {
            continue;
        }
        let weight = chosen().map(|(_, _, weight)| u64::from(weight)).sum();
        best = Some(best.map_or(weight, |current: u64| current.min(weight)));
    }
    best.unwrap_or(0)
}
