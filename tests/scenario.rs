use std::collections::HashSet;

use ugraph::{Graph, GraphError};

/// Builds the path graph 1 - 2 - 3 - 4 and walks it through the full
/// mutation/traversal lifecycle.
#[test]
fn path_graph_lifecycle() {
    let mut graph = Graph::new();
    for v in [1, 2, 3, 4] {
        graph.add_vertex(v);
    }
    graph.add_edge(&1, &2);
    graph.add_edge(&2, &3);
    graph.add_edge(&3, &4);

    assert_eq!(graph.order(), 4);
    assert_eq!(graph.size(), 3);
    assert!(!graph.is_edge(&1, &3));

    let mut visited = Vec::new();
    graph.bfs(&1, |v| visited.push(*v)).unwrap();
    assert_eq!(visited, vec![1, 2, 3, 4]);

    graph.remove_vertex(&2);
    assert_eq!(graph.order(), 3);
    assert!(!graph.is_edge(&1, &2));

    let mut after = Vec::new();
    graph.bfs(&1, |v| after.push(*v)).unwrap();
    assert_eq!(after, vec![1]);
}

#[test]
fn disconnected_vertices_traverse_alone() {
    let mut graph = Graph::new();
    graph.add_vertex("A".to_string());
    graph.add_vertex("B".to_string());

    let mut bfs_visited = Vec::new();
    graph
        .bfs(&"A".to_string(), |v| bfs_visited.push(v.clone()))
        .unwrap();
    assert_eq!(bfs_visited, vec!["A".to_string()]);

    let mut dfs_visited = Vec::new();
    graph
        .dfs(&"A".to_string(), |v| dfs_visited.push(v.clone()))
        .unwrap();
    assert_eq!(dfs_visited, vec!["A".to_string()]);
}

#[test]
fn mutation_against_absent_vertices_is_permissive() {
    let mut graph = Graph::new();
    graph.add_vertex(1);
    let before = graph.clone();

    graph.add_edge(&1, &2);
    graph.add_edge(&2, &3);
    graph.remove_edge(&1, &2);
    graph.remove_vertex(&2);
    assert_eq!(graph, before);
    assert!(!graph.is_edge(&1, &2));
    assert!(!graph.is_edge(&2, &1));
}

#[test]
fn traversal_from_absent_root_is_signaled() {
    let mut graph = Graph::new();
    graph.add_vertex(1);
    assert_eq!(graph.bfs(&2, |_| {}), Err(GraphError::VertexNotFound));
    assert_eq!(graph.dfs(&2, |_| {}), Err(GraphError::VertexNotFound));
}

#[test]
fn dfs_covers_branching_graph() {
    // A star with a tail: 0 joined to 1, 2, 3; 3 joined to 4.
    let mut graph = Graph::new();
    for v in 0..=4 {
        graph.add_vertex(v);
    }
    graph.add_edge(&0, &1);
    graph.add_edge(&0, &2);
    graph.add_edge(&0, &3);
    graph.add_edge(&3, &4);

    let visited: Vec<i32> = graph.dfs_iter(&0).unwrap().copied().collect();
    assert_eq!(visited[0], 0);
    assert_eq!(
        visited.iter().copied().collect::<HashSet<i32>>(),
        HashSet::from([0, 1, 2, 3, 4])
    );
    assert_eq!(visited.len(), 5);

    // 4 is only reachable through 3, so it must come after it.
    let pos = |x: i32| visited.iter().position(|&v| v == x).unwrap();
    assert!(pos(3) < pos(4));
}
