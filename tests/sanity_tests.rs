use graph_loader::{
    random_graph, read_matrix_for_petgraph, read_matrix_for_sssp_lab, test_data, to_petgraph,
};
use petgraph::algo::dijkstra;
use sssp_lab::{Distance, Graph, INFINITY, LinearScanSolver, PrioritySolver};

fn assert_matches_petgraph(graph: &Graph, source: usize) {
    let (pg, nodes) = to_petgraph(graph);
    let expected = dijkstra(&pg, nodes[source], None, |e| *e.weight());

    let priority = PrioritySolver::new(graph).solve(source).distances;
    let simple = LinearScanSolver::new(graph).solve(source);

    for (vertex, node) in nodes.iter().enumerate() {
        let want = expected.get(node).copied().unwrap_or(INFINITY);
        assert_eq!(priority[vertex], want, "priority mismatch at vertex {vertex}");
        assert_eq!(simple[vertex], want, "linear scan mismatch at vertex {vertex}");
    }
}

#[test]
fn sanity_with_petgraph_on_file() {
    let path = test_data("sparse12.txt");
    let (petgraph, nodes, start) = read_matrix_for_petgraph(&path);
    let input = read_matrix_for_sssp_lab(&path);
    assert_eq!(input.start, start);

    let petgraph_distances = dijkstra(&petgraph, nodes[start], None, |e| *e.weight());
    let tree = PrioritySolver::new(&input.graph).solve(input.start);

    for (vertex, node) in nodes.iter().enumerate() {
        let petgraph_dist = petgraph_distances.get(node).copied().unwrap_or(INFINITY);
        assert_eq!(
            tree.distances[vertex], petgraph_dist,
            "Mismatch at vertex {vertex}"
        );
    }
}

#[test]
fn solvers_agree_on_random_graphs() {
    for seed in 0..25_u64 {
        let n = 5 + (seed as usize * 7) % 60;
        let m = n * (1 + seed as usize % 6);
        let graph = random_graph(n, m, 50, 0x5553_0000 + seed);
        assert_matches_petgraph(&graph, seed as usize % n);
    }
}

#[test]
fn solvers_agree_on_sparse_graphs_with_unreachable_vertices() {
    for seed in 0..10_u64 {
        let graph = random_graph(40, 30, 9, 0xA11C_E000 + seed);
        assert_matches_petgraph(&graph, 0);
    }
}

#[test]
fn predecessor_chains_reach_source_with_matching_weight() {
    for seed in 0..10_u64 {
        let graph = random_graph(30, 120, 20, 0x7EE0_0000 + seed);
        let dense = graph.to_dense_matrix();
        let tree = PrioritySolver::new(&graph).solve(0);

        for target in 0..graph.vertices {
            if !tree.is_reachable(target) {
                assert_eq!(tree.predecessors[target], None);
                continue;
            }

            let mut steps = 0;
            let mut total: Distance = 0;
            let mut current = target;
            while current != 0 {
                let pred = tree.predecessors[current].expect("reachable vertex has a predecessor");
                total += dense[pred][current] as Distance;
                current = pred;
                steps += 1;
                assert!(steps < graph.vertices, "chain from {target} is too long");
            }
            assert_eq!(total, tree.distances[target]);
        }
    }
}

#[test]
fn reruns_are_identical() {
    let graph = random_graph(50, 400, 10, 99);
    let priority = PrioritySolver::new(&graph);
    let simple = LinearScanSolver::new(&graph);

    assert_eq!(priority.solve(3), priority.solve(3));
    assert_eq!(simple.solve(3), simple.solve(3));
}

#[test]
fn source_distance_is_zero() {
    let graph = random_graph(20, 60, 10, 5);
    for source in 0..graph.vertices {
        assert_eq!(PrioritySolver::new(&graph).solve(source).distances[source], 0);
        assert_eq!(LinearScanSolver::new(&graph).solve(source)[source], 0);
    }
}
