use graph_loader::{read_matrix_for_sssp_lab, test_data};
use sssp_lab::{
    ComplexityHarness, Graph, HarnessConfig, INFINITY, LinearScanSolver, PrioritySolver,
    SsspError, render_graph, save_report, write_tree,
};
use std::fs;
use std::path::PathBuf;

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sssp-lab-{}-{name}", std::process::id()))
}

#[test]
fn diamond_from_file() {
    let input = read_matrix_for_sssp_lab(&test_data("diamond.txt"));
    let tree = PrioritySolver::new(&input.graph).solve(input.start);

    assert_eq!(tree.distances, vec![0, 1, 3, 4]);
    assert_eq!(tree.predecessors, vec![None, Some(0), Some(1), Some(2)]);
    assert_eq!(
        (tree.stats.insertions, tree.stats.removals, tree.stats.relaxations),
        (5, 4, 5)
    );
    assert_eq!(LinearScanSolver::new(&input.graph).solve(input.start), tree.distances);
}

#[test]
fn isolated_vertex_from_file() {
    let input = read_matrix_for_sssp_lab(&test_data("isolated.txt"));
    assert_eq!(input.start, 1);

    let tree = PrioritySolver::new(&input.graph).solve(input.start);
    assert_eq!(tree.distances, vec![2, 0, 7, 9, INFINITY]);
    assert_eq!(tree.predecessors, vec![Some(1), None, Some(1), Some(2), None]);
    assert_eq!(LinearScanSolver::new(&input.graph).solve(1), tree.distances);
}

#[test]
fn matrix_round_trip() {
    let path = test_data("sparse12.txt");
    let input = read_matrix_for_sssp_lab(&path);
    let text = fs::read_to_string(&path).unwrap();
    let expected: Vec<i64> = text
        .split_whitespace()
        .skip(2)
        .map(|t| t.parse::<i64>().unwrap().max(0))
        .collect();

    let rebuilt: Vec<i64> = input.graph.to_dense_matrix().into_iter().flatten().collect();
    assert_eq!(rebuilt, expected);
}

#[test]
fn malformed_file_is_rejected() {
    let err = Graph::from_matrix_file(test_data("malformed.txt")).unwrap_err();
    assert!(matches!(err, SsspError::MalformedInput(_)));
}

#[test]
fn huge_declared_vertex_count_is_malformed() {
    let err = Graph::from_matrix_str("0\n100000000000\n1 2 3\n").unwrap_err();
    assert!(matches!(err, SsspError::MalformedInput(_)));
}

#[test]
fn missing_file_is_unreadable() {
    let err = Graph::from_matrix_file(test_data("absent.txt")).unwrap_err();
    assert!(matches!(err, SsspError::FileUnreadable { .. }));
}

#[test]
fn tree_export_colours_only_tree_edges() {
    let input = read_matrix_for_sssp_lab(&test_data("diamond.txt"));
    let tree = PrioritySolver::new(&input.graph).solve(input.start);
    let path = scratch_file("tree.dot");

    write_tree(&input.graph, &tree.predecessors, &path).unwrap();
    let dot = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(dot.starts_with("digraph G {\n"));
    assert!(dot.ends_with("}\n"));
    let red: Vec<_> = dot.lines().filter(|l| l.contains("color=red")).collect();
    let black: Vec<_> = dot.lines().filter(|l| l.contains("color=black")).collect();
    assert_eq!(red.len(), 3);
    assert_eq!(black.len(), 2);
    assert!(black.iter().any(|l| l.contains("0 -> 2 [label=\"4\"")));
    assert!(black.iter().any(|l| l.contains("1 -> 3 [label=\"6\"")));
}

#[test]
fn plain_export_lists_every_edge() {
    let input = read_matrix_for_sssp_lab(&test_data("sparse12.txt"));
    let dot = render_graph(&input.graph);

    assert_eq!(dot.lines().count(), input.graph.edge_count() + 2);
    assert!(!dot.contains("color="));
}

#[test]
fn harness_report_on_disk() {
    let harness = ComplexityHarness::new(HarnessConfig::new().with_sizes(vec![10, 20]));
    let samples = harness.run();
    assert_eq!(samples.len(), 2);
    assert_eq!(
        samples.iter().map(|s| s.vertices).collect::<Vec<_>>(),
        vec![10, 20]
    );

    let path = scratch_file("complexity.dat");
    save_report(&samples, &path).unwrap();
    let report = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let mut lines = report.lines();
    assert_eq!(lines.next(), Some("Vertices Simple Logarithmic"));
    for (line, sample) in lines.zip(&samples) {
        let cols: Vec<_> = line.split_whitespace().collect();
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0].parse::<usize>().unwrap(), sample.vertices);
        assert!(cols[1].parse::<f64>().unwrap() >= 0.0);
        assert!(cols[2].parse::<f64>().unwrap() >= 0.0);
    }
}

#[test]
fn report_to_missing_directory_fails() {
    let err = save_report(&[], "no/such/dir/complexity.dat").unwrap_err();
    assert!(matches!(err, SsspError::OutputUnwritable { .. }));
}
