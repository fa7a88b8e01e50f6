use crate::support::{stdout_json, wastegraph, write_graph, DIAMOND_GRAPH, SAMPLE_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// route
// ============================================================================

#[test]
fn test_route_human() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "diamond.json", DIAMOND_GRAPH);

    wastegraph()
        .current_dir(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["route", "A", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C -> D"))
        .stdout(predicate::str::contains("cost: 5"));
}

#[test]
fn test_route_override_reroutes() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "diamond.json", DIAMOND_GRAPH);

    let json = stdout_json(
        wastegraph()
            .current_dir(dir.path())
            .args(["route", "a", "d", "--override", "A:B=7"])
            .args(["--graph", "diamond.json", "--format", "json"]),
    );

    assert_eq!(json["path"], serde_json::json!(["A", "C", "D"]));
    assert_eq!(json["cost"], 7);
    assert_eq!(json["distance"], 7);
}

#[test]
fn test_route_sample_cost() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "sample.json", SAMPLE_GRAPH);

    let json = stdout_json(
        wastegraph()
            .current_dir(dir.path())
            .args(["--graph", "sample.json", "--format", "json", "route", "A", "D"]),
    );

    assert_eq!(json["cost"], 25);
    assert_eq!(json["path"][0], "A");
    assert_eq!(json["path"].as_array().unwrap().last().unwrap(), "D");
}

#[test]
fn test_route_ignores_missing_coordinates() {
    let dir = tempdir().unwrap();
    write_graph(
        dir.path(),
        "unplaced.json",
        r#"{"nodes":[{"id":"A","x":0,"y":0},{"id":"B"}],"edges":[{"u":"A","v":"B","w":3}]}"#,
    );

    let json = stdout_json(
        wastegraph()
            .current_dir(dir.path())
            .args(["--graph", "unplaced.json", "--format", "json", "route", "A", "B"]),
    );
    assert_eq!(json["path"], serde_json::json!(["A", "B"]));
    assert_eq!(json["cost"], 3);

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "unplaced.json", "schedule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tuesday: B"));

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "unplaced.json", "save", "unplaced"])
        .assert()
        .success();

    wastegraph()
        .current_dir(dir.path())
        .args(["--format", "records", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("N B x=- y=-"));
}

#[test]
fn test_route_unreachable_is_not_an_error() {
    let dir = tempdir().unwrap();
    write_graph(
        dir.path(),
        "split.json",
        r#"{"nodes":[{"id":"A","x":0,"y":0},{"id":"B","x":1,"y":1}],"edges":[]}"#,
    );

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "split.json", "route", "A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path found from A to B"));

    let json = stdout_json(
        wastegraph()
            .current_dir(dir.path())
            .args(["--graph", "split.json", "--format", "json", "route", "A", "B"]),
    );
    assert!(json["path"].is_null());
    assert!(json["cost"].is_null());
    assert_eq!(json["error"], "no path found");
}

#[test]
fn test_route_records() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "diamond.json", DIAMOND_GRAPH);

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "diamond.json", "--format", "records", "route", "A", "D"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H wastegraph=1 records=1 mode=route src=A dst=D found=true cost=5",
        ))
        .stdout(predicate::str::contains("R A>B>C>D cost=5"));
}

#[test]
fn test_route_reads_stdin() {
    wastegraph()
        .args(["--graph", "-", "route", "B", "D"])
        .write_stdin(DIAMOND_GRAPH)
        .assert()
        .success()
        .stdout(predicate::str::contains("cost: 3"));
}

// ============================================================================
// distances
// ============================================================================

#[test]
fn test_distances_with_override() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "diamond.json", DIAMOND_GRAPH);

    let json = stdout_json(
        wastegraph()
            .current_dir(dir.path())
            .args(["--graph", "diamond.json", "--format", "json"])
            .args(["distances", "A", "-o", "A:B=7"]),
    );

    assert_eq!(json["source"], "A");
    assert_eq!(
        json["distances"],
        serde_json::json!({"A": 0, "B": 6, "C": 5, "D": 7})
    );
}

#[test]
fn test_distances_marks_unreachable() {
    let dir = tempdir().unwrap();
    write_graph(
        dir.path(),
        "split.json",
        r#"{"nodes":[{"id":"A","x":0,"y":0},{"id":"B","x":1,"y":1}],"edges":[]}"#,
    );

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "split.json", "distances", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B  unreachable"));

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "split.json", "--format", "records", "distances", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("N A cost=0"))
        .stdout(predicate::str::contains("N B cost=-"));
}

// ============================================================================
// schedule
// ============================================================================

#[test]
fn test_schedule_json() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "sample.json", SAMPLE_GRAPH);

    let json = stdout_json(
        wastegraph()
            .current_dir(dir.path())
            .args(["--graph", "sample.json", "--format", "json", "schedule"]),
    );

    assert_eq!(
        json["coloring"],
        serde_json::json!({
            "A": "Monday",
            "B": "Tuesday",
            "C": "Wednesday",
            "D": "Monday"
        })
    );
}

#[test]
fn test_schedule_human_groups_by_day() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "sample.json", SAMPLE_GRAPH);

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "sample.json", "schedule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday: A, D"))
        .stdout(predicate::str::contains("Tuesday: B"))
        .stdout(predicate::str::contains("Wednesday: C"));
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_clean_graph() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "sample.json", SAMPLE_GRAPH);

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "sample.json", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph is valid (4 nodes, 5 edges)"));
}

#[test]
fn test_validate_reports_problems() {
    let dir = tempdir().unwrap();
    write_graph(
        dir.path(),
        "broken.json",
        r#"{
          "nodes": [
            {"id": "A", "x": 0, "y": 0},
            {"id": "A", "x": 1, "y": 1},
            {"id": "B", "x": 2},
            {"id": "C", "x": 3, "y": 3},
            {"id": "D", "x": 4, "y": 4}
          ],
          "edges": [
            {"u": "A", "v": "B", "w": 0},
            {"u": "C", "v": "D", "w": 1},
            {"u": "C", "v": "Z", "w": 1}
          ]
        }"#,
    );

    let json = stdout_json(
        wastegraph()
            .current_dir(dir.path())
            .args(["--graph", "broken.json", "--format", "json", "validate"]),
    );

    assert_eq!(json["is_valid"], false);
    let categories: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["category"].as_str().unwrap())
        .collect();
    assert_eq!(
        categories,
        vec!["duplicate-id", "missing-coordinates", "unknown-node"]
    );
    let warnings: Vec<&str> = json["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["category"].as_str().unwrap())
        .collect();
    assert_eq!(warnings, vec!["non-positive-weight", "disconnected"]);
    assert_eq!(json["stats"]["node_ids"], serde_json::json!(["A", "B", "C", "D"]));

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "broken.json", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR [duplicate-id] duplicate node identifier: A"))
        .stdout(predicate::str::contains("WARN  [disconnected]"))
        .stdout(predicate::str::contains("Summary: 3 error(s), 2 warning(s)"))
        .stdout(predicate::str::contains("Graph is invalid"));
}

#[test]
fn test_validate_records() {
    let dir = tempdir().unwrap();
    write_graph(
        dir.path(),
        "two.json",
        r#"{"nodes":[{"id":"A","x":0,"y":0},{"id":"B","x":0,"y":0},
                     {"id":"C","x":0,"y":0},{"id":"D","x":0,"y":0}],
            "edges":[{"u":"A","v":"B","w":1},{"u":"C","v":"D","w":1}]}"#,
    );

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "two.json", "--format", "records", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mode=validate valid=true nodes=4 edges=2 errors=0 warnings=1",
        ))
        .stdout(predicate::str::contains(
            "D warning disconnected \"graph has 2 connected components; some nodes are not connected\"",
        ));
}

#[test]
fn test_validate_accepts_documents_other_commands_reject() {
    let dir = tempdir().unwrap();
    write_graph(
        dir.path(),
        "partial.json",
        r#"{"nodes":[{"x":0,"y":0}],"edges":[{"u":"A"}]}"#,
    );

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "partial.json", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[missing-id] node 0 has no identifier"))
        .stdout(predicate::str::contains("[missing-endpoint] edge 0 has no endpoints"));
}

// ============================================================================
// paths
// ============================================================================

#[test]
fn test_paths_sorted_by_cost() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "sample.json", SAMPLE_GRAPH);

    let json = stdout_json(
        wastegraph()
            .current_dir(dir.path())
            .args(["--graph", "sample.json", "--format", "json", "paths", "A", "D"]),
    );

    let costs: Vec<i64> = json["paths"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["cost"].as_i64().unwrap())
        .collect();
    assert_eq!(costs, vec![25, 25, 30, 40]);
}

#[test]
fn test_paths_max_paths() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "sample.json", SAMPLE_GRAPH);

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "sample.json", "--format", "records"])
        .args(["paths", "A", "D", "--max-paths", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=paths src=A dst=D max=2 count=2"));
}

#[test]
fn test_paths_same_endpoint() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "sample.json", SAMPLE_GRAPH);

    let json = stdout_json(
        wastegraph()
            .current_dir(dir.path())
            .args(["--graph", "sample.json", "--format", "json", "paths", "B", "B"]),
    );
    assert_eq!(json["paths"], serde_json::json!([{"path": ["B"], "cost": 0}]));
}

#[test]
fn test_paths_unknown_endpoint_is_empty() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "sample.json", SAMPLE_GRAPH);

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "sample.json", "paths", "A", "Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no paths found from A to Z"));
}

// ============================================================================
// selftest
// ============================================================================

#[test]
fn test_selftest_json() {
    let json = stdout_json(wastegraph().args(["--format", "json", "selftest"]));

    assert_eq!(json["status"], "success");
    assert_eq!(json["algorithms"]["dijkstra"]["cost"], 25);
    assert_eq!(json["algorithms"]["coloring"]["D"], "Monday");
    assert_eq!(json["algorithms"]["validation"]["is_valid"], true);
    assert_eq!(json["test_data"]["nodes"].as_array().unwrap().len(), 4);
}

#[test]
fn test_selftest_human() {
    wastegraph()
        .arg("selftest")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route A -> D"))
        .stdout(predicate::str::contains("cost: 25"))
        .stdout(predicate::str::contains("Graph is valid"));
}
