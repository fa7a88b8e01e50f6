use crate::support::{stdout_json, wastegraph, write_graph, SAMPLE_GRAPH};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_creates_database() {
    let dir = tempdir().unwrap();

    wastegraph()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized database at"));

    assert!(dir.path().join("wastegraph.db").exists());
}

#[test]
fn test_init_json_reports_schema() {
    let dir = tempdir().unwrap();

    let json = stdout_json(
        wastegraph()
            .current_dir(dir.path())
            .args(["--format", "json", "init"]),
    );
    assert_eq!(json["status"], "ok");
    assert_eq!(json["schema_version"], 2);
}

#[test]
fn test_db_flag_and_env_choose_location() {
    let dir = tempdir().unwrap();

    wastegraph()
        .current_dir(dir.path())
        .args(["--db", "custom.db", "init"])
        .assert()
        .success();
    assert!(dir.path().join("custom.db").exists());

    wastegraph()
        .current_dir(dir.path())
        .env("WASTEGRAPH_DB", "from-env.db")
        .arg("init")
        .assert()
        .success();
    assert!(dir.path().join("from-env.db").exists());
}

#[test]
fn test_save_list_show_round_trip() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "sample.json", SAMPLE_GRAPH);

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "sample.json", "save", "downtown"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Saved graph 1 as \"downtown\" (4 nodes, 5 edges)",
        ));

    wastegraph()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("downtown"))
        .stdout(predicate::str::contains("(4 nodes, 5 edges"));

    let listed = stdout_json(
        wastegraph()
            .current_dir(dir.path())
            .args(["--format", "json", "list"]),
    );
    assert_eq!(listed[0]["id"], 1);
    assert_eq!(listed[0]["node_count"], 4);

    let shown = stdout_json(wastegraph().current_dir(dir.path()).args(["show", "1"]));
    let original: serde_json::Value = serde_json::from_str(SAMPLE_GRAPH).unwrap();
    assert_eq!(shown, original);
}

#[test]
fn test_save_json_payload() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "sample.json", SAMPLE_GRAPH);

    let json = stdout_json(
        wastegraph()
            .current_dir(dir.path())
            .args(["--graph", "sample.json", "--format", "json", "save", "north"]),
    );
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "north");
    assert_eq!(json["message"], "Graph saved successfully");
}

#[test]
fn test_saved_graph_feeds_algorithms() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "sample.json", SAMPLE_GRAPH);

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "sample.json", "--quiet", "save", "loop"])
        .assert()
        .success()
        .stdout("1\n");

    let json = stdout_json(
        wastegraph()
            .current_dir(dir.path())
            .args(["--graph-id", "1", "--format", "json", "route", "A", "D"]),
    );
    assert_eq!(json["cost"], 25);

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph-id", "1", "schedule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday: A, D"));
}

#[test]
fn test_save_stores_constrained_weight() {
    let dir = tempdir().unwrap();
    write_graph(
        dir.path(),
        "detour.json",
        r#"{"nodes":[{"id":"A","x":0,"y":0},{"id":"B","x":5,"y":0}],
            "edges":[{"u":"A","v":"B","w":4,"constraint":3,"originalWeight":4}]}"#,
    );

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "detour.json", "save", "detour"])
        .assert()
        .success();

    wastegraph()
        .current_dir(dir.path())
        .args(["--format", "records", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("E A B w=7"));

    let json = stdout_json(
        wastegraph()
            .current_dir(dir.path())
            .args(["--graph-id", "1", "--format", "json", "route", "A", "B"]),
    );
    assert_eq!(json["cost"], 7);
}

#[test]
fn test_save_rejects_non_positive_weight() {
    let dir = tempdir().unwrap();
    write_graph(
        dir.path(),
        "zero.json",
        r#"{"nodes":[{"id":"A","x":0,"y":0},{"id":"B","x":1,"y":1}],
            "edges":[{"u":"A","v":"B","w":0}]}"#,
    );

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "zero.json", "save", "zero"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to insert edge A-B"));

    wastegraph()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved graphs"));
}

#[test]
fn test_save_rejects_overflowing_constraint() {
    let dir = tempdir().unwrap();
    write_graph(
        dir.path(),
        "huge.json",
        r#"{"nodes":[{"id":"A","x":0,"y":0},{"id":"B","x":1,"y":1}],
            "edges":[{"u":"A","v":"B","w":1,"constraint":1,"originalWeight":9223372036854775807}]}"#,
    );

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "huge.json", "save", "huge"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid edge weight: A-B"));

    wastegraph()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved graphs"));
}

#[test]
fn test_delete_graph() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "sample.json", SAMPLE_GRAPH);

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "sample.json", "save", "temp"])
        .assert()
        .success();

    wastegraph()
        .current_dir(dir.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted graph 1"));

    wastegraph()
        .current_dir(dir.path())
        .args(["show", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph not found: 1"));
}

#[test]
fn test_reset_requires_confirmation() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "sample.json", SAMPLE_GRAPH);

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "sample.json", "save", "keep"])
        .assert()
        .success();

    wastegraph()
        .current_dir(dir.path())
        .arg("reset")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));

    wastegraph()
        .current_dir(dir.path())
        .args(["reset", "--yes"])
        .assert()
        .success();

    wastegraph()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved graphs"));
}

#[test]
fn test_config_file_sets_database_and_max_paths() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "sample.json", SAMPLE_GRAPH);
    fs::write(
        dir.path().join("wastegraph.toml"),
        "[database]\npath = \"data/graphs.db\"\n\n[paths]\nmax_paths = 1\n",
    )
    .unwrap();

    wastegraph()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    assert!(dir.path().join("data").join("graphs.db").exists());

    wastegraph()
        .current_dir(dir.path())
        .args(["--graph", "sample.json", "--format", "records", "paths", "A", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max=1 count=1"));
}
