//! SQLite database schema for wastegraph

use rusqlite::{Connection, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 2;

/// What `create_schema` had to do
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaCreateResult {
    /// Schema already at the current version
    Ok,
    /// Fresh database, tables created
    Created,
    /// Tables from another version were dropped and recreated; saved graphs are gone
    Recreated,
}

const SCHEMA_SQL: &str = r#"
-- Saved graphs
CREATE TABLE IF NOT EXISTS graphs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Collection points
CREATE TABLE IF NOT EXISTS nodes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    graph_id INTEGER NOT NULL REFERENCES graphs(id) ON DELETE CASCADE,
    node_id TEXT NOT NULL,
    x INTEGER,
    y INTEGER,
    UNIQUE (graph_id, node_id)
);
CREATE INDEX IF NOT EXISTS idx_nodes_graph_id ON nodes(graph_id);

-- Road segments, weight is original + constraint when constrained
CREATE TABLE IF NOT EXISTS edges (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    graph_id INTEGER NOT NULL REFERENCES graphs(id) ON DELETE CASCADE,
    u TEXT NOT NULL,
    v TEXT NOT NULL,
    weight INTEGER NOT NULL,
    constraint_distance INTEGER DEFAULT 0,
    original_weight INTEGER,
    UNIQUE (graph_id, u, v),
    CHECK (weight > 0)
);
CREATE INDEX IF NOT EXISTS idx_edges_graph_id ON edges(graph_id);

-- Schema metadata
CREATE TABLE IF NOT EXISTS index_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

pub(crate) fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute("DROP TABLE IF EXISTS edges", [])?;
    conn.execute("DROP TABLE IF EXISTS nodes", [])?;
    conn.execute("DROP TABLE IF EXISTS graphs", [])?;
    conn.execute("DROP TABLE IF EXISTS index_meta", [])?;
    Ok(())
}

fn install(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    conn.execute(
        "INSERT OR REPLACE INTO index_meta (key, value) VALUES ('schema_version', ?1)",
        [&CURRENT_SCHEMA_VERSION.to_string()],
    )?;
    Ok(())
}

pub(crate) fn read_schema_version(conn: &Connection) -> Option<i32> {
    conn.query_row(
        "SELECT value FROM index_meta WHERE key = 'schema_version'",
        [],
        |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
    )
    .ok()
}

pub fn create_schema(conn: &Connection) -> Result<SchemaCreateResult> {
    let result = match read_schema_version(conn) {
        None => {
            install(conn)?;
            SchemaCreateResult::Created
        }
        Some(v) if v == CURRENT_SCHEMA_VERSION => SchemaCreateResult::Ok,
        Some(v) => {
            drop_all_tables(conn)?;
            install(conn)?;
            tracing::warn!(
                "Database schema changed from version {} to {}, saved graphs were dropped",
                v,
                CURRENT_SCHEMA_VERSION
            );
            SchemaCreateResult::Recreated
        }
    };

    Ok(result)
}

/// Drop every table and install a fresh schema
pub(crate) fn recreate_schema(conn: &Connection) -> Result<()> {
    drop_all_tables(conn)?;
    install(conn)
}

#[cfg(test)]
pub fn force_set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO index_meta (key, value) VALUES ('schema_version', ?1)",
        [&version.to_string()],
    )?;
    Ok(())
}
