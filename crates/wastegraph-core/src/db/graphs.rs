use crate::error::{Result, WasteGraphError};
use crate::graph::types::{Edge, Graph, Node};
use crate::map_db_err;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

/// A saved graph with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredGraph {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub graph: Graph,
}

/// One row of `list_graphs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub node_count: i64,
    pub edge_count: i64,
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| map_db_err!("parse created_at", e))
}

fn insert_nodes(conn: &Connection, graph_id: i64, nodes: &[Node]) -> Result<()> {
    let mut stmt = conn
        .prepare("INSERT INTO nodes (graph_id, node_id, x, y) VALUES (?1, ?2, ?3, ?4)")
        .map_err(|e| map_db_err!("prepare node insert", e))?;

    for node in nodes {
        stmt.execute(params![graph_id, node.id, node.x, node.y])
            .map_err(|e| map_db_err!(&format!("insert node {}", node.id), e))?;
    }
    Ok(())
}

fn insert_edges(conn: &Connection, graph_id: i64, edges: &[Edge]) -> Result<()> {
    let mut stmt = conn
        .prepare(
            "INSERT INTO edges (graph_id, u, v, weight, constraint_distance, original_weight)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .map_err(|e| map_db_err!("prepare edge insert", e))?;

    for edge in edges {
        let weight = edge.effective_weight()?;
        stmt.execute(params![
            graph_id,
            edge.u,
            edge.v,
            weight,
            edge.constraint.unwrap_or(0),
            edge.original_weight,
        ])
        .map_err(|e| map_db_err!(&format!("insert edge {}-{}", edge.u, edge.v), e))?;
    }
    Ok(())
}

impl super::Database {
    /// Persist a graph and return its id
    ///
    /// Edges are stored with their effective weight. Everything happens in
    /// one transaction; a rejected row leaves the database untouched.
    #[tracing::instrument(skip(self, nodes, edges), fields(nodes = nodes.len(), edges = edges.len()))]
    pub fn save_graph(&self, name: &str, nodes: &[Node], edges: &[Edge]) -> Result<i64> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| WasteGraphError::transaction("start save", e))?;

        tx.execute(
            "INSERT INTO graphs (name, created_at) VALUES (?1, ?2)",
            params![name, Utc::now().to_rfc3339()],
        )
        .map_err(|e| map_db_err!("insert graph", e))?;
        let graph_id = tx.last_insert_rowid();

        insert_nodes(&tx, graph_id, nodes)?;
        insert_edges(&tx, graph_id, edges)?;

        tx.commit()
            .map_err(|e| WasteGraphError::transaction("commit save", e))?;

        tracing::debug!(graph_id, "graph saved");
        Ok(graph_id)
    }

    /// Load a saved graph, nodes and edges in insertion order
    pub fn load_graph(&self, id: i64) -> Result<StoredGraph> {
        let header: Option<(String, String)> = self
            .conn
            .query_row(
                "SELECT name, created_at FROM graphs WHERE id = ?1",
                params![id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
            .map_err(|e| map_db_err!("load graph", e))?;

        let Some((name, created_at)) = header else {
            return Err(WasteGraphError::GraphNotFound { id });
        };

        let mut stmt = self
            .conn
            .prepare("SELECT node_id, x, y FROM nodes WHERE graph_id = ?1 ORDER BY id")
            .map_err(|e| map_db_err!("prepare node query", e))?;
        let nodes = stmt
            .query_map(params![id], |row| {
                Ok(Node {
                    id: row.get(0)?,
                    x: row.get(1)?,
                    y: row.get(2)?,
                })
            })
            .map_err(|e| map_db_err!("query nodes", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read node", e))?;

        let mut stmt = self
            .conn
            .prepare(
                "SELECT u, v, weight, constraint_distance, original_weight
                 FROM edges WHERE graph_id = ?1 ORDER BY id",
            )
            .map_err(|e| map_db_err!("prepare edge query", e))?;
        let edges = stmt
            .query_map(params![id], |row| {
                let constraint: Option<i64> = row.get(3)?;
                let original_weight: Option<i64> = row.get(4)?;
                Ok(Edge {
                    u: row.get(0)?,
                    v: row.get(1)?,
                    w: row.get(2)?,
                    constraint: original_weight.and(constraint),
                    original_weight,
                })
            })
            .map_err(|e| map_db_err!("query edges", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read edge", e))?;

        Ok(StoredGraph {
            id,
            name,
            created_at: parse_timestamp(&created_at)?,
            graph: Graph { nodes, edges },
        })
    }

    /// Every saved graph, oldest first
    pub fn list_graphs(&self) -> Result<Vec<GraphSummary>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT g.id, g.name, g.created_at,
                        (SELECT COUNT(*) FROM nodes n WHERE n.graph_id = g.id),
                        (SELECT COUNT(*) FROM edges e WHERE e.graph_id = g.id)
                 FROM graphs g ORDER BY g.id",
            )
            .map_err(|e| map_db_err!("prepare graph list", e))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, i64>(4)?,
                ))
            })
            .map_err(|e| map_db_err!("list graphs", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read graph row", e))?;

        rows.into_iter()
            .map(|(id, name, created_at, node_count, edge_count)| {
                Ok(GraphSummary {
                    id,
                    name,
                    created_at: parse_timestamp(&created_at)?,
                    node_count,
                    edge_count,
                })
            })
            .collect()
    }

    /// Delete a saved graph along with its nodes and edges
    pub fn delete_graph(&self, id: i64) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM graphs WHERE id = ?1", params![id])
            .map_err(|e| map_db_err!("delete graph", e))?;

        if deleted == 0 {
            return Err(WasteGraphError::GraphNotFound { id });
        }
        tracing::debug!(graph_id = id, "graph deleted");
        Ok(())
    }
}
