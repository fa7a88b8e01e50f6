use crate::graph::document::{RawEdge, RawNode};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Issue severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious but usable
    Warning,
    /// Breaks the graph
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// What a validation issue is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    MissingId,
    DuplicateId,
    MissingCoordinates,
    MissingEndpoint,
    MissingWeight,
    UnknownNode,
    NonPositiveWeight,
    Disconnected,
}

impl IssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::NonPositiveWeight | IssueKind::Disconnected => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::MissingId => "missing-id",
            IssueKind::DuplicateId => "duplicate-id",
            IssueKind::MissingCoordinates => "missing-coordinates",
            IssueKind::MissingEndpoint => "missing-endpoint",
            IssueKind::MissingWeight => "missing-weight",
            IssueKind::UnknownNode => "unknown-node",
            IssueKind::NonPositiveWeight => "non-positive-weight",
            IssueKind::Disconnected => "disconnected",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    #[serde(rename = "category")]
    pub kind: IssueKind,
    pub message: String,
    /// Affected node (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Position of the affected edge in the input (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_index: Option<usize>,
}

impl Issue {
    fn new(kind: IssueKind, message: String) -> Self {
        Self {
            severity: kind.severity(),
            kind,
            message,
            node_id: None,
            edge_index: None,
        }
    }

    fn on_node(mut self, id: impl Into<String>) -> Self {
        self.node_id = Some(id.into());
        self
    }

    fn on_edge(mut self, index: usize) -> Self {
        self.edge_index = Some(index);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    /// Valid identifiers, first occurrence order
    pub node_ids: Vec<String>,
    /// Connected component count, when connectivity was checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub stats: GraphStats,
}

impl ValidationReport {
    fn add_issue(&mut self, issue: Issue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }

    /// Errors then warnings, in detection order within each
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.errors.iter().chain(self.warnings.iter())
    }

    pub fn has_kind(&self, kind: IssueKind) -> bool {
        self.issues().any(|issue| issue.kind == kind)
    }
}

fn check_nodes(nodes: &[RawNode], report: &mut ValidationReport) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut node_ids = Vec::new();

    for (i, node) in nodes.iter().enumerate() {
        let id = node.id.as_deref().filter(|id| !id.is_empty());

        match id {
            None => report.add_issue(Issue::new(
                IssueKind::MissingId,
                format!("node {} has no identifier", i),
            )),
            Some(id) if seen.contains(id) => report.add_issue(
                Issue::new(
                    IssueKind::DuplicateId,
                    format!("duplicate node identifier: {}", id),
                )
                .on_node(id),
            ),
            Some(id) => {
                seen.insert(id);
                node_ids.push(id.to_string());
            }
        }

        if node.x.is_none() || node.y.is_none() {
            let label = id.map(str::to_string).unwrap_or_else(|| i.to_string());
            let issue = Issue::new(
                IssueKind::MissingCoordinates,
                format!("node {} has no coordinates", label),
            );
            report.add_issue(match id {
                Some(id) => issue.on_node(id),
                None => issue,
            });
        }
    }

    node_ids
}

fn check_edges(edges: &[RawEdge], known: &HashSet<&str>, report: &mut ValidationReport) {
    for (i, edge) in edges.iter().enumerate() {
        let (Some(u), Some(v)) = (edge.u.as_deref(), edge.v.as_deref()) else {
            report.add_issue(
                Issue::new(
                    IssueKind::MissingEndpoint,
                    format!("edge {} has no endpoints", i),
                )
                .on_edge(i),
            );
            continue;
        };

        let Some(w) = edge.w else {
            report.add_issue(
                Issue::new(IssueKind::MissingWeight, format!("edge {} has no weight", i)).on_edge(i),
            );
            continue;
        };

        for endpoint in [u, v] {
            if !known.contains(endpoint) {
                report.add_issue(
                    Issue::new(
                        IssueKind::UnknownNode,
                        format!("edge {}: node {} does not exist", i, endpoint),
                    )
                    .on_node(endpoint)
                    .on_edge(i),
                );
            }
        }

        if w <= 0 {
            report.add_issue(
                Issue::new(
                    IssueKind::NonPositiveWeight,
                    format!("edge {}-{} has a non-positive weight: {}", u, v, w),
                )
                .on_edge(i),
            );
        }
    }
}

/// Count connected components with an iterative depth-first walk
///
/// Only edges whose endpoints both exist contribute.
fn count_components(node_ids: &[String], edges: &[RawEdge]) -> usize {
    let index: HashMap<&str, usize> = node_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();

    let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); node_ids.len()];
    for edge in edges {
        let (Some(u), Some(v)) = (edge.u.as_deref(), edge.v.as_deref()) else {
            continue;
        };
        if let (Some(&a), Some(&b)) = (index.get(u), index.get(v)) {
            neighbors[a].push(b);
            neighbors[b].push(a);
        }
    }

    let mut visited = vec![false; node_ids.len()];
    let mut components = 0;
    let mut stack = Vec::new();

    for start in 0..node_ids.len() {
        if visited[start] {
            continue;
        }
        components += 1;
        stack.push(start);
        while let Some(current) = stack.pop() {
            if visited[current] {
                continue;
            }
            visited[current] = true;
            stack.extend(neighbors[current].iter().filter(|&&n| !visited[n]));
        }
    }

    components
}

/// Check a raw graph for structural problems
///
/// Every check runs regardless of earlier findings. The graph is valid
/// when no errors were found; warnings never affect validity.
#[tracing::instrument(skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
pub fn validate(nodes: &[RawNode], edges: &[RawEdge]) -> ValidationReport {
    let mut report = ValidationReport::default();

    let node_ids = check_nodes(nodes, &mut report);
    let known: HashSet<&str> = node_ids.iter().map(String::as_str).collect();
    check_edges(edges, &known, &mut report);

    let mut components = None;
    if !nodes.is_empty() && !edges.is_empty() {
        let count = count_components(&node_ids, edges);
        if count > 1 {
            report.add_issue(Issue::new(
                IssueKind::Disconnected,
                format!(
                    "graph has {} connected components; some nodes are not connected",
                    count
                ),
            ));
        }
        components = Some(count);
    }

    report.is_valid = report.errors.is_empty();
    report.stats = GraphStats {
        nodes: nodes.len(),
        edges: edges.len(),
        node_ids,
        components,
    };

    tracing::debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validation finished"
    );

    report
}
