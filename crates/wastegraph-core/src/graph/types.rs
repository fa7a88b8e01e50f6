use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::{self, WasteGraphError};

/// Message attached to a route search that never reached its destination
pub const NO_PATH_MESSAGE: &str = "no path found";

/// A collection point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    /// Planar coordinates, used for display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
}

impl Node {
    pub fn new(id: impl Into<String>, x: i64, y: i64) -> Self {
        Self {
            id: id.into(),
            x: Some(x),
            y: Some(y),
        }
    }

    /// A point known only by its identifier
    pub fn unplaced(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x: None,
            y: None,
        }
    }
}

/// An undirected road segment between two collection points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub u: String,
    pub v: String,
    /// Traversal cost, identical in both directions
    pub w: i64,
    /// Detour distance added on top of `original_weight`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<i64>,
    /// Weight before a constraint was applied
    #[serde(
        default,
        rename = "originalWeight",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_weight: Option<i64>,
}

impl Edge {
    pub fn new(u: impl Into<String>, v: impl Into<String>, w: i64) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
            w,
            constraint: None,
            original_weight: None,
        }
    }

    /// Attach a constraint: the effective weight becomes `original + constraint`
    pub fn with_constraint(mut self, original_weight: i64, constraint: i64) -> Self {
        self.original_weight = Some(original_weight);
        self.constraint = Some(constraint);
        self
    }

    /// Weight that gets persisted
    ///
    /// `original + constraint` when the edge carries an original weight,
    /// the plain weight otherwise. Fails when the sum does not fit an `i64`.
    pub fn effective_weight(&self) -> error::Result<i64> {
        let Some(original) = self.original_weight else {
            return Ok(self.w);
        };
        let constraint = self.constraint.unwrap_or(0);
        original.checked_add(constraint).ok_or_else(|| {
            WasteGraphError::invalid_value(
                "edge weight",
                format!(
                    "{}-{}: originalWeight {} + constraint {} overflows",
                    self.u, self.v, original, constraint
                ),
            )
        })
    }
}

/// Strict node and edge lists, ready for the algorithms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }
}

/// Directional replacement weights, applied during shortest-path search only
///
/// An override for `(u, v)` affects traversal from `u` to `v` and leaves
/// `v` to `u` on the edge's own weight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightOverrides {
    by_source: HashMap<String, HashMap<String, i64>>,
}

impl WeightOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>, weight: i64) {
        self.by_source
            .entry(from.into())
            .or_default()
            .insert(to.into(), weight);
    }

    pub fn get(&self, from: &str, to: &str) -> Option<i64> {
        self.by_source.get(from).and_then(|m| m.get(to)).copied()
    }

    pub fn len(&self) -> usize {
        self.by_source.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Into<String>> FromIterator<(S, S, i64)> for WeightOverrides {
    fn from_iter<I: IntoIterator<Item = (S, S, i64)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (from, to, weight) in iter {
            overrides.insert(from, to, weight);
        }
        overrides
    }
}

/// A path between two collection points and its accumulated cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: Vec<String>,
    pub cost: i64,
}

impl Route {
    pub fn source(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of a shortest-path search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Found(Route),
    /// The destination is unreachable from the source
    NoPath,
}

impl RouteOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::NoPath => None,
        }
    }

    pub fn cost(&self) -> Option<i64> {
        self.route().map(|r| r.cost)
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}

// `{path, cost, distance}` when found, `{path: null, cost: null, error}` otherwise
impl Serialize for RouteOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RouteOutcome::Found(route) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("path", &route.path)?;
                map.serialize_entry("cost", &route.cost)?;
                map.serialize_entry("distance", &route.cost)?;
                map.end()
            }
            RouteOutcome::NoPath => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("path", &Option::<Vec<String>>::None)?;
                map.serialize_entry("cost", &Option::<i64>::None)?;
                map.serialize_entry("error", NO_PATH_MESSAGE)?;
                map.end()
            }
        }
    }
}

/// Collection day labels, in assignment order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    /// Catch-all, always available as a fallback
    Weekend,
}

impl Day {
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Weekend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Weekend => "Weekend",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collection day per node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    assignments: BTreeMap<String, Day>,
}

impl Schedule {
    pub(crate) fn assign(&mut self, node_id: &str, day: Day) {
        self.assignments.insert(node_id.to_string(), day);
    }

    pub fn get(&self, node_id: &str) -> Option<Day> {
        self.assignments.get(node_id).copied()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Assignments ordered by node id
    pub fn iter(&self) -> impl Iterator<Item = (&str, Day)> {
        self.assignments.iter().map(|(id, day)| (id.as_str(), *day))
    }

    /// Node ids grouped under each day that received at least one node
    pub fn by_day(&self) -> BTreeMap<Day, Vec<&str>> {
        let mut grouped: BTreeMap<Day, Vec<&str>> = BTreeMap::new();
        for (id, day) in self.iter() {
            grouped.entry(day).or_default().push(id);
        }
        grouped
    }
}
