//! Insertion-ordered adjacency-map graph.
//!
//! A compact reference implementation of the [`Graph`] capability for small
//! in-memory graphs. Vertices and out-neighbors enumerate in insertion
//! order, which makes ranking ties and scripted walks reproducible.
//!
//! Undirected edges are stored as two directed edges, one per direction,
//! so both endpoints report each other as out-neighbors and each direction
//! counts toward in-degree.

use crate::{Graph, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::hash::Hash;
use std::io::{BufReader, Read};
use std::path::Path;

/// Adjacency-map graph with insertion-ordered enumeration.
///
/// # Example
///
/// ```
/// use graphwalk::{AdjacencyMap, Graph};
///
/// let mut g = AdjacencyMap::new();
/// g.insert_undirected("A", "B", "road");
/// g.insert_directed("B", "C", "rail");
///
/// assert_eq!(g.vertex_count(), 3);
/// assert_eq!(g.in_degree(&"C"), 1);
/// assert!(g.has_edge(&"B", &"A"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjacencyMap<V, E>
where
    V: Clone + Eq + Hash,
{
    /// Vertices in insertion order.
    vertices: Vec<V>,
    /// Map from vertex to its slot in `vertices`.
    index: HashMap<V, usize>,
    /// Out-edges per vertex slot: (target slot, label), insertion order.
    out: Vec<Vec<(usize, E)>>,
    /// In-degree per vertex slot.
    in_degrees: Vec<usize>,
}

impl<V, E> AdjacencyMap<V, E>
where
    V: Clone + Eq + Hash,
{
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            out: Vec::new(),
            in_degrees: Vec::new(),
        }
    }

    /// Create a graph with capacity for `vertices` vertices.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            out: Vec::with_capacity(vertices),
            in_degrees: Vec::with_capacity(vertices),
        }
    }

    /// Insert a vertex. Returns `false` if it was already present.
    pub fn insert_vertex(&mut self, v: V) -> bool {
        if self.index.contains_key(&v) {
            return false;
        }
        self.index.insert(v.clone(), self.vertices.len());
        self.vertices.push(v);
        self.out.push(Vec::new());
        self.in_degrees.push(0);
        true
    }

    fn slot_or_insert(&mut self, v: &V) -> usize {
        if let Some(&i) = self.index.get(v) {
            i
        } else {
            self.insert_vertex(v.clone());
            self.vertices.len() - 1
        }
    }

    /// Insert a directed edge `from -> to`, adding missing endpoints.
    ///
    /// Re-inserting an existing edge replaces its label without changing
    /// the target's in-degree.
    pub fn insert_directed(&mut self, from: V, to: V, label: E) {
        let u = self.slot_or_insert(&from);
        let w = self.slot_or_insert(&to);
        if let Some(slot) = self.out[u].iter_mut().find(|(t, _)| *t == w) {
            slot.1 = label;
        } else {
            self.out[u].push((w, label));
            self.in_degrees[w] += 1;
        }
    }

    /// Insert an undirected edge as a symmetric pair of directed edges.
    pub fn insert_undirected(&mut self, a: V, b: V, label: E)
    where
        E: Clone,
    {
        self.insert_directed(a.clone(), b.clone(), label.clone());
        self.insert_directed(b, a, label);
    }

    /// Whether `v` is in the graph.
    #[must_use]
    pub fn has_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Whether a directed edge `from -> to` exists.
    #[must_use]
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge_label(from, to).is_some()
    }

    /// Label of the directed edge `from -> to`, if present.
    #[must_use]
    pub fn edge_label(&self, from: &V, to: &V) -> Option<&E> {
        let &u = self.index.get(from)?;
        let &w = self.index.get(to)?;
        self.out[u].iter().find(|(t, _)| *t == w).map(|(_, e)| e)
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges (an undirected edge counts twice).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.out.iter().map(Vec::len).sum()
    }

    /// Out-degree of `v`, or `None` when `v` is not in the graph.
    #[must_use]
    pub fn out_degree(&self, v: &V) -> Option<usize> {
        self.index.get(v).map(|&i| self.out[i].len())
    }
}

impl<V, E> Default for AdjacencyMap<V, E>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Default> AdjacencyMap<String, E> {
    /// Load from a JSON adjacency-list file: `{"A": ["B", "C"], ...}`.
    ///
    /// Keys are inserted in sorted order, so enumeration is deterministic
    /// regardless of the file's key order. Edge labels are `E::default()`.
    pub fn from_json_adjacency_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_adjacency_reader(BufReader::new(file))
    }

    /// Load from a JSON adjacency-list reader. See [`Self::from_json_adjacency_file`].
    pub fn from_json_adjacency_reader(reader: impl Read) -> Result<Self> {
        let adj: BTreeMap<String, Vec<String>> = serde_json::from_reader(reader)?;

        let mut g = Self::with_capacity(adj.len());
        for (head, neighbors) in adj {
            g.insert_vertex(head.clone());
            for tail in neighbors {
                g.insert_directed(head.clone(), tail, E::default());
            }
        }
        Ok(g)
    }
}

impl<V, E> Graph for AdjacencyMap<V, E>
where
    V: Clone + Eq + Hash,
{
    type Vertex = V;
    type Edge = E;

    fn vertices(&self) -> Box<dyn Iterator<Item = V> + '_> {
        Box::new(self.vertices.iter().cloned())
    }

    fn out_neighbors(&self, v: &V) -> Option<Box<dyn Iterator<Item = V> + '_>> {
        let &i = self.index.get(v)?;
        Some(Box::new(
            self.out[i].iter().map(move |&(t, _)| self.vertices[t].clone()),
        ))
    }

    fn in_degree(&self, v: &V) -> usize {
        self.index.get(v).map_or(0, |&i| self.in_degrees[i])
    }
}
