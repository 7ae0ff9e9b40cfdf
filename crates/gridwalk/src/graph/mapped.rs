use std::{borrow::Cow, hash::Hash};

use log::debug;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::{Graph, GraphError, GraphReader, GraphWriter};

/// Directed adjacency-list graph keyed by an arbitrary hashable type.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapped<K>
where
    K: Eq + Hash,
{
    vertices: FxHashMap<K, Vec<K>>,
}

impl<K: Eq + Hash> Mapped<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    pub fn contains_vertex(&self, vertex: &K) -> bool {
        self.vertices.contains_key(vertex)
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vec::len).sum()
    }
}

impl<K: Eq + Hash> Default for Mapped<K> {
    fn default() -> Self {
        Self {
            vertices: FxHashMap::default(),
        }
    }
}

impl<K> Graph for Mapped<K>
where
    K: Eq + Hash + Clone,
{
    type Key = K;

    fn adjacency(&self, vertex: &K) -> Option<Cow<'_, [K]>> {
        self.vertices
            .get(vertex)
            .map(|neighbors| Cow::Borrowed(neighbors.as_slice()))
    }
}

impl<K> GraphReader for Mapped<K>
where
    K: Eq + Hash + Clone,
{
    /// Returns all vertices in no particular order.
    fn vertices(&self) -> Vec<K> {
        self.vertices.keys().cloned().collect()
    }

    fn order(&self) -> Option<usize> {
        Some(self.vertices.len())
    }
}

impl<K> GraphWriter for Mapped<K>
where
    K: Eq + Hash + Clone,
{
    fn add_vertex(&mut self, vertex: K) -> Result<(), GraphError> {
        if self.vertices.contains_key(&vertex) {
            return Err(GraphError::VertexExists);
        }

        self.vertices.insert(vertex, Vec::new());

        Ok(())
    }

    fn delete_vertex(&mut self, vertex: &K) {
        if self.vertices.remove(vertex).is_none() {
            return;
        }

        self.vertices
            .values_mut()
            .for_each(|neighbors| neighbors.retain(|n| n != vertex));

        debug!("deleted vertex, {} vertices left", self.vertices.len());
    }

    fn add_edge(&mut self, from: K, to: K) -> Result<(), GraphError> {
        if from == to {
            return Err(GraphError::LoopNotAllowed);
        }

        if !self.vertices.contains_key(&to) {
            return Err(GraphError::VertexAbsent);
        }

        let neighbors = self
            .vertices
            .get_mut(&from)
            .ok_or(GraphError::VertexAbsent)?;

        if !neighbors.contains(&to) {
            neighbors.push(to);
        }

        Ok(())
    }

    fn delete_edge(&mut self, from: &K, to: &K) {
        if from == to || !self.vertices.contains_key(to) {
            return;
        }

        if let Some(neighbors) = self.vertices.get_mut(from) {
            neighbors.retain(|n| n != to);
        }
    }

    fn reserve(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Mapped<u32> {
        let mut graph = Mapped::new();
        graph.add_vertices([0, 1]).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph
    }

    #[test]
    fn adjacency_three_way() {
        let graph = setup();

        assert_eq!(graph.adjacency(&0).as_deref(), Some(&[1][..]), "one neighbor");
        assert_eq!(graph.adjacency(&1).as_deref(), Some(&[][..]), "zero neighbors");
        assert_eq!(graph.adjacency(&2), None, "absent vertex");
    }

    #[test]
    fn add_vertex_twice() {
        let mut graph = setup();

        assert_eq!(graph.add_vertex(1), Err(GraphError::VertexExists));
        assert_eq!(graph.order(), Some(2));
    }

    #[test]
    fn add_edge_errors() {
        let mut graph = setup();

        assert_eq!(graph.add_edge(0, 0), Err(GraphError::LoopNotAllowed));
        assert_eq!(graph.add_edge(0, 7), Err(GraphError::VertexAbsent));
        assert_eq!(graph.add_edge(7, 0), Err(GraphError::VertexAbsent));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn add_edge_twice_keeps_one() {
        let mut graph = setup();
        graph.add_edge(0, 1).unwrap();

        assert_eq!(graph.adjacency(&0).as_deref(), Some(&[1][..]));
    }

    #[test]
    fn delete_vertex_removes_incoming_edges() {
        let mut graph = setup();
        graph.add_vertex(2).unwrap();
        graph.add_edges([(2, 1), (2, 0), (1, 2)]).unwrap();

        graph.delete_vertex(&1);

        assert_eq!(graph.adjacency(&1), None);
        assert_eq!(graph.adjacency(&0).as_deref(), Some(&[][..]));
        assert_eq!(graph.adjacency(&2).as_deref(), Some(&[0][..]));

        let mut vertices = graph.vertices();
        vertices.sort();
        assert_eq!(vertices, vec![0, 2]);
    }

    #[test]
    fn delete_edge() {
        let mut graph = setup();
        graph.delete_edge(&0, &1);
        graph.delete_edge(&5, &1);

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.adjacency(&0).as_deref(), Some(&[][..]));
    }

    #[test]
    fn batch_partial_apply() {
        let mut graph: Mapped<u32> = Mapped::new();

        let result = graph.add_vertices([3, 4, 3, 5]);

        assert_eq!(result, Err(GraphError::VertexExists));
        assert!(graph.contains_vertex(&3));
        assert!(graph.contains_vertex(&4));
        assert!(!graph.contains_vertex(&5));
    }

    #[test]
    fn string_keys() {
        let mut graph = Mapped::with_capacity(2);
        graph
            .add_vertices(["a".to_string(), "b".to_string()])
            .unwrap();
        graph.add_edge("a".to_string(), "b".to_string()).unwrap();

        assert_eq!(
            graph.adjacency(&"a".to_string()).as_deref(),
            Some(&["b".to_string()][..])
        );
    }
}
