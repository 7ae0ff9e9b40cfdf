use std::borrow::Cow;

use log::debug;
use num_traits::{PrimInt, Unsigned, cast};

use crate::{Graph, GraphError, GraphReader, GraphWriter};

/// Directed adjacency-list graph over the dense index range `0..order`.
///
/// Deleting a vertex is unstable: the last vertex takes the index of the
/// deleted one and every edge pointing at it is renamed accordingly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexed<U> {
    vertices: Vec<Vec<U>>,
}

impl<U> Indexed<U>
where
    U: PrimInt + Unsigned,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Appends an isolated vertex and returns its index, or `None` if the
    /// index does not fit into `U`.
    pub fn push_vertex(&mut self) -> Option<U> {
        let index = cast(self.vertices.len())?;
        self.vertices.push(Vec::new());
        Some(index)
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vec::len).sum()
    }

    fn index(&self, vertex: U) -> Option<usize> {
        vertex.to_usize().filter(|i| *i < self.vertices.len())
    }
}

impl<U> Default for Indexed<U> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
}

impl<U> Graph for Indexed<U>
where
    U: PrimInt + Unsigned,
{
    type Key = U;

    fn adjacency(&self, vertex: &U) -> Option<Cow<'_, [U]>> {
        let index = self.index(*vertex)?;
        Some(Cow::Borrowed(self.vertices[index].as_slice()))
    }
}

impl<U> GraphReader for Indexed<U>
where
    U: PrimInt + Unsigned,
{
    fn vertices(&self) -> Vec<U> {
        (0..self.vertices.len()).filter_map(cast).collect()
    }

    fn order(&self) -> Option<usize> {
        Some(self.vertices.len())
    }
}

impl<U> GraphWriter for Indexed<U>
where
    U: PrimInt + Unsigned,
{
    /// Grows the graph so that `vertex` exists.
    ///
    /// Every index between the current order and `vertex` is created as an
    /// isolated vertex as well.
    fn add_vertex(&mut self, vertex: U) -> Result<(), GraphError> {
        let index = vertex.to_usize().ok_or(GraphError::VertexAbsent)?;
        if index < self.vertices.len() {
            return Err(GraphError::VertexExists);
        }

        self.vertices.resize_with(index + 1, Vec::new);

        Ok(())
    }

    fn delete_vertex(&mut self, vertex: &U) {
        let Some(index) = self.index(*vertex) else {
            return;
        };

        let last = self.vertices.len() - 1;
        self.vertices.swap_remove(index);

        let Some(last_key) = cast::<usize, U>(last) else {
            return;
        };

        for neighbors in self.vertices.iter_mut() {
            neighbors.retain(|n| n != vertex);
            if index != last {
                neighbors
                    .iter_mut()
                    .filter(|n| **n == last_key)
                    .for_each(|n| *n = *vertex);
            }
        }

        debug!(
            "deleted vertex {}, moved vertex {} into its place",
            index, last
        );
    }

    fn add_edge(&mut self, from: U, to: U) -> Result<(), GraphError> {
        let (Some(from_index), Some(_)) = (self.index(from), self.index(to)) else {
            return Err(GraphError::VertexAbsent);
        };

        if from == to {
            return Err(GraphError::LoopNotAllowed);
        }

        let neighbors = &mut self.vertices[from_index];
        if !neighbors.contains(&to) {
            neighbors.push(to);
        }

        Ok(())
    }

    fn delete_edge(&mut self, from: &U, to: &U) {
        let (Some(from_index), Some(_)) = (self.index(*from), self.index(*to)) else {
            return;
        };

        self.vertices[from_index].retain(|n| n != to);
    }

    fn reserve(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }
}
