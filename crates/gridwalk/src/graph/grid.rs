use std::{borrow::Cow, cmp::Reverse};

use log::{debug, trace};
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::{
    Graph, GraphError, GraphReader, GraphWriter,
    types::{Direction, GridCoord},
};

/// Stored deviation of a single vertex from the grid rule.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Override {
    Custom(Vec<GridCoord>),
    Deleted,
}

/// An infinite 4-connected grid over the integer plane.
///
/// Every coordinate is a vertex adjacent to its four orthogonal neighbours
/// unless an override says otherwise. Only vertices that deviate from that
/// rule are stored, so memory grows with the number of irregular vertices and
/// not with the number of vertices ever touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    overrides: FxHashMap<GridCoord, Override>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            overrides: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    pub fn is_deleted(&self, vertex: &GridCoord) -> bool {
        matches!(self.overrides.get(vertex), Some(Override::Deleted))
    }

    pub fn contains_vertex(&self, vertex: &GridCoord) -> bool {
        !self.is_deleted(vertex)
    }

    /// Number of stored overrides, tombstones included.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Drops the custom entry of `vertex` if it lists exactly the implicit
    /// neighbours again.
    fn try_make_predictable(&mut self, vertex: GridCoord) {
        let Some(Override::Custom(neighbors)) = self.overrides.get(&vertex) else {
            return;
        };

        let implicit = vertex.implicit_neighbors();
        if neighbors.len() == implicit.len() && implicit.iter().all(|n| neighbors.contains(n)) {
            trace!("vertex {} matches the grid rule again", vertex);
            self.overrides.remove(&vertex);
        }
    }
}

impl Graph for Grid {
    type Key = GridCoord;

    fn adjacency(&self, vertex: &GridCoord) -> Option<Cow<'_, [GridCoord]>> {
        match self.overrides.get(vertex) {
            Some(Override::Deleted) => None,
            Some(Override::Custom(neighbors)) => Some(Cow::Borrowed(neighbors)),
            None => Some(Cow::Owned(vertex.implicit_neighbors().to_vec())),
        }
    }
}

impl GraphReader for Grid {
    /// Returns every vertex with a custom adjacency, row by row from the top
    /// and left to right within a row.
    fn vertices(&self) -> Vec<GridCoord> {
        let mut vertices: Vec<GridCoord> = self
            .overrides
            .iter()
            .filter(|(_, entry)| matches!(entry, Override::Custom(_)))
            .map(|(vertex, _)| *vertex)
            .collect();

        vertices.sort_unstable_by_key(|v| (Reverse(v.y), v.x));

        vertices
    }

    fn order(&self) -> Option<usize> {
        None
    }
}

impl GraphWriter for Grid {
    /// Restores a deleted vertex.
    ///
    /// Vertices that were never deleted already exist under the grid rule.
    /// Neighbours degraded by the deletion keep their custom adjacency.
    fn add_vertex(&mut self, vertex: GridCoord) -> Result<(), GraphError> {
        if !self.is_deleted(&vertex) {
            return Err(GraphError::VertexExists);
        }

        self.overrides.remove(&vertex);

        Ok(())
    }

    fn delete_vertex(&mut self, vertex: &GridCoord) {
        if self.is_deleted(vertex) {
            return;
        }
        let vertex = *vertex;

        let mut touched = Vec::new();
        for (key, entry) in self.overrides.iter_mut() {
            if let Override::Custom(neighbors) = entry {
                let len = neighbors.len();
                neighbors.retain(|n| *n != vertex);
                if neighbors.len() != len {
                    touched.push(*key);
                }
            }
        }
        for key in touched {
            self.try_make_predictable(key);
        }

        let mut materialized = 0;
        for direction in Direction::ALL {
            let neighbor = vertex.step(direction);
            if self.overrides.contains_key(&neighbor) {
                continue;
            }

            let back = direction.opposite();
            let remaining = Direction::ALL
                .into_iter()
                .filter(|d| *d != back)
                .map(|d| neighbor.step(d))
                .collect();
            self.overrides.insert(neighbor, Override::Custom(remaining));
            materialized += 1;
        }

        self.overrides.insert(vertex, Override::Deleted);

        debug!(
            "deleted vertex {} ({} neighbours materialized, {} overrides stored)",
            vertex,
            materialized,
            self.overrides.len()
        );
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// Adding an edge that already exists changes nothing.
    fn add_edge(&mut self, from: GridCoord, to: GridCoord) -> Result<(), GraphError> {
        if from == to {
            return Err(GraphError::LoopNotAllowed);
        }

        if self.is_deleted(&from) || self.is_deleted(&to) {
            return Err(GraphError::VertexAbsent);
        }

        let entry = self
            .overrides
            .entry(from)
            .or_insert_with(|| Override::Custom(from.implicit_neighbors().to_vec()));

        if let Override::Custom(neighbors) = entry {
            if !neighbors.contains(&to) {
                neighbors.push(to);
            }
        }

        self.try_make_predictable(from);

        Ok(())
    }

    fn delete_edge(&mut self, from: &GridCoord, to: &GridCoord) {
        if from == to || self.is_deleted(from) || self.is_deleted(to) {
            return;
        }

        match self.overrides.get_mut(from) {
            Some(Override::Custom(neighbors)) => {
                neighbors.retain(|n| n != to);
            }
            Some(Override::Deleted) => return,
            None => {
                let implicit = from.implicit_neighbors();
                if !implicit.contains(to) {
                    return;
                }
                let remaining = implicit.into_iter().filter(|n| n != to).collect();
                self.overrides.insert(*from, Override::Custom(remaining));
            }
        }

        self.try_make_predictable(*from);
    }

    fn reserve(&mut self, additional: usize) {
        self.overrides.reserve(additional);
    }
}
