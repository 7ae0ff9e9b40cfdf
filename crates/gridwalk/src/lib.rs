use std::{borrow::Cow, error::Error, fmt::Display};

use ::geo_types::{Coord, CoordNum};
use num_traits::Num;

pub mod algorithms;
pub mod geo_types;
pub mod graph;
pub mod types;

pub use algorithms::search::{Search, bfs, dfs};
pub use graph::{grid::Grid, indexed::Indexed, mapped::Mapped};
pub use types::{Direction, GridCoord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    VertexAbsent,
    VertexExists,
    LoopNotAllowed,
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VertexAbsent => write!(f, "vertex is absent from the graph"),
            Self::VertexExists => write!(f, "vertex already exists"),
            Self::LoopNotAllowed => write!(f, "graph can't contain loops"),
        }
    }
}

pub trait Coordinate<T: CoordNum + Num = i64> {
    fn x_y(&self) -> (T, T);

    fn zero() -> Self;

    fn as_coord(&self) -> Coord<T>;
}

/// Read access to the neighbours of a single vertex.
///
/// `adjacency` has three distinct outcomes:
/// - `None`: there is no such vertex in the graph;
/// - an empty slice: the vertex exists but has no neighbours;
/// - a non-empty slice: all neighbours of the vertex, in a fixed order.
pub trait Graph {
    type Key: Clone;

    fn adjacency(&self, vertex: &Self::Key) -> Option<Cow<'_, [Self::Key]>>;
}

pub trait GraphReader: Graph {
    /// Returns every enumerable vertex of the graph.
    fn vertices(&self) -> Vec<Self::Key>;

    /// Number of vertices, or `None` if the graph is unbounded.
    fn order(&self) -> Option<usize>;
}

/// Mutation of a graph.
///
/// The batched methods apply their elements one after another and return the
/// first error. Elements applied before the failing one are not rolled back.
pub trait GraphWriter: Graph {
    fn add_vertex(&mut self, vertex: Self::Key) -> Result<(), GraphError>;

    fn delete_vertex(&mut self, vertex: &Self::Key);

    fn add_edge(&mut self, from: Self::Key, to: Self::Key) -> Result<(), GraphError>;

    fn delete_edge(&mut self, from: &Self::Key, to: &Self::Key);

    /// Reserves capacity for at least `additional` more vertices.
    fn reserve(&mut self, additional: usize);

    fn add_vertices<I>(&mut self, vertices: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = Self::Key>,
    {
        vertices
            .into_iter()
            .try_for_each(|vertex| self.add_vertex(vertex))
    }

    fn delete_vertices<'a, I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = &'a Self::Key>,
        Self::Key: 'a,
    {
        vertices
            .into_iter()
            .for_each(|vertex| self.delete_vertex(vertex));
    }

    fn add_edges<I>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = (Self::Key, Self::Key)>,
    {
        edges
            .into_iter()
            .try_for_each(|(from, to)| self.add_edge(from, to))
    }

    fn delete_edges<'a, I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = &'a (Self::Key, Self::Key)>,
        Self::Key: 'a,
    {
        edges
            .into_iter()
            .for_each(|(from, to)| self.delete_edge(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            GraphError::VertexAbsent.to_string(),
            "vertex is absent from the graph"
        );
        assert_eq!(GraphError::VertexExists.to_string(), "vertex already exists");
        assert_eq!(
            GraphError::LoopNotAllowed.to_string(),
            "graph can't contain loops"
        );
    }
}
