use std::{collections::VecDeque, hash::Hash};

use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::{Graph, GraphError};

/// Depth-first search starting at `entry`.
///
/// `visit` is called once for every reached vertex. Returning `false` stops
/// the search without an error. Neighbours are explored in adjacency order.
///
/// Fails with [`GraphError::VertexAbsent`] as soon as a vertex without
/// adjacency is reached, including `entry` itself.
pub fn dfs<G, F>(graph: &G, entry: G::Key, mut visit: F) -> Result<(), GraphError>
where
    G: Graph + ?Sized,
    G::Key: Eq + Hash + Clone,
    F: FnMut(&G::Key) -> bool,
{
    let mut stack = vec![entry];
    let mut visited = FxHashSet::default();

    while let Some(top) = stack.pop() {
        if visited.contains(&top) {
            continue;
        }

        if !visit(&top) {
            debug!("dfs halted by visitor after {} vertices", visited.len());
            return Ok(());
        }

        let Some(neighbors) = graph.adjacency(&top) else {
            debug!("dfs reached an absent vertex after {} vertices", visited.len());
            return Err(GraphError::VertexAbsent);
        };

        trace!("dfs pushing {} neighbours", neighbors.len());
        stack.extend(neighbors.iter().rev().cloned());
        visited.insert(top);
    }

    Ok(())
}

/// Breadth-first search starting at `entry`.
///
/// `visit` receives every reached vertex together with its depth, `entry`
/// having depth 0. Returning `false` stops the search without an error.
///
/// Depth is derived from the queue alone: once all vertices queued for the
/// current level have been dequeued, including those skipped as already
/// visited, everything left in the queue belongs to the next level.
pub fn bfs<G, F>(graph: &G, entry: G::Key, mut visit: F) -> Result<(), GraphError>
where
    G: Graph + ?Sized,
    G::Key: Eq + Hash + Clone,
    F: FnMut(&G::Key, usize) -> bool,
{
    let mut queue = VecDeque::from([entry]);
    let mut visited = FxHashSet::default();
    let mut depth = 0;
    let mut remaining = 1;

    while let Some(bottom) = queue.pop_front() {
        if !visited.contains(&bottom) {
            if !visit(&bottom, depth) {
                debug!("bfs halted by visitor at depth {}", depth);
                return Ok(());
            }

            let Some(neighbors) = graph.adjacency(&bottom) else {
                debug!("bfs reached an absent vertex at depth {}", depth);
                return Err(GraphError::VertexAbsent);
            };

            queue.extend(neighbors.iter().cloned());
            visited.insert(bottom);
        }

        remaining -= 1;
        if remaining == 0 {
            depth += 1;
            remaining = queue.len();
            trace!("bfs entering depth {} with {} queued", depth, remaining);
        }
    }

    Ok(())
}

pub trait Search: Graph {
    fn dfs<F>(&self, entry: Self::Key, visit: F) -> Result<(), GraphError>
    where
        F: FnMut(&Self::Key) -> bool;

    fn bfs<F>(&self, entry: Self::Key, visit: F) -> Result<(), GraphError>
    where
        F: FnMut(&Self::Key, usize) -> bool;

    /// Collects all vertices reachable from `entry` in depth-first order.
    ///
    /// Never returns on an infinite graph such as [`Grid`](crate::Grid).
    fn dfs_order(&self, entry: Self::Key) -> Result<Vec<Self::Key>, GraphError>;

    /// Collects all vertices up to `max_depth` with their depth, in
    /// breadth-first order.
    fn bfs_levels(
        &self,
        entry: Self::Key,
        max_depth: usize,
    ) -> Result<Vec<(Self::Key, usize)>, GraphError>;
}

impl<G> Search for G
where
    G: Graph + ?Sized,
    G::Key: Eq + Hash + Clone,
{
    fn dfs<F>(&self, entry: Self::Key, visit: F) -> Result<(), GraphError>
    where
        F: FnMut(&Self::Key) -> bool,
    {
        dfs(self, entry, visit)
    }

    fn bfs<F>(&self, entry: Self::Key, visit: F) -> Result<(), GraphError>
    where
        F: FnMut(&Self::Key, usize) -> bool,
    {
        bfs(self, entry, visit)
    }

    fn dfs_order(&self, entry: Self::Key) -> Result<Vec<Self::Key>, GraphError> {
        let mut order = Vec::new();
        dfs(self, entry, |vertex| {
            order.push(vertex.clone());
            true
        })?;

        Ok(order)
    }

    fn bfs_levels(
        &self,
        entry: Self::Key,
        max_depth: usize,
    ) -> Result<Vec<(Self::Key, usize)>, GraphError> {
        let mut levels = Vec::new();
        bfs(self, entry, |vertex, depth| {
            if depth > max_depth {
                return false;
            }
            levels.push((vertex.clone(), depth));
            true
        })?;

        Ok(levels)
    }
}
