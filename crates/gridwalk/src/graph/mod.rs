//! Graph representations implementing [`Graph`](crate::Graph).
//!
//! - [`grid::Grid`]: the infinite procedural grid, storing only overrides;
//! - [`mapped::Mapped`]: a finite adjacency list keyed by any hashable type;
//! - [`indexed::Indexed`]: a finite adjacency list over dense unsigned indices.

pub mod grid;
pub mod indexed;
pub mod mapped;
