use std::{fmt::Display, ops::Add};

/// A vertex of the infinite grid.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default)]
pub struct GridCoord {
    pub x: i64,
    pub y: i64,
}

impl GridCoord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The coordinate one step towards `direction`.
    pub fn step(self, direction: Direction) -> Self {
        self + direction.offset()
    }

    /// Neighbours implied by the grid rule, ordered up, right, down, left.
    pub fn implicit_neighbors(self) -> [GridCoord; 4] {
        Direction::ALL.map(|direction| self.step(direction))
    }
}

/// Component-wise addition, wrapping around at the `i64` bounds.
impl Add for GridCoord {
    type Output = GridCoord;

    fn add(self, rhs: Self) -> Self::Output {
        GridCoord::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl From<(i64, i64)> for GridCoord {
    fn from((x, y): (i64, i64)) -> Self {
        GridCoord::new(x, y)
    }
}

impl Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All headings in the order the grid rule lists neighbours.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn offset(self) -> GridCoord {
        match self {
            Direction::Up => GridCoord::new(0, 1),
            Direction::Right => GridCoord::new(1, 0),
            Direction::Down => GridCoord::new(0, -1),
            Direction::Left => GridCoord::new(-1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}
