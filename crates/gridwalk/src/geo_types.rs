use ::geo_types::{Coord, CoordNum, Point};

use crate::{Coordinate, types::GridCoord};

impl<C: CoordNum> Coordinate<C> for Point<C> {
    fn x_y(&self) -> (C, C) {
        (self.0.x, self.0.y)
    }

    fn as_coord(&self) -> Coord<C> {
        self.0
    }

    fn zero() -> Self {
        Point::new(C::zero(), C::zero())
    }
}

impl<C: CoordNum> Coordinate<C> for Coord<C> {
    fn x_y(&self) -> (C, C) {
        (self.x, self.y)
    }

    fn as_coord(&self) -> Coord<C> {
        *self
    }

    fn zero() -> Self {
        Coord {
            x: C::zero(),
            y: C::zero(),
        }
    }
}

impl Coordinate for GridCoord {
    fn x_y(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    fn as_coord(&self) -> Coord<i64> {
        Coord {
            x: self.x,
            y: self.y,
        }
    }

    fn zero() -> Self {
        GridCoord::new(0, 0)
    }
}

impl GridCoord {
    /// Grid vertex at the position of any integer coordinate.
    pub fn from_coordinate<C: Coordinate<i64>>(coordinate: &C) -> Self {
        let (x, y) = coordinate.x_y();
        GridCoord::new(x, y)
    }
}

impl From<Coord<i64>> for GridCoord {
    fn from(coord: Coord<i64>) -> Self {
        GridCoord::from_coordinate(&coord)
    }
}

impl From<Point<i64>> for GridCoord {
    fn from(point: Point<i64>) -> Self {
        GridCoord::from_coordinate(&point)
    }
}

impl From<GridCoord> for Coord<i64> {
    fn from(coord: GridCoord) -> Self {
        coord.as_coord()
    }
}
