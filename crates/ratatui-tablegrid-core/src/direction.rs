use crate::cell::Axis;

/// A cardinal movement direction produced by arrow-key style input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The axis this direction moves along: rows for Up/Down, columns for
    /// Left/Right.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Row,
            Direction::Left | Direction::Right => Axis::Col,
        }
    }

    /// Index delta for one step: `-1` for Up/Left, `+1` for Down/Right.
    pub fn step(self) -> i64 {
        if self.is_forward() { 1 } else { -1 }
    }

    /// `true` for Down/Right (increasing indices).
    pub fn is_forward(self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}
