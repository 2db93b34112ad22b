/// 4 cardinal steps an ant can take in one tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    East = 0,
    West = 1,
    South = 2,
    North = 3,
}

impl Direction {
    /// All possible directions, in neighbour enumeration order
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    /// Grid offset `(dx, dy)`; y grows downwards
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_unit_steps() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            assert_eq!(dx.abs() + dy.abs(), 1, "{:?} is not a unit step", dir);
        }
    }
}
