#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
/// Owner of a cell's occupant. `NoSide` is the sentinel for unoccupied cells
pub enum Side {
    First,
    Second,
    NoSide,
}

impl Side {
    /// The other player, `NoSide` stays `NoSide`
    pub fn flip(&self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
            Side::NoSide => Side::NoSide,
        }
    }

    /// Direction of travel along y for this side's pawns. First moves toward increasing y,
    /// Second toward decreasing y
    pub fn forward(&self) -> Option<i32> {
        match self {
            Side::First => Some(1),
            Side::Second => Some(-1),
            Side::NoSide => None,
        }
    }

    /// Two real players facing each other
    #[inline(always)]
    pub fn is_opponent_of(&self, other: Side) -> bool {
        matches!(
            (self, other),
            (Side::First, Side::Second) | (Side::Second, Side::First)
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::First => "First",
            Side::Second => "Second",
            Side::NoSide => "Nobody",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod side_tests {
    use super::Side::*;

    #[test]
    fn flip() {
        assert_eq!(First.flip(), Second);
        assert_eq!(Second.flip(), First);
        assert_eq!(NoSide.flip(), NoSide);
    }

    #[test]
    fn pawns_walk_in_opposite_directions() {
        assert_eq!(First.forward(), Some(1));
        assert_eq!(Second.forward(), Some(-1));
        assert_eq!(NoSide.forward(), None);
    }

    #[test]
    fn opponents() {
        assert!(First.is_opponent_of(Second));
        assert!(Second.is_opponent_of(First));
        assert!(!First.is_opponent_of(First));
        assert!(!First.is_opponent_of(NoSide));
        assert!(!NoSide.is_opponent_of(NoSide));
    }
}
