/// The horizontal direction of a swipe or a programmatic navigation request.
///
/// `Left` means the content is dragged to the right (positive offset), revealing the previous
/// item. `Right` means the content is dragged to the left (negative offset), revealing the next
/// item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The direction implied by the sign of an offset, or `None` at rest.
    pub fn from_offset(offset: f32) -> Option<Self> {
        if offset > 0.0 {
            Some(Self::Left)
        } else if offset < 0.0 {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// `+1.0` for `Left`, `-1.0` for `Right`.
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

/// How indexes behave at the ends of the sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndexingMode {
    /// Navigation stops at the first and last item.
    Bounded,
    /// Navigation wraps past either end to the opposite end.
    #[default]
    Looping,
}

impl IndexingMode {
    /// Resolves a caller-supplied initial index into a valid one.
    ///
    /// `Bounded` clamps to the last item, `Looping` wraps modulo `count`. An empty sequence
    /// always resolves to `0`.
    pub fn resolve_initial(self, count: usize, index: usize) -> usize {
        if count == 0 {
            return 0;
        }
        match self {
            Self::Bounded => index.min(count - 1),
            Self::Looping => index % count,
        }
    }
}

/// The outcome of a released drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    Commit,
    Cancel,
}

/// Emitted exactly once per completed (non-cancelled) navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationEvent {
    /// The index that is current after the navigation.
    pub index: usize,
    /// The index that was current before the navigation.
    pub previous_index: usize,
    /// The direction the content was swiped (or triggered) towards.
    pub direction: Direction,
}
