use crate::Direction;

/// The mutable navigation state owned by a [`crate::Navigator`].
///
/// Only the transition sequencer and the drag tracker write to it; adapters read it through
/// the navigator's accessors or a [`Snapshot`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub(crate) current_index: usize,
    pub(crate) offset: f32,
    pub(crate) direction: Direction,
    pub(crate) busy: bool,
    pub(crate) container_width: f32,
}

impl NavigationState {
    pub(crate) fn new(current_index: usize) -> Self {
        Self {
            current_index,
            ..Self::default()
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_index: self.current_index,
            offset: self.offset,
            direction: self.direction,
            busy: self.busy,
        }
    }
}

/// A lightweight, serializable snapshot sampled by the rendering layer every frame.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub current_index: usize,
    pub offset: f32,
    pub direction: Direction,
    pub busy: bool,
}
