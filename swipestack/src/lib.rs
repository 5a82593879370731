//! A headless swipe navigation engine for card stacks, decks and carousels.
//!
//! For adapter-level utilities (observers, trigger channel), see the `swipestack-adapter` crate.
//!
//! This crate focuses on the navigation core shared by every stack variant: drag offset
//! tracking, bounded/looping index arithmetic, the commit/cancel decision, and the animated
//! transition state machine that reindexes mid-flight so circular motion looks continuous.
//!
//! It is UI-agnostic. A rendering layer is expected to provide:
//! - the measured container width
//! - raw horizontal drag deltas and drag end events
//! - a clock (`now_ms`) and regular `tick` calls while a transition runs
//!
//! and to read back the current index, offset, direction and busy flag every frame.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

pub mod commit;
pub mod cursor;
mod drag;
mod navigator;
mod options;
mod sequencer;
mod state;
mod tween;
mod types;


pub use drag::{DragSample, DragTracker};
pub use navigator::Navigator;
pub use options::{DragOptions, NavigatorOptions, Timing};
pub use sequencer::{CancelReason, Phase, Signal};
pub use state::{NavigationState, Snapshot};
pub use tween::{Easing, Tween};
pub use types::{Decision, Direction, IndexingMode, NavigationEvent};
