use crate::{Easing, IndexingMode};

/// Durations of the animated phases, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timing {
    /// Spreading: moving the offset out to the spread distance (`d1`).
    pub spread_ms: u64,
    /// Settling: moving the negated offset back to rest after a reindex (`d2`).
    pub settle_ms: u64,
    /// Snapping back to rest on cancel, or when a commit hits an edge (`d3`).
    pub restore_ms: u64,
    /// How long the reindexed state is held before settling starts. `0` settles immediately.
    pub hold_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            spread_ms: 150,
            settle_ms: 200,
            restore_ms: 150,
            hold_ms: 50,
        }
    }
}

/// How raw pointer deltas become an offset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragOptions {
    /// Raw deltas are divided by this before anything else.
    pub divisor: f32,
    /// Multiplier applied in `Bounded` mode when there is no neighbor in the drag direction.
    pub edge_resistance: f32,
    /// The offset is clamped to `±container_width * max_fraction`.
    pub max_fraction: f32,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            divisor: 2.3,
            edge_resistance: 0.25,
            max_fraction: 1.0,
        }
    }
}

impl DragOptions {
    /// Returns a copy with `edge_resistance` in `[0, 1]`, `max_fraction` in `[0, 2]` and a
    /// positive, finite divisor (`1.0` otherwise).
    pub fn sanitized(mut self) -> Self {
        self.edge_resistance = sanitize_fraction(self.edge_resistance, 1.0);
        self.max_fraction = sanitize_fraction(self.max_fraction, 2.0);
        if !(self.divisor.is_finite() && self.divisor > 0.0) {
            nwarn!(divisor = self.divisor, "invalid drag divisor, using 1.0");
            self.divisor = 1.0;
        }
        self
    }
}

/// Configuration for [`crate::Navigator`].
///
/// Options are fixed once a navigator is built. The presets (`stack`, `deck`, `carousel`)
/// carry the tuning of the three stack variants; `new` is the same as `stack`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigatorOptions {
    /// Number of items in the caller-owned sequence.
    pub count: usize,
    pub mode: IndexingMode,
    /// Requested initial index; resolved with [`IndexingMode::resolve_initial`].
    pub initial_index: usize,
    /// Fraction of the container width a drag must travel to commit.
    pub threshold_fraction: f32,
    /// Fraction of the container width the offset spreads to before the reindex.
    pub spread_fraction: f32,
    pub timing: Timing,
    pub easing: Easing,
    pub drag: DragOptions,
    /// Ignores drag input entirely. Programmatic triggers still work.
    pub swipe_disabled: bool,
}

impl NavigatorOptions {
    /// Creates options for a linear stack of `count` items.
    pub fn new(count: usize) -> Self {
        Self::stack(count)
    }

    /// Linear stack: heavily damped drags, short spread to the half-width midpoint.
    pub fn stack(count: usize) -> Self {
        Self {
            count,
            mode: IndexingMode::Looping,
            initial_index: 0,
            threshold_fraction: 0.25,
            spread_fraction: 0.5,
            timing: Timing::default(),
            easing: Easing::Linear,
            drag: DragOptions::default(),
            swipe_disabled: false,
        }
    }

    /// Card deck: drags clamp at half width and the spread overshoots the midpoint.
    pub fn deck(count: usize) -> Self {
        Self {
            count,
            mode: IndexingMode::Looping,
            initial_index: 0,
            threshold_fraction: 0.25,
            spread_fraction: 0.6,
            timing: Timing {
                spread_ms: 80,
                settle_ms: 100,
                restore_ms: 100,
                hold_ms: 100,
            },
            easing: Easing::Linear,
            drag: DragOptions {
                divisor: 1.2,
                edge_resistance: 1.0 / 15.0,
                max_fraction: 0.5,
            },
            swipe_disabled: false,
        }
    }

    /// Carousel: drags follow the pointer 1:1 and commit at half width.
    pub fn carousel(count: usize) -> Self {
        Self {
            count,
            mode: IndexingMode::Looping,
            initial_index: 0,
            threshold_fraction: 0.5,
            spread_fraction: 0.6,
            timing: Timing {
                spread_ms: 150,
                settle_ms: 120,
                restore_ms: 150,
                hold_ms: 10,
            },
            easing: Easing::Linear,
            drag: DragOptions {
                divisor: 1.0,
                edge_resistance: 0.3,
                max_fraction: 1.0,
            },
            swipe_disabled: false,
        }
    }

    pub fn with_mode(mut self, mode: IndexingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_threshold_fraction(mut self, threshold_fraction: f32) -> Self {
        self.threshold_fraction = threshold_fraction;
        self
    }

    pub fn with_spread_fraction(mut self, spread_fraction: f32) -> Self {
        self.spread_fraction = spread_fraction;
        self
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_drag(mut self, drag: DragOptions) -> Self {
        self.drag = drag;
        self
    }

    /// Sets the raw delta divisor. `1.0` makes the offset follow the pointer exactly.
    pub fn with_drag_divisor(mut self, divisor: f32) -> Self {
        self.drag.divisor = divisor;
        self
    }

    pub fn with_swipe_disabled(mut self, swipe_disabled: bool) -> Self {
        self.swipe_disabled = swipe_disabled;
        self
    }

    /// Returns a copy with every tunable forced into a usable range.
    ///
    /// Fractions clamp into `[0, 1]` (`max_fraction` into `[0, 2]`), and a non-positive or
    /// non-finite divisor falls back to `1.0`.
    pub(crate) fn sanitized(mut self) -> Self {
        self.threshold_fraction = sanitize_fraction(self.threshold_fraction, 1.0);
        self.spread_fraction = sanitize_fraction(self.spread_fraction, 1.0);
        self.drag = self.drag.sanitized();
        self
    }
}

fn sanitize_fraction(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        nwarn!("NaN fraction in options, using 0");
        return 0.0;
    }
    value.clamp(0.0, max)
}
