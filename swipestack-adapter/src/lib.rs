//! Adapter utilities for the `swipestack` crate.
//!
//! The `swipestack` crate is UI-agnostic and focuses on the navigation state machine. This
//! crate provides the framework-neutral pieces most adapters need on top of it:
//!
//! - A [`Controller`] that owns a navigator and fans its signals out to observers
//! - A [`TriggerChannel`] so timers or other threads can request navigation
//!
//! This crate is intentionally framework-agnostic (no egui/iced bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod observer;
mod trigger;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use observer::{EventObserver, PhaseObserver, SubscriptionId, TranslationObserver};
pub use trigger::{TriggerChannel, TriggerSender};
