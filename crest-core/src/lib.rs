//! Core traits for the Crest gradient-ascent solvers.
//!
//! This crate defines the shared abstractions that solvers build on:
//!
//! - [`Objective`] — a black-box scalar function of a real vector
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions

mod objective;
mod observer;

pub use objective::Objective;
pub use observer::Observer;
