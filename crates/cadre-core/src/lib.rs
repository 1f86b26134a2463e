#![forbid(unsafe_code)]

//! Core value types for the cadre terminal layout toolkit.
//!
//! This crate holds the leaf types every other cadre crate builds on:
//!
//! - [`geometry`] - [`Rect`](geometry::Rect), [`Size`](geometry::Size), and
//!   [`Sides`](geometry::Sides) in terminal cell coordinates
//! - [`logging`] - feature-gated re-exports of `tracing` macros

pub mod geometry;
pub mod logging;

pub use geometry::{Rect, Sides, Size};
