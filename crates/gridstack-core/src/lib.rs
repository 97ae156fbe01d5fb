//! Core types for the GridStack layout engine.
//!
//! This crate provides the foundational types shared by the layout and
//! orchestration crates:
//! - Geometric primitives: [`Size`], [`Rect`]
//! - Row alignment: [`HorizontalAlignment`]

mod alignment;
mod geometry;

pub use alignment::HorizontalAlignment;
pub use geometry::{Rect, Size};
