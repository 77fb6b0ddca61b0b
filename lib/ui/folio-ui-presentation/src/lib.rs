//! Presentation helpers shared by the UI layers.

pub mod formatting;
