//! Presentation helpers: MVI primitives, pagination arithmetic and text
//! rendering of view models.

pub mod mvi;
pub mod pagination;
pub mod render;
