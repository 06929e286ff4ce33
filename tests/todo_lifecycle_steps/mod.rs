//! Step definitions for to-do lifecycle scenarios.

mod then;
mod when;
pub mod world;
