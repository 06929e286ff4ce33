//! Adapter implementations for to-do ports.

pub mod memory;
pub mod postgres;
