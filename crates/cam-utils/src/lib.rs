//! Utility functions and helpers for Camisola

pub mod mime;
pub mod paths;
