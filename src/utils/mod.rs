//! Utility modules.
//!
//! This module contains small helpers shared by the rendering code.

pub mod text;
