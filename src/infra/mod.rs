//! Infrastructure layer
//!
//! Filesystem walking and external process execution. This module is
//! where build commands actually run.

pub mod discovery;
pub mod process;
