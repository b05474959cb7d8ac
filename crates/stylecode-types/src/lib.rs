//! Foundation types for stylecode.
//!
//! This crate contains the types shared by every stylecode crate: the error
//! taxonomy, fixed-point numbers, unit tags, cascade origins and the engine
//! configuration.

pub mod config;
pub mod error;
pub mod fixed;
pub mod origin;
pub mod unit;

pub use error::{CssError, StyleError};
pub use fixed::Fixed;
pub use origin::Origin;
pub use unit::{Unit, UnitClass};
