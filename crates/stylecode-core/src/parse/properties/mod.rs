//! One parser per property or shorthand, grouped by area.

pub mod alignment;
pub mod background;
pub mod gap;
pub mod grid;
pub mod grid_template;
pub mod object;
pub mod transform;

#[cfg(test)]
mod rewind;
