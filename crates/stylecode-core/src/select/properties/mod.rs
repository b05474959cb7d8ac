//! Per-property cascade handlers, grouped like the parsers.

pub(crate) mod alignment;
pub(crate) mod background;
pub(crate) mod gap;
pub(crate) mod grid;
pub(crate) mod grid_template;
pub(crate) mod object;
pub(crate) mod transform;
