//! Native event adapters.

pub mod winit;
