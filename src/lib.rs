//! Stable-fluids style solver for density and velocity on a fixed `N×N` grid.
//!
//! The building blocks (Diffuse, Project, Advect) live in [`d2`] as free
//! functions over `ndarray` fields; [`d2::Fluid`] owns the six buffers and
//! sequences them once per tick.

pub mod d2;
mod error;

pub use error::FluidError;
