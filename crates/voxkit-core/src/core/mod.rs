//! # Core Module
//!
//! Pure value types shared by every other layer.
//!
//! - **Geometry Kernel** ([`geom`]) - vectors, matrices, quaternions, lines, planes,
//!   cuboids and their intersections, with checked numeric failure modes.
//! - **Index Lattice** ([`lattice`]) - integer points, sizes and extents, the
//!   row-major extent iterator and frequency-domain mirroring.
//!
//! Nothing in this module allocates image buffers or holds shared state.

pub mod geom;
pub mod lattice;
