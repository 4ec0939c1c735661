//! # voxkit
//!
//! Typed multi-dimensional image states for structural biology, with a closed
//! set of `(value type, domain)` variants, single-match algorithm dispatch and
//! a geometric primitive kernel.
//!
//! ## Architecture
//!
//! The library is layered so that each layer only depends on the ones below it.
//!
//! - **[`core`]: The Foundation.** Pure value types: vectors, matrices and
//!   quaternions with checked failure modes, lines, planes and cuboids, and the
//!   integer index lattice of points, sizes and extents with its deterministic
//!   scan order and frequency-domain mirroring.
//!
//! - **[`image`]: The Data.** Dense sample buffers typed by value
//!   (`f64` or `Complex<f64>`) and domain (spatial, frequency or
//!   half-frequency), erased into the [`ImageState`] enum.
//!
//! - **[`engine`]: The Machinery.** Algorithm traits and dispatch, the shared
//!   [`ImageHandle`] owner with its observer protocol, and configuration.
//!
//! - **[`alg`]: The Catalogue.** Fill, arithmetic, randomization, thresholding,
//!   statistics, mirroring, value conversion, pasting and the discrete Fourier
//!   transform.
//!
//! ## Example
//!
//! ```
//! use voxkit::alg::{Dft, Fill};
//! use voxkit::core::lattice::{Extent, Point, Size};
//! use voxkit::{Domain, ImageHandle, ValueType};
//!
//! let extent = Extent::from_size(Point::new(-2, -1, 1), Size::new(4, 3, 2)?)?;
//! let image = ImageHandle::create(extent, ValueType::Real, Domain::Spatial)?;
//! image.apply_in_place(&mut Fill::new(1.0))?;
//!
//! let spectrum = image.apply(&mut Dft::default())?;
//! assert_eq!(spectrum.domain()?, Domain::HalfFrequency);
//! assert!((spectrum.get_complex(Point::ORIGIN)?.re - 24.0).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod alg;
pub mod core;
pub mod engine;
pub mod image;

pub use engine::{
    Algorithm, ConfigError, ConstAlgorithm, DataObserver, ImageHandle, ImageView,
    InPlaceAlgorithm, ObserverId, OutOfPlaceAlgorithm, ToolkitConfig, WeakImageHandle,
};
pub use image::{Complex, Domain, ImageError, ImageState, Value, ValueType, Variant};
