//! # Image Module
//!
//! Dense image buffers typed by sample value and domain.
//!
//! - **Values** ([`value`]) - the closed set of sample types (`f64` and
//!   `Complex<f64>`) behind the [`Sample`] trait.
//! - **Domains** ([`domain`]) - spatial, frequency and half-frequency markers and
//!   the runtime [`Variant`] tag.
//! - **Typed Buffers** ([`state`]) - [`TypedState`], one concrete buffer with
//!   bounds-checked access and conjugate mirroring for half-frequency data.
//! - **Erased Buffers** ([`variant`]) - [`ImageState`], the enum over every
//!   `(value type, domain)` pair.
//! - **Sampling** ([`sampling`]) - physical sample spacing.
//! - **Errors** ([`error`]) - [`ImageError`], shared with the engine.
//!
//! Value types never change implicitly; conversions go through the algorithms
//! in [`crate::alg`].

pub mod domain;
pub mod error;
pub mod sampling;
pub mod state;
pub mod value;
pub mod variant;

pub use domain::{Domain, DomainKind, Frequency, HalfFrequency, Spatial, Variant};
pub use error::ImageError;
pub use sampling::PixelSampling;
pub use state::TypedState;
pub use value::{Complex, Sample, Value, ValueType};
pub use variant::ImageState;
pub(crate) use variant::visit_state;
