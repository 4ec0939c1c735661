//! # Engine Module
//!
//! Algorithm dispatch over image states and the ownership model around them.
//!
//! ## Overview
//!
//! An algorithm is written once, generically over the sample type and domain of
//! a [`TypedState`](crate::image::TypedState). The engine resolves the runtime
//! variant of an [`ImageState`](crate::image::ImageState) with a single match,
//! checks that the algorithm supports it, and runs the algorithm's own loop on
//! the concrete buffer.
//!
//! ## Architecture
//!
//! - **Algorithm Traits** ([`algorithm`]) - in-place, read-only and out-of-place
//!   capability contracts.
//! - **Dispatch** ([`dispatch`]) - variant resolution and support checks.
//! - **Handles** ([`handle`]) - [`ImageHandle`], the shared owner of a state,
//!   and its non-owning [`WeakImageHandle`].
//! - **Observers** ([`observer`]) - weak listeners notified on update and
//!   destruction, in registration order, reading the image through a
//!   read-only [`ImageView`].
//! - **Configuration** ([`config`]) - numeric tolerances and transform
//!   normalization loaded from TOML.

pub mod algorithm;
pub mod config;
pub mod dispatch;
pub mod handle;
pub mod observer;
pub mod view;

pub use algorithm::{Algorithm, ConstAlgorithm, Identity, InPlaceAlgorithm, OutOfPlaceAlgorithm};
pub use config::{
    ConfigError, GeometryConfig, Normalization, ToolkitConfig, ToolkitConfigBuilder,
    TransformConfig,
};
pub use handle::{ImageHandle, WeakImageHandle};
pub use observer::{DataObserver, ObserverId};
pub use view::ImageView;
