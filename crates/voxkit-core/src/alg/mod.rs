//! Algorithms applied to images through the engine.
//!
//! | Algorithm | Kind | Supported data |
//! |---|---|---|
//! | [`Fill`], [`Scale`], [`Offset`], [`Randomize`] | in place | every variant |
//! | [`Threshold`] | in place | spatial |
//! | [`Paste`] | in place | same domain as the source, not half-frequency |
//! | [`Stat`] | read only | every variant |
//! | [`Mirror`], [`ToComplex`] | new image | every variant |
//! | [`ToReal`] | new image | every variant; only even parts of half-frequency data |
//! | [`Dft`] | new image | spatial data, complex frequency or half-frequency |

mod arithmetic;
mod convert;
mod dft;
mod fill;
mod mirror;
mod paste;
mod randomize;
mod stat;
mod threshold;

pub use arithmetic::{Offset, Scale};
pub use convert::{ComplexPart, ToComplex, ToReal};
pub use dft::Dft;
pub use fill::Fill;
pub use mirror::Mirror;
pub use paste::Paste;
pub use randomize::Randomize;
pub use stat::{Stat, Statistics};
pub use threshold::Threshold;
