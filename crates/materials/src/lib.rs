//! Livery material pipeline
//!
//! Reworks the artist-authored materials of a loaded car model into
//! physically-based materials with role-specific optics:
//! - [`role`] - Name-based classification into [`MaterialRole`]s
//! - [`recipe`] - One synthesis recipe per role
//! - [`pipeline`] - Classification plus synthesis, and the [`Paint`] modes
//! - [`model`] - Traversal that installs pipeline output per material
//! - [`color`] - RGB paint colors and their string forms
//! - [`maps`] - Shared texture map slots
//!
//! Nothing here depends on a renderer. With the `bevy` feature, materials
//! convert to and from `StandardMaterial`.

pub mod color;
pub mod constants;
pub mod maps;
pub mod model;
pub mod pipeline;
pub mod recipe;
pub mod role;
pub mod source;

#[cfg(feature = "bevy")]
pub mod standard;

pub use color::*;
pub use maps::*;
pub use model::*;
pub use pipeline::*;
pub use recipe::*;
pub use role::*;
pub use source::*;
#[cfg(feature = "bevy")]
pub use standard::AuthoredMaterial;
