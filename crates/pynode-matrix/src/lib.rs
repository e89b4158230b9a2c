pub mod compat;
pub mod error;
pub mod matrix;
pub mod tags;
pub mod version;

pub use compat::{CompatibilityTable, UbuntuCompat};
pub use error::{MatrixError, MatrixResult};
pub use matrix::{generate, BuildSpec};
pub use tags::{ImageTag, TagNaming};
pub use version::{Dimension, VersionList, VersionSet};
