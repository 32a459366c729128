//! Models Module
//!
//! Discovers robot-description model files under the public directory and
//! serves a JSON index over them for the browser viewer. The models
//! directory (and its `meshes/` subdirectory) is created on first use, and
//! every index request re-scans the disk so dropped-in files show up without
//! a restart.

mod handler;
mod lib;
mod routes;

pub use lib::*;
pub use routes::routes;
