//! The packageManager pin transform.
//!
//! Provides a clap-free, I/O-abstracted transform suitable for embedding in
//! a codemod runner or other host process.
//!
//! # Port traits
//!
//! The two collaborator queries and persistence are abstracted behind port
//! traits in [`ports`]:
//! - [`WorkspacePort`](ports::WorkspacePort) — which manager governs a root
//! - [`PackageManagersPort`](ports::PackageManagersPort) — which manager
//!   versions are installed
//! - [`WritePort`](ports::WritePort) — write files
//!
//! The [`adapters`] module provides default filesystem/shell-backed
//! implementations plus static fakes for embedding and tests.
//!
//! # Entry point
//!
//! [`run_pin`](pipeline::run_pin) — one plan, one apply, structured result.
//! It never returns an error: fatal failures come back on the
//! [`TransformerResult`](pipeline::TransformerResult) so a surrounding
//! runner can keep processing other transforms.

pub mod adapters;
pub mod applier;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod planner;
pub mod ports;

pub use error::TransformError;
pub use pipeline::{TransformerResult, run_pin};
pub use planner::PinPlan;

// Re-export collaborator data types so embedders don't need repin-detect
// directly.
pub use repin_detect::{AvailablePackageManagers, PackageManager, WorkspaceDetails};
