//! Shared DTOs (schemas-as-code) for the repin workspace.
//!
//! # Design constraints
//! - These types cross the runner boundary and may be serialized for tooling.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod change;
pub mod options;

pub use change::{ChangeAction, ChangeMap, FileChange};
pub use options::TransformerOptions;
