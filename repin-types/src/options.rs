use serde::{Deserialize, Serialize};

/// Run options shared by every transform that plugs into the runner contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformerOptions {
    /// Accepted for interface uniformity across transforms; the pin
    /// transform does not consult it.
    pub force: bool,

    /// Compute and report the change without persisting it.
    pub dry: bool,

    /// Render a unified diff of the change to the operator.
    pub print: bool,
}
