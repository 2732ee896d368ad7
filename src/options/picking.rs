use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
/// Click resolution parameters.
pub struct PickingOptions {
    /// How many nodes (the hit node included) are inspected when walking up
    /// the ownership chain for an interactable ancestor.
    #[schemars(title = "Ancestor Depth", range(min = 1, max = 64))]
    pub max_ancestor_depth: usize,
}

impl Default for PickingOptions {
    fn default() -> Self {
        Self {
            max_ancestor_depth: 5,
        }
    }
}
