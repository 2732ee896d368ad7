//! Click resolution: ray cast from the camera and a bounded walk up the
//! ownership chain to the nearest interactable node.

mod resolver;

pub use resolver::{
    find_interactable_ancestor, ClickCallback, InteractionResolver,
};
