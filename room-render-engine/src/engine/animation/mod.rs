//! Short eased transforms played on scene nodes.

/// Bounce-out drop from above a node's resting position.
pub mod drop_in;
