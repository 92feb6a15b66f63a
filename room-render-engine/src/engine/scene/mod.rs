//! Room scene contents.
//!
//! Provides the lighting rig and the registry binding furniture items to
//! nodes of the loaded room model.

/// Item registry and node resolution against the spawned room model.
pub mod item_registry;

/// Background, ambient and sun light.
pub mod lighting;
