//! Orbit camera for room navigation.
//!
//! Provides constrained orbit controls around the room with mouse drag
//! rotation and wheel dolly.

/// Orbit camera resource and controller system.
pub mod orbit_camera;
