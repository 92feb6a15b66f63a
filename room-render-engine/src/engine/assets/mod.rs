//! Asset descriptions for the room scene.
//!
//! Handles the room manifest and the audio clips played by the controls.

/// Room manifest describing the model, environment map, sounds and item bindings.
pub mod room_manifest;

/// Activation and deactivation clips with the random picker.
pub mod sound_bank;
