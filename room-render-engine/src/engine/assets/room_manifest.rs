use crate::engine::animation::drop_in::DropInProfile;
use crate::error::RoomError;
use bevy::prelude::*;
use constants::animation::{WALLPAPER_SECOND_DELAY, WALLPAPER_SECOND_OFFSET};
use constants::item::{ItemKind, LEGACY_CHILD_INDICES};
use constants::paths::{
    ACTIVATE_SOUND_PATHS, DEACTIVATE_SOUND_PATH, ENVIRONMENT_DIFFUSE_PATH,
    ENVIRONMENT_SPECULAR_PATH, ROOM_MODEL_PATH,
};
use constants::render_settings::{
    ENVIRONMENT_INTENSITY, ROOM_SCALE, ROOM_TRANSLATION, ROOM_YAW,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Room model file and the transform applied to its scene root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub path: String,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default = "default_translation")]
    pub translation: [f32; 3],
    #[serde(default = "default_yaw")]
    pub yaw: f32,
}

fn default_scale() -> f32 {
    ROOM_SCALE
}

fn default_translation() -> [f32; 3] {
    ROOM_TRANSLATION.to_array()
}

fn default_yaw() -> f32 {
    ROOM_YAW
}

/// Prefiltered cubemap pair used as image based lighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub diffuse: String,
    pub specular: String,
    #[serde(default = "default_environment_intensity")]
    pub intensity: f32,
}

fn default_environment_intensity() -> f32 {
    ENVIRONMENT_INTENSITY
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundConfig {
    pub activate: Vec<String>,
    pub deactivate: String,
}

/// How a scene node is located inside the loaded room model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeSelector {
    /// Authoring-time node name, searched among all descendants of the scene root.
    Name(String),
    /// Position among the direct children of the scene root.
    ChildIndex(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeBinding {
    pub node: NodeSelector,
    #[serde(default)]
    pub drop_in: DropInProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemBinding {
    pub item: ItemKind,
    pub nodes: Vec<NodeBinding>,
}

/// Room description as a Bevy asset. Mirrors the JSON structure exactly.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct RoomManifest {
    pub model: ModelConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentConfig>,
    pub sounds: SoundConfig,
    pub items: Vec<ItemBinding>,
}

impl RoomManifest {
    /// Reject bindings the item registry cannot represent.
    pub fn validate(&self) -> Result<(), RoomError> {
        let mut seen = HashSet::new();
        for binding in &self.items {
            if binding.nodes.is_empty() {
                return Err(RoomError::EmptyBinding(binding.item));
            }
            if !seen.insert(binding.item) {
                return Err(RoomError::DuplicateItem(binding.item));
            }
        }
        if self.sounds.activate.is_empty() {
            return Err(RoomError::NoActivationSounds);
        }
        Ok(())
    }

    pub fn binding(&self, item: ItemKind) -> Option<&ItemBinding> {
        self.items.iter().find(|binding| binding.item == item)
    }

    /// Transform of the spawned room scene root.
    pub fn room_transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.model.translation))
            .with_rotation(Quat::from_rotation_y(self.model.yaw))
            .with_scale(Vec3::splat(self.model.scale))
    }
}

impl Default for RoomManifest {
    /// Built-in manifest for the shipped `room.glb`, which binds items by position.
    fn default() -> Self {
        let items = LEGACY_CHILD_INDICES
            .iter()
            .map(|legacy| ItemBinding {
                item: legacy.item,
                nodes: legacy
                    .child_indices
                    .iter()
                    .enumerate()
                    .map(|(i, &index)| NodeBinding {
                        node: NodeSelector::ChildIndex(index),
                        drop_in: if legacy.item == ItemKind::Wallpaper && i == 1 {
                            DropInProfile {
                                offset: WALLPAPER_SECOND_OFFSET,
                                delay: WALLPAPER_SECOND_DELAY,
                                ..default()
                            }
                        } else {
                            DropInProfile::default()
                        },
                    })
                    .collect(),
            })
            .collect();

        Self {
            model: ModelConfig {
                path: ROOM_MODEL_PATH.to_string(),
                scale: ROOM_SCALE,
                translation: ROOM_TRANSLATION.to_array(),
                yaw: ROOM_YAW,
            },
            environment: Some(EnvironmentConfig {
                diffuse: ENVIRONMENT_DIFFUSE_PATH.to_string(),
                specular: ENVIRONMENT_SPECULAR_PATH.to_string(),
                intensity: ENVIRONMENT_INTENSITY,
            }),
            sounds: SoundConfig {
                activate: ACTIVATE_SOUND_PATHS.iter().map(|p| p.to_string()).collect(),
                deactivate: DEACTIVATE_SOUND_PATH.to_string(),
            },
            items,
        }
    }
}
