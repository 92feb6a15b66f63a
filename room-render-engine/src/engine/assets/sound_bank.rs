use crate::engine::assets::room_manifest::SoundConfig;
use crate::error::RoomError;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Interchangeable activation clips plus the single deactivation clip.
#[derive(Resource, Clone)]
pub struct SoundBank {
    activate: Vec<Handle<AudioSource>>,
    deactivate: Handle<AudioSource>,
}

impl SoundBank {
    pub fn new(
        activate: Vec<Handle<AudioSource>>,
        deactivate: Handle<AudioSource>,
    ) -> Result<Self, RoomError> {
        if activate.is_empty() {
            return Err(RoomError::NoActivationSounds);
        }
        Ok(Self {
            activate,
            deactivate,
        })
    }

    /// Start loading every clip named in the manifest.
    pub fn load(asset_server: &AssetServer, config: &SoundConfig) -> Result<Self, RoomError> {
        let activate = config
            .activate
            .iter()
            .map(|path| asset_server.load(path))
            .collect();
        Self::new(activate, asset_server.load(&config.deactivate))
    }

    pub fn activation_count(&self) -> usize {
        self.activate.len()
    }

    /// Uniformly pick an activation clip index.
    pub fn pick_activation(&self, rng: &mut impl Rng) -> usize {
        rng.random_range(0..self.activate.len())
    }

    pub fn activation(&self, index: usize) -> Option<&Handle<AudioSource>> {
        self.activate.get(index)
    }

    pub fn deactivation(&self) -> &Handle<AudioSource> {
        &self.deactivate
    }
}

/// Random source used to pick activation clips.
#[derive(Resource)]
pub struct SoundRng(pub StdRng);

impl SoundRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SoundRng {
    fn default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
            Self::seeded(seed)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self(StdRng::from_os_rng())
        }
    }
}
