use crate::engine::assets::room_manifest::RoomManifest;
use crate::engine::assets::sound_bank::SoundBank;
use crate::engine::loading::environment_loader::EnvironmentLoader;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::{AssetStatus, LoadingProgress};
use bevy::asset::{AssetLoadFailedEvent, LoadState};
use bevy::prelude::*;
use constants::paths::ROOM_MANIFEST_PATH;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    pub handle: Option<Handle<RoomManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading room manifest from: {}", ROOM_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(ROOM_MANIFEST_PATH));
}

/// Once the manifest resolves, fall back to the built-in one on failure and
/// kick off the model, environment and sound loads it names.
pub fn load_manifest_system(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    mut manifest_loader: ResMut<ManifestLoader>,
    mut model_loader: ResMut<ModelLoader>,
    mut environment_loader: ResMut<EnvironmentLoader>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<RoomManifest>>,
) {
    if loading_progress.manifest.is_settled() {
        return;
    }
    let Some(handle) = manifest_loader.handle.as_ref() else {
        return;
    };

    let manifest = if let Some(manifest) = manifests.get(handle) {
        match manifest.validate() {
            Ok(()) => {
                info!("✓ Room manifest loaded");
                loading_progress.manifest = AssetStatus::Loaded;
                manifest.clone()
            }
            Err(e) => {
                error!("Room manifest rejected: {}. Using built-in manifest", e);
                loading_progress.manifest = AssetStatus::Failed;
                RoomManifest::default()
            }
        }
    } else if let LoadState::Failed(e) = asset_server.load_state(handle.id()) {
        warn!("Room manifest failed to load: {}. Using built-in manifest", e);
        loading_progress.manifest = AssetStatus::Failed;
        RoomManifest::default()
    } else {
        return;
    };
    manifest_loader.handle = None;

    match SoundBank::load(&asset_server, &manifest.sounds) {
        Ok(bank) => {
            info!("Loading {} activation sounds", bank.activation_count());
            commands.insert_resource(bank);
        }
        Err(e) => error!("Sounds disabled: {}", e),
    }

    info!("Loading room model from: {}", manifest.model.path);
    model_loader.handle = Some(asset_server.load(&manifest.model.path));

    match &manifest.environment {
        Some(environment) => *environment_loader = EnvironmentLoader::load(&asset_server, environment),
        None => {
            info!("No environment map configured");
            loading_progress.environment = AssetStatus::Skipped;
        }
    }

    commands.insert_resource(manifest);
}

/// Missing clips only silence their own cue.
pub fn report_failed_sounds(mut failures: EventReader<AssetLoadFailedEvent<AudioSource>>) {
    for failure in failures.read() {
        warn!("Sound '{}' failed to load: {}", failure.path, failure.error);
    }
}
