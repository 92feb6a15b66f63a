use crate::engine::assets::room_manifest::EnvironmentConfig;
use crate::engine::loading::progress::{AssetStatus, LoadingProgress};
use bevy::asset::LoadState;
use bevy::prelude::*;

/// Diffuse and specular cubemaps for image based lighting.
#[derive(Resource, Default)]
pub struct EnvironmentLoader {
    diffuse: Option<Handle<Image>>,
    specular: Option<Handle<Image>>,
    intensity: f32,
}

impl EnvironmentLoader {
    pub fn load(asset_server: &AssetServer, config: &EnvironmentConfig) -> Self {
        info!(
            "Loading environment map: {} / {}",
            config.diffuse, config.specular
        );
        Self {
            diffuse: Some(asset_server.load(&config.diffuse)),
            specular: Some(asset_server.load(&config.specular)),
            intensity: config.intensity,
        }
    }
}

/// Light the room with the environment map once both cubemaps are in.
pub fn attach_environment_map(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    environment_loader: Res<EnvironmentLoader>,
    asset_server: Res<AssetServer>,
    cameras: Query<Entity, With<Camera3d>>,
) {
    if loading_progress.environment.is_settled() {
        return;
    }
    let (Some(diffuse), Some(specular)) = (
        environment_loader.diffuse.as_ref(),
        environment_loader.specular.as_ref(),
    ) else {
        return;
    };

    for handle in [diffuse, specular] {
        if let LoadState::Failed(e) = asset_server.load_state(handle.id()) {
            error!("Environment map failed to load: {}", e);
            loading_progress.environment = AssetStatus::Failed;
            return;
        }
    }

    if !asset_server.is_loaded_with_dependencies(diffuse.id())
        || !asset_server.is_loaded_with_dependencies(specular.id())
    {
        return;
    }

    for camera in &cameras {
        commands.entity(camera).insert(EnvironmentMapLight {
            diffuse_map: diffuse.clone(),
            specular_map: specular.clone(),
            intensity: environment_loader.intensity,
            ..default()
        });
    }
    info!("✓ Environment map applied");
    loading_progress.environment = AssetStatus::Loaded;
}
