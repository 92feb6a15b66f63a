//! Asynchronous loading of the room's assets.
//!
//! The manifest is read first; it names the model, environment map and sound
//! clips, which then load side by side. Each result joins app state only on
//! success, and failures are logged without stopping the app.

/// Image based lighting from a prefiltered cubemap pair.
pub mod environment_loader;

/// Room manifest loading with fallback to the built-in manifest.
///
/// Starts the model, environment and sound loads once the manifest resolves.
pub mod manifest_loader;

/// Room model spawning and item registration when the scene is ready.
pub mod model_loader;

/// Per-asset loading status used for the `Running` transition.
pub mod progress;

#[cfg(test)]
mod tests {
    use crate::engine::assets::room_manifest::RoomManifest;
    use crate::engine::core::app_state::{AppState, transition_to_running};
    use crate::engine::loading::environment_loader::{EnvironmentLoader, attach_environment_map};
    use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system};
    use crate::engine::loading::model_loader::{ModelLoader, RoomScene, spawn_room_when_ready};
    use crate::engine::loading::progress::{AssetStatus, LoadingProgress};
    use crate::engine::scene::item_registry::ItemRegistry;
    use bevy::asset::AssetMetaCheck;
    use bevy::gltf::Gltf;
    use bevy::prelude::*;
    use bevy::state::app::StatesPlugin;
    use bevy_common_assets::json::JsonAssetPlugin;
    use constants::item::ItemKind;
    use constants::paths::ROOM_MODEL_PATH;
    use std::time::Duration;

    fn loading_app() -> App {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            StatesPlugin,
            AssetPlugin {
                meta_check: AssetMetaCheck::Never,
                ..default()
            },
            JsonAssetPlugin::<RoomManifest>::new(&["json"]),
        ))
        .init_asset::<Gltf>()
        .init_asset::<Image>()
        .init_asset::<AudioSource>()
        .init_state::<AppState>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<ModelLoader>()
        .init_resource::<EnvironmentLoader>()
        .init_resource::<ItemRegistry>()
        .add_systems(
            Update,
            (
                load_manifest_system,
                spawn_room_when_ready,
                attach_environment_map,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        );
        app
    }

    /// A manifest whose every asset path points nowhere.
    fn unreachable_manifest() -> RoomManifest {
        let mut manifest = RoomManifest::default();
        manifest.model.path = "missing/room.glb".to_string();
        manifest.environment = None;
        manifest.sounds.activate = vec!["missing/sound1.wav".to_string()];
        manifest.sounds.deactivate = "missing/soundOff.wav".to_string();
        manifest
    }

    fn use_manifest(app: &mut App, manifest: RoomManifest) {
        let handle = app
            .world_mut()
            .resource_mut::<Assets<RoomManifest>>()
            .add(manifest);
        app.world_mut().resource_mut::<ManifestLoader>().handle = Some(handle);
    }

    fn update_until(app: &mut App, done: impl Fn(&LoadingProgress) -> bool) {
        for _ in 0..2000 {
            app.update();
            if done(app.world().resource::<LoadingProgress>()) {
                return;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        panic!(
            "loading did not settle: {:?}",
            app.world().resource::<LoadingProgress>()
        );
    }

    fn state(app: &App) -> AppState {
        *app.world().resource::<State<AppState>>().get()
    }

    #[test]
    fn missing_manifest_falls_back_to_built_in() {
        let mut app = loading_app();
        let handle = app
            .world()
            .resource::<AssetServer>()
            .load::<RoomManifest>("missing/room_manifest.json");
        app.world_mut().resource_mut::<ManifestLoader>().handle = Some(handle);

        update_until(&mut app, |progress| progress.manifest.is_settled());

        assert_eq!(
            app.world().resource::<LoadingProgress>().manifest,
            AssetStatus::Failed
        );
        let manifest = app.world().resource::<RoomManifest>();
        assert_eq!(manifest.model.path, ROOM_MODEL_PATH);
        assert_eq!(manifest.items.len(), ItemKind::ALL.len());
        assert!(app.world().resource::<ModelLoader>().handle.is_some());
    }

    #[test]
    fn invalid_manifest_falls_back_to_built_in() {
        let mut app = loading_app();
        let mut manifest = unreachable_manifest();
        manifest.items[0].nodes.clear();
        use_manifest(&mut app, manifest);

        app.update();

        assert_eq!(
            app.world().resource::<LoadingProgress>().manifest,
            AssetStatus::Failed
        );
        let manifest = app.world().resource::<RoomManifest>();
        assert_eq!(manifest.model.path, ROOM_MODEL_PATH);
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn missing_model_leaves_items_unavailable() {
        let mut app = loading_app();
        use_manifest(&mut app, unreachable_manifest());

        update_until(&mut app, LoadingProgress::is_settled);
        app.update();
        app.update();

        let progress = app.world().resource::<LoadingProgress>();
        assert_eq!(progress.manifest, AssetStatus::Loaded);
        assert_eq!(progress.model, AssetStatus::Failed);
        assert_eq!(progress.environment, AssetStatus::Skipped);
        assert!(app.world().resource::<ItemRegistry>().is_empty());

        let world = app.world_mut();
        assert_eq!(world.query::<&RoomScene>().iter(world).count(), 0);
        assert_eq!(state(&app), AppState::Running);
    }

    #[test]
    fn missing_environment_map_does_not_block_running() {
        let mut app = loading_app();
        let mut manifest = unreachable_manifest();
        manifest.environment = RoomManifest::default().environment.map(|mut environment| {
            environment.diffuse = "missing/diffuse.ktx2".to_string();
            environment.specular = "missing/specular.ktx2".to_string();
            environment
        });
        use_manifest(&mut app, manifest);

        update_until(&mut app, LoadingProgress::is_settled);
        app.update();
        app.update();

        let progress = app.world().resource::<LoadingProgress>();
        assert_eq!(progress.environment, AssetStatus::Failed);
        assert_eq!(progress.model, AssetStatus::Failed);
        assert_eq!(state(&app), AppState::Running);
    }

    #[test]
    fn model_without_scenes_is_reported() {
        let mut app = loading_app();
        let gltf = Gltf {
            scenes: Vec::new(),
            named_scenes: default(),
            meshes: Vec::new(),
            named_meshes: default(),
            materials: Vec::new(),
            named_materials: default(),
            nodes: Vec::new(),
            named_nodes: default(),
            skins: Vec::new(),
            named_skins: default(),
            default_scene: None,
            animations: Vec::new(),
            named_animations: default(),
            source: None,
        };
        let handle = app.world_mut().resource_mut::<Assets<Gltf>>().add(gltf);
        app.world_mut().resource_mut::<ModelLoader>().handle = Some(handle);
        app.insert_resource(RoomManifest::default());

        app.update();

        assert_eq!(
            app.world().resource::<LoadingProgress>().model,
            AssetStatus::Failed
        );
        assert!(app.world().resource::<ItemRegistry>().is_empty());
        let world = app.world_mut();
        assert_eq!(world.query::<&RoomScene>().iter(world).count(), 0);
    }
}
