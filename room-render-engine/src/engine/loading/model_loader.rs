use crate::engine::assets::room_manifest::RoomManifest;
use crate::engine::loading::progress::{AssetStatus, LoadingProgress};
use crate::engine::scene::item_registry::{ItemRegistry, SceneNodes, resolve_items};
use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;
use constants::item::ItemKind;

#[derive(Resource, Default)]
pub struct ModelLoader {
    pub handle: Option<Handle<Gltf>>,
    spawned: bool,
}

/// Marks the spawned room scene root.
#[derive(Component)]
pub struct RoomScene;

/// Spawn the room scene once its glTF has loaded. Items are registered when
/// the scene instance is ready.
pub fn spawn_room_when_ready(
    mut commands: Commands,
    mut model_loader: ResMut<ModelLoader>,
    mut loading_progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    manifest: Option<Res<RoomManifest>>,
) {
    if model_loader.spawned || loading_progress.model.is_settled() {
        return;
    }
    let (Some(handle), Some(manifest)) = (model_loader.handle.clone(), manifest) else {
        return;
    };

    if let Some(gltf) = gltfs.get(&handle) {
        let Some(scene) = gltf
            .default_scene
            .clone()
            .or_else(|| gltf.scenes.first().cloned())
        else {
            error!("Room model '{}' contains no scenes", manifest.model.path);
            loading_progress.model = AssetStatus::Failed;
            return;
        };

        commands
            .spawn((
                SceneRoot(scene),
                manifest.room_transform(),
                RoomScene,
                Name::new("Room"),
            ))
            .observe(register_room_items);
        model_loader.spawned = true;
        info!("→ Room model loaded, spawning scene");
    } else if let LoadState::Failed(e) = asset_server.load_state(handle.id()) {
        error!("Room model failed to load: {}. Items stay unavailable", e);
        loading_progress.model = AssetStatus::Failed;
    }
}

fn register_room_items(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    children: Query<&Children>,
    names: Query<&Name>,
    transforms: Query<&Transform>,
    manifest: Option<Res<RoomManifest>>,
    mut registry: ResMut<ItemRegistry>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    let fallback;
    let manifest = match &manifest {
        Some(manifest) => manifest.as_ref(),
        None => {
            fallback = RoomManifest::default();
            &fallback
        }
    };

    *registry = register_items_under(
        trigger.target(),
        manifest,
        &mut commands,
        &children,
        &names,
        &transforms,
    );
    loading_progress.model = AssetStatus::Loaded;
}

/// Bind manifest items to the nodes spawned below `root` and hide them.
fn register_items_under(
    root: Entity,
    manifest: &RoomManifest,
    commands: &mut Commands,
    children: &Query<&Children>,
    names: &Query<&Name>,
    transforms: &Query<&Transform>,
) -> ItemRegistry {
    let nodes = SceneNodes::collect(root, children, names);
    let (resolved, errors) = resolve_items(manifest, &nodes, |entity| {
        transforms
            .get(entity)
            .map(|transform| transform.translation)
            .unwrap_or_default()
    });

    for e in &errors {
        error!("{}", e);
    }

    for item in resolved.iter() {
        for node in &item.nodes {
            commands.entity(node.entity).insert(Visibility::Hidden);
        }
    }

    info!(
        "✓ Registered {} of {} items",
        resolved.len(),
        ItemKind::ALL.len()
    );
    resolved
}
