use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::render::camera::PerspectiveProjection;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::camera::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};
// Crate modules
use crate::controls::ControlsPlugin;
use crate::engine::assets::room_manifest::RoomManifest;
use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller};
use crate::engine::core::app_state::{
    AppState, FpsText, transition_to_running, update_loading_frontend,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::environment_loader::{EnvironmentLoader, attach_environment_map};
use crate::engine::loading::manifest_loader::{
    ManifestLoader, load_manifest_system, report_failed_sounds, start_loading,
};
use crate::engine::loading::model_loader::{ModelLoader, spawn_room_when_ready};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::lighting::{ambient_light, background_colour, spawn_lighting};
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers RoomManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<RoomManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(ControlsPlugin)
        .insert_resource(background_colour())
        .insert_resource(ambient_light());

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<ModelLoader>()
        .init_resource::<EnvironmentLoader>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_manifest_system,
                spawn_room_when_ready,
                attach_environment_map,
                update_loading_frontend,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Rendering and input never wait for assets.
    app.add_systems(
        Update,
        (camera_controller, fps_notification_system, report_failed_sounds),
    );

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

fn spawn_camera(commands: &mut Commands) {
    let orbit = OrbitCamera::default();
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        orbit.transform(),
        Name::new("RoomCamera"),
    ));
    commands.insert_resource(orbit);
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    info!("=== ROOM SCENE ===");
    spawn_lighting(&mut commands);
    spawn_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1., 1., 1.)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
