//! Item toggle controls.
//!
//! Controls are clickable buttons, each governing one furniture item. Clicks
//! arrive from the bevy UI panel on native builds or from DOM listeners on
//! wasm builds. Both funnel into `ControlClicked` events applied in order by
//! a single system.

/// Click application against the item registry.
pub mod click_handler;

/// DOM button binding for browser builds.
#[cfg(target_arch = "wasm32")]
pub mod dom;

/// Control and event types.
pub mod state;

/// Pure toggle planning: visibility, drop-in and sound cue per click.
pub mod toggle;

/// Native bevy UI control panel.
pub mod ui;

use crate::engine::animation::drop_in::animate_drop_ins;
use crate::engine::assets::sound_bank::SoundRng;
use crate::engine::scene::item_registry::ItemRegistry;
use bevy::prelude::*;
use click_handler::handle_control_clicks;
use state::ControlClicked;
use ui::{emit_button_clicks, reflect_control_state};

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ItemRegistry>()
            .init_resource::<SoundRng>()
            .add_event::<ControlClicked>();

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(Startup, ui::spawn_control_panel);

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, dom::bind_dom_controls).add_systems(
            Update,
            (
                dom::drain_dom_clicks.before(handle_control_clicks),
                dom::sync_dom_active_class.after(handle_control_clicks),
            ),
        );

        app.add_systems(
            Update,
            (
                emit_button_clicks.before(handle_control_clicks),
                reflect_control_state.after(handle_control_clicks),
            ),
        );

        app.add_systems(
            Update,
            (handle_control_clicks, animate_drop_ins).chain(),
        );
    }
}
