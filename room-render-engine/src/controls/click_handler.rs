use super::state::{Control, ControlClicked};
use super::toggle::plan_toggle;
use crate::engine::assets::sound_bank::{SoundBank, SoundRng};
use crate::engine::scene::item_registry::ItemRegistry;
use bevy::prelude::*;

/// Apply clicks in delivery order. Each click flips the item its control
/// governs and every control bound to that item follows it; clicks on
/// unbound or not yet loaded items are dropped without touching any control.
pub fn handle_control_clicks(
    mut commands: Commands,
    mut clicks: EventReader<ControlClicked>,
    mut controls: Query<&mut Control>,
    mut visibilities: Query<&mut Visibility>,
    mut transforms: Query<&mut Transform>,
    mut registry: ResMut<ItemRegistry>,
    sounds: Option<Res<SoundBank>>,
    mut rng: ResMut<SoundRng>,
) {
    for click in clicks.read() {
        let Ok(control) = controls.get(click.control) else {
            warn!("Click on unknown control {:?}", click.control);
            continue;
        };
        let Some(kind) = control.item else {
            warn!("Control {:?} has no item marker, ignoring click", click.control);
            continue;
        };
        let Some(item) = registry.get_mut(kind) else {
            warn!("Item '{}' is not loaded yet, ignoring click", kind);
            continue;
        };

        // The registry owns the item's state; controls only mirror it.
        let plan = plan_toggle(item.visible, item, sounds.as_deref(), &mut rng.0);

        for change in &plan.nodes {
            match visibilities.get_mut(change.entity) {
                Ok(mut visibility) => *visibility = change.visibility,
                Err(_) => warn!("Node {:?} of '{}' is gone", change.entity, kind),
            }
            if let Some(drop) = &change.drop_in {
                // Jump to the start height now so the node never flashes at rest.
                if let Ok(mut transform) = transforms.get_mut(change.entity) {
                    transform.translation = drop.translation();
                }
                commands.entity(change.entity).try_insert(drop.clone());
            }
        }

        item.visible = plan.active;
        for mut control in &mut controls {
            if control.item == Some(kind) && control.active != plan.active {
                control.active = plan.active;
            }
        }

        if let (Some(cue), Some(bank)) = (plan.sound, sounds.as_deref()) {
            if let Some(clip) = cue.clip(bank) {
                commands.spawn((AudioPlayer::new(clip.clone()), PlaybackSettings::DESPAWN, cue));
            }
        }

        info!(
            "{} {}",
            kind,
            if plan.active { "shown" } else { "hidden" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::toggle::SoundCue;
    use crate::engine::animation::drop_in::{DropIn, DropInProfile};
    use crate::engine::scene::item_registry::{Item, ItemNode};
    use constants::animation::{DROP_IN_OFFSET, WALLPAPER_SECOND_OFFSET};
    use constants::item::ItemKind;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    struct Room {
        app: App,
        controls: Vec<(ItemKind, Entity)>,
    }

    fn room_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<ControlClicked>()
            .init_resource::<ItemRegistry>()
            .insert_resource(SoundRng::seeded(3))
            .insert_resource(
                SoundBank::new(vec![Handle::default(); 3], Handle::default()).unwrap(),
            )
            .add_systems(Update, handle_control_clicks);
        app
    }

    fn spawn_controls(app: &mut App) -> Vec<(ItemKind, Entity)> {
        ItemKind::ALL
            .iter()
            .map(|&kind| (kind, app.world_mut().spawn(Control::new(Some(kind))).id()))
            .collect()
    }

    fn load_items(app: &mut App) {
        let mut items = Vec::new();
        for kind in ItemKind::ALL {
            let count = if kind == ItemKind::Wallpaper { 2 } else { 1 };
            let nodes = (0..count)
                .map(|i| {
                    let rest = Vec3::new(i as f32, 0.0, 0.0);
                    let entity = app
                        .world_mut()
                        .spawn((Transform::from_translation(rest), Visibility::Hidden))
                        .id();
                    let drop_in = if i == 1 {
                        DropInProfile {
                            offset: WALLPAPER_SECOND_OFFSET,
                            ..default()
                        }
                    } else {
                        DropInProfile::default()
                    };
                    ItemNode {
                        entity,
                        rest,
                        drop_in,
                    }
                })
                .collect();
            items.push(Item {
                kind,
                nodes,
                visible: false,
            });
        }
        let mut registry = app.world_mut().resource_mut::<ItemRegistry>();
        for item in items {
            registry.insert(item);
        }
    }

    fn loaded_room() -> Room {
        let mut app = room_app();
        let controls = spawn_controls(&mut app);
        load_items(&mut app);
        Room { app, controls }
    }

    impl Room {
        fn control(&self, kind: ItemKind) -> Entity {
            self.controls.iter().find(|(k, _)| *k == kind).unwrap().1
        }

        fn click(&mut self, kind: ItemKind) {
            let control = self.control(kind);
            self.app.world_mut().send_event(ControlClicked { control });
        }

        fn active(&self, kind: ItemKind) -> bool {
            self.app.world().get::<Control>(self.control(kind)).unwrap().active
        }

        fn node_visibility(&self, kind: ItemKind) -> Vec<Visibility> {
            let world = self.app.world();
            world
                .resource::<ItemRegistry>()
                .get(kind)
                .unwrap()
                .nodes
                .iter()
                .map(|n| *world.get::<Visibility>(n.entity).unwrap())
                .collect()
        }

        fn cues(&mut self) -> Vec<SoundCue> {
            let world = self.app.world_mut();
            world.query::<&SoundCue>().iter(world).copied().collect()
        }

        fn assert_in_sync(&self) {
            for kind in ItemKind::ALL {
                let active = self.active(kind);
                let item_visible = self.app.world().resource::<ItemRegistry>().get(kind).unwrap().visible;
                assert_eq!(active, item_visible, "{kind}");
                let expected = if active { Visibility::Visible } else { Visibility::Hidden };
                for visibility in self.node_visibility(kind) {
                    assert_eq!(visibility, expected, "{kind}");
                }
            }
        }
    }

    #[test]
    fn clicks_before_load_change_nothing() {
        let mut app = room_app();
        let controls = spawn_controls(&mut app);
        let mut room = Room { app, controls };

        for kind in ItemKind::ALL {
            room.click(kind);
        }
        room.app.update();

        assert!(ItemKind::ALL.iter().all(|&kind| !room.active(kind)));
        assert!(room.cues().is_empty());
    }

    #[test]
    fn desk_round_trip() {
        let mut room = loaded_room();

        room.click(ItemKind::Desk);
        room.app.update();
        assert!(room.active(ItemKind::Desk));
        assert_eq!(room.node_visibility(ItemKind::Desk), vec![Visibility::Visible]);

        let desk_node = room.app.world().resource::<ItemRegistry>().get(ItemKind::Desk).unwrap().nodes[0].entity;
        let drop = room.app.world().get::<DropIn>(desk_node).unwrap();
        assert_eq!(drop.profile().offset, DROP_IN_OFFSET);
        let start = room.app.world().get::<Transform>(desk_node).unwrap().translation;
        assert!((start.y - DROP_IN_OFFSET).abs() < 1e-4);
        assert!(matches!(room.cues().as_slice(), [SoundCue::Activate(i)] if *i < 3));

        room.click(ItemKind::Desk);
        room.app.update();
        assert!(!room.active(ItemKind::Desk));
        assert_eq!(room.node_visibility(ItemKind::Desk), vec![Visibility::Hidden]);
        assert!(room.cues().contains(&SoundCue::Deactivate));

        // Only the desk moved.
        for kind in ItemKind::ALL.into_iter().filter(|&k| k != ItemKind::Desk) {
            assert!(!room.active(kind));
        }
        room.assert_in_sync();
    }

    #[test]
    fn two_clicks_restore_every_item() {
        let mut room = loaded_room();
        for kind in ItemKind::ALL {
            room.click(kind);
            room.app.update();
            assert!(room.active(kind), "{kind}");
            room.click(kind);
            room.app.update();
            assert!(!room.active(kind), "{kind}");
        }
        room.assert_in_sync();
    }

    #[test]
    fn clicks_in_one_frame_apply_in_order() {
        let mut room = loaded_room();
        room.click(ItemKind::Chair);
        room.click(ItemKind::Chair);
        room.click(ItemKind::Chair);
        room.app.update();
        assert!(room.active(ItemKind::Chair));
        room.assert_in_sync();
    }

    #[test]
    fn wallpaper_panels_share_visibility() {
        let mut room = loaded_room();
        for round in 0..5 {
            room.click(ItemKind::Wallpaper);
            room.app.update();
            let visibility = room.node_visibility(ItemKind::Wallpaper);
            assert_eq!(visibility.len(), 2);
            assert_eq!(visibility[0], visibility[1], "round {round}");
        }

        let nodes = room.app.world().resource::<ItemRegistry>().get(ItemKind::Wallpaper).unwrap().nodes.clone();
        let second = room.app.world().get::<DropIn>(nodes[1].entity).unwrap();
        assert_eq!(second.profile().offset, WALLPAPER_SECOND_OFFSET);
    }

    #[test]
    fn random_click_sequences_keep_controls_and_items_in_sync() {
        let mut room = loaded_room();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let clicks = rng.random_range(1..4);
            for _ in 0..clicks {
                let kind = ItemKind::ALL[rng.random_range(0..ItemKind::ALL.len())];
                room.click(kind);
            }
            room.app.update();
            room.assert_in_sync();
        }
    }

    #[test]
    fn unmarked_control_ignores_clicks() {
        let mut room = loaded_room();
        let stray = room.app.world_mut().spawn(Control::new(None)).id();
        room.app.world_mut().send_event(ControlClicked { control: stray });
        room.app.update();

        assert!(!room.app.world().get::<Control>(stray).unwrap().active);
        assert!(room.cues().is_empty());
        room.assert_in_sync();
    }

    #[test]
    fn controls_sharing_an_item_stay_in_step() {
        let mut room = loaded_room();
        let desk = room.control(ItemKind::Desk);
        let twin = room.app.world_mut().spawn(Control::new(Some(ItemKind::Desk))).id();

        for (round, control) in [desk, twin, desk, twin, twin].into_iter().enumerate() {
            room.app.world_mut().send_event(ControlClicked { control });
            room.app.update();

            let visible = room
                .app
                .world()
                .resource::<ItemRegistry>()
                .get(ItemKind::Desk)
                .unwrap()
                .visible;
            assert_eq!(visible, round % 2 == 0, "round {round}");
            assert_eq!(room.active(ItemKind::Desk), visible, "round {round}");
            assert_eq!(
                room.app.world().get::<Control>(twin).unwrap().active,
                visible,
                "round {round}"
            );
            room.assert_in_sync();
        }
    }

    #[test]
    fn missing_sound_bank_still_toggles() {
        let mut room = loaded_room();
        room.app.world_mut().remove_resource::<SoundBank>();
        room.click(ItemKind::Bin);
        room.app.update();
        assert!(room.active(ItemKind::Bin));
        assert!(room.cues().is_empty());
    }
}
