use crate::engine::animation::drop_in::DropIn;
use crate::engine::assets::sound_bank::SoundBank;
use crate::engine::scene::item_registry::Item;
use bevy::prelude::*;
use rand::Rng;

/// Clip chosen for a transition. Attached to the spawned audio player.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Index into the activation clips.
    Activate(usize),
    Deactivate,
}

#[derive(Debug, Clone)]
pub struct NodeChange {
    pub entity: Entity,
    pub visibility: Visibility,
    pub drop_in: Option<DropIn>,
}

/// Everything one click does to an item, computed before any of it is applied.
#[derive(Debug, Clone)]
pub struct TogglePlan {
    pub active: bool,
    pub nodes: Vec<NodeChange>,
    pub sound: Option<SoundCue>,
}

/// Hidden items are shown with a drop-in and a random activation clip;
/// visible ones are hidden at once with the deactivation clip.
pub fn plan_toggle(
    currently_visible: bool,
    item: &Item,
    sounds: Option<&SoundBank>,
    rng: &mut impl Rng,
) -> TogglePlan {
    if currently_visible {
        TogglePlan {
            active: false,
            nodes: item
                .nodes
                .iter()
                .map(|node| NodeChange {
                    entity: node.entity,
                    visibility: Visibility::Hidden,
                    drop_in: None,
                })
                .collect(),
            sound: sounds.map(|_| SoundCue::Deactivate),
        }
    } else {
        TogglePlan {
            active: true,
            nodes: item
                .nodes
                .iter()
                .map(|node| NodeChange {
                    entity: node.entity,
                    visibility: Visibility::Visible,
                    drop_in: Some(DropIn::new(node.drop_in, node.rest)),
                })
                .collect(),
            sound: sounds.map(|bank| SoundCue::Activate(bank.pick_activation(rng))),
        }
    }
}

impl SoundCue {
    pub fn clip<'a>(&self, bank: &'a SoundBank) -> Option<&'a Handle<AudioSource>> {
        match self {
            Self::Activate(index) => bank.activation(*index),
            Self::Deactivate => Some(bank.deactivation()),
        }
    }
}
