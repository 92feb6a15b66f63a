use bevy::prelude::*;
use constants::item::ItemKind;

/// Clickable button bound to one item.
///
/// `item` is `None` when the button carries no recognisable item marker;
/// such buttons ignore clicks.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub item: Option<ItemKind>,
    pub active: bool,
}

impl Control {
    pub fn new(item: Option<ItemKind>) -> Self {
        Self {
            item,
            active: false,
        }
    }

    /// Build a control from the class list of its button. Exactly one item
    /// marker must be present.
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut kinds = classes.into_iter().filter_map(ItemKind::from_marker);
        let item = match (kinds.next(), kinds.next()) {
            (Some(kind), None) => Some(kind),
            _ => None,
        };
        Self::new(item)
    }
}

/// A control was clicked, from any source.
#[derive(Event, Debug, Clone, Copy)]
pub struct ControlClicked {
    pub control: Entity,
}

// Native control panel
#[derive(Component)]
pub struct ControlPanelRoot;
#[derive(Component)]
pub struct ControlLabel;
