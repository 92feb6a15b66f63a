use serde::{Deserialize, Serialize};
use std::fmt;

/// Furniture pieces a control button can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Bed,
    Desk,
    Chair,
    Carpet,
    Wallpaper,
    Bin,
    Desktop,
}

impl ItemKind {
    /// Every item kind in control panel order.
    pub const ALL: [ItemKind; 7] = [
        ItemKind::Bed,
        ItemKind::Desk,
        ItemKind::Chair,
        ItemKind::Carpet,
        ItemKind::Wallpaper,
        ItemKind::Bin,
        ItemKind::Desktop,
    ];

    /// Marker class carried by the DOM button controlling this item.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Bed => "bed",
            Self::Desk => "desk",
            Self::Chair => "chair",
            Self::Carpet => "carpet",
            Self::Wallpaper => "wallpaper",
            Self::Bin => "bin",
            Self::Desktop => "desktop",
        }
    }

    /// Label shown on native control buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bed => "Bed",
            Self::Desk => "Desk",
            Self::Chair => "Chair",
            Self::Carpet => "Carpet",
            Self::Wallpaper => "Wallpaper",
            Self::Bin => "Bin",
            Self::Desktop => "Desktop",
        }
    }

    /// Convert a marker class to an item kind. Class names are case-sensitive.
    pub fn from_marker(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.marker() == s)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Class shared by every control button in the page.
pub const CONTROL_MARKER_CLASS: &str = "button";

/// Class toggled on a control button while its item is shown.
pub const ACTIVE_CLASS: &str = "active";

pub struct LegacyBinding {
    pub item: ItemKind,
    pub child_indices: &'static [usize],
}

/// Position of each item's nodes among the direct children of the room model's
/// scene root. Only valid for the shipped `room.glb`.
pub const LEGACY_CHILD_INDICES: &[LegacyBinding] = &[
    LegacyBinding {
        item: ItemKind::Bed,
        child_indices: &[15],
    },
    LegacyBinding {
        item: ItemKind::Desk,
        child_indices: &[14],
    },
    LegacyBinding {
        item: ItemKind::Chair,
        child_indices: &[0],
    },
    LegacyBinding {
        item: ItemKind::Carpet,
        child_indices: &[1],
    },
    LegacyBinding {
        item: ItemKind::Wallpaper,
        child_indices: &[6, 7],
    },
    LegacyBinding {
        item: ItemKind::Bin,
        child_indices: &[4],
    },
    LegacyBinding {
        item: ItemKind::Desktop,
        child_indices: &[3],
    },
];
