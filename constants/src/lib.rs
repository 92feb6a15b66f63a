//! Shared constants for the room scene.

/// Drop-in animation timings.
pub mod animation;

/// Orbit camera placement and limits.
pub mod camera;

/// Item kinds, their marker classes and the legacy node positions.
pub mod item;

/// Default asset locations relative to the asset root.
pub mod paths;

/// Lighting, background and model placement.
pub mod render_settings;

#[cfg(test)]
mod tests {
    use super::item::*;

    #[test]
    fn markers_round_trip_for_every_item() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::from_marker(kind.marker()), Some(kind));
        }
        assert_eq!(ItemKind::from_marker("lamp"), None);
        assert_eq!(ItemKind::from_marker(CONTROL_MARKER_CLASS), None);
    }

    #[test]
    fn markers_match_class_names_exactly() {
        assert_eq!(ItemKind::from_marker("Desk"), None);
        assert_eq!(ItemKind::from_marker("DESKTOP"), None);
        assert_eq!(ItemKind::from_marker(" desk"), None);
        assert_eq!(ItemKind::from_marker("desk "), None);
        assert_eq!(ItemKind::from_marker(""), None);
    }

    #[test]
    fn legacy_table_covers_every_item_once() {
        for kind in ItemKind::ALL {
            let count = LEGACY_CHILD_INDICES.iter().filter(|b| b.item == kind).count();
            assert_eq!(count, 1, "{kind}");
        }
        let wallpaper = LEGACY_CHILD_INDICES
            .iter()
            .find(|b| b.item == ItemKind::Wallpaper)
            .map(|b| b.child_indices);
        assert_eq!(wallpaper, Some(&[6usize, 7][..]));
    }
}
