use constants::item::ItemKind;
use thiserror::Error;

/// Configuration problems detected while wiring the room scene together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("item '{item}' is bound to node '{name}', which the room model does not contain")]
    MissingNamedNode { item: ItemKind, name: String },

    #[error("item '{item}' is bound to child {index}, but the room model only has {available} top-level nodes")]
    ChildIndexOutOfRange {
        item: ItemKind,
        index: usize,
        available: usize,
    },

    #[error("item '{0}' has no node bindings")]
    EmptyBinding(ItemKind),

    #[error("item '{0}' is bound more than once")]
    DuplicateItem(ItemKind),

    #[error("at least one activation sound is required")]
    NoActivationSounds,
}
