use crate::engine::animation::drop_in::DropInProfile;
use crate::engine::assets::room_manifest::{NodeSelector, RoomManifest};
use crate::error::RoomError;
use bevy::prelude::*;
use constants::item::ItemKind;
use std::collections::{BTreeMap, HashMap};

/// One scene node owned by the room model and borrowed by an item.
#[derive(Debug, Clone)]
pub struct ItemNode {
    pub entity: Entity,
    pub rest: Vec3,
    pub drop_in: DropInProfile,
}

/// Logical furniture entry spanning one or more scene nodes.
#[derive(Debug, Clone)]
pub struct Item {
    pub kind: ItemKind,
    pub nodes: Vec<ItemNode>,
    pub visible: bool,
}

/// Items available for toggling. Empty until the room model has spawned.
#[derive(Resource, Default, Debug)]
pub struct ItemRegistry {
    items: BTreeMap<ItemKind, Item>,
}

impl ItemRegistry {
    pub fn insert(&mut self, item: Item) {
        self.items.insert(item.kind, item);
    }

    pub fn get(&self, kind: ItemKind) -> Option<&Item> {
        self.items.get(&kind)
    }

    pub fn get_mut(&mut self, kind: ItemKind) -> Option<&mut Item> {
        self.items.get_mut(&kind)
    }

    pub fn is_available(&self, kind: ItemKind) -> bool {
        self.items.contains_key(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Nodes of a spawned room model that item bindings can refer to.
#[derive(Debug, Default)]
pub struct SceneNodes {
    /// Direct children of the glTF scene root, in file order.
    pub top_level: Vec<Entity>,
    /// Every named descendant. The first node wins when names repeat.
    pub named: HashMap<String, Entity>,
}

impl SceneNodes {
    /// Gather bindable nodes below a spawned `SceneRoot`.
    ///
    /// glTF scenes spawn under a single wrapper entity, so top-level nodes are
    /// the grandchildren of the scene root instance.
    pub fn collect(root: Entity, children: &Query<&Children>, names: &Query<&Name>) -> Self {
        let wrapper = children
            .get(root)
            .ok()
            .and_then(|kids| kids.to_vec().first().copied());

        let top_level = wrapper
            .and_then(|wrapper| children.get(wrapper).ok())
            .map(|kids| kids.to_vec())
            .unwrap_or_default();

        let mut named = HashMap::new();
        for entity in children.iter_descendants(root) {
            if let Ok(name) = names.get(entity) {
                named.entry(name.as_str().to_string()).or_insert(entity);
            }
        }

        Self { top_level, named }
    }

    pub fn resolve(&self, item: ItemKind, selector: &NodeSelector) -> Result<Entity, RoomError> {
        match selector {
            NodeSelector::Name(name) => {
                self.named
                    .get(name)
                    .copied()
                    .ok_or_else(|| RoomError::MissingNamedNode {
                        item,
                        name: name.clone(),
                    })
            }
            NodeSelector::ChildIndex(index) => {
                self.top_level
                    .get(*index)
                    .copied()
                    .ok_or(RoomError::ChildIndexOutOfRange {
                        item,
                        index: *index,
                        available: self.top_level.len(),
                    })
            }
        }
    }
}

/// Bind every manifest item to scene nodes.
///
/// Items with an unresolved node are left out of the registry; every failure
/// is returned so the caller can report all of them at once.
pub fn resolve_items(
    manifest: &RoomManifest,
    nodes: &SceneNodes,
    rest_of: impl Fn(Entity) -> Vec3,
) -> (ItemRegistry, Vec<RoomError>) {
    let mut registry = ItemRegistry::default();
    let mut errors = Vec::new();

    for binding in &manifest.items {
        if binding.nodes.is_empty() {
            errors.push(RoomError::EmptyBinding(binding.item));
            continue;
        }
        if registry.is_available(binding.item) {
            errors.push(RoomError::DuplicateItem(binding.item));
            continue;
        }

        let mut item_nodes = Vec::with_capacity(binding.nodes.len());
        let mut failed = false;
        for node in &binding.nodes {
            match nodes.resolve(binding.item, &node.node) {
                Ok(entity) => item_nodes.push(ItemNode {
                    entity,
                    rest: rest_of(entity),
                    drop_in: node.drop_in,
                }),
                Err(err) => {
                    errors.push(err);
                    failed = true;
                }
            }
        }

        if !failed {
            registry.insert(Item {
                kind: binding.item,
                nodes: item_nodes,
                visible: false,
            });
        }
    }

    (registry, errors)
}
