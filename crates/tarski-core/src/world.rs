use std::collections::HashMap;

use serde::Deserialize;

use crate::entity::{Entity, Position, Shape, Size};
use crate::error::TarskiResult;

/// On-disk form of a world: `{"objects": [...]}`.
#[derive(Debug, Deserialize)]
struct WorldFile {
    objects: Vec<Entity>,
}

/// The world registry. Owns all entities, keyed by unique string key.
///
/// Insertion order is preserved for display. The first insertion for a key
/// wins; later insertions with the same key are ignored. Two different keys
/// may occupy the same position. The registry does not reject that, but
/// [`World::position_collisions`] reports it.
#[derive(Debug, Clone, Default)]
pub struct World {
    entities: Vec<Entity>,

    // Index
    by_key: HashMap<String, usize>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a world from its JSON file form.
    pub fn from_json(source: &str) -> TarskiResult<Self> {
        let file: WorldFile = serde_json::from_str(source)?;
        let mut world = Self::new();
        for entity in file.objects {
            world.add_entity(entity);
        }
        log::info!("loaded world with {} object(s)", world.len());
        Ok(world)
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Register a new object under `key`.
    ///
    /// Returns `true` if the object was inserted, `false` if `key` was already
    /// bound (in which case the world is unchanged).
    pub fn add_object(
        &mut self,
        key: impl Into<String>,
        shape: Shape,
        size: Size,
        position: Position,
    ) -> bool {
        self.add_entity(Entity::new(key, shape, size, position))
    }

    /// Register an already-built entity. Same first-wins rule as
    /// [`World::add_object`].
    pub fn add_entity(&mut self, entity: Entity) -> bool {
        if self.contains(entity.key()) {
            log::debug!("ignoring duplicate object key \"{}\"", entity.key());
            return false;
        }

        self.by_key
            .insert(entity.key().to_string(), self.entities.len());
        self.entities.push(entity);
        true
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get an entity by key.
    pub fn get(&self, key: &str) -> Option<&Entity> {
        self.by_key.get(key).map(|&idx| &self.entities[idx])
    }

    /// Whether `key` is bound.
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Iterate entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world has no objects.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Positions occupied by more than one key, with the keys in insertion
    /// order. Positions are listed in order of their first occupant.
    pub fn position_collisions(&self) -> Vec<(Position, Vec<&str>)> {
        let mut groups: Vec<(Position, Vec<&str>)> = Vec::new();
        for entity in &self.entities {
            match groups.iter_mut().find(|(p, _)| *p == entity.position()) {
                Some((_, keys)) => keys.push(entity.key()),
                None => groups.push((entity.position(), vec![entity.key()])),
            }
        }
        groups.retain(|(_, keys)| keys.len() > 1);
        groups
    }

    // -----------------------------------------------------------------------
    // Display
    // -----------------------------------------------------------------------

    /// Human-readable dump: a `Shapes: N` line, then one line per object in
    /// insertion order.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entities.len() + 1);
        lines.push(format!("Shapes: {}", self.entities.len()));
        for entity in &self.entities {
            let pos = entity.position();
            lines.push(format!(
                "{} -> Shape:{}, X:{}, Y:{}",
                entity.key(),
                entity.shape(),
                pos.x,
                pos.y
            ));
        }
        lines
    }
}
