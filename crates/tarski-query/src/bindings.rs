use std::collections::HashMap;

use tarski_core::{Entity, Predicate, World};

/// What a name resolves to during evaluation.
#[derive(Debug, Clone, Copy)]
pub enum Binding<'w> {
    /// An object in the world.
    Entity(&'w Entity),
    /// A member of the predicate library.
    Predicate(Predicate),
}

/// The binding context: maps identifier names to entities and predicates.
///
/// Built per evaluation and borrowed from the world; it owns no entities.
#[derive(Debug, Clone, Default)]
pub struct Bindings<'w> {
    names: HashMap<String, Binding<'w>>,
}

impl<'w> Bindings<'w> {
    /// An empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context with only the predicate library bound.
    pub fn with_predicates() -> Self {
        let mut bindings = Self::new();
        for predicate in Predicate::ALL {
            bindings.bind_predicate(predicate);
        }
        bindings
    }

    /// Every object of `world` under its key, plus the full predicate library.
    ///
    /// Predicate names shadow object keys: an object registered as `isCube`
    /// cannot be referenced from a query.
    pub fn from_world(world: &'w World) -> Self {
        let mut bindings = Self::new();
        for entity in world.iter() {
            bindings.bind_entity(entity);
        }
        for predicate in Predicate::ALL {
            if bindings.bind_predicate(predicate).is_some() {
                log::warn!("object key \"{predicate}\" is shadowed by the predicate of the same name");
            }
        }
        bindings
    }

    /// Bind an entity under its own key. Returns the previous binding, if any.
    pub fn bind_entity(&mut self, entity: &'w Entity) -> Option<Binding<'w>> {
        self.bind(entity.key(), Binding::Entity(entity))
    }

    /// Bind a predicate under its query name. Returns the previous binding, if any.
    pub fn bind_predicate(&mut self, predicate: Predicate) -> Option<Binding<'w>> {
        self.bind(predicate.name(), Binding::Predicate(predicate))
    }

    /// Bind `name` to an arbitrary value, replacing any previous binding.
    pub fn bind(&mut self, name: impl Into<String>, binding: Binding<'w>) -> Option<Binding<'w>> {
        self.names.insert(name.into(), binding)
    }

    /// Resolve a name.
    pub fn get(&self, name: &str) -> Option<Binding<'w>> {
        self.names.get(name).copied()
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
