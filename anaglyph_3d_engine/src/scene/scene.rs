/// Scene: a collection of DrawEntities plus lighting state.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Entities are also
/// indexed by name, and a separate ordered list preserves insertion order so
/// draw submission is deterministic.

use rustc_hash::FxHashMap;
use glam::{Mat4, Vec3};
use slotmap::SlotMap;
use crate::error::Result;
use crate::engine_bail;
use super::entity::{DrawEntity, EntityKey};
use super::lights::Lighting;

/// A renderable scene containing DrawEntities.
///
/// Entities are managed via stable keys (EntityKey). Keys remain valid even
/// after other entities are removed. Names must be unique within a scene.
pub struct Scene {
    /// Entities stored in a slot map for O(1) insert/remove
    entities: SlotMap<EntityKey, DrawEntity>,
    /// Keys in insertion order, defines draw submission order
    draw_order: Vec<EntityKey>,
    /// Name lookup
    names: FxHashMap<String, EntityKey>,
    /// Global lighting state
    lighting: Lighting,
}

impl Scene {
    /// Create a new empty scene with default lighting.
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            draw_order: Vec::new(),
            names: FxHashMap::default(),
            lighting: Lighting::default(),
        }
    }

    /// Add an entity to the scene under a unique name.
    ///
    /// Returns a stable key that remains valid until the entity is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already taken.
    pub fn insert(&mut self, name: &str, entity: DrawEntity) -> Result<EntityKey> {
        if self.names.contains_key(name) {
            engine_bail!("anaglyph3d::Scene",
                "entity name '{}' already exists in scene", name);
        }
        let key = self.entities.insert(entity);
        self.draw_order.push(key);
        self.names.insert(name.to_string(), key);
        Ok(key)
    }

    /// Remove an entity from the scene. Returns false if the key is invalid.
    pub fn remove(&mut self, key: EntityKey) -> bool {
        if self.entities.remove(key).is_none() {
            return false;
        }
        self.draw_order.retain(|&k| k != key);
        self.names.retain(|_, &mut k| k != key);
        true
    }

    /// Get an entity by key.
    pub fn entity(&self, key: EntityKey) -> Option<&DrawEntity> {
        self.entities.get(key)
    }

    /// Get an entity by key for mutation.
    pub fn entity_mut(&mut self, key: EntityKey) -> Option<&mut DrawEntity> {
        self.entities.get_mut(key)
    }

    /// Look up an entity key by name.
    pub fn key_of(&self, name: &str) -> Option<EntityKey> {
        self.names.get(name).copied()
    }

    /// Set the world matrix of an entity. Returns false if the key is invalid.
    pub fn set_world_matrix(&mut self, key: EntityKey, matrix: Mat4) -> bool {
        if let Some(entity) = self.entities.get_mut(key) {
            entity.world_matrix = matrix;
            true
        } else {
            false
        }
    }

    /// Set the tint colour of an entity. Returns false if the key is invalid.
    pub fn set_tint_colour(&mut self, key: EntityKey, colour: Vec3) -> bool {
        if let Some(entity) = self.entities.get_mut(key) {
            entity.tint_colour = colour;
            true
        } else {
            false
        }
    }

    /// Number of entities in the scene.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Global lighting state.
    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    /// Global lighting state for mutation.
    pub fn lighting_mut(&mut self) -> &mut Lighting {
        &mut self.lighting
    }

    /// Snapshot of all entities in draw order.
    ///
    /// The snapshot is detached from the scene: entities added, removed, or
    /// mutated afterwards do not affect it. Both eye passes of a frame render
    /// from the same snapshot so the eyes always see identical content.
    pub fn draw_list(&self) -> Vec<DrawEntity> {
        self.draw_order
            .iter()
            .filter_map(|&key| self.entities.get(key).cloned())
            .collect()
    }

    /// Remove all entities. Lighting is left untouched.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.draw_order.clear();
        self.names.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
