//! Component registry — owns every entity's components and drives their
//! lifecycle.
//!
//! ## Lifecycle
//!
//! 1. `attach` calls `init` and (if defined) `awake` synchronously, appends
//!    the component to its entity and, if it defines `start`, pushes it on
//!    the FIFO start queue. The component is visible to `find` immediately.
//! 2. `tick` drains the start queue first, calling each queued `start`
//!    exactly once, then runs `update` over every attached component.
//! 3. `detach`, `despawn` and `teardown` call `destroy`.
//!
//! Updates run over entities in handle order and over components in
//! insertion order, so a registry always updates in the same order.

use std::collections::{BTreeMap, VecDeque};

use tracing::{debug, trace, warn};

use crate::component::{Component, ComponentTypeId, HookError, Hooks, LifecycleHook};
use crate::entity::{Entity, EntityAllocator};
use crate::error::RegistryError;

/// Result of a [`ComponentRegistry::detach`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetachOutcome {
    /// The component was destroyed and removed.
    Removed,
    /// No component of the requested type was attached.
    NotFound,
}

/// One attached component and its bookkeeping.
#[derive(Debug)]
struct Slot {
    /// Unique per attachment; ties start-queue entries to this slot.
    key: u64,
    type_id: ComponentTypeId,
    name: &'static str,
    hooks: Hooks,
    started: bool,
    component: Box<dyn Component>,
}

impl Slot {
    fn downcast_ref<T: Component>(&self) -> Option<&T> {
        let component: &dyn Component = &*self.component;
        component.as_any().downcast_ref::<T>()
    }

    fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
        let component: &mut dyn Component = &mut *self.component;
        component.as_any_mut().downcast_mut::<T>()
    }

    fn hook_error(&self, entity: Entity, hook: LifecycleHook, source: HookError) -> RegistryError {
        RegistryError::Hook {
            entity,
            component: self.name,
            hook,
            source,
        }
    }

    fn destroy(&mut self, entity: Entity) -> Result<(), RegistryError> {
        if !self.hooks.contains(Hooks::DESTROY) {
            return Ok(());
        }
        self.component
            .destroy()
            .map_err(|source| self.hook_error(entity, LifecycleHook::Destroy, source))
    }
}

/// Registry of entities and their attached components.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    /// Entity handle allocator.
    allocator: EntityAllocator,
    /// Live entities and their components in insertion order.
    entities: BTreeMap<Entity, Vec<Slot>>,
    /// Components waiting for their one-time `start`.
    start_queue: VecDeque<(Entity, u64)>,
    /// Next slot key.
    next_key: u64,
}

impl ComponentRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new entity with no components.
    pub fn spawn(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        self.entities.insert(entity, Vec::new());
        trace!(%entity, "spawned entity");
        entity
    }

    /// Returns `true` if the entity was spawned and not yet despawned.
    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.contains_key(&entity)
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns the number of components attached to `entity`.
    #[must_use]
    pub fn component_count(&self, entity: Entity) -> usize {
        self.entities.get(&entity).map_or(0, Vec::len)
    }

    /// Returns the number of components still waiting for `start`.
    #[must_use]
    pub fn pending_starts(&self) -> usize {
        self.start_queue.len()
    }

    /// Attach a component to a live entity.
    ///
    /// `init` and `awake` run before this returns; `start` is deferred to
    /// the next [`tick`](Self::tick).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownEntity`] if the entity is not alive,
    /// or [`RegistryError::Hook`] if `init` or `awake` fails. A component
    /// whose `init` or `awake` fails is not attached.
    pub fn attach<T: Component>(&mut self, entity: Entity, component: T) -> Result<(), RegistryError> {
        let Some(slots) = self.entities.get_mut(&entity) else {
            return Err(RegistryError::UnknownEntity(entity));
        };

        let key = self.next_key;
        self.next_key += 1;
        let hooks = component.hooks();
        let mut slot = Slot {
            key,
            type_id: ComponentTypeId::of::<T>(),
            name: T::type_name(),
            hooks,
            started: false,
            component: Box::new(component),
        };

        slot.component
            .init(entity)
            .map_err(|source| slot.hook_error(entity, LifecycleHook::Init, source))?;
        if hooks.contains(Hooks::AWAKE) {
            slot.component
                .awake()
                .map_err(|source| slot.hook_error(entity, LifecycleHook::Awake, source))?;
        }

        debug!(%entity, component = slot.name, "attached component");
        slots.push(slot);
        if hooks.contains(Hooks::START) {
            self.start_queue.push_back((entity, key));
        }
        Ok(())
    }

    /// Returns the first component of type `T` attached to `entity`.
    #[must_use]
    pub fn find<T: Component>(&self, entity: Entity) -> Option<&T> {
        let type_id = ComponentTypeId::of::<T>();
        let found = self
            .entities
            .get(&entity)?
            .iter()
            .filter(|slot| slot.type_id == type_id)
            .find_map(Slot::downcast_ref::<T>);
        if found.is_none() {
            trace!(%entity, component = T::type_name(), "component not found");
        }
        found
    }

    /// Returns the first component of type `T` attached to `entity`, mutably.
    #[must_use]
    pub fn find_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        let type_id = ComponentTypeId::of::<T>();
        let Some(slots) = self.entities.get_mut(&entity) else {
            trace!(%entity, component = T::type_name(), "entity not alive");
            return None;
        };
        slots
            .iter_mut()
            .filter(|slot| slot.type_id == type_id)
            .find_map(Slot::downcast_mut::<T>)
    }

    /// Returns `true` if a component of type `T` is attached to `entity`.
    #[must_use]
    pub fn contains<T: Component>(&self, entity: Entity) -> bool {
        self.find::<T>(entity).is_some()
    }

    /// Destroy and remove the first component of type `T` on `entity`.
    ///
    /// A missing component is logged and reported as
    /// [`DetachOutcome::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Hook`] if `destroy` fails. The component is
    /// removed either way.
    pub fn detach<T: Component>(&mut self, entity: Entity) -> Result<DetachOutcome, RegistryError> {
        let type_id = ComponentTypeId::of::<T>();
        let position = self.entities.get(&entity).and_then(|slots| {
            slots
                .iter()
                .position(|slot| slot.type_id == type_id && slot.downcast_ref::<T>().is_some())
        });
        let (Some(slots), Some(position)) = (self.entities.get_mut(&entity), position) else {
            warn!(%entity, component = T::type_name(), "component not found on entity");
            return Ok(DetachOutcome::NotFound);
        };

        let mut slot = slots.remove(position);
        self.start_queue.retain(|&(_, key)| key != slot.key);
        debug!(%entity, component = slot.name, "detached component");
        slot.destroy(entity)?;
        Ok(DetachOutcome::Removed)
    }

    /// Destroy every component of `entity` and retire its handle.
    ///
    /// Returns `false` if the entity was not alive.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Hook`] on the first failing `destroy`. The
    /// entity is retired either way.
    pub fn despawn(&mut self, entity: Entity) -> Result<bool, RegistryError> {
        let Some(slots) = self.entities.remove(&entity) else {
            return Ok(false);
        };
        self.start_queue.retain(|&(owner, _)| owner != entity);
        debug!(%entity, components = slots.len(), "despawned entity");
        for mut slot in slots {
            slot.destroy(entity)?;
        }
        Ok(true)
    }

    /// Advance every component by one frame.
    ///
    /// Drains the start queue in FIFO order first, so a component's `start`
    /// always precedes its first `update`, then calls `update(dt)` on every
    /// component that defines it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Hook`] on the first failing `start` or
    /// `update`. Components not yet reached keep their pending work for the
    /// next tick.
    pub fn tick(&mut self, dt: f64) -> Result<(), RegistryError> {
        let mut started = 0usize;
        while let Some((entity, key)) = self.start_queue.pop_front() {
            let Some(slot) = self
                .entities
                .get_mut(&entity)
                .and_then(|slots| slots.iter_mut().find(|slot| slot.key == key))
            else {
                continue;
            };
            slot.component
                .start()
                .map_err(|source| slot.hook_error(entity, LifecycleHook::Start, source))?;
            slot.started = true;
            started += 1;
        }

        let mut updated = 0usize;
        for (&entity, slots) in &mut self.entities {
            for slot in slots.iter_mut() {
                if !slot.hooks.contains(Hooks::UPDATE) {
                    continue;
                }
                if slot.hooks.contains(Hooks::START) && !slot.started {
                    continue;
                }
                slot.component
                    .update(dt)
                    .map_err(|source| slot.hook_error(entity, LifecycleHook::Update, source))?;
                updated += 1;
            }
        }

        trace!(dt, started, updated, "registry tick");
        Ok(())
    }

    /// Destroy every component on every entity and discard the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Hook`] on the first failing `destroy`.
    pub fn teardown(self) -> Result<(), RegistryError> {
        debug!(entities = self.entities.len(), "tearing down component registry");
        for (entity, slots) in self.entities {
            for mut slot in slots {
                slot.destroy(entity)?;
            }
        }
        Ok(())
    }
}
