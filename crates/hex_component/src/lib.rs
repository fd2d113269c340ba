//! # hex_component
//!
//! Behaviour composition for game entities. Independent behaviours (health
//! bars, city borders, resource markers) are attached to an entity and driven
//! through a fixed lifecycle by the [`ComponentRegistry`].
//!
//! This crate provides:
//!
//! - [`Component`] trait — the lifecycle contract every behaviour implements.
//! - [`Entity`] — lightweight `u64` entity handles.
//! - [`EntityAllocator`] — monotonically increasing handle allocator.
//! - [`ComponentTypeId`] — the explicit type tag used for lookups.
//! - [`ComponentRegistry`] — attach / find / detach / tick / teardown.

pub mod component;
pub mod entity;
pub mod error;
pub mod registry;

pub use component::{AsAny, Component, ComponentTypeId, HookError, HookResult, Hooks, LifecycleHook};
pub use entity::{Entity, EntityAllocator};
pub use error::RegistryError;
pub use registry::{ComponentRegistry, DetachOutcome};
