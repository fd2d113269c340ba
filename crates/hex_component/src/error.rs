//! Registry error types.

use crate::component::{HookError, LifecycleHook};
use crate::entity::Entity;

/// Errors surfaced by the [`ComponentRegistry`](crate::ComponentRegistry).
///
/// A missing component is not an error; see
/// [`DetachOutcome`](crate::DetachOutcome).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The entity was never spawned in this registry, or has been despawned.
    #[error("{0} is not alive in this registry")]
    UnknownEntity(Entity),

    /// A lifecycle hook returned an error. Hooks are not contained: the
    /// failure aborts the registry call that invoked the hook.
    #[error("{component}::{hook} failed on {entity}: {source}")]
    Hook {
        entity: Entity,
        component: &'static str,
        hook: LifecycleHook,
        #[source]
        source: HookError,
    },
}
