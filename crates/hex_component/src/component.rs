//! Core [`Component`] trait and its type tag.
//!
//! A component is a behaviour bound to one [`Entity`]. It is driven through
//! the lifecycle `init → awake → start → update* → destroy` by the
//! [`ComponentRegistry`](crate::ComponentRegistry).
//!
//! ## Type Identity
//!
//! Lookups never use runtime reflection. Each component type declares a
//! stable string name, and [`ComponentTypeId`] is derived from that name
//! with the FNV-1a 64-bit hash. The tag is recorded when the component is
//! attached and compared on every `find`.

use std::any::Any;
use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Type tag of a component, the FNV-1a 64 hash of its
/// [`type_name`](Component::type_name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentTypeId(pub u64);

const FNV1A_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV1A_PRIME: u64 = 0x0100_0000_01b3;

impl ComponentTypeId {
    /// Hash `name`. Usable in const context so tags can be precomputed.
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        let name = name.as_bytes();
        let mut acc = FNV1A_BASIS;
        let mut at = 0;
        while at < name.len() {
            acc = (acc ^ name[at] as u64).wrapping_mul(FNV1A_PRIME);
            at += 1;
        }
        Self(acc)
    }

    /// Tag of component type `T`.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self::from_name(T::type_name())
    }
}

bitflags! {
    /// The optional lifecycle hooks a component defines.
    ///
    /// `init` is mandatory and therefore has no flag. The registry only
    /// queues a component for `start` when [`Hooks::START`] is set, and only
    /// calls `update`/`destroy`/`awake` when the matching flag is set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Hooks: u8 {
        const AWAKE   = 1 << 0;
        const START   = 1 << 1;
        const UPDATE  = 1 << 2;
        const DESTROY = 1 << 3;
    }
}

/// Names a single lifecycle hook, used in error reports and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleHook {
    Init,
    Awake,
    Start,
    Update,
    Destroy,
}

impl fmt::Display for LifecycleHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Awake => "awake",
            Self::Start => "start",
            Self::Update => "update",
            Self::Destroy => "destroy",
        };
        f.write_str(name)
    }
}

/// Error raised by a lifecycle hook.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Result of a lifecycle hook.
pub type HookResult = Result<(), HookError>;

/// Upcast to [`Any`] so the registry can hand out concrete component types.
///
/// Implemented for every `'static` type; components never implement it by
/// hand.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A behaviour attached to one entity.
///
/// Every hook except `init` has a no-op default. A component advertises the hooks it
/// actually uses through [`Component::hooks`]; the registry ignores the
/// others.
///
/// # Examples
///
/// ```rust
/// use hex_component::{Component, Entity, HookResult, Hooks};
///
/// #[derive(Debug, Default)]
/// struct Blink {
///     owner: Option<Entity>,
///     elapsed: f64,
/// }
///
/// impl Component for Blink {
///     fn type_name() -> &'static str { "Blink" }
///
///     fn hooks(&self) -> Hooks { Hooks::UPDATE }
///
///     fn init(&mut self, entity: Entity) -> HookResult {
///         self.owner = Some(entity);
///         Ok(())
///     }
///
///     fn update(&mut self, dt: f64) -> HookResult {
///         self.elapsed += dt;
///         Ok(())
///     }
/// }
/// ```
pub trait Component: AsAny + fmt::Debug {
    /// A human-readable, stable name for this component type.
    fn type_name() -> &'static str
    where
        Self: Sized;

    /// The optional hooks this component defines.
    fn hooks(&self) -> Hooks;

    /// Bind the component to its entity. Called synchronously by `attach`.
    fn init(&mut self, entity: Entity) -> HookResult;

    /// Called right after `init`, still inside `attach`. Only runs when
    /// [`Hooks::AWAKE`] is declared.
    fn awake(&mut self) -> HookResult {
        Ok(())
    }

    /// Called exactly once, on the first tick after attachment.
    fn start(&mut self) -> HookResult {
        Ok(())
    }

    /// Called once per tick after the component has started. `dt` is the
    /// frame time in seconds.
    fn update(&mut self, _dt: f64) -> HookResult {
        Ok(())
    }

    /// Called when the component is detached or its entity is despawned.
    fn destroy(&mut self) -> HookResult {
        Ok(())
    }
}
