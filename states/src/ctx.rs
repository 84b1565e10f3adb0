use std::any::TypeId;
use std::collections::HashMap;

use crate::State;

/// Owner of all application state, keyed by type.
///
/// Constructed once per app session. States registered up front via
/// [`StateCtx::add_state`] can be replaced for tests (e.g. a config pointing at
/// a mock server); [`StateCtx::state_mut`] lazily inserts a `Default` value so
/// widgets never have to handle a missing state.
#[derive(Default)]
pub struct StateCtx {
    storage: HashMap<TypeId, Box<dyn State>>,
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a state value.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage.insert(TypeId::of::<T>(), Box::new(state));
    }

    /// Whether a state of this type has been registered.
    pub fn contains<T: State>(&self) -> bool {
        self.storage.contains_key(&TypeId::of::<T>())
    }

    /// Shared access to a registered state, if present.
    pub fn state<T: State>(&self) -> Option<&T> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
    }

    /// Mutable access, inserting `T::default()` on first use.
    pub fn state_mut<T: State + Default>(&mut self) -> &mut T {
        self.storage
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(T::default()))
            .as_any_mut()
            .downcast_mut::<T>()
            .expect("StateCtx storage keyed by TypeId cannot hold a mismatched type")
    }

    /// Run a closure against a state, inserting `T::default()` on first use.
    pub fn update<T: State + Default>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }
}
