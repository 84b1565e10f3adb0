use std::any::Any;

/// Marker trait for anything stored in a [`crate::StateCtx`].
///
/// The two accessors exist so trait objects can be downcast back to their
/// concrete type; implementations are always the same two one-liners.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
