//! # Targets
//!
//! A [`Target`] is an object whose methods live in a [`MethodTable`] and can
//! therefore be overridden at runtime with [`ride`].

use crate::{
    decorator::Decorator, error::RideError, method::Method, name::MethodName, slot::Slot,
    table::MethodTable,
};

/// An object with named, overridable methods.
///
/// # Example
///
/// ```rust,ignore
/// struct Task {
///     log: Mutex<Vec<String>>,
///     methods: MethodTable<Task>,
/// }
///
/// impl Target for Task {
///     fn methods(&self) -> &MethodTable<Self> {
///         &self.methods
///     }
///
///     fn methods_mut(&mut self) -> &mut MethodTable<Self> {
///         &mut self.methods
///     }
/// }
///
/// let out = task.invoke(RUN, (42,))?;
/// ```
pub trait Target: Sized + 'static {
    /// The object's method table.
    fn methods(&self) -> &MethodTable<Self>;

    /// Mutable access to the object's method table.
    fn methods_mut(&mut self) -> &mut MethodTable<Self>;

    /// Resolve `name` and call it with `self` as the receiver.
    fn invoke<A, R>(&self, name: MethodName<Self, A, R>, args: A) -> Result<R, RideError>
    where
        A: 'static,
        R: 'static,
    {
        let slot = self.methods().slot(name)?;
        Ok(slot.call(self, args))
    }
}

/// Override the method `name` on `object` with `decorator.decorate(original)`.
///
/// The original is read from the object (or its prototype), handed to the
/// decorator once, and the result is written back as an own method of
/// `object`. Nothing else is retained.
///
/// # Errors
///
/// Returns [`RideError`] if `name` does not resolve on `object` or resolves
/// to a method of a different signature. The object is left unchanged.
///
/// # Example
///
/// ```rust,ignore
/// ride(&mut task, RUN, after(|task: &Task, (a,): &(i32,)| task.note(*a)))?;
/// ```
pub fn ride<T, A, R, D>(
    object: &mut T,
    name: MethodName<T, A, R>,
    decorator: D,
) -> Result<(), RideError>
where
    T: Target,
    A: 'static,
    R: 'static,
    D: Decorator<Slot<T, A, R>>,
    D::Output: Method<T, A, Output = R>,
{
    object.methods_mut().ride(name, decorator)
}
