//! # Slot Layer
//!
//! A [`Slot`] is the mutable binding that holds one method. It is the Rust
//! counterpart of a property on an object whose value is a function: callers
//! always go through the slot, and [`Slot::ride`] swaps what it points to.
//!
//! Slots are cheap to clone (one `Arc` bump) and every clone shares the same
//! method, which is how a decorator keeps the original alive after the slot
//! itself has moved on.

use crate::{decorator::Decorator, method::Method};
use std::{fmt, sync::Arc};

/// A swappable, type-erased holder for a method of `T` taking `A` and
/// returning `R`.
///
/// # Example
///
/// ```rust,ignore
/// struct Job {
///     run: Slot<Job, (u32,), String>,
/// }
///
/// let mut job = Job { run: Slot::new(|_: &Job, (n,): (u32,)| n.to_string()) };
/// job.run.ride(after(|_: &Job, (n,): &(u32,)| println!("ran {n}")));
/// let out = job.run.call(&job, (7,));
/// ```
pub struct Slot<T: ?Sized, A, R> {
    method: Arc<dyn Method<T, A, Output = R>>,
}

impl<T, A, R> Slot<T, A, R>
where
    T: ?Sized + 'static,
    A: 'static,
    R: 'static,
{
    /// Create a slot holding `method`.
    pub fn new<M>(method: M) -> Self
    where
        M: Method<T, A, Output = R>,
    {
        Self {
            method: Arc::new(method),
        }
    }

    /// Call the held method with `this` as the receiver.
    pub fn call(&self, this: &T, args: A) -> R {
        self.method.invoke(this, args)
    }

    /// Replace the held method with `decorator.decorate(original)`.
    ///
    /// The decorator receives a slot sharing the current method and is
    /// invoked exactly once. Afterwards this slot holds exactly what the
    /// decorator returned.
    pub fn ride<D>(&mut self, decorator: D)
    where
        D: Decorator<Self>,
        D::Output: Method<T, A, Output = R>,
    {
        let original = self.clone();
        *self = Self::new(decorator.decorate(original));
    }

    /// Returns `true` if both slots hold the very same method.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.method, &other.method)
    }
}

impl<T: ?Sized, A, R> Clone for Slot<T, A, R> {
    fn clone(&self) -> Self {
        Self {
            method: Arc::clone(&self.method),
        }
    }
}

impl<T: ?Sized, A, R> fmt::Debug for Slot<T, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("signature", &std::any::type_name::<fn(A) -> R>())
            .finish()
    }
}

// A slot is itself a method, so it can be handed to decorators as the original.
impl<T, A, R> Method<T, A> for Slot<T, A, R>
where
    T: ?Sized + 'static,
    A: 'static,
    R: 'static,
{
    type Output = R;

    fn invoke(&self, this: &T, args: A) -> R {
        self.call(this, args)
    }
}
