//! Typed method names.

use std::{fmt, marker::PhantomData};

/// The name of a method on `T` taking `A` and returning `R`.
///
/// The signature travels with the name, so looking a method up never needs
/// a turbofish and mismatches are caught when the name is declared rather
/// than at every call site.
///
/// ```rust,ignore
/// const RUN: MethodName<Task, (i32,), &'static str> = MethodName::new("run");
/// ```
pub struct MethodName<T: ?Sized, A, R> {
    name: &'static str,
    _marker: PhantomData<fn(&T, A) -> R>,
}

impl<T: ?Sized, A, R> MethodName<T, A, R> {
    /// Declare a method name.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// The name as a string.
    pub const fn as_str(&self) -> &'static str {
        self.name
    }

    /// The signature as a readable type name, used in error messages.
    pub fn signature(&self) -> &'static str {
        std::any::type_name::<fn(A) -> R>()
    }
}

impl<T: ?Sized, A, R> Clone for MethodName<T, A, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized, A, R> Copy for MethodName<T, A, R> {}

impl<T: ?Sized, A, R> fmt::Debug for MethodName<T, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MethodName").field(&self.name).finish()
    }
}

impl<T: ?Sized, A, R> fmt::Display for MethodName<T, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
