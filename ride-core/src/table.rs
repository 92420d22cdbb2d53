//! # Method Tables
//!
//! A [`MethodTable`] maps method names to [`Slot`]s for one receiver type.
//! It gives a target object dynamically addressable methods: `define` a
//! method under a [`MethodName`], look it up by name, and `ride` it to
//! replace it with a decorated version.
//!
//! Tables can share a prototype. A lookup that misses the table's own
//! slots falls through to the prototype (and its prototype, and so on).
//! Riding always writes an own slot, so overriding an inherited method on
//! one object never affects other objects built from the same prototype.

use crate::{
    decorator::Decorator, error::RideError, method::Method, name::MethodName, slot::Slot,
};
use std::{any::Any, collections::HashMap, fmt, marker::PhantomData, sync::Arc};

type AnySlot = Box<dyn Any + Send + Sync>;

/// Named method slots for receivers of type `T`.
///
/// # Example
///
/// ```rust,ignore
/// const GREET: MethodName<Person, (), String> = MethodName::new("greet");
///
/// let mut methods = MethodTable::new();
/// methods.define(GREET, |p: &Person, ()| format!("hi, {}", p.name));
/// methods.ride(GREET, compose(|_: &Person, s: String| s.to_uppercase()))?;
/// ```
pub struct MethodTable<T: 'static> {
    own: HashMap<&'static str, AnySlot>,
    prototype: Option<Arc<MethodTable<T>>>,
    _marker: PhantomData<fn(&T)>,
}

impl<T: 'static> MethodTable<T> {
    /// Create an empty table with no prototype.
    pub fn new() -> Self {
        Self {
            own: HashMap::new(),
            prototype: None,
            _marker: PhantomData,
        }
    }

    /// Create an empty table that inherits every method of `prototype`.
    pub fn with_prototype(prototype: Arc<MethodTable<T>>) -> Self {
        Self {
            own: HashMap::new(),
            prototype: Some(prototype),
            _marker: PhantomData,
        }
    }

    /// The table this one inherits from, if any.
    pub fn prototype(&self) -> Option<&Arc<MethodTable<T>>> {
        self.prototype.as_ref()
    }

    /// Install `method` as an own slot under `name`, replacing any own slot
    /// of the same name.
    pub fn define<A, R, M>(&mut self, name: MethodName<T, A, R>, method: M) -> &mut Self
    where
        A: 'static,
        R: 'static,
        M: Method<T, A, Output = R>,
    {
        self.own.insert(name.as_str(), Box::new(Slot::new(method)));
        self
    }

    /// Builder form of [`define`](Self::define).
    pub fn with<A, R, M>(mut self, name: MethodName<T, A, R>, method: M) -> Self
    where
        A: 'static,
        R: 'static,
        M: Method<T, A, Output = R>,
    {
        self.define(name, method);
        self
    }

    /// Returns `true` if `name` resolves here or on a prototype.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Returns `true` if `name` is an own slot of this table.
    pub fn has_own(&self, name: &str) -> bool {
        self.own.contains_key(name)
    }

    /// Drop the own slot under `name`, letting an inherited one show through.
    ///
    /// Returns `false` if there was no own slot.
    pub fn remove_own(&mut self, name: &str) -> bool {
        self.own.remove(name).is_some()
    }

    /// Resolve `name` through the prototype chain.
    pub fn slot<A, R>(&self, name: MethodName<T, A, R>) -> Result<&Slot<T, A, R>, RideError>
    where
        A: 'static,
        R: 'static,
    {
        let found = self
            .resolve(name.as_str())
            .ok_or(RideError::UnknownMethod {
                name: name.as_str(),
            })?;

        found
            .downcast_ref::<Slot<T, A, R>>()
            .ok_or(RideError::SignatureMismatch {
                name: name.as_str(),
                expected: name.signature(),
            })
    }

    /// Replace the method under `name` with `decorator.decorate(original)`.
    ///
    /// The original is resolved through the prototype chain; the
    /// replacement is always written as an own slot. On error the table is
    /// left untouched and the decorator is not invoked.
    pub fn ride<A, R, D>(
        &mut self,
        name: MethodName<T, A, R>,
        decorator: D,
    ) -> Result<(), RideError>
    where
        A: 'static,
        R: 'static,
        D: Decorator<Slot<T, A, R>>,
        D::Output: Method<T, A, Output = R>,
    {
        let original = self.slot(name)?.clone();

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                method = name.as_str(),
                shadowed = !self.has_own(name.as_str()),
                "Overriding method"
            );
        }

        let replacement = Slot::new(decorator.decorate(original));
        self.own.insert(name.as_str(), Box::new(replacement));
        Ok(())
    }

    fn resolve(&self, name: &str) -> Option<&(dyn Any + Send + Sync)> {
        match self.own.get(name) {
            Some(slot) => Some(slot.as_ref()),
            None => self.prototype.as_deref()?.resolve(name),
        }
    }
}

impl<T: 'static> Default for MethodTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for MethodTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut own: Vec<_> = self.own.keys().copied().collect();
        own.sort_unstable();
        f.debug_struct("MethodTable")
            .field("own", &own)
            .field("prototype", &self.prototype)
            .finish()
    }
}
