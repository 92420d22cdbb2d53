//! # ride-core
//!
//! Core traits for Ride, a small library for overriding methods on objects.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! extensions that provide their own decorators without pulling in
//! `ride-std`.
//!
//! # Building Blocks
//!
//! ## [`Method`]
//!
//! Anything callable with a receiver `&T` and an argument list `A`. Every
//! `Fn(&T, A) -> R` closure is a method.
//!
//! ## [`Slot`]
//!
//! A swappable holder of one method. Callers always invoke through the
//! slot, so replacing what it holds changes behavior for every later call.
//! A slot can be a plain struct field or live in a [`MethodTable`].
//!
//! ## [`Decorator`]
//!
//! Turns the original method into its replacement. Any
//! `FnOnce(original) -> replacement` closure is a decorator; stack them
//! with [`DecoratorExt::and_then`].
//!
//! ## [`MethodTable`] and [`Target`]
//!
//! Named, dynamically addressable methods with prototype inheritance. The
//! free function [`ride`] overrides a method on any [`Target`] by name.
//!
//! # Error Types
//!
//! - [`RideError`] - A method name did not resolve, or resolved to another signature

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod decorator;
mod error;
mod method;
mod name;
mod slot;
mod table;
mod target;

// Re-exports
pub use decorator::{AndThen, Decorator, DecoratorExt, Identity};
pub use error::RideError;
pub use method::Method;
pub use name::MethodName;
pub use slot::Slot;
pub use table::MethodTable;
pub use target::{Target, ride};
