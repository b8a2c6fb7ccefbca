//! Runtime support library for programs emitted by the doit code generator.
//!
//! Generated code links against this crate's staticlib and calls the exported
//! primitives by symbol. The catalog exposes the same contract to Rust tooling so the
//! code generator and the runtime never disagree about names, widths or signedness.
//!
//! - [`exports`]: checked primitives (arithmetic, comparison, negation, text output).
//! - [`raw`]: unchecked word loads and stores through caller-supplied addresses.
//! - [`bootstrap`]: runs the generated `entry` exactly once and yields the exit status.

#![allow(clippy::missing_safety_doc)]

pub mod bootstrap;
pub mod display;
pub mod exports;
pub mod mangle;
pub mod ops;
pub mod raw;
pub mod table;

pub use bootstrap::{Bootstrap, EntryFn, EXIT_SUCCESS};
pub use table::{AbiType, OpKind, Param, Primitive, Signature, Signedness, Surface};

/// Every exported primitive, checked table first.
pub fn catalog() -> impl Iterator<Item = &'static Primitive> {
    exports::PRIMITIVES.iter().chain(raw::PRIMITIVES.iter())
}

pub fn lookup_symbol(symbol: &str) -> Option<&'static Primitive> {
    catalog().find(|p| p.symbol == symbol)
}

pub fn lookup(surface: Surface, name: &str) -> Option<&'static Primitive> {
    catalog().find(|p| p.name_on(surface) == Some(name))
}

/// `(name, primitive)` pairs published on one surface, in catalog order.
pub fn surface_names(surface: Surface) -> impl Iterator<Item = (&'static str, &'static Primitive)> {
    catalog().filter_map(move |p| p.name_on(surface).map(|name| (name, p)))
}
