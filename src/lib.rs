//! Deterministic, human-readable dumps of dynamic values.
//!
//! Build a [`Value`] and pass it to [`dump()`]:
//!
//! ```
//! use valdump::{dump, Object, Value};
//!
//! let point = Object::new();
//! point.set("y", 2.into());
//! point.set("x", 1.into());
//! point.set("self", point.clone().into());
//! assert_eq!(
//!     dump(&point.clone().into()),
//!     "/* Object (1) */ {\n  self: /* Object (1) */ {/* visited */},\n  x: 1,\n  y: 2\n}",
//! );
//! # point.set("self", Value::Null);
//! ```
//!
//! Containers are numbered in the order they are first reached, and a
//! container reached again is not expanded a second time. Object members are
//! sorted by name. Callables are shown as a signature with the body elided.

pub mod model;
pub use model::{AccessError, Array, Function, FunctionKind, Getter, Object, Property, RegExp, Slot, Value};

mod names;
mod registry;

mod render;
pub use render::{DEFAULT_INDENT, dump, dump_indented};

pub mod sink;
pub use sink::{DUMP_ELEMENT, Sink, Surface, WriteSink, dump_out};

pub mod json;
