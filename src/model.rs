use std::{fmt};
use std::cell::{RefCell};
use std::rc::{Rc};

use thiserror::{Error};

/// The failure reported by a property accessor.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct AccessError(pub Rc<str>);

impl AccessError {
    pub fn new(message: impl Into<Rc<str>>) -> Self { Self(message.into()) }
}

/// A property accessor. It may fail, e.g. a getter that throws.
pub type Getter = Rc<dyn Fn() -> Result<Value, AccessError>>;

// ----------------------------------------------------------------------------

/// A dynamically typed value, as built by the host for inspection.
///
/// Containers are reference-counted and interior-mutable, so that shared and
/// self-referential structures can be expressed. Two containers are the same
/// container iff they share an allocation.
#[derive(Clone, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Undefined,

    /// The deliberate absence of an object.
    Null,

    Bool(bool),

    Number(f64),

    /// An arbitrary-precision integer, as far as `i128` goes.
    BigInt(i128),

    /// A unique token with an optional description.
    Symbol(Option<Rc<str>>),

    Str(Rc<str>),

    /// An ordered sequence.
    Array(Rc<Array>),

    /// A keyed composite.
    Object(Rc<Object>),

    /// A regular expression.
    RegExp(Rc<RegExp>),

    /// Something that can be called.
    Function(Rc<Function>),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(&crate::dump(self)) }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(&crate::dump(self)) }
}

impl From<bool> for Value { fn from(v: bool) -> Self { Self::Bool(v) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Self::Number(v) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Self::Number(v.into()) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Self::Str(v.into()) } }
impl From<String> for Value { fn from(v: String) -> Self { Self::Str(v.into()) } }
impl From<Rc<Array>> for Value { fn from(v: Rc<Array>) -> Self { Self::Array(v) } }
impl From<Rc<Object>> for Value { fn from(v: Rc<Object>) -> Self { Self::Object(v) } }
impl From<Rc<RegExp>> for Value { fn from(v: Rc<RegExp>) -> Self { Self::RegExp(v) } }
impl From<Rc<Function>> for Value { fn from(v: Rc<Function>) -> Self { Self::Function(v) } }

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self { Self::Array(Array::new(elements)) }
}

// ----------------------------------------------------------------------------

/// An array-like sequence of [`Value`]s.
#[derive(Default)]
pub struct Array(RefCell<Vec<Value>>);

impl Array {
    pub fn new(elements: impl IntoIterator<Item=Value>) -> Rc<Self> {
        Rc::new(Self(RefCell::new(elements.into_iter().collect())))
    }

    pub fn len(&self) -> usize { self.0.borrow().len() }

    pub fn is_empty(&self) -> bool { self.0.borrow().is_empty() }

    pub fn push(&self, value: Value) { self.0.borrow_mut().push(value); }

    pub fn get(&self, index: usize) -> Option<Value> { self.0.borrow().get(index).cloned() }

    /// Overwrite element `index`, padding with [`Value::Undefined`] if the
    /// array is too short.
    pub fn set(&self, index: usize, value: Value) {
        let mut elements = self.0.borrow_mut();
        if index >= elements.len() { elements.resize(index + 1, Value::Undefined); }
        elements[index] = value;
    }

    /// A snapshot of the elements, in order.
    pub fn elements(&self) -> Vec<Value> { self.0.borrow().clone() }
}

// ----------------------------------------------------------------------------

/// Where a [`Property`] gets its value from.
#[derive(Clone)]
pub enum Slot {
    Data(Value),
    Accessor(Getter),
}

impl Slot {
    /// Read the value, running the accessor if there is one.
    pub fn read(&self) -> Result<Value, AccessError> {
        match self {
            Self::Data(value) => Ok(value.clone()),
            Self::Accessor(getter) => getter(),
        }
    }
}

/// An own property of an [`Object`].
#[derive(Clone)]
pub struct Property {
    pub name: Rc<str>,
    pub slot: Slot,
    pub enumerable: bool,
}

/// A keyed composite value.
///
/// `class` is the runtime type name, e.g. `Object`, `Date` or `Error`.
/// Properties are kept in definition order; redefining a property keeps its
/// position.
pub struct Object {
    class: Rc<str>,
    properties: RefCell<Vec<Property>>,
}

impl Object {
    /// A plain `Object` with no properties.
    pub fn new() -> Rc<Self> { Self::with_class("Object") }

    pub fn with_class(class: impl Into<Rc<str>>) -> Rc<Self> {
        Rc::new(Self {class: class.into(), properties: RefCell::new(Vec::new())})
    }

    pub fn class(&self) -> &str { &self.class }

    pub fn len(&self) -> usize { self.properties.borrow().len() }

    pub fn is_empty(&self) -> bool { self.properties.borrow().is_empty() }

    /// Define or replace property `name`.
    pub fn define(&self, name: impl Into<Rc<str>>, slot: Slot, enumerable: bool) {
        let name = name.into();
        let mut properties = self.properties.borrow_mut();
        if let Some(property) = properties.iter_mut().find(|p| p.name == name) {
            property.slot = slot;
            property.enumerable = enumerable;
        } else {
            properties.push(Property {name, slot, enumerable});
        }
    }

    /// Define or replace an enumerable data property.
    pub fn set(&self, name: impl Into<Rc<str>>, value: Value) {
        self.define(name, Slot::Data(value), true);
    }

    /// Define or replace an enumerable accessor property.
    pub fn define_getter(
        &self,
        name: impl Into<Rc<str>>,
        getter: impl Fn() -> Result<Value, AccessError> + 'static,
    ) {
        self.define(name, Slot::Accessor(Rc::new(getter)), true);
    }

    /// Read property `name`, or `None` if there is no such own property.
    pub fn get(&self, name: &str) -> Option<Result<Value, AccessError>> {
        // Clone the slot first: the accessor may look at `self` again.
        let slot = self.properties.borrow().iter()
            .find(|p| &*p.name == name)
            .map(|p| p.slot.clone())?;
        Some(slot.read())
    }

    /// A snapshot of all own properties, enumerable or not, in definition
    /// order.
    pub fn properties(&self) -> Vec<Property> { self.properties.borrow().clone() }
}

// ----------------------------------------------------------------------------

/// A regular expression, represented by its pattern and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegExp {
    pub source: Rc<str>,
    pub flags: Rc<str>,
}

impl RegExp {
    pub fn new(source: impl Into<Rc<str>>, flags: impl Into<Rc<str>>) -> Rc<Self> {
        Rc::new(Self {source: source.into(), flags: flags.into()})
    }
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let source = if self.source.is_empty() { "(?:)" } else { &self.source };
        write!(f, "/{}/{}", source, self.flags)
    }
}

// ----------------------------------------------------------------------------

/// The flavour of a [`Function`]. Determines its runtime type name.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FunctionKind {
    #[default]
    Normal,
    Async,
    Generator,
    AsyncGenerator,
}

impl FunctionKind {
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Normal => "Function",
            Self::Async => "AsyncFunction",
            Self::Generator => "GeneratorFunction",
            Self::AsyncGenerator => "AsyncGeneratorFunction",
        }
    }
}

/// A callable value.
///
/// If the host can stringify the callable, `source` holds the text.
/// Otherwise `name` and `arity` describe it.
#[derive(Debug, Clone, Default)]
pub struct Function {
    pub kind: FunctionKind,
    pub name: Option<Rc<str>>,

    /// The number of declared parameters.
    pub arity: usize,

    pub source: Option<Rc<str>>,
}

impl Function {
    /// A callable whose source text is known.
    pub fn from_source(source: impl Into<Rc<str>>, arity: usize) -> Rc<Self> {
        Rc::new(Self {source: Some(source.into()), arity, ..Self::default()})
    }

    /// A built-in callable, known only by name and arity.
    pub fn native(name: impl Into<Rc<str>>, arity: usize) -> Rc<Self> {
        Rc::new(Self {name: Some(name.into()), arity, ..Self::default()})
    }

    /// A callable about which nothing but its kind and arity is known.
    pub fn opaque(kind: FunctionKind, arity: usize) -> Rc<Self> {
        Rc::new(Self {kind, arity, ..Self::default()})
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redefining_keeps_position() {
        let object = Object::new();
        object.set("z", 1.into());
        object.set("a", 2.into());
        object.set("z", 3.into());
        let names: Vec<String> = object.properties().iter().map(|p| p.name.to_string()).collect();
        assert_eq!(names, ["z", "a"]);
        assert!(matches!(object.get("z"), Some(Ok(Value::Number(n))) if n == 3.0));
    }

    #[test]
    fn hidden_properties_are_still_own_properties() {
        let object = Object::new();
        object.set("shown", Value::Null);
        object.define("hidden", Slot::Data(Value::Null), false);
        object.set("hidden", 1.into());
        let flags: Vec<(String, bool)> = object.properties().iter()
            .map(|p| (p.name.to_string(), p.enumerable))
            .collect();
        assert_eq!(flags, [("shown".to_owned(), true), ("hidden".to_owned(), true)]);
    }

    #[test]
    fn getter_failure_is_reported() {
        let object = Object::new();
        object.define_getter("broken", || Err(AccessError::new("no access")));
        let error = object.get("broken").expect("property exists").unwrap_err();
        assert_eq!(error.to_string(), "no access");
        assert!(object.get("missing").is_none());
    }

    #[test]
    fn array_set_pads_with_undefined() {
        let array = Array::new([]);
        array.set(2, "x".into());
        assert_eq!(array.len(), 3);
        assert!(matches!(array.get(0), Some(Value::Undefined)));
        assert!(matches!(array.get(2), Some(Value::Str(s)) if &*s == "x"));
    }

    #[test]
    fn regexp_text() {
        assert_eq!(RegExp::new("a+b", "gi").to_string(), "/a+b/gi");
        assert_eq!(RegExp::new("", "").to_string(), "/(?:)/");
    }

    #[test]
    fn function_kinds() {
        assert_eq!(FunctionKind::default().type_name(), "Function");
        assert_eq!(FunctionKind::AsyncGenerator.type_name(), "AsyncGeneratorFunction");
        assert_eq!(FunctionKind::Generator.type_name(), "GeneratorFunction");
    }
}
