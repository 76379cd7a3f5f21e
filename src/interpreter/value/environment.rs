use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared handle to an [`Environment`].
///
/// Environments are shared: child scopes refer to their parent, and every
/// function value refers to the environment in force at its definition, so
/// a scope must stay alive as long as anything can still read from it.
pub type Env = Rc<RefCell<Environment>>;

/// A lexical scope: a mapping from names to values plus an optional
/// reference to the enclosing scope.
///
/// Lookup walks outward through the chain; binding always writes the
/// innermost scope, so inner `let`s shadow outer ones without mutating
/// them. The chain is rooted at the top-level environment of the session.
///
/// # Example
/// ```
/// use capuchin::interpreter::value::{core::Value, environment::Environment};
///
/// let global = Environment::new();
/// global.borrow_mut().bind("x", Value::Integer(1));
///
/// let local = Environment::enclosed(&global);
/// local.borrow_mut().bind("y", Value::Integer(2));
///
/// // Lookup falls through to the enclosing scope.
/// assert_eq!(local.borrow().get("x"), Some(Value::Integer(1)));
/// assert_eq!(local.borrow().get("y"), Some(Value::Integer(2)));
/// // The outer scope never sees inner bindings.
/// assert_eq!(global.borrow().get("y"), None);
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a fresh top-level environment.
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty environment whose lookups fall through to `outer`.
    ///
    /// Used for every function call: the new scope encloses the function's
    /// captured environment, not the caller's.
    #[must_use]
    pub fn enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks up a name, walking outward through the scope chain.
    ///
    /// Returns a clone of the stored value; values are cheap to clone since
    /// aggregate payloads are reference-counted.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer
            .as_ref()
            .and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name in this scope, shadowing any binding of the same name
    /// in enclosing scopes. Rebinding an existing name replaces it.
    pub fn bind(&mut self, name: &str, value: Value) {
        self.store.insert(name.to_string(), value);
    }
}
