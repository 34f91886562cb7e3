//! Lexical environments.
//!
//! An [`Environment`] is a handle to one scope: a name-to-object table plus
//! an optional enclosing scope. Handles are cheap to clone and all clones
//! see the same bindings, which is how closures observe later `let`s in the
//! scope they captured.
//!
//! Scopes are reference counted. A closure stored in the scope it captured
//! forms a cycle that is never freed; the language cannot mutate values in
//! place, so such cycles only come from a function bound in its own
//! defining scope, and the leak is accepted.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::Object;

/// Single-threaded shared cell: `Rc<RefCell<T>>` with a narrower API.
#[repr(transparent)]
struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

struct Scope {
    bindings: FxHashMap<String, Object>,
    outer: Option<Environment>,
}

/// Handle to a scope in the environment chain.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// Fresh top-level environment.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            outer: None,
        }))
    }

    /// Fresh scope whose lookups fall back to `outer`.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            outer: Some(outer.clone()),
        }))
    }

    /// Look `name` up here, then in each enclosing scope.
    pub fn get(&self, name: &str) -> Option<Object> {
        let scope = self.0.borrow();
        if let Some(value) = scope.bindings.get(name) {
            return Some(value.clone());
        }
        scope.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Bind `name` in this scope, replacing any existing local binding.
    /// Enclosing scopes are never written.
    pub fn set(&self, name: impl Into<String>, value: Object) {
        let name = name.into();
        tracing::trace!(%name, kind = %value.kind(), "bind");
        self.0.borrow_mut().bindings.insert(name, value);
    }

    /// Names bound in this scope, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.borrow().bindings.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    // Bindings can hold closures over this scope, so only names are shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.local_names())
            .field("enclosed", &self.0.borrow().outer.is_some())
            .finish()
    }
}
