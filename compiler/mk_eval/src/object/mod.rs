//! Runtime values.
//!
//! [`Object`] is a closed sum type; every consumer matches it exhaustively.
//! Scalars (integers, booleans, null) are stored inline. Strings, arrays,
//! hashes, and closures live behind a [`Heap`] handle so that copying a
//! value shares it, which is what gives composite `==` its identity
//! semantics.

mod hash;
mod heap;

pub use hash::{HashKey, HashObject, HashPair};
pub use heap::Heap;

use std::fmt;
use std::hash::Hasher;
use std::rc::Rc;

use mk_ir::FunctionLiteral;
use rustc_hash::FxHasher;

use crate::builtins::Builtin;
use crate::{Environment, EvalError};

/// Kind tag of an [`Object`], as shown in error messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Integer,
    Boolean,
    String,
    Array,
    Hash,
    Function,
    Builtin,
    Error,
    Null,
}

impl ObjectKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Integer => "INTEGER",
            ObjectKind::Boolean => "BOOLEAN",
            ObjectKind::String => "STRING",
            ObjectKind::Array => "ARRAY",
            ObjectKind::Hash => "HASH",
            ObjectKind::Function => "FUNCTION",
            ObjectKind::Builtin => "BUILTIN",
            ObjectKind::Error => "ERROR",
            ObjectKind::Null => "NULL",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closure: the function literal plus the environment it was created in.
pub struct FunctionObject {
    pub literal: Rc<FunctionLiteral>,
    pub env: Environment,
}

impl fmt::Debug for FunctionObject {
    // The captured environment may contain this very function.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionObject({})", self.literal)
    }
}

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Str(Heap<String>),
    Array(Heap<Vec<Object>>),
    Hash(Heap<HashObject>),
    Function(Heap<FunctionObject>),
    Builtin(Builtin),
    /// A failed evaluation, carried as a value.
    Error(EvalError),
    Null,
}

impl Object {
    pub const TRUE: Object = Object::Boolean(true);
    pub const FALSE: Object = Object::Boolean(false);

    pub fn string(value: impl Into<String>) -> Self {
        Object::Str(Heap::new(value.into()))
    }

    pub fn array(elements: Vec<Object>) -> Self {
        Object::Array(Heap::new(elements))
    }

    pub fn hash(hash: HashObject) -> Self {
        Object::Hash(Heap::new(hash))
    }

    pub fn function(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        Object::Function(Heap::new(FunctionObject { literal, env }))
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Integer(_) => ObjectKind::Integer,
            Object::Boolean(_) => ObjectKind::Boolean,
            Object::Str(_) => ObjectKind::String,
            Object::Array(_) => ObjectKind::Array,
            Object::Hash(_) => ObjectKind::Hash,
            Object::Function(_) => ObjectKind::Function,
            Object::Builtin(_) => ObjectKind::Builtin,
            Object::Error(_) => ObjectKind::Error,
            Object::Null => ObjectKind::Null,
        }
    }

    /// Only `null` and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Null | Object::Boolean(false))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Hash key for integers, booleans, and strings; `None` for every
    /// other kind.
    ///
    /// Equal values of the same kind always produce equal keys.
    pub fn hash_key(&self) -> Option<HashKey> {
        let digest = match self {
            Object::Integer(value) => u64::from_ne_bytes(value.to_ne_bytes()),
            Object::Boolean(value) => u64::from(*value),
            Object::Str(value) => {
                let mut hasher = FxHasher::default();
                hasher.write(value.as_bytes());
                hasher.finish()
            }
            _ => return None,
        };
        Some(HashKey::new(self.kind(), digest))
    }

    /// The language's `==` for operands that are not both integers or both
    /// strings: booleans and null by value, heap objects by identity,
    /// built-ins by name.
    pub fn is_identical(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::Str(a), Object::Str(b)) => Heap::ptr_eq(a, b),
            (Object::Array(a), Object::Array(b)) => Heap::ptr_eq(a, b),
            (Object::Hash(a), Object::Hash(b)) => Heap::ptr_eq(a, b),
            (Object::Function(a), Object::Function(b)) => Heap::ptr_eq(a, b),
            (Object::Builtin(a), Object::Builtin(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}

impl From<EvalError> for Object {
    fn from(error: EvalError) -> Self {
        Object::Error(error)
    }
}

/// Structural equality, for tests and host code. Closures compare by
/// identity. The language's own `==` is [`Object::is_identical`].
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Str(a), Object::Str(b)) => a == b,
            (Object::Array(a), Object::Array(b)) => a == b,
            (Object::Hash(a), Object::Hash(b)) => a == b,
            (Object::Function(a), Object::Function(b)) => Heap::ptr_eq(a, b),
            (Object::Builtin(a), Object::Builtin(b)) => a == b,
            (Object::Error(a), Object::Error(b)) => a == b,
            (Object::Null, Object::Null) => true,
            _ => false,
        }
    }
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
    sep: &str,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// The inspect form shown by the REPL and `puts`.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::Boolean(value) => write!(f, "{value}"),
            Object::Str(value) => f.write_str(value),
            Object::Array(elements) => {
                f.write_str("[")?;
                write_joined(f, elements.iter(), ", ")?;
                f.write_str("]")
            }
            Object::Hash(hash) => {
                f.write_str("{")?;
                write_joined(
                    f,
                    hash.iter()
                        .map(|pair| format!("{}: {}", pair.key, pair.value)),
                    ", ",
                )?;
                f.write_str("}")
            }
            Object::Function(function) => {
                let literal = &function.literal;
                f.write_str("fn(")?;
                write_joined(f, literal.parameters.iter(), ", ")?;
                f.write_str(") {\n")?;
                write_joined(f, literal.body.statements.iter(), "\n")?;
                f.write_str("\n}")
            }
            Object::Builtin(_) => f.write_str("builtin function"),
            Object::Error(error) => write!(f, "ERROR: {error}"),
            Object::Null => f.write_str("null"),
        }
    }
}
