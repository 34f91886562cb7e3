//! Built-in functions.
//!
//! The table is built once per interpreter and never changes afterwards.
//! Identifiers fall back to it when no binding is found, so user code can
//! shadow a built-in with `let`.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::check_arity;
use crate::print_handler::PrintHandlerImpl;
use crate::{EvalError, EvalResult, Object};

/// Native implementation of a built-in. Arguments arrive fully evaluated.
pub type BuiltinFn = fn(&[Object], &PrintHandlerImpl) -> EvalResult;

/// A named native function.
#[derive(Copy, Clone)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, args: &[Object], out: &PrintHandlerImpl) -> EvalResult {
        (self.func)(args, out)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

/// Immutable name-to-builtin table.
#[derive(Clone, Debug, Default)]
pub struct Builtins {
    table: FxHashMap<&'static str, Builtin>,
}

impl Builtins {
    /// No built-ins at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// `len`, `first`, `last`, `rest`, `push`, and `puts`.
    pub fn standard() -> Self {
        Self::empty()
            .with("len", len)
            .with("first", first)
            .with("last", last)
            .with("rest", rest)
            .with("push", push)
            .with("puts", puts)
    }

    /// Add or replace a built-in.
    #[must_use]
    pub fn with(mut self, name: &'static str, func: BuiltinFn) -> Self {
        self.table.insert(name, Builtin::new(name, func));
        self
    }

    pub fn get(&self, name: &str) -> Option<Builtin> {
        self.table.get(name).copied()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.table.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

fn single_argument(args: &[Object]) -> EvalResult<&Object> {
    match args {
        [arg] => Ok(arg),
        _ => Err(EvalError::WrongArgumentCount {
            got: args.len(),
            want: 1,
        }),
    }
}

fn array_argument<'a>(builtin: &'static str, arg: &'a Object) -> EvalResult<&'a [Object]> {
    match arg {
        Object::Array(elements) => Ok(elements.as_slice()),
        other => Err(EvalError::ExpectedArray {
            builtin,
            got: other.kind(),
        }),
    }
}

fn length(n: usize) -> Object {
    Object::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

/// Byte length of a string or element count of an array.
fn len(args: &[Object], _: &PrintHandlerImpl) -> EvalResult {
    match single_argument(args)? {
        Object::Str(value) => Ok(length(value.len())),
        Object::Array(elements) => Ok(length(elements.len())),
        other => Err(EvalError::UnsupportedArgument {
            builtin: "len",
            got: other.kind(),
        }),
    }
}

fn first(args: &[Object], _: &PrintHandlerImpl) -> EvalResult {
    let elements = array_argument("first", single_argument(args)?)?;
    Ok(elements.first().cloned().unwrap_or(Object::Null))
}

fn last(args: &[Object], _: &PrintHandlerImpl) -> EvalResult {
    let elements = array_argument("last", single_argument(args)?)?;
    Ok(elements.last().cloned().unwrap_or(Object::Null))
}

/// Everything but the first element, as a new array; `null` when empty.
fn rest(args: &[Object], _: &PrintHandlerImpl) -> EvalResult {
    let elements = array_argument("rest", single_argument(args)?)?;
    match elements.split_first() {
        Some((_, tail)) => Ok(Object::array(tail.to_vec())),
        None => Ok(Object::Null),
    }
}

/// New array with the value appended. The input array is left untouched.
fn push(args: &[Object], _: &PrintHandlerImpl) -> EvalResult {
    check_arity(args, 2)?;
    let elements = array_argument("push", &args[0])?;
    let mut extended = Vec::with_capacity(elements.len() + 1);
    extended.extend_from_slice(elements);
    extended.push(args[1].clone());
    Ok(Object::array(extended))
}

fn puts(args: &[Object], out: &PrintHandlerImpl) -> EvalResult {
    for arg in args {
        out.println(&arg.to_string());
    }
    Ok(Object::Null)
}
