//! Function application.

use super::{Flow, Interpreter, Interrupt};
use crate::errors::check_arity;
use crate::{Environment, EvalError, Object};

impl Interpreter {
    /// Call a closure or built-in with already-evaluated arguments.
    ///
    /// A closure runs in a fresh scope enclosing the environment it captured,
    /// not the caller's. A `return` inside the body stops here.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(callee = %function.kind(), argc = args.len())
    )]
    pub(super) fn apply_function(&self, function: &Object, args: Vec<Object>) -> Flow {
        match function {
            Object::Function(closure) => {
                let parameters = &closure.literal.parameters;
                check_arity(&args, parameters.len())?;

                let scope = Environment::new_enclosed(&closure.env);
                for (parameter, arg) in parameters.iter().zip(args) {
                    scope.set(parameter.name.as_str(), arg);
                }

                match self.eval_block(&closure.literal.body, &scope) {
                    Err(Interrupt::Return(value)) => Ok(value),
                    other => other,
                }
            }
            Object::Builtin(builtin) => Ok(builtin.call(&args, &self.print_handler)?),
            other => Err(EvalError::NotAFunction(other.kind()).into()),
        }
    }
}
