//! Expression evaluation.

use mk_ir::{Expr, ExprKind};

use super::{Flow, Interpreter};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{Environment, EvalError, EvalResult, HashObject, Object};

impl Interpreter {
    pub(super) fn eval_expression(&self, expr: &Expr, env: &Environment) -> Flow {
        match &expr.kind {
            ExprKind::Int(value) => Ok(Object::Integer(*value)),
            ExprKind::Bool(value) => Ok(Object::Boolean(*value)),
            ExprKind::Str(value) => Ok(Object::string(value.as_str())),
            ExprKind::Ident(name) => Ok(self.eval_identifier(name, env)?),
            ExprKind::Prefix { op, right } => {
                let right = self.eval_expression(right, env)?;
                Ok(evaluate_unary(*op, &right)?)
            }
            ExprKind::Infix { op, left, right } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                Ok(evaluate_binary(&left, &right, *op)?)
            }
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expression(condition, env)?;
                if condition.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(Object::Null)
                }
            }
            ExprKind::Function(literal) => Ok(Object::function(literal.clone(), env.clone())),
            ExprKind::Call {
                function,
                arguments,
            } => {
                let function = self.eval_expression(function, env)?;
                let arguments = self.eval_expressions(arguments, env)?;
                self.apply_function(&function, arguments)
            }
            ExprKind::Array(elements) => Ok(Object::array(self.eval_expressions(elements, env)?)),
            ExprKind::Hash(pairs) => {
                let mut hash = HashObject::new();
                for (key, value) in pairs {
                    let key = self.eval_expression(key, env)?;
                    if key.hash_key().is_none() {
                        return Err(EvalError::UnusableHashKey(key.kind()).into());
                    }
                    let value = self.eval_expression(value, env)?;
                    hash.insert(key, value)?;
                }
                Ok(Object::hash(hash))
            }
            ExprKind::Index { left, index } => {
                let left = self.eval_expression(left, env)?;
                let index = self.eval_expression(index, env)?;
                Ok(eval_index(&left, &index)?)
            }
        }
    }

    /// Evaluate left to right, stopping at the first failure.
    fn eval_expressions(&self, exprs: &[Expr], env: &Environment) -> Flow<Vec<Object>> {
        exprs
            .iter()
            .map(|expr| self.eval_expression(expr, env))
            .collect()
    }

    /// Bindings first, then built-ins.
    fn eval_identifier(&self, name: &str, env: &Environment) -> EvalResult {
        if let Some(value) = env.get(name) {
            return Ok(value);
        }
        self.builtins
            .get(name)
            .map(Object::Builtin)
            .ok_or_else(|| EvalError::IdentifierNotFound(name.to_string()))
    }
}

/// Arrays by integer position, hashes by key. Out-of-range positions and
/// missing keys give `null`.
fn eval_index(left: &Object, index: &Object) -> EvalResult {
    match (left, index) {
        (Object::Array(elements), Object::Integer(position)) => Ok(usize::try_from(*position)
            .ok()
            .and_then(|position| elements.get(position))
            .cloned()
            .unwrap_or(Object::Null)),
        (Object::Hash(hash), key) => Ok(hash.get(key)?.cloned().unwrap_or(Object::Null)),
        _ => Err(EvalError::IndexNotSupported(left.kind())),
    }
}
