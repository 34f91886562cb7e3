//! `InterpreterBuilder` for configuring an [`Interpreter`].

use std::rc::Rc;

use super::Interpreter;
use crate::builtins::Builtins;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for [`Interpreter`]. Unset options fall back to the standard
/// built-in table and stdout.
#[derive(Default)]
pub struct InterpreterBuilder {
    builtins: Option<Rc<Builtins>>,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where `puts` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Replace the built-in table.
    #[must_use]
    pub fn builtins(mut self, builtins: Builtins) -> Self {
        self.builtins = Some(Rc::new(builtins));
        self
    }

    /// Share an existing built-in table.
    #[must_use]
    pub fn shared_builtins(mut self, builtins: Rc<Builtins>) -> Self {
        self.builtins = Some(builtins);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            builtins: self
                .builtins
                .unwrap_or_else(|| Rc::new(Builtins::standard())),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
