//! Grammar productions, split by node category.

mod collections;
mod expr;
mod stmt;
