//! The tree transformation protocol.

use arbor_ast::{BinOp, Expr, Func};

/// A tree-to-tree transformation over expressions.
///
/// One method per node kind. A transformer receives the fields of the
/// node read-only and returns a newly built expression, never the input
/// node itself. All four methods are required so that every node kind
/// stays covered when a new transformation is added.
pub trait Transform {
    /// Transform a number literal.
    fn transform_number(&mut self, value: f64) -> Expr;

    /// Transform a binary operation.
    fn transform_binary(&mut self, op: BinOp, left: &Expr, right: &Expr) -> Expr;

    /// Transform a function call.
    fn transform_call(&mut self, func: Func, arg: &Expr) -> Expr;

    /// Transform a variable reference.
    fn transform_variable(&mut self, name: &str) -> Expr;
}

/// Apply a transformation to a tree.
///
/// Dispatches on the node kind and returns the new, independently owned
/// tree built by the transformer. The input tree is left untouched and
/// remains usable afterwards.
pub fn transform<T: Transform>(expr: &Expr, tx: &mut T) -> Expr {
    match expr {
        Expr::Number(value) => tx.transform_number(*value),
        Expr::Binary { op, left, right } => tx.transform_binary(*op, left, right),
        Expr::Call { func, arg } => tx.transform_call(*func, arg),
        Expr::Variable(name) => tx.transform_variable(name),
    }
}
