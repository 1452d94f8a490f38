//! Deep structural copy.

use arbor_ast::{BinOp, Expr, Func};

use crate::{Transform, transform};

/// Transformation that produces a deep, independent copy of a tree.
///
/// The output shares no node with the input: dropping either tree has no
/// effect on the other. Leaves are rebuilt by value or name; interior
/// nodes are rebuilt from their recursively transformed children.
pub struct DeepCopy;

impl Transform for DeepCopy {
    fn transform_number(&mut self, value: f64) -> Expr {
        Expr::number(value)
    }

    fn transform_binary(&mut self, op: BinOp, left: &Expr, right: &Expr) -> Expr {
        let left = transform(left, self);
        let right = transform(right, self);
        Expr::binary(left, op, right)
    }

    fn transform_call(&mut self, func: Func, arg: &Expr) -> Expr {
        Expr::call_fn(func, transform(arg, self))
    }

    fn transform_variable(&mut self, name: &str) -> Expr {
        Expr::variable(name)
    }
}
