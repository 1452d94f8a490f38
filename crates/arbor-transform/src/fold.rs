//! Constant folding.

use arbor_ast::{BinOp, Expr, Func};
use arbor_eval::evaluate;

use crate::{Transform, transform};

/// Transformation that collapses statically evaluable subtrees.
///
/// Folding is post-order: both children are folded before the parent
/// decides. A node whose folded children are all number literals is
/// replaced by a single literal holding its evaluated value; any other
/// node is rebuilt over the folded children, so a tree containing a
/// variable is reduced as far as possible but keeps the variable.
///
/// Numeric edge cases fold like they evaluate: a constant division by
/// zero folds to an infinity literal, `sqrt` of a negative constant to a
/// NaN literal.
pub struct ConstFold;

impl Transform for ConstFold {
    fn transform_number(&mut self, value: f64) -> Expr {
        Expr::number(value)
    }

    fn transform_binary(&mut self, op: BinOp, left: &Expr, right: &Expr) -> Expr {
        let left = transform(left, self);
        let right = transform(right, self);
        let constant = left.is_number() && right.is_number();
        let node = Expr::binary(left, op, right);
        if constant {
            Expr::number(evaluate(&node))
        } else {
            node
        }
    }

    fn transform_call(&mut self, func: Func, arg: &Expr) -> Expr {
        let arg = transform(arg, self);
        let constant = arg.is_number();
        let node = Expr::call_fn(func, arg);
        if constant {
            Expr::number(evaluate(&node))
        } else {
            node
        }
    }

    fn transform_variable(&mut self, name: &str) -> Expr {
        // Never foldable: its value exists only at evaluation time.
        Expr::variable(name)
    }
}
