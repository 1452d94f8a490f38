//! Expression evaluation.

use arbor_ast::{BinOp, Expr, Func};

/// Evaluate an expression to its numeric value.
///
/// Evaluation is total: division by zero and `sqrt` of a negative number
/// follow IEEE 754 (infinity/NaN propagate through the tree instead of
/// raising an error), and a variable always evaluates to `0.0` since
/// there is no binding environment.
pub fn evaluate(expr: &Expr) -> f64 {
    match expr {
        Expr::Number(value) => *value,

        Expr::Binary { op, left, right } => {
            let left = evaluate(left);
            let right = evaluate(right);
            match op {
                BinOp::Add => left + right,
                BinOp::Sub => left - right,
                BinOp::Mul => left * right,
                BinOp::Div => left / right,
            }
        }

        Expr::Call { func, arg } => {
            let arg = evaluate(arg);
            match func {
                Func::Sqrt => arg.sqrt(),
                Func::Abs => arg.abs(),
            }
        }

        Expr::Variable(_) => 0.0,
    }
}
