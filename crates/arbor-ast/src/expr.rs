//! Expression AST nodes.
//! 表达式 AST 节点。

use std::fmt;

use crate::Func;

/// An arithmetic expression.
/// 算术表达式。
///
/// The four node kinds form a closed set. Interior nodes own their
/// children exclusively through `Box`: a child is never null, never
/// shared between trees, and is dropped depth-first together with its
/// parent. No node is mutated after construction; transformations build
/// new trees instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Floating-point literal / 浮点数字面量
    Number(f64),
    /// Binary operation `left op right` / 二元运算
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Call to a builtin function `func(arg)` / 内置函数调用
    Call { func: Func, arg: Box<Expr> },
    /// Variable reference / 变量引用
    Variable(String),
}

impl Expr {
    /// Create a number literal.
    /// 创建数字字面量。
    pub fn number(value: f64) -> Expr {
        Expr::Number(value)
    }

    /// Create a binary operation over two owned operands.
    /// 创建二元运算，拥有左右两个操作数。
    pub fn binary(left: Expr, op: BinOp, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a function call from a function name.
    /// 通过函数名创建函数调用。
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a builtin function. An unknown name is a
    /// defect in the caller, not a recoverable runtime condition; use
    /// [`str::parse`] on [`Func`] for a fallible lookup.
    pub fn call(name: &str, arg: Expr) -> Expr {
        let func = name.parse::<Func>().unwrap_or_else(|err| panic!("{err}"));
        Expr::call_fn(func, arg)
    }

    /// Create a function call from an already-resolved function.
    /// 通过已解析的函数创建函数调用。
    pub fn call_fn(func: Func, arg: Expr) -> Expr {
        Expr::Call {
            func,
            arg: Box::new(arg),
        }
    }

    /// Create a variable reference.
    /// 创建变量引用。
    pub fn variable(name: impl Into<String>) -> Expr {
        Expr::Variable(name.into())
    }

    /// Returns true if this node is a number literal.
    /// 如果此节点是数字字面量则返回 true。
    pub fn is_number(&self) -> bool {
        matches!(self, Expr::Number(_))
    }

    /// Try to read this node as a number literal.
    /// 尝试将此节点读取为数字字面量。
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expr::Number(value) => Some(*value),
            _ => None,
        }
    }
}

/// Binary operators.
/// 二元运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl BinOp {
    /// Returns the source-level symbol for this operator.
    /// 返回此运算符的符号。
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Expr::Call { func, arg } => write!(f, "{}({})", func, arg),
            Expr::Variable(name) => write!(f, "{}", name),
        }
    }
}
