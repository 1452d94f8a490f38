//! Builtin functions.
//! 内置函数。

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error for a function name outside the builtin set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown function: {0}")]
pub struct UnknownFunction(pub String);

/// A builtin function.
/// 内置函数。
///
/// The set is closed: only `sqrt` and `abs` can be called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    /// Principal square root / 平方根
    Sqrt,
    /// Absolute value / 绝对值
    Abs,
}

impl Func {
    /// Returns the name used to call this function.
    /// 返回调用此函数所用的名称。
    pub fn name(self) -> &'static str {
        match self {
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
        }
    }
}

impl FromStr for Func {
    type Err = UnknownFunction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqrt" => Ok(Func::Sqrt),
            "abs" => Ok(Func::Abs),
            _ => Err(UnknownFunction(s.to_string())),
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
