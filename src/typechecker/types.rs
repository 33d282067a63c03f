use std::fmt;
use std::str::FromStr;

use crate::typechecker::error::TypeError;

// 值类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Bool,
    None,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Bool => write!(f, "bool"),
            Type::None => write!(f, "none"),
        }
    }
}

/// Converts a type annotation as written in source (`int`, `bool`, `none`).
impl FromStr for Type {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(Type::Int),
            "bool" => Ok(Type::Bool),
            "none" => Ok(Type::None),
            other => Err(TypeError::UnknownType(other.to_string())),
        }
    }
}

// 二元运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Gt,
    And,
    Or,
}

impl BinOp {
    /// Type of the whole operation. Depends only on the operator.
    pub fn result_type(self) -> Type {
        match self {
            BinOp::Add | BinOp::Sub => Type::Int,
            BinOp::Gt | BinOp::And | BinOp::Or => Type::Bool,
        }
    }

    /// Type both operands must have when operands are validated.
    pub fn operand_type(self) -> Type {
        match self {
            BinOp::Add | BinOp::Sub | BinOp::Gt => Type::Int,
            BinOp::And | BinOp::Or => Type::Bool,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Gt => ">",
            BinOp::And => "and",
            BinOp::Or => "or",
        }
    }
}

impl FromStr for BinOp {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(BinOp::Add),
            "-" => Ok(BinOp::Sub),
            ">" => Ok(BinOp::Gt),
            "and" => Ok(BinOp::And),
            "or" => Ok(BinOp::Or),
            other => Err(TypeError::UnsupportedOperator(other.to_string())),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
