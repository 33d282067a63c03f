use std::fmt;

use crate::typechecker::types::Type;

/// An expression node. `A` is the annotation: `()` before checking,
/// `Type` after.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr<A> {
    pub kind: ExprKind<A>,
    pub a: A,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind<A> {
    // 整数字面量
    Number(i64),
    // true / false
    Bool(bool),
    // None 字面量
    None,
    // 二元操作，运算符保留源码文本
    BinOp {
        op: String,
        left: Box<Expr<A>>,
        right: Box<Expr<A>>,
    },
    // 变量引用
    Id(String),
    // 函数调用
    Call { name: String, args: Vec<Expr<A>> },
}

/// A parameter with its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedVar {
    pub name: String,
    pub typ: Type,
}

impl TypedVar {
    pub fn new(name: &str, typ: Type) -> Self {
        TypedVar {
            name: name.to_string(),
            typ,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunDef<A> {
    pub name: String,
    pub params: Vec<TypedVar>,
    pub ret: Type,
    pub body: Vec<Stmt<A>>,
}

impl<A> FunDef<A> {
    pub fn param_types(&self) -> Vec<Type> {
        self.params.iter().map(|p| p.typ).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt<A> {
    pub kind: StmtKind<A>,
    pub a: A,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind<A> {
    // 赋值（首次赋值即声明）
    Assign { name: String, value: Expr<A> },
    // 函数定义
    Define(FunDef<A>),
    // 表达式语句
    Expr(Expr<A>),
    Return(Expr<A>),
    Pass,
}

// Builders for untyped trees, as produced by a parser.
impl Expr<()> {
    pub fn new(kind: ExprKind<()>) -> Self {
        Expr { kind, a: () }
    }

    pub fn number(n: i64) -> Self {
        Self::new(ExprKind::Number(n))
    }

    pub fn bool(b: bool) -> Self {
        Self::new(ExprKind::Bool(b))
    }

    pub fn none() -> Self {
        Self::new(ExprKind::None)
    }

    pub fn binop(op: &str, left: Expr<()>, right: Expr<()>) -> Self {
        Self::new(ExprKind::BinOp {
            op: op.to_string(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn id(name: &str) -> Self {
        Self::new(ExprKind::Id(name.to_string()))
    }

    pub fn call(name: &str, args: Vec<Expr<()>>) -> Self {
        Self::new(ExprKind::Call {
            name: name.to_string(),
            args,
        })
    }
}

impl Stmt<()> {
    pub fn new(kind: StmtKind<()>) -> Self {
        Stmt { kind, a: () }
    }

    pub fn assign(name: &str, value: Expr<()>) -> Self {
        Self::new(StmtKind::Assign {
            name: name.to_string(),
            value,
        })
    }

    pub fn define(name: &str, params: Vec<TypedVar>, ret: Type, body: Vec<Stmt<()>>) -> Self {
        Self::new(StmtKind::Define(FunDef {
            name: name.to_string(),
            params,
            ret,
            body,
        }))
    }

    pub fn expr(expr: Expr<()>) -> Self {
        Self::new(StmtKind::Expr(expr))
    }

    pub fn ret(value: Expr<()>) -> Self {
        Self::new(StmtKind::Return(value))
    }

    pub fn pass() -> Self {
        Self::new(StmtKind::Pass)
    }
}

impl Expr<Type> {
    pub fn ty(&self) -> Type {
        self.a
    }
}

impl Stmt<Type> {
    pub fn ty(&self) -> Type {
        self.a
    }
}

// Annotated trees print every node followed by its type, e.g. `f(3 : int) : int`.
impl fmt::Display for Expr<Type> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(n) => write!(f, "{}", n)?,
            ExprKind::Bool(true) => write!(f, "True")?,
            ExprKind::Bool(false) => write!(f, "False")?,
            ExprKind::None => write!(f, "None")?,
            ExprKind::BinOp { op, left, right } => write!(f, "({} {} {})", left, op, right)?,
            ExprKind::Id(name) => write!(f, "{}", name)?,
            ExprKind::Call { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")?;
            }
        }
        write!(f, " : {}", self.a)
    }
}

impl Stmt<Type> {
    fn fmt_indented(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        let indent = "    ".repeat(depth);
        match &self.kind {
            StmtKind::Assign { name, value } => writeln!(f, "{}{} = {}", indent, name, value),
            StmtKind::Define(def) => {
                write!(f, "{}def {}(", indent, def.name)?;
                for (i, param) in def.params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", param.name, param.typ)?;
                }
                writeln!(f, ") -> {}:", def.ret)?;
                for stmt in &def.body {
                    stmt.fmt_indented(f, depth + 1)?;
                }
                Ok(())
            }
            StmtKind::Expr(expr) => writeln!(f, "{}{}", indent, expr),
            StmtKind::Return(value) => writeln!(f, "{}return {}", indent, value),
            StmtKind::Pass => writeln!(f, "{}pass", indent),
        }
    }
}

impl fmt::Display for Stmt<Type> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
