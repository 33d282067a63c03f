pub mod types;
pub mod env;
pub mod error;
pub mod config;
pub mod checker;
pub mod expr;
pub mod stmt;

pub use checker::TypeChecker;
pub use config::{CheckerConfig, OperandChecking};
pub use env::{FunctionEnv, Signature, TypeEnv};
pub use error::{TypeError, TypeResult};
pub use types::{BinOp, Type};

use crate::ast::{Expr, Stmt};

/// Checks a whole program with the default configuration.
pub fn typecheck(stmts: &[Stmt<()>]) -> TypeResult<Vec<Stmt<Type>>> {
    TypeChecker::check_program(stmts, CheckerConfig::default())
}

pub fn typecheck_with_config(stmts: &[Stmt<()>], config: CheckerConfig) -> TypeResult<Vec<Stmt<Type>>> {
    TypeChecker::check_program(stmts, config)
}

/// Checks one expression against the given environments. Neither is modified.
pub fn check_expr(expr: &Expr<()>, functions: &FunctionEnv, vars: &TypeEnv) -> TypeResult<Expr<Type>> {
    let checker = TypeChecker::with_env(functions, vars.clone(), CheckerConfig::default());
    checker.check_expr(expr)
}

/// Checks one statement. New bindings are written into `vars`.
pub fn check_stmt(
    stmt: &Stmt<()>,
    functions: &FunctionEnv,
    vars: &mut TypeEnv,
    return_type: Type,
) -> TypeResult<Stmt<Type>> {
    let mut checker = TypeChecker::with_env(functions, std::mem::take(vars), CheckerConfig::default());
    checker.return_type = return_type;
    let result = checker.check_stmt(stmt);
    *vars = checker.env;
    result
}
