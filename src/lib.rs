pub mod ast;
pub mod typechecker;

pub use typechecker::{check_expr, check_stmt, typecheck, typecheck_with_config};
