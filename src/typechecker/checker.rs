use log::debug;

use crate::ast::{Expr, FunDef, Stmt, StmtKind};
use crate::typechecker::config::CheckerConfig;
use crate::typechecker::env::{FunctionEnv, Signature, TypeEnv};
use crate::typechecker::error::{TypeError, TypeResult};
use crate::typechecker::expr::{ExprTypeChecker, PRINT};
use crate::typechecker::stmt::StmtTypeChecker;
use crate::typechecker::types::Type;

// 类型检查器：一个作用域的检查上下文
pub struct TypeChecker<'f> {
    pub functions: &'f FunctionEnv,
    pub env: TypeEnv,
    /// Declared return type of the enclosing function, `none` at top level.
    pub return_type: Type,
    pub in_function: bool,
    pub config: CheckerConfig,
}

impl<'f> TypeChecker<'f> {
    /// Checker for the top level of a program.
    pub fn new(functions: &'f FunctionEnv, config: CheckerConfig) -> Self {
        TypeChecker {
            functions,
            env: TypeEnv::new(),
            return_type: Type::None,
            in_function: false,
            config,
        }
    }

    pub fn with_env(functions: &'f FunctionEnv, env: TypeEnv, config: CheckerConfig) -> Self {
        TypeChecker {
            env,
            ..Self::new(functions, config)
        }
    }

    /// Checker for a function body, seeded from a snapshot of this scope.
    pub fn function_body(&self, def: &FunDef<()>) -> TypeChecker<'f> {
        TypeChecker {
            functions: self.functions,
            env: self.env.clone_for_body(&def.params),
            return_type: def.ret,
            in_function: true,
            config: self.config,
        }
    }

    pub fn check_expr(&self, expr: &Expr<()>) -> TypeResult<Expr<Type>> {
        ExprTypeChecker::new(self).check_expr(expr)
    }

    pub fn check_stmt(&mut self, stmt: &Stmt<()>) -> TypeResult<Stmt<Type>> {
        StmtTypeChecker::new(self).check_stmt(stmt)
    }

    // 第一遍：登记所有顶层函数签名，函数之间可以任意顺序相互调用
    pub fn hoist_functions(stmts: &[Stmt<()>]) -> TypeResult<FunctionEnv> {
        let mut functions = FunctionEnv::new();
        for stmt in stmts {
            if let StmtKind::Define(def) = &stmt.kind {
                let sig = Signature::new(def.param_types(), def.ret);
                debug!("hoist {}{}", def.name, sig);
                if def.name == PRINT || functions.add_function(def.name.clone(), sig).is_some() {
                    return Err(TypeError::DuplicateFunction(def.name.clone()));
                }
            }
        }
        Ok(functions)
    }

    // 第二遍：按源码顺序检查顶层语句
    pub fn check_program(stmts: &[Stmt<()>], config: CheckerConfig) -> TypeResult<Vec<Stmt<Type>>> {
        debug!("checking program of {} statement(s)", stmts.len());
        let functions = Self::hoist_functions(stmts)?;
        let mut checker = TypeChecker::new(&functions, config);

        let typed = stmts
            .iter()
            .map(|stmt| checker.check_stmt(stmt))
            .collect::<TypeResult<Vec<_>>>()
            .inspect_err(|e| debug!("check failed: {}", e))?;

        debug!(
            "program checked: {} function(s), {} global(s)",
            functions.len(),
            checker.env.len()
        );
        Ok(typed)
    }
}
