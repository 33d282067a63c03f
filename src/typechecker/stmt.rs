use log::{debug, trace};

use crate::ast::{Expr, FunDef, Stmt, StmtKind};
use crate::typechecker::checker::TypeChecker;
use crate::typechecker::error::{TypeError, TypeResult};
use crate::typechecker::types::Type;

pub struct StmtTypeChecker<'a, 'f> {
    checker: &'a mut TypeChecker<'f>,
}

impl<'a, 'f> StmtTypeChecker<'a, 'f> {
    pub fn new(checker: &'a mut TypeChecker<'f>) -> Self {
        StmtTypeChecker { checker }
    }

    // 检查语句并标注类型
    pub fn check_stmt(&mut self, stmt: &Stmt<()>) -> TypeResult<Stmt<Type>> {
        let (kind, ty) = match &stmt.kind {
            StmtKind::Assign { name, value } => (self.check_assign(name, value)?, Type::None),
            StmtKind::Define(def) => (StmtKind::Define(self.check_define(def)?), Type::None),
            StmtKind::Expr(expr) => (StmtKind::Expr(self.checker.check_expr(expr)?), Type::None),
            StmtKind::Return(value) => {
                let value = self.check_return(value)?;
                let ty = value.ty();
                (StmtKind::Return(value), ty)
            }
            StmtKind::Pass => (StmtKind::Pass, Type::None),
        };
        Ok(Stmt { kind, a: ty })
    }

    // The first assignment to a name fixes its type for the rest of the scope.
    fn check_assign(&mut self, name: &str, value: &Expr<()>) -> TypeResult<StmtKind<Type>> {
        let value = self.checker.check_expr(value)?;

        match self.checker.env.get_var(name) {
            Some(expected) if expected != value.ty() => {
                return Err(TypeError::AssignmentTypeConflict {
                    name: name.to_string(),
                    expected,
                    actual: value.ty(),
                });
            }
            Some(_) => trace!("reassign {} : {}", name, value.ty()),
            None => {
                debug!("bind {} : {}", name, value.ty());
                self.checker.env.add_var(name.to_string(), value.ty());
            }
        }

        Ok(StmtKind::Assign {
            name: name.to_string(),
            value,
        })
    }

    // The body is checked against a copy of the enclosing scope, so nothing
    // bound inside it is visible once the definition is done.
    fn check_define(&mut self, def: &FunDef<()>) -> TypeResult<FunDef<Type>> {
        if self.checker.in_function {
            return Err(TypeError::NestedFunction(def.name.clone()));
        }

        debug!("checking body of {}", def.name);
        let mut fn_checker = self.checker.function_body(def);
        let body = def
            .body
            .iter()
            .map(|stmt| fn_checker.check_stmt(stmt))
            .collect::<TypeResult<Vec<_>>>()?;

        Ok(FunDef {
            name: def.name.clone(),
            params: def.params.clone(),
            ret: def.ret,
            body,
        })
    }

    fn check_return(&mut self, value: &Expr<()>) -> TypeResult<Expr<Type>> {
        let value = self.checker.check_expr(value)?;
        if value.ty() != self.checker.return_type {
            return Err(TypeError::ReturnTypeMismatch {
                expected: self.checker.return_type,
                actual: value.ty(),
            });
        }
        Ok(value)
    }
}
