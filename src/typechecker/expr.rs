use log::trace;

use crate::ast::{Expr, ExprKind};
use crate::typechecker::checker::TypeChecker;
use crate::typechecker::config::OperandChecking;
use crate::typechecker::error::{TypeError, TypeResult};
use crate::typechecker::types::{BinOp, Type};

/// Built-in that accepts exactly one argument of any type.
pub const PRINT: &str = "print";

pub struct ExprTypeChecker<'a, 'f> {
    checker: &'a TypeChecker<'f>,
}

impl<'a, 'f> ExprTypeChecker<'a, 'f> {
    pub fn new(checker: &'a TypeChecker<'f>) -> Self {
        ExprTypeChecker { checker }
    }

    // 检查表达式并标注类型
    pub fn check_expr(&self, expr: &Expr<()>) -> TypeResult<Expr<Type>> {
        let (kind, ty) = match &expr.kind {
            ExprKind::Number(n) => (ExprKind::Number(*n), Type::Int),
            ExprKind::Bool(b) => (ExprKind::Bool(*b), Type::Bool),
            ExprKind::None => (ExprKind::None, Type::None),
            ExprKind::BinOp { op, left, right } => return self.check_binary_expr(op, left, right),
            ExprKind::Id(name) => match self.checker.env.get_var(name) {
                Some(ty) => (ExprKind::Id(name.clone()), ty),
                None => return Err(TypeError::UnboundIdentifier(name.clone())),
            },
            ExprKind::Call { name, args } => return self.check_call(name, args),
        };
        trace!("{:?} : {}", kind, ty);
        Ok(Expr { kind, a: ty })
    }

    // The operator alone decides the result type. Operands are always
    // annotated; their types are only validated in strict mode.
    fn check_binary_expr(&self, op: &str, left: &Expr<()>, right: &Expr<()>) -> TypeResult<Expr<Type>> {
        let bin_op: BinOp = op.parse()?;
        let left = self.check_expr(left)?;
        let right = self.check_expr(right)?;

        if self.checker.config.operands == OperandChecking::Strict {
            let expected = bin_op.operand_type();
            for operand in [&left, &right] {
                if operand.ty() != expected {
                    return Err(TypeError::OperandTypeMismatch {
                        op: op.to_string(),
                        expected,
                        actual: operand.ty(),
                    });
                }
            }
        }

        trace!("binop {} : {}", bin_op, bin_op.result_type());
        Ok(Expr {
            kind: ExprKind::BinOp {
                op: op.to_string(),
                left: Box::new(left),
                right: Box::new(right),
            },
            a: bin_op.result_type(),
        })
    }

    fn check_call(&self, name: &str, args: &[Expr<()>]) -> TypeResult<Expr<Type>> {
        if name == PRINT {
            return self.check_print(args);
        }

        let sig = self
            .checker
            .functions
            .get_function(name)
            .ok_or_else(|| TypeError::UnknownFunction(name.to_string()))?;

        if sig.arity() != args.len() {
            return Err(TypeError::ArityMismatch {
                name: name.to_string(),
                expected: sig.arity(),
                actual: args.len(),
            });
        }

        let mut typed_args = Vec::with_capacity(args.len());
        for (i, (arg, expected)) in args.iter().zip(sig.params.iter()).enumerate() {
            let typed = self.check_expr(arg)?;
            if typed.ty() != *expected {
                return Err(TypeError::ArgumentTypeMismatch {
                    name: name.to_string(),
                    position: i + 1,
                    expected: *expected,
                    actual: typed.ty(),
                });
            }
            typed_args.push(typed);
        }

        trace!("call {}{} : {}", name, sig, sig.ret);
        Ok(Expr {
            kind: ExprKind::Call {
                name: name.to_string(),
                args: typed_args,
            },
            a: sig.ret,
        })
    }

    fn check_print(&self, args: &[Expr<()>]) -> TypeResult<Expr<Type>> {
        let [arg] = args else {
            return Err(TypeError::ArityMismatch {
                name: PRINT.to_string(),
                expected: 1,
                actual: args.len(),
            });
        };

        let arg = self.check_expr(arg)?;
        Ok(Expr {
            kind: ExprKind::Call {
                name: PRINT.to_string(),
                args: vec![arg],
            },
            a: Type::None,
        })
    }
}
