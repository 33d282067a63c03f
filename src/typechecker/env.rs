use std::collections::HashMap;
use std::fmt;

use crate::ast::TypedVar;
use crate::typechecker::types::Type;

/// A function's parameter types in declared order plus its return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub params: Vec<Type>,
    pub ret: Type,
}

impl Signature {
    pub fn new(params: Vec<Type>, ret: Type) -> Self {
        Signature { params, ret }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ") -> {}", self.ret)
    }
}

// 函数签名环境
#[derive(Debug, Clone, Default)]
pub struct FunctionEnv {
    functions: HashMap<String, Signature>,
}

impl FunctionEnv {
    pub fn new() -> Self {
        FunctionEnv {
            functions: HashMap::new(),
        }
    }

    /// Registers a signature. Returns the previous one if the name was taken.
    pub fn add_function(&mut self, name: String, sig: Signature) -> Option<Signature> {
        self.functions.insert(name, sig)
    }

    pub fn get_function(&self, name: &str) -> Option<&Signature> {
        self.functions.get(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

// 变量作用域
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeEnv {
    vars: HashMap<String, Type>,
}

impl TypeEnv {
    pub fn new() -> Self {
        TypeEnv {
            vars: HashMap::new(),
        }
    }

    pub fn add_var(&mut self, name: String, ty: Type) {
        self.vars.insert(name, ty);
    }

    pub fn get_var(&self, name: &str) -> Option<Type> {
        self.vars.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Scope for a function body: a copy of this scope with the parameters
    /// bound on top. Parameters shadow outer variables of the same name.
    pub fn clone_for_body(&self, params: &[TypedVar]) -> Self {
        let mut body = self.clone();
        for param in params {
            body.add_var(param.name.clone(), param.typ);
        }
        body
    }
}
