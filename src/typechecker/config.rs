/// How binary-operation operands are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperandChecking {
    /// Operands are checked and annotated, but any operand type is accepted.
    /// The operator alone decides the result type.
    #[default]
    Permissive,
    /// `+`, `-` and `>` require `int` operands; `and` and `or` require `bool`.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckerConfig {
    pub operands: OperandChecking,
}

impl CheckerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self::new().with_operands(OperandChecking::Strict)
    }

    pub fn with_operands(mut self, operands: OperandChecking) -> Self {
        self.operands = operands;
        self
    }
}
