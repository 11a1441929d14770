use thiserror::Error;

/// Stable classification of every outcome, in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Success,
    DivisionByZero,
    InvalidOperator,
    StackUnderflow,
    MemoryError,
    UndefinedVariable,
    StackMaximum,
    ExpressionLengthMaximum,
    FactorialError,
    SquareRootInvalid,
    LogError,
    LnError,
    TanInvalid,
    InvalidTrig,
}

const KINDS: [ErrorKind; 14] = [
    ErrorKind::Success,
    ErrorKind::DivisionByZero,
    ErrorKind::InvalidOperator,
    ErrorKind::StackUnderflow,
    ErrorKind::MemoryError,
    ErrorKind::UndefinedVariable,
    ErrorKind::StackMaximum,
    ErrorKind::ExpressionLengthMaximum,
    ErrorKind::FactorialError,
    ErrorKind::SquareRootInvalid,
    ErrorKind::LogError,
    ErrorKind::LnError,
    ErrorKind::TanInvalid,
    ErrorKind::InvalidTrig,
];

impl ErrorKind {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<ErrorKind> {
        usize::try_from(code).ok().and_then(|i| KINDS.get(i).copied())
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::Success => "Success",
            ErrorKind::DivisionByZero => "Division by zero",
            ErrorKind::InvalidOperator => "Invalid operator",
            ErrorKind::StackUnderflow => "Stack underflow - invalid expression",
            ErrorKind::MemoryError => "Memory error",
            ErrorKind::UndefinedVariable => "Undefined variable in expression",
            ErrorKind::StackMaximum => "Stack maximum exceeded",
            ErrorKind::ExpressionLengthMaximum => "Expression length maximum exceeded",
            ErrorKind::FactorialError => "Factorial error",
            ErrorKind::SquareRootInvalid => "Square root error",
            ErrorKind::LogError => "Log error",
            ErrorKind::LnError => "Natural logarithm error",
            ErrorKind::TanInvalid => "Invalid operator for tangent",
            ErrorKind::InvalidTrig => "Invalid trigonometric operator",
        }
    }

    /// Domain errors come from well-formed expressions fed bad numbers.
    pub fn is_domain_error(self) -> bool {
        matches!(
            self,
            ErrorKind::DivisionByZero
                | ErrorKind::FactorialError
                | ErrorKind::SquareRootInvalid
                | ErrorKind::LogError
                | ErrorKind::LnError
                | ErrorKind::TanInvalid
                | ErrorKind::InvalidTrig
        )
    }

    /// Structural errors mean the expression itself is malformed.
    pub fn is_structural_error(self) -> bool {
        matches!(
            self,
            ErrorKind::StackUnderflow
                | ErrorKind::StackMaximum
                | ErrorKind::ExpressionLengthMaximum
                | ErrorKind::MemoryError
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid operator '{0}'")]
    InvalidOperator(String),
    #[error("stack underflow - invalid expression")]
    StackUnderflow,
    #[error("memory error")]
    Memory,
    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),
    #[error("stack maximum of {0} slots exceeded")]
    StackMaximum(usize),
    #[error("expression of {len} tokens exceeds maximum of {max}")]
    ExpressionLength { len: usize, max: usize },
    #[error("factorial of {0} is undefined")]
    Factorial(f64),
    #[error("square root of negative number {0}")]
    SquareRoot(f64),
    #[error("log of non-positive number {0}")]
    Log(f64),
    #[error("ln of non-positive number {0}")]
    Ln(f64),
    #[error("tan is undefined at {0}")]
    Tan(f64),
    #[error("{0} is outside [-1, 1]")]
    Trig(f64),
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::DivisionByZero => ErrorKind::DivisionByZero,
            CalcError::InvalidOperator(_) => ErrorKind::InvalidOperator,
            CalcError::StackUnderflow => ErrorKind::StackUnderflow,
            CalcError::Memory => ErrorKind::MemoryError,
            CalcError::UndefinedVariable(_) => ErrorKind::UndefinedVariable,
            CalcError::StackMaximum(_) => ErrorKind::StackMaximum,
            CalcError::ExpressionLength { .. } => ErrorKind::ExpressionLengthMaximum,
            CalcError::Factorial(_) => ErrorKind::FactorialError,
            CalcError::SquareRoot(_) => ErrorKind::SquareRootInvalid,
            CalcError::Log(_) => ErrorKind::LogError,
            CalcError::Ln(_) => ErrorKind::LnError,
            CalcError::Tan(_) => ErrorKind::TanInvalid,
            CalcError::Trig(_) => ErrorKind::InvalidTrig,
        }
    }
}

impl From<std::collections::TryReserveError> for CalcError {
    fn from(_: std::collections::TryReserveError) -> CalcError {
        CalcError::Memory
    }
}

pub type CalcResult<T> = Result<T, CalcError>;

/// Outcome of an evaluation as seen across the boundary: `value` is only
/// meaningful when `error` is `Success`, and is 0.0 otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationResult {
    pub value: f64,
    pub error: ErrorKind,
}

/// Outcome of an infix conversion: `text` is empty unless `error` is `Success`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionResult {
    pub text: String,
    pub error: ErrorKind,
}

impl CalculationResult {
    pub fn is_success(&self) -> bool {
        self.error == ErrorKind::Success
    }

    pub fn into_result(self) -> Result<f64, ErrorKind> {
        if self.is_success() { Ok(self.value) } else { Err(self.error) }
    }
}

impl From<CalcResult<f64>> for CalculationResult {
    fn from(res: CalcResult<f64>) -> CalculationResult {
        match res {
            Ok(value) => CalculationResult { value, error: ErrorKind::Success },
            Err(e) => CalculationResult { value: 0.0, error: e.kind() },
        }
    }
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        self.error == ErrorKind::Success
    }

    pub fn into_result(self) -> Result<String, ErrorKind> {
        if self.is_success() { Ok(self.text) } else { Err(self.error) }
    }
}

impl From<CalcResult<String>> for ConversionResult {
    fn from(res: CalcResult<String>) -> ConversionResult {
        match res {
            Ok(text) => ConversionResult { text, error: ErrorKind::Success },
            Err(e) => ConversionResult { text: String::new(), error: e.kind() },
        }
    }
}
