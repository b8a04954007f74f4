pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced to the engine's host.
///
/// Missing variables and undo on a minimal formula are defined behavior, not
/// errors: an unset variable reads as `0`, and an underflowing undo is a
/// no-op.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("unknown operator: {symbol}")]
    UnknownOperator { symbol: String },

    /// A restored formula log violates the alternating operand/operator
    /// shape the evaluator relies on.
    #[error("malformed formula log")]
    MalformedFormula,
}
