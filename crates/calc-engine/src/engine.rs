use crate::error::{EngineError, EngineResult};
use crate::eval::{self, Evaluation, NoVariables, VariableProvider};
use crate::op::Operation;

/// The expression engine.
///
/// Holds the formula log and nothing else. The log always contains at least
/// one entry; a fresh engine starts as `[Constant(0, "0")]`.
///
/// Not internally synchronized: a multi-threaded host must serialize
/// mutating calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    formula: Vec<Operation>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            formula: vec![Operation::Constant {
                value: Some(0.0),
                label: "0".to_string(),
            }],
        }
    }

    /// Restore a previously snapshotted log (see [`Engine::formula`]).
    ///
    /// The log must have the alternating operand/operator shape the engine
    /// itself produces; an empty snapshot restores a fresh engine.
    pub fn from_formula(formula: Vec<Operation>) -> EngineResult<Self> {
        if !eval::is_well_formed(&formula) {
            return Err(EngineError::MalformedFormula);
        }
        if formula.is_empty() {
            return Ok(Self::new());
        }
        Ok(Self { formula })
    }

    /// The formula log, for display or host-side snapshots.
    pub fn formula(&self) -> &[Operation] {
        &self.formula
    }

    /// Append a literal operand, labelled in general number form.
    pub fn set_operand(&mut self, value: f64) {
        self.push_constant(Some(value), calc_format::general(value));
    }

    /// Append a literal operand with an explicit label (constant buttons,
    /// variable store echo).
    pub fn set_named_operand(&mut self, value: f64, name: &str) {
        self.push_constant(Some(value), name.to_string());
    }

    /// Append a variable reference, resolved against the host's variables on
    /// every evaluation.
    pub fn set_variable(&mut self, name: &str) {
        self.push_constant(None, name.to_string());
    }

    /// Append the operation behind a button symbol.
    pub fn perform_operation(&mut self, symbol: &str) -> EngineResult<()> {
        let Some(operation) = Operation::from_symbol(symbol) else {
            log::warn!("unknown operator: {symbol}");
            return Err(EngineError::UnknownOperator {
                symbol: symbol.to_string(),
            });
        };
        match operation {
            Operation::Constant { value, label } => match value {
                // Table constants always carry a literal value.
                Some(value) => self.set_named_operand(value, &label),
                None => self.set_variable(&label),
            },
            Operation::Unary(_) => {
                // A unary press needs an operand in flight to act on;
                // pressed right after a binary operator it is ignored.
                if matches!(self.formula.last(), Some(Operation::Binary(_))) {
                    log::debug!("ignoring unary {symbol}: no operand in flight");
                    return Ok(());
                }
                self.formula.push(operation);
            }
            Operation::Binary(_) | Operation::Equals => {
                // Pressing an operator twice replaces the previous choice,
                // one level deep.
                if matches!(self.formula.last(), Some(Operation::Binary(_))) {
                    self.formula.pop();
                }
                self.formula.push(operation);
            }
        }
        Ok(())
    }

    /// Remove the last log entry. A minimal (single-entry) formula is left
    /// untouched; the next evaluation recomputes everything from the
    /// remaining entries.
    pub fn undo(&mut self) {
        if self.formula.len() > 1 {
            self.formula.pop();
        }
    }

    /// Reset to the fresh `[Constant(0, "0")]` log.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Replay the log with no variables in scope.
    pub fn evaluate(&self) -> Evaluation {
        eval::replay(&self.formula, &NoVariables)
    }

    /// Replay the log, resolving variable references through `variables`.
    pub fn evaluate_with(&self, variables: &impl VariableProvider) -> Evaluation {
        eval::replay(&self.formula, variables)
    }

    fn push_constant(&mut self, value: Option<f64>, label: String) {
        // Walk back over the operand segment in flight: a constant plus any
        // unary applications on top of it.
        let mut keep = self.formula.len();
        while keep > 0
            && matches!(
                self.formula[keep - 1],
                Operation::Unary(_) | Operation::Constant { .. }
            )
        {
            keep -= 1;
        }
        if keep == 0 || matches!(self.formula[keep - 1], Operation::Equals) {
            // Closed expression: a new operand starts a fresh calculation.
            log::debug!("closed expression; starting a fresh formula log");
            self.formula.clear();
        } else {
            // A binary operator is still open; the new operand replaces the
            // segment and becomes its second operand.
            self.formula.truncate(keep);
        }
        self.formula.push(Operation::Constant { value, label });
    }
}
