//! Replay evaluation: fold the formula log into a result and description.
//!
//! Nothing here is cached. The accumulator and the pending binary operation
//! are rebuilt from scratch on every call, which is what makes undo a pure
//! log truncation.

use std::collections::HashMap;

use crate::op::{BinaryOp, Operation};

/// Host-provided variable lookup, consumed per evaluation call.
///
/// The engine never retains or mutates the provider. A name the provider
/// does not know resolves to `0` (a deliberate default, not an error).
pub trait VariableProvider {
    fn value(&self, name: &str) -> Option<f64>;
}

impl VariableProvider for HashMap<String, f64> {
    fn value(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

/// Provider used when the host passes no variables.
pub(crate) struct NoVariables;

impl VariableProvider for NoVariables {
    fn value(&self, _name: &str) -> Option<f64> {
        None
    }
}

/// The outcome of replaying a formula log.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Running value, or `None` when the engine awaits an operand.
    pub result: Option<f64>,
    /// Whether a binary operator is still waiting for its second operand.
    pub is_pending: bool,
    /// Human-readable trace, e.g. `3 + 4 × 2 =` or `3 + ...`.
    pub description: String,
}

/// Running value plus its rendering during replay.
struct Accumulator {
    value: f64,
    visual: String,
}

/// A binary operator with its first operand already bound, awaiting the
/// second. The original design captured the operand in a closure; here it is
/// an explicit struct dispatched through [`BinaryOp::apply`].
struct PendingBinaryOperation {
    op: BinaryOp,
    first_value: f64,
    first_visual: String,
}

impl PendingBinaryOperation {
    fn resolve(self, second: Accumulator) -> Accumulator {
        Accumulator {
            value: self.op.apply(self.first_value, second.value),
            visual: format!(
                "{} {} {}",
                self.first_visual,
                self.op.symbol(),
                second.visual
            ),
        }
    }
}

pub(crate) fn replay(formula: &[Operation], variables: &dyn VariableProvider) -> Evaluation {
    let mut accumulator: Option<Accumulator> = None;
    let mut pending: Option<PendingBinaryOperation> = None;

    for entry in formula {
        match (entry, accumulator.take()) {
            (Operation::Constant { value, label }, None) => {
                let value = value.unwrap_or_else(|| variables.value(label).unwrap_or(0.0));
                accumulator = Some(Accumulator {
                    value,
                    visual: label.clone(),
                });
            }
            (Operation::Unary(op), Some(acc)) => {
                accumulator = Some(Accumulator {
                    value: op.apply(acc.value),
                    visual: op.render(&acc.visual),
                });
            }
            (Operation::Binary(op), Some(acc)) => {
                // An earlier pending operation resolves first: strict
                // left-to-right, no precedence.
                let first = match pending.take() {
                    Some(p) => p.resolve(acc),
                    None => acc,
                };
                pending = Some(PendingBinaryOperation {
                    op: *op,
                    first_value: first.value,
                    first_visual: first.visual,
                });
                // Accumulator stays empty: the engine awaits the second
                // operand.
            }
            (Operation::Equals, Some(acc)) => {
                accumulator = Some(match pending.take() {
                    Some(p) => p.resolve(acc),
                    None => acc,
                });
            }
            // The append rules only admit alternating operand/operator
            // shapes; anything else means the private log was corrupted.
            (entry, acc) => unreachable!(
                "malformed formula log: {entry:?} with accumulator {:?}",
                acc.map(|a| a.value)
            ),
        }
    }

    let is_pending = pending.is_some();
    let description = match (&pending, &accumulator) {
        (Some(p), Some(acc)) => {
            format!("{} {} {} ...", p.first_visual, p.op.symbol(), acc.visual)
        }
        (Some(p), None) => format!("{} {} ...", p.first_visual, p.op.symbol()),
        (None, Some(acc)) => format!("{} =", acc.visual),
        (None, None) => String::new(),
    };

    Evaluation {
        result: accumulator.map(|a| a.value),
        is_pending,
        description,
    }
}

/// Check the alternating operand/operator shape the replay loop relies on.
///
/// `has_operand` mirrors whether the accumulator would be occupied at each
/// step, so a log accepted here can never hit the replay loop's defensive
/// assertion. Every prefix of a well-formed log is itself well-formed, which
/// keeps undo safe.
pub(crate) fn is_well_formed(formula: &[Operation]) -> bool {
    let mut has_operand = false;
    for entry in formula {
        match entry {
            Operation::Constant { .. } => {
                if has_operand {
                    return false;
                }
                has_operand = true;
            }
            Operation::Unary(_) | Operation::Equals => {
                if !has_operand {
                    return false;
                }
            }
            Operation::Binary(_) => {
                if !has_operand {
                    return false;
                }
                has_operand = false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::UnaryOp;
    use pretty_assertions::assert_eq;

    fn constant(value: f64, label: &str) -> Operation {
        Operation::Constant {
            value: Some(value),
            label: label.to_string(),
        }
    }

    #[test]
    fn empty_log_yields_no_result_and_empty_description() {
        let eval = replay(&[], &NoVariables);
        assert_eq!(eval.result, None);
        assert!(!eval.is_pending);
        assert_eq!(eval.description, "");
    }

    #[test]
    fn pending_operation_resolves_before_the_next_operator_binds() {
        let formula = vec![
            constant(3.0, "3"),
            Operation::Binary(BinaryOp::Add),
            constant(4.0, "4"),
            Operation::Binary(BinaryOp::Mul),
            constant(2.0, "2"),
            Operation::Equals,
        ];
        let eval = replay(&formula, &NoVariables);
        assert_eq!(eval.result, Some(14.0));
        assert!(!eval.is_pending);
        assert_eq!(eval.description, "3 + 4 × 2 =");
    }

    #[test]
    fn variable_reference_resolves_through_the_provider() {
        let formula = vec![
            Operation::Constant {
                value: None,
                label: "M".to_string(),
            },
            Operation::Binary(BinaryOp::Add),
            constant(5.0, "5"),
            Operation::Equals,
        ];

        let mut vars = HashMap::new();
        vars.insert("M".to_string(), 7.0);
        assert_eq!(replay(&formula, &vars).result, Some(12.0));

        // Unset variables default to zero.
        assert_eq!(replay(&formula, &NoVariables).result, Some(5.0));
    }

    #[test]
    fn well_formedness_rejects_out_of_shape_logs() {
        assert!(is_well_formed(&[]));
        assert!(is_well_formed(&[
            constant(1.0, "1"),
            Operation::Binary(BinaryOp::Add),
            constant(2.0, "2"),
            Operation::Equals,
        ]));
        assert!(is_well_formed(&[
            constant(5.0, "5"),
            Operation::Unary(UnaryOp::Sqrt),
            Operation::Equals,
        ]));

        // Operand while one is already in place.
        assert!(!is_well_formed(&[constant(1.0, "1"), constant(2.0, "2")]));
        // Operators with no operand to act on.
        assert!(!is_well_formed(&[Operation::Unary(UnaryOp::Sqrt)]));
        assert!(!is_well_formed(&[
            constant(1.0, "1"),
            Operation::Binary(BinaryOp::Add),
            Operation::Equals,
        ]));
        assert!(!is_well_formed(&[
            constant(1.0, "1"),
            Operation::Binary(BinaryOp::Add),
            Operation::Binary(BinaryOp::Mul),
        ]));
    }
}
