#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! A calculator expression engine built around a replayable operation log.
//!
//! The engine's only persisted state is the **formula**: an append-only log of
//! [`Operation`] entries (constants, variable references, unary and binary
//! operators, equals). Every query replays the whole log from scratch, so
//! [`Engine::undo`] is just "truncate the log" — there is no running state to
//! patch up.
//!
//! Evaluation is strictly left-to-right with immediate binary resolution;
//! there is no operator precedence. Variable references are resolved per call
//! through a host-provided [`VariableProvider`] (an unset variable reads as
//! `0`), so the engine never owns or mutates the variable store.
//!
//! ```
//! use calc_engine::Engine;
//!
//! let mut engine = Engine::new();
//! engine.set_operand(3.0);
//! engine.perform_operation("+")?;
//! engine.set_operand(4.0);
//! engine.perform_operation("×")?;
//! engine.set_operand(2.0);
//! engine.perform_operation("=")?;
//!
//! let eval = engine.evaluate();
//! assert_eq!(eval.result, Some(14.0));
//! assert_eq!(eval.description, "3 + 4 × 2 =");
//! # Ok::<(), calc_engine::EngineError>(())
//! ```

mod engine;
mod eval;

pub mod error;
pub mod input;
pub mod op;
pub mod vars;

pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use eval::{Evaluation, VariableProvider};
pub use input::DigitBuffer;
pub use op::{BinaryOp, Operation, UnaryOp};
pub use vars::VariableStore;
