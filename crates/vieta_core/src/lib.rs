//! Quadratic equations solved by Vieta's relations, with a step-by-step derivation.
//!
//! The crate is pure computation: no I/O and no presentation types. Callers
//! validate coefficients (`a ≠ 0`, finite values) before calling [`solve`].

pub mod complex_value;
pub mod numeric;
pub mod solve_result;
pub mod step;
pub mod verification;
pub mod vieta;

pub use complex_value::ComplexValue;
pub use numeric::{fixed4, is_near_zero, plain, TOLERANCE};
pub use solve_result::{RootKind, SolveResult};
pub use step::{SolveStep, StepLog};
pub use verification::{verify, VerifyReport, VerifySummary};
pub use vieta::{equation_display, solve};
