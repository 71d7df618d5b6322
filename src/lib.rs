//! Addup - checked integer addition over string-coercible operands
//!
//! Umbrella crate re-exporting the public surface of the member crates.

pub use addup_arith::{add, add_operands};
pub use addup_coerce::{as_int, parse_int};
pub use addup_value::{AddError, Operand, Span};
