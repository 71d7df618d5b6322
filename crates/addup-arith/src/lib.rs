//! Addition over coercible operands
//!
//! Pure evaluation on top of the coercion layer. No state, no I/O; every
//! failure propagates unchanged to the caller.

use addup_coerce::as_int;
use addup_value::{AddError, Operand};

/// Add two operands, coercing each to an `i64` first
///
/// Operands are coerced left before right; the first coercion failure
/// propagates and the right operand is not inspected.
///
/// # Errors
///
/// Returns the coercion error of the first operand that is not an integer
/// or integer-like string, or `AddError::Overflow` when the sum does not
/// fit in an `i64`.
pub fn add_operands(a: &Operand, b: &Operand) -> Result<i64, AddError> {
    let lhs = as_int(a)?;
    let rhs = as_int(b)?;

    lhs.checked_add(rhs).ok_or(AddError::Overflow { lhs, rhs })
}

/// Add two values convertible to operands
///
/// Convenience form of [`add_operands`] accepting native integers and
/// strings directly: `add(1, 1)`, `add("1", "1")`, `add("-5", 10)`.
///
/// # Errors
///
/// Propagates the errors of [`add_operands`].
pub fn add(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<i64, AddError> {
    add_operands(&a.into(), &b.into())
}
