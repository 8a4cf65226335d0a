use crate::domain::model::Operand;
use crate::domain::ports::IntoOperand;
use crate::utils::error::Result;

/// Adds two operands.
///
/// `Int + Int` stays an integer (widening to `Float` on overflow); any float
/// operand makes the result a float. Non-numeric input, such as text that
/// does not parse as a number, fails with `CalcError::InvalidOperand`
/// naming the rejected operand. The left operand is checked first.
pub fn sum<A, B>(a: A, b: B) -> Result<Operand>
where
    A: IntoOperand,
    B: IntoOperand,
{
    let a = a.into_operand().map_err(|e| e.for_operand("a"))?;
    let b = b.into_operand().map_err(|e| e.for_operand("b"))?;

    let result = a + b;
    tracing::trace!(%a, %b, %result, "sum");
    Ok(result)
}
