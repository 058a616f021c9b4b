use crate::types::{Gene, Operator, Token};

/// Accumulator for the expression currently being read.
///
/// Only the fields meaningful in a given state exist in that state.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PartialExpression {
    Empty,
    HasFirst(f64),
    HasOperator(f64, Operator),
    Complete(f64, Operator, f64),
}

/// NaN and infinities collapse to 0 so a bad sub-expression seeds the next one with 0.
fn normalize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl PartialExpression {
    fn accept(self, gene: Gene) -> Self {
        // A finished pair is folded before anything else is read
        let state = match self {
            PartialExpression::Complete(first, op, second) => {
                PartialExpression::HasFirst(normalize(op.apply(first, second)))
            }
            other => other,
        };

        match (state, Token::from(gene)) {
            (PartialExpression::Empty, Token::Digit(d)) => PartialExpression::HasFirst(d as f64),
            (PartialExpression::HasOperator(first, op), Token::Digit(d)) => {
                PartialExpression::Complete(first, op, d as f64)
            }
            (PartialExpression::HasFirst(first), Token::Operator(op)) => {
                PartialExpression::HasOperator(first, op)
            }
            // Out-of-grammar tokens are dropped
            (state, _) => state,
        }
    }

    fn resolve(self) -> f64 {
        match self {
            PartialExpression::Complete(first, op, second) => normalize(op.apply(first, second)),
            PartialExpression::HasFirst(first) | PartialExpression::HasOperator(first, _) => first,
            PartialExpression::Empty => 0.0,
        }
    }
}

/// Reduces a gene sequence to a number, strictly left to right with no precedence.
///
/// Total over every input: empty sequences give 0, stray tokens are skipped and
/// divisions by zero heal to 0.
pub fn evaluate(dna: &[Gene]) -> f64 {
    dna.iter()
        .fold(PartialExpression::Empty, |state, gene| state.accept(*gene))
        .resolve()
}
