use crate::error::Result;
use crate::types::{Gene, Token};

/// Genome representation for the expression search
///
/// A genome (DNA) is a fixed-length sequence of genes read left to right by the
/// expression evaluator. Each gene is a small integer token:
/// - `0..=9`: operand digits
/// - `11..=14`: `+ - * /`
/// - anything else: inert, skipped by the evaluator
///
/// # Why a flat sequence?
///
/// Crossover is a single slice swap and mutation a per-gene redraw, and every
/// sequence evaluates to some number, so the operators never produce invalid
/// individuals.
///
/// # Example
///
/// ```
/// use exprevolve::engines::generation::genome::{parse, render};
///
/// let dna = parse("1 + 2 - 5 * 2").unwrap();
/// assert_eq!(dna, vec![1, 11, 2, 12, 5, 13, 2]);
/// assert_eq!(render(&dna), "1 + 2 - 5 * 2");
/// ```
pub type Dna = Vec<Gene>;

/// Human-readable token string, tokens separated by single spaces
pub fn render(dna: &[Gene]) -> String {
    dna.iter()
        .map(|gene| Token::from(*gene).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a whitespace-separated token string back into genes
pub fn parse(text: &str) -> Result<Dna> {
    text.split_whitespace()
        .map(|tok| tok.parse::<Token>().map(Token::gene))
        .collect()
}
