use crate::error::ExprEvolveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One token of an individual. 0-9 are digits, 11-14 operators, the rest inert.
pub type Gene = u8;

/// Inclusive upper bound for randomly drawn genes.
pub const GENE_MAX: Gene = 14;

/// Gene code used when an inert token is written out as `nan`.
pub const NAN_GENE: Gene = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_gene(gene: Gene) -> Option<Self> {
        match gene {
            11 => Some(Operator::Add),
            12 => Some(Operator::Subtract),
            13 => Some(Operator::Multiply),
            14 => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn gene(self) -> Gene {
        match self {
            Operator::Add => 11,
            Operator::Subtract => 12,
            Operator::Multiply => 13,
            Operator::Divide => 14,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Plain IEEE arithmetic; callers decide what to do with NaN or infinity.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => a / b,
        }
    }
}

/// Decoded view of a gene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Digit(u8),
    Operator(Operator),
    Invalid(Gene),
}

impl From<Gene> for Token {
    fn from(gene: Gene) -> Self {
        match gene {
            0..=9 => Token::Digit(gene),
            _ => match Operator::from_gene(gene) {
                Some(op) => Token::Operator(op),
                None => Token::Invalid(gene),
            },
        }
    }
}

impl Token {
    pub fn gene(self) -> Gene {
        match self {
            Token::Digit(d) => d,
            Token::Operator(op) => op.gene(),
            Token::Invalid(gene) => gene,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(d) => write!(f, "{}", d),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::Invalid(_) => write!(f, "nan"),
        }
    }
}

impl FromStr for Token {
    type Err = ExprEvolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Token::Operator(Operator::Add)),
            "-" => Ok(Token::Operator(Operator::Subtract)),
            "*" => Ok(Token::Operator(Operator::Multiply)),
            "/" => Ok(Token::Operator(Operator::Divide)),
            "nan" => Ok(Token::Invalid(NAN_GENE)),
            _ => match s.parse::<u8>() {
                Ok(d) if d <= 9 && s.len() == 1 => Ok(Token::Digit(d)),
                _ => Err(ExprEvolveError::InvalidToken(s.to_string())),
            },
        }
    }
}
