use exprevolve::engines::evaluation::{evaluate, fitness};
use exprevolve::engines::generation::{parse, render};

const ADD: u8 = 11;
const SUB: u8 = 12;
const MUL: u8 = 13;
const DIV: u8 = 14;
const NAN: u8 = 15;

#[test]
fn test_reference_vectors() {
    let cases: Vec<(Vec<u8>, f64)> = vec![
        (vec![1, ADD, 2, SUB, 5, MUL, 2], -4.0),
        (vec![1, 2, 3, ADD, ADD, 2, 4], 3.0),
        (vec![1, 2, MUL, MUL, 3, ADD, ADD, 2, 4], 5.0),
        (vec![DIV, 3, SUB, DIV, 0, NAN, ADD, 2, DIV, 5], 1.0),
        (vec![3, DIV, 0, SUB, 2], -2.0),
    ];

    for (dna, expected) in cases {
        assert_eq!(evaluate(&dna), expected, "evaluating {}", render(&dna));
    }
}

#[test]
fn test_parsed_vectors_match_gene_vectors() {
    assert_eq!(evaluate(&parse("1 + 2 - 5 * 2").unwrap()), -4.0);
    assert_eq!(evaluate(&parse("/ 3 - / 0 nan + 2 / 5").unwrap()), 1.0);
    assert_eq!(evaluate(&parse("3 / 0 - 2").unwrap()), -2.0);
}

#[test]
fn test_evaluation_is_deterministic() {
    let dna = vec![9, MUL, 9, DIV, 0, 10, ADD, 7, SUB, 3, MUL, 4];
    let first = evaluate(&dna);
    for _ in 0..100 {
        assert_eq!(evaluate(&dna), first);
    }
}

#[test]
fn test_evaluation_is_total_over_all_short_sequences() {
    // Every sequence of length 3 over the full gene range (plus an out-of-range code)
    let genes: Vec<u8> = (0..=15).chain(std::iter::once(200)).collect();
    for a in &genes {
        for b in &genes {
            for c in &genes {
                let value = evaluate(&[*a, *b, *c]);
                assert!(value.is_finite(), "{:?} gave {}", [a, b, c], value);
            }
        }
    }
}

#[test]
fn test_fitness_zero_iff_exact() {
    let dna = parse("4 * 5 + 3").unwrap();
    assert_eq!(fitness(&dna, 23.0), 0.0);
    assert!(fitness(&dna, 23.5) > 0.0);
    assert!(fitness(&dna, -23.0) > 0.0);
}
