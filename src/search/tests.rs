use pretty_assertions::assert_eq;

use crate::checker::CandidateChecker;
use crate::search::parens::{adjacent_triple_variants, bracketings};
use crate::search::{
    ExpressionSearch, Groupings, OpAssignments, ParenStrategy, SEARCH_OPS, SearchConfig,
};
use crate::token::Token;
use crate::utils::{digit_counts, group_value};

#[test]
fn test_groupings_bitmask_order() {
    let groupings: Vec<_> = Groupings::new(3).collect();
    let expected = vec![
        vec![(0, 3)],
        vec![(0, 1), (1, 3)],
        vec![(0, 2), (2, 3)],
        vec![(0, 1), (1, 2), (2, 3)],
    ];
    assert_eq!(groupings, expected);
}

#[test]
fn test_groupings_count_is_exponential() {
    assert_eq!(Groupings::new(1).count(), 1);
    assert_eq!(Groupings::new(5).count(), 16);
    assert_eq!(Groupings::new(8).count(), 128);
}

#[test]
fn test_groupings_cover_the_whole_sequence() {
    for grouping in Groupings::new(6) {
        assert_eq!(grouping.first().map(|g| g.0), Some(0));
        assert_eq!(grouping.last().map(|g| g.1), Some(6));
        for window in grouping.windows(2) {
            assert_eq!(window[0].1, window[1].0);
        }
    }
}

#[test]
fn test_groupings_restartable() {
    let first: Vec<_> = Groupings::new(4).collect();
    let second: Vec<_> = Groupings::new(4).collect();
    assert_eq!(first, second);
}

#[test]
fn test_op_assignments_single_slot() {
    let assignments: Vec<_> = OpAssignments::new(1).collect();
    let expected: Vec<Vec<char>> = SEARCH_OPS.iter().map(|&op| vec![op]).collect();
    assert_eq!(assignments, expected);
}

#[test]
fn test_op_assignments_numeral_order() {
    let assignments: Vec<_> = OpAssignments::new(2).collect();
    assert_eq!(assignments.len(), 25);
    assert_eq!(assignments[0], vec!['+', '+']);
    assert_eq!(assignments[1], vec!['+', '-']);
    // 6 = 11 in base 5
    assert_eq!(assignments[6], vec!['-', '-']);
    assert_eq!(assignments[24], vec!['^', '^']);
}

#[test]
fn test_adjacent_triple_variants() {
    // 1 + 2 * 3
    let tokens = vec![
        Token::Number(1.0),
        Token::Operator('+'),
        Token::Number(2.0),
        Token::Operator('*'),
        Token::Number(3.0),
    ];
    let variants = adjacent_triple_variants(&tokens);
    assert_eq!(variants.len(), 2);
    // (1 + 2) * 3
    assert_eq!(
        variants[0],
        vec![
            Token::LeftParen,
            Token::Number(1.0),
            Token::Operator('+'),
            Token::Number(2.0),
            Token::RightParen,
            Token::Operator('*'),
            Token::Number(3.0),
        ]
    );
    // 1 + (2 * 3)
    assert_eq!(
        variants[1],
        vec![
            Token::Number(1.0),
            Token::Operator('+'),
            Token::LeftParen,
            Token::Number(2.0),
            Token::Operator('*'),
            Token::Number(3.0),
            Token::RightParen,
        ]
    );
}

#[test]
fn test_adjacent_triple_variants_need_both_neighbors() {
    assert!(adjacent_triple_variants(&[Token::Number(7.0)]).is_empty());
    assert!(adjacent_triple_variants(&[]).is_empty());
}

#[test]
fn test_bracketings_follow_catalan_counts() {
    assert_eq!(bracketings(&[1.0], &[]).len(), 1);
    assert_eq!(bracketings(&[1.0, 2.0], &['+']).len(), 1);
    assert_eq!(bracketings(&[1.0, 2.0, 3.0], &['+', '*']).len(), 2);
    assert_eq!(bracketings(&[1.0, 2.0, 3.0, 4.0], &['+', '*', '-']).len(), 5);
}

#[test]
fn test_find_solution_simple() {
    let search = ExpressionSearch::with_config(SearchConfig {
        target: 100.0,
        ..SearchConfig::default()
    });
    let result = search.find_solution("955");
    // The (95, 5) grouping with '+' hits 100 first, as a parenthesized variant
    assert_eq!(result, Ok(Some("(95+5)".to_string())));
}

#[test]
fn test_find_solution_skips_leading_zero_groups() {
    let search = ExpressionSearch::with_config(SearchConfig {
        target: 50.0,
        ..SearchConfig::default()
    });
    let result = search.find_solution("105").unwrap_or_default();
    let solution = result.unwrap_or_default();
    assert!(!solution.contains("05"));
    assert_eq!(digit_counts(&solution), digit_counts("105"));
}

#[test]
fn test_no_grouping_of_105_produces_05() {
    for grouping in Groupings::new(3) {
        for &(start, end) in &grouping {
            let slice = &"105"[start..end];
            if slice.len() > 1 && slice.starts_with('0') {
                assert!(group_value(slice).is_err());
            }
        }
    }
}

#[test]
fn test_search_space_exhausts_and_terminates() {
    let search = ExpressionSearch::new();
    assert_eq!(search.find_solution("999"), Ok(None));
}

#[test]
fn test_find_solution_full_puzzle() {
    let search = ExpressionSearch::new();
    let result = search.find_solution("123456789").unwrap_or_default();
    let solution = result.unwrap_or_default();
    assert!(!solution.is_empty());
    assert_eq!(digit_counts(&solution), digit_counts("123456789"));

    let checker = CandidateChecker::new();
    assert!(checker.validate("123456789", &solution, 100.0));
}

#[test]
fn test_exhaustive_strategy_widens_coverage() {
    // (2+3)*(5+7) = 60 needs two parenthesized groups, out of reach for the
    // adjacent-triple family.
    let config = SearchConfig {
        target: 60.0,
        ..SearchConfig::default()
    };

    let restricted = ExpressionSearch::with_config(config);
    assert_eq!(restricted.find_solution("2357"), Ok(None));

    let exhaustive = ExpressionSearch::with_config(SearchConfig {
        paren_strategy: ParenStrategy::Exhaustive,
        ..config
    });
    let result = exhaustive.find_solution("2357").unwrap_or_default();
    let solution = result.unwrap_or_default();
    assert_eq!(digit_counts(&solution), digit_counts("2357"));

    let checker = CandidateChecker::new();
    assert!(checker.validate("2357", &solution, 60.0));
}

#[test]
fn test_input_shape_errors() {
    let search = ExpressionSearch::new();
    assert!(search.find_solution("").is_err());
    assert!(search.find_solution("12a4").is_err());
    assert!(search.find_solution("1234567890123456").is_err());
}

#[test]
fn test_search_never_proposes_modulo() {
    let search = ExpressionSearch::with_config(SearchConfig {
        target: 2.0,
        ..SearchConfig::default()
    });
    let result = search.find_solution("1007").unwrap_or_default();
    // 100 % 7 = 2 would match, but '%' is not in the search alphabet
    if let Some(solution) = result {
        assert!(!solution.contains('%'));
    }
}
