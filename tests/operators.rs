mod common;

use common::{eval, eval_err};
use lisk::interpreter::ErrorKind;

#[test]
fn test_addition() {
    assert_eq!(eval("(+)"), "0");
    assert_eq!(eval("(+ 5)"), "5");
    assert_eq!(eval("(+ 1 2 3)"), "6");
    assert_eq!(eval("(+ 1 (+ 2 3) 4)"), "10");
    assert_eq!(eval("(+ -3 3)"), "0");
}

#[test]
fn test_subtraction() {
    assert_eq!(eval("(- 10 3 2)"), "5");
    assert_eq!(eval("(- 5)"), "-5");
    assert_eq!(eval("(- -5)"), "5");
    assert_eq!(eval("(- 1 2)"), "-1");
}

#[test]
fn test_subtraction_requires_an_argument() {
    assert_eq!(eval_err("(-)"), ErrorKind::Runtime);
}

#[test]
fn test_multiplication() {
    assert_eq!(eval("(*)"), "1");
    assert_eq!(eval("(* 7)"), "7");
    assert_eq!(eval("(* 2 3 4)"), "24");
    assert_eq!(eval("(* 2 -3)"), "-6");
}

#[test]
fn test_division() {
    assert_eq!(eval("(/ 20 4)"), "5");
    assert_eq!(eval("(/ 100 5 2)"), "10");
    assert_eq!(eval("(/ 7 2)"), "3");
    assert_eq!(eval("(/ -7 2)"), "-3");
}

#[test]
fn test_unary_division_is_integer_reciprocal() {
    assert_eq!(eval("(/ 1)"), "1");
    assert_eq!(eval("(/ 5)"), "0");
    assert_eq!(eval("(/ -1)"), "-1");
}

#[test]
fn test_division_errors() {
    assert_eq!(eval_err("(/)"), ErrorKind::Runtime);
    assert_eq!(eval_err("(/ 1 0)"), ErrorKind::Runtime);
    assert_eq!(eval_err("(/ 0)"), ErrorKind::Runtime);
}

#[test]
fn test_arithmetic_type_errors() {
    assert_eq!(eval_err("(+ 1 #t)"), ErrorKind::Runtime);
    assert_eq!(eval_err("(* 1 '(2))"), ErrorKind::Runtime);
    assert_eq!(eval_err("(- 'a)"), ErrorKind::Runtime);
}

#[test]
fn test_arithmetic_overflow_is_reported() {
    assert_eq!(eval_err("(+ 9223372036854775807 1)"), ErrorKind::Runtime);
    assert_eq!(eval_err("(* 9223372036854775807 2)"), ErrorKind::Runtime);
    assert_eq!(eval_err("(- -9223372036854775808)"), ErrorKind::Runtime);
}

#[test]
fn test_chained_comparisons() {
    assert_eq!(eval("(< 1 2 3)"), "#t");
    assert_eq!(eval("(< 1 3 2)"), "#f");
    assert_eq!(eval("(> 3 2 1)"), "#t");
    assert_eq!(eval("(> 3 1 2)"), "#f");
    assert_eq!(eval("(<= 1 1 2)"), "#t");
    assert_eq!(eval("(>= 3 3 2)"), "#t");
    assert_eq!(eval("(= 4 4 4)"), "#t");
    assert_eq!(eval("(= 4 4 5)"), "#f");
}

#[test]
fn test_comparisons_hold_vacuously() {
    assert_eq!(eval("(=)"), "#t");
    assert_eq!(eval("(< 5)"), "#t");
    assert_eq!(eval("(>= 5)"), "#t");
}

#[test]
fn test_comparison_type_errors() {
    assert_eq!(eval_err("(< 1 'a)"), ErrorKind::Runtime);
    assert_eq!(eval_err("(= #t #t)"), ErrorKind::Runtime);
}

#[test]
fn test_min_max() {
    assert_eq!(eval("(min 3 1 2)"), "1");
    assert_eq!(eval("(max 3 1 2)"), "3");
    assert_eq!(eval("(min 7)"), "7");
    assert_eq!(eval("(max -1 -5)"), "-1");
    assert_eq!(eval_err("(min)"), ErrorKind::Runtime);
    assert_eq!(eval_err("(max)"), ErrorKind::Runtime);
}

#[test]
fn test_abs() {
    assert_eq!(eval("(abs -5)"), "5");
    assert_eq!(eval("(abs 5)"), "5");
    assert_eq!(eval("(abs 0)"), "0");
    assert_eq!(eval_err("(abs)"), ErrorKind::Runtime);
    assert_eq!(eval_err("(abs 1 2)"), ErrorKind::Runtime);
    assert_eq!(eval_err("(abs #f)"), ErrorKind::Runtime);
}

#[test]
fn test_number_predicate() {
    assert_eq!(eval("(number? 5)"), "#t");
    assert_eq!(eval("(number? -5)"), "#t");
    assert_eq!(eval("(number? #t)"), "#f");
    assert_eq!(eval("(number? 'a)"), "#f");
    assert_eq!(eval("(number? '())"), "#f");
    assert_eq!(eval_err("(number? 1 2)"), ErrorKind::Runtime);
}

#[test]
fn test_arguments_evaluate_left_to_right() {
    // The first argument's define is visible to the second.
    let mut session = common::Session::new();
    session.run("(define x 1)");
    assert_eq!(session.run("(+ (set! x 10) x)"), "11");
}
