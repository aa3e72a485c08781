use chumsky::{prelude::*, text};

use crate::token::Token;

/// First characters of a symbol: letters plus a handful of operator glyphs.
fn is_symbol_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '<' | '=' | '>' | '*' | '/' | '#')
}

/// Continuing characters additionally allow digits and `! ? -`.
fn is_symbol_continue(c: char) -> bool {
    is_symbol_start(c) || c.is_ascii_digit() || matches!(c, '!' | '?' | '-')
}

/// Digit accumulation wraps on overflow rather than rejecting long literals.
fn parse_integer(text: &str) -> i64 {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let mut value: i64 = 0;
    for byte in digits.bytes() {
        value = value.wrapping_mul(10).wrapping_add(i64::from(byte - b'0'));
    }
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

pub fn lexer<'a>()
-> impl Parser<'a, &'a str, Vec<(Token, SimpleSpan)>, extra::Err<Simple<'a, char>>> {
    // An optional sign immediately followed by digits is an integer; a bare
    // sign with no digit after it falls through to the sign-symbol rule.
    let number = one_of("+-")
        .or_not()
        .then(text::digits(10))
        .to_slice()
        .map(|s: &str| Token::Number(parse_integer(s)));

    let sign_symbol = one_of("+-").map(|c: char| Token::Symbol(c.to_string()));

    let symbol = any()
        .filter(|c: &char| is_symbol_start(*c))
        .then(any().filter(|c: &char| is_symbol_continue(*c)).repeated())
        .to_slice()
        .map(|s: &str| Token::Symbol(s.to_string()));

    let punctuation = choice((
        just('(').to(Token::OpenParen),
        just(')').to(Token::CloseParen),
        just('.').to(Token::Dot),
        just('\'').to(Token::Quote),
    ));

    let comment = just(';')
        .ignore_then(any().and_is(just('\n').not()).repeated())
        .ignored();

    let token = choice((number, sign_symbol, symbol, punctuation))
        .map_with(|tok, e| (tok, e.span()))
        .padded_by(
            choice((comment, any().filter(|c: &char| c.is_whitespace()).ignored())).repeated(),
        );

    choice((comment, any().filter(|c: &char| c.is_whitespace()).ignored()))
        .repeated()
        .ignore_then(token.repeated().collect())
        .then_ignore(end())
}
