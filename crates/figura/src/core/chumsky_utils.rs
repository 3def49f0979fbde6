//! Shared chumsky parser utilities for figure descriptors
//!
//! The building blocks every figure grammar is assembled from. They return
//! the matched text slices; numeric conversion happens after a full match.

use chumsky::prelude::*;

/// Parse inline whitespace only (spaces and tabs, no newlines).
pub fn inline_whitespace<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    just(' ').or(just('\t')).repeated().ignored()
}

/// A single ASCII decimal digit
fn digit<'src>() -> impl Parser<'src, &'src str, char> + Clone {
    any().filter(|c: &char| c.is_ascii_digit())
}

/// Figure label: a vowel, an ASCII letter, then two or three digits.
pub fn figure_id<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    one_of("AEIOUaeiou")
        .then(any().filter(|c: &char| c.is_ascii_alphabetic()))
        .then(digit().repeated().at_least(2).at_most(3))
        .to_slice()
}

/// Real number text: optional `-`, then digits with an optional fraction,
/// or a bare fraction such as `.5`.
pub fn real_number<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    let fraction = just('.').then(digit().repeated().at_least(1)).ignored();
    let integral = digit()
        .repeated()
        .at_least(1)
        .then(fraction.clone().or_not())
        .ignored();

    just('-')
        .or_not()
        .then(integral.or(fraction))
        .to_slice()
}

/// Point literal `(X,Y)`, with optional inline whitespace around the comma.
pub fn point_literal<'src>() -> impl Parser<'src, &'src str, (&'src str, &'src str)> + Clone {
    real_number()
        .then_ignore(inline_whitespace())
        .then_ignore(just(','))
        .then_ignore(inline_whitespace())
        .then(real_number())
        .delimited_by(just('('), just(')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full<'src, O>(
        parser: impl Parser<'src, &'src str, O>,
        input: &'src str,
    ) -> Option<O> {
        parser.then_ignore(end()).parse(input).into_result().ok()
    }

    #[test]
    fn test_inline_whitespace() {
        let parser = inline_whitespace().then(just("test")).then_ignore(end());
        assert!(parser.parse("test").into_result().is_ok());
        assert!(parser.parse(" \ttest").into_result().is_ok());
        // Should NOT consume newlines
        assert!(parser.parse("\ntest").into_result().is_err());
    }

    #[test]
    fn test_figure_id() {
        assert_eq!(full(figure_id(), "Aa10"), Some("Aa10"));
        assert_eq!(full(figure_id(), "uZ123"), Some("uZ123"));
        assert_eq!(full(figure_id(), "Xa10"), None);
        assert_eq!(full(figure_id(), "Aa1"), None);
        assert_eq!(full(figure_id(), "Aa1234"), None);
        assert_eq!(full(figure_id(), "A1a10"), None);
    }

    #[test]
    fn test_real_number_forms() {
        for text in ["0", "5", "-5", "12.75", "-0.5", ".5", "-.25", "007"] {
            assert_eq!(full(real_number(), text), Some(text), "{text}");
        }
    }

    #[test]
    fn test_real_number_rejects() {
        for text in ["", "-", ".", "5.", "+5", "1e3", "1.2.3", "--1"] {
            assert_eq!(full(real_number(), text), None, "{text}");
        }
    }

    #[test]
    fn test_point_literal_whitespace_around_comma() {
        assert_eq!(full(point_literal(), "(1,2)"), Some(("1", "2")));
        assert_eq!(full(point_literal(), "(1 , 2)"), Some(("1", "2")));
        assert_eq!(full(point_literal(), "(-1.5,\t.5)"), Some(("-1.5", ".5")));
        // Whitespace is only tolerated around the comma
        assert_eq!(full(point_literal(), "( 1,2)"), None);
        assert_eq!(full(point_literal(), "(1,2 )"), None);
    }
}
