//! Figure descriptor grammars
//!
//! Three fixed grammars, one per figure type:
//!
//! ```text
//! <Circulo-ID-(X,Y)-R>
//! <Retangulo-ID-(X1,Y1)-(X2,Y2)>
//! <Triangulo-ID-(X1,Y1)-(X2,Y2)-(X3,Y3)>
//! ```
//!
//! A grammar either matches the whole line or not at all. Matching yields the
//! raw field text; [`RawFigure::convert`] turns it into a typed [`Figure`].

use chumsky::prelude::*;

use crate::core::chumsky_utils::{figure_id, point_literal, real_number};
use crate::core::{Circle, Figure, FigureError, FigureId, Point, Rectangle, Triangle};

/// Point fields as matched, before numeric conversion
pub type RawPoint<'src> = (&'src str, &'src str);

/// Field text captured by a grammar match
#[derive(Debug, Clone, PartialEq)]
pub enum RawFigure<'src> {
    Circle {
        id: &'src str,
        center: RawPoint<'src>,
        radius: &'src str,
    },
    Rectangle {
        id: &'src str,
        corner1: RawPoint<'src>,
        corner2: RawPoint<'src>,
    },
    Triangle {
        id: &'src str,
        vertex1: RawPoint<'src>,
        vertex2: RawPoint<'src>,
        vertex3: RawPoint<'src>,
    },
}

fn real(field: &'static str, text: &str) -> Result<f64, FigureError> {
    text.parse::<f64>()
        .map_err(|e| FigureError::field_conversion(field, text, e))
}

fn point(field: &'static str, (x, y): RawPoint<'_>) -> Result<Point, FigureError> {
    Ok(Point::new(real(field, x)?, real(field, y)?))
}

impl RawFigure<'_> {
    /// Convert every numeric field; the first failure wins
    pub fn convert(&self) -> Result<Figure, FigureError> {
        let figure = match *self {
            RawFigure::Circle { id, center, radius } => Figure::Circle(Circle {
                id: FigureId::from_matched(id),
                center: point("center", center)?,
                radius: real("radius", radius)?,
            }),
            RawFigure::Rectangle {
                id,
                corner1,
                corner2,
            } => Figure::Rectangle(Rectangle {
                id: FigureId::from_matched(id),
                corner1: point("corner1", corner1)?,
                corner2: point("corner2", corner2)?,
            }),
            RawFigure::Triangle {
                id,
                vertex1,
                vertex2,
                vertex3,
            } => Figure::Triangle(Triangle {
                id: FigureId::from_matched(id),
                vertex1: point("vertex1", vertex1)?,
                vertex2: point("vertex2", vertex2)?,
                vertex3: point("vertex3", vertex3)?,
            }),
        };
        Ok(figure)
    }
}

/// The closed set of grammars, tried in [`Grammar::PRIORITY`] order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    Circle,
    Rectangle,
    Triangle,
}

impl Grammar {
    /// Match order; the first full-line match wins
    pub const PRIORITY: [Grammar; 3] = [Grammar::Circle, Grammar::Rectangle, Grammar::Triangle];

    /// Literal text every line of this grammar starts with
    pub fn keyword(&self) -> &'static str {
        match self {
            Grammar::Circle => "<Circulo-",
            Grammar::Rectangle => "<Retangulo-",
            Grammar::Triangle => "<Triangulo-",
        }
    }

    /// Match `line` in full against this grammar
    pub fn recognize<'src>(&self, line: &'src str) -> Option<RawFigure<'src>> {
        let result = match self {
            Grammar::Circle => circle().parse(line).into_result(),
            Grammar::Rectangle => rectangle().parse(line).into_result(),
            Grammar::Triangle => triangle().parse(line).into_result(),
        };
        result.ok()
    }
}

/// `<KEYWORD-ID-` prefix shared by all grammars, yielding the id text
fn header<'src>(keyword: &'static str) -> impl Parser<'src, &'src str, &'src str> + Clone {
    just(keyword).ignore_then(figure_id()).then_ignore(just('-'))
}

fn circle<'src>() -> impl Parser<'src, &'src str, RawFigure<'src>> {
    header(Grammar::Circle.keyword())
        .then(point_literal())
        .then_ignore(just('-'))
        .then(real_number())
        .then_ignore(just('>'))
        .then_ignore(end())
        .map(|((id, center), radius)| RawFigure::Circle { id, center, radius })
}

fn rectangle<'src>() -> impl Parser<'src, &'src str, RawFigure<'src>> {
    header(Grammar::Rectangle.keyword())
        .then(point_literal())
        .then_ignore(just('-'))
        .then(point_literal())
        .then_ignore(just('>'))
        .then_ignore(end())
        .map(|((id, corner1), corner2)| RawFigure::Rectangle {
            id,
            corner1,
            corner2,
        })
}

fn triangle<'src>() -> impl Parser<'src, &'src str, RawFigure<'src>> {
    header(Grammar::Triangle.keyword())
        .then(point_literal())
        .then_ignore(just('-'))
        .then(point_literal())
        .then_ignore(just('-'))
        .then(point_literal())
        .then_ignore(just('>'))
        .then_ignore(end())
        .map(|(((id, vertex1), vertex2), vertex3)| RawFigure::Triangle {
            id,
            vertex1,
            vertex2,
            vertex3,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_grammar() {
        let raw = Grammar::Circle.recognize("<Circulo-Aa10-(0,0)-5>").unwrap();
        assert_eq!(
            raw,
            RawFigure::Circle {
                id: "Aa10",
                center: ("0", "0"),
                radius: "5"
            }
        );
    }

    #[test]
    fn test_rectangle_grammar() {
        let raw = Grammar::Rectangle
            .recognize("<Retangulo-Ee100-(0,0)-(10,5)>")
            .unwrap();
        assert_eq!(
            raw,
            RawFigure::Rectangle {
                id: "Ee100",
                corner1: ("0", "0"),
                corner2: ("10", "5")
            }
        );
    }

    #[test]
    fn test_triangle_grammar() {
        let raw = Grammar::Triangle
            .recognize("<Triangulo-Ii99-(0,0)-(4 , 0)-(0,\t3)>")
            .unwrap();
        assert_eq!(
            raw,
            RawFigure::Triangle {
                id: "Ii99",
                vertex1: ("0", "0"),
                vertex2: ("4", "0"),
                vertex3: ("0", "3")
            }
        );
    }

    #[test]
    fn test_grammars_do_not_cross_match() {
        let circle = "<Circulo-Aa10-(0,0)-5>";
        assert!(Grammar::Rectangle.recognize(circle).is_none());
        assert!(Grammar::Triangle.recognize(circle).is_none());

        let rect = "<Retangulo-Ee100-(0,0)-(10,5)>";
        assert!(Grammar::Circle.recognize(rect).is_none());
        assert!(Grammar::Triangle.recognize(rect).is_none());
    }

    #[test]
    fn test_trailing_text_rejected() {
        assert!(Grammar::Circle.recognize("<Circulo-Aa10-(0,0)-5> extra").is_none());
        assert!(Grammar::Circle.recognize("<Circulo-Aa10-(0,0)-5>>").is_none());
    }

    #[test]
    fn test_missing_pieces_rejected() {
        for line in [
            "<Circulo-Aa10-(0,0)>",
            "<Circulo-Aa10-(0)-5>",
            "<Circulo-Ba10-(0,0)-5>",
            "Circulo-Aa10-(0,0)-5",
            "<circulo-Aa10-(0,0)-5>",
            "<Circulo-Aa10-(0,0)-5",
        ] {
            assert!(Grammar::Circle.recognize(line).is_none(), "{line}");
        }
    }

    #[test]
    fn test_convert_circle() {
        let raw = RawFigure::Circle {
            id: "Aa10",
            center: ("-1.5", ".5"),
            radius: "0",
        };
        match raw.convert().unwrap() {
            Figure::Circle(c) => {
                assert_eq!(c.id.as_str(), "Aa10");
                assert_eq!(c.center, Point::new(-1.5, 0.5));
                assert_eq!(c.radius, 0.0);
            }
            other => panic!("Expected circle, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_reports_field() {
        let raw = RawFigure::Rectangle {
            id: "Ee100",
            corner1: ("0", "0"),
            corner2: ("1.2.3", "5"),
        };
        let err = raw.convert().unwrap_err();
        match err {
            FigureError::FieldConversion { field, value, .. } => {
                assert_eq!(field, "corner2");
                assert_eq!(value, "1.2.3");
            }
            other => panic!("Expected field conversion error, got {:?}", other),
        }
    }
}
