use geom::{CubicBezier, Point};

#[cfg(test)]
use geom::point;

extern crate thiserror;

use self::thiserror::Error;

/// Number of coordinates describing a cubic bézier segment in 3D.
pub const NUM_COORDINATES: usize = 12;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Line {line} Column {column}: Expected number, got {src:?}.")]
    Number { src: String, line: i32, column: i32 },
    #[error("Expected 12 coordinates, got {found}.")]
    MissingCoordinates { found: usize },
    #[error("Line {line} Column {column}: Unexpected input after the last coordinate.")]
    TrailingInput { line: i32, column: i32 },
}

// A buffered iterator of characters keeping track of line and column.
pub struct Source<Iter> {
    src: Iter,
    current: char,
    line: i32,
    col: i32,
    finished: bool,
}

impl<Iter: Iterator<Item = char>> Source<Iter> {
    pub fn new<IntoIter>(src: IntoIter) -> Self
    where
        IntoIter: IntoIterator<IntoIter = Iter>,
    {
        let mut src = src.into_iter();

        let (current, finished) = match src.next() {
            Some(c) => (c, false),
            None => (' ', true),
        };

        let (line, col) = if current == '\n' { (1, -1) } else { (0, 0) };

        Source {
            current,
            finished,
            src,
            line,
            col,
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.finished && (self.current.is_whitespace() || self.current == ',') {
            self.advance_one();
        }
    }

    fn advance_one(&mut self) {
        if self.finished {
            return;
        }
        match self.src.next() {
            Some('\n') => {
                self.current = '\n';
                self.line += 1;
                self.col = -1;
            }
            Some(c) => {
                self.current = c;
                self.col += 1;
            }
            None => {
                self.current = '~';
                self.finished = true;
            }
        }
    }
}

/// Reads cubic bézier segments written as twelve numbers.
///
/// # Syntax
///
/// Numbers are separated by whitespace and/or commas and come in the same order as
/// the arguments of `CubicBezier::from_coords`: the start point, the end point, the
/// first control point and the second control point, three coordinates each.
///
/// For example `0 0 0, 10 0 0, 0 5 0, 10 5 0` reads as follows:
///
/// - start at [0, 0, 0],
/// - end at [10, 0, 0],
/// - first control point at [0, 5, 0],
/// - second control point at [10, 5, 0].
#[derive(Debug, Default)]
pub struct CurveParser {
    float_buffer: String,
}

impl CurveParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse<Iter>(&mut self, src: &mut Source<Iter>) -> Result<CubicBezier, ParseError>
    where
        Iter: Iterator<Item = char>,
    {
        let mut coords = [0.0f32; NUM_COORDINATES];
        for (found, coord) in coords.iter_mut().enumerate() {
            src.skip_whitespace();
            if src.finished {
                return Err(ParseError::MissingCoordinates { found });
            }

            *coord = self.parse_number(src)?;
        }

        src.skip_whitespace();
        if !src.finished {
            return Err(ParseError::TrailingInput {
                line: src.line,
                column: src.col,
            });
        }

        let [xs, ys, zs, xe, ye, ze, xc1, yc1, zc1, xc2, yc2, zc2] = coords;

        Ok(CubicBezier::from_coords(
            xs, ys, zs, xe, ye, ze, xc1, yc1, zc1, xc2, yc2, zc2,
        ))
    }

    fn parse_number(
        &mut self,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<f32, ParseError> {
        self.float_buffer.clear();

        src.skip_whitespace();

        let line = src.line;
        let column = src.col;

        // A number spans the whole token up to the next separator, so `1-2` or `1.5.5`
        // are rejected instead of being split into several coordinates.
        while !src.finished && !src.current.is_whitespace() && src.current != ',' {
            self.float_buffer.push(src.current);
            src.advance_one();
        }

        // Accepts the non-finite values written by `format_cubic_bezier` (`NaN`, `inf`, `-inf`).
        match self.float_buffer.parse::<f32>() {
            Ok(val) => Ok(val),
            Err(_) => Err(ParseError::Number {
                src: std::mem::take(&mut self.float_buffer),
                line,
                column,
            }),
        }
    }
}

/// Parses a single cubic bézier segment. See [`CurveParser`] for the syntax.
pub fn parse_cubic_bezier(text: &str) -> Result<CubicBezier, ParseError> {
    CurveParser::new().parse(&mut Source::new(text.chars()))
}

/// Writes a cubic bézier segment in the syntax read by [`CurveParser`].
///
/// Non-finite coordinates are written as `NaN`, `inf` and `-inf`, which the parser reads back.
pub fn format_cubic_bezier(curve: &CubicBezier) -> String {
    fn coords(p: &Point<f32>) -> String {
        format!("{} {} {}", p.x, p.y, p.z)
    }

    format!(
        "{}, {}, {}, {}",
        coords(&curve.start),
        coords(&curve.end),
        coords(&curve.control1),
        coords(&curve.control2),
    )
}

#[test]
fn simple_curve() {
    let curve = parse_cubic_bezier("0 0 0, 10 0 0, 0 5 0, 10 5 0").unwrap();

    assert_eq!(curve.start, point(0.0, 0.0, 0.0));
    assert_eq!(curve.end, point(10.0, 0.0, 0.0));
    assert_eq!(curve.control1, point(0.0, 5.0, 0.0));
    assert_eq!(curve.control2, point(10.0, 5.0, 0.0));
}

#[test]
fn number_formats() {
    let curve = parse_cubic_bezier("-1.5 +2 .25\n1e2 -3E-1 4.\n0,0,0 1 1 1").unwrap();

    assert_eq!(curve.start, point(-1.5, 2.0, 0.25));
    assert_eq!(curve.end, point(100.0, -0.3, 4.0));
    assert_eq!(curve.control1, point(0.0, 0.0, 0.0));
    assert_eq!(curve.control2, point(1.0, 1.0, 1.0));
}

#[test]
fn surrounding_whitespace() {
    let curve = parse_cubic_bezier("\n  1 2 3 4 5 6 7 8 9 10 11 12  \n").unwrap();

    assert_eq!(
        curve,
        CubicBezier::from_coords(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0)
    );
}

#[test]
fn empty() {
    assert_eq!(
        parse_cubic_bezier(""),
        Err(ParseError::MissingCoordinates { found: 0 })
    );
    assert_eq!(
        parse_cubic_bezier("  ,  "),
        Err(ParseError::MissingCoordinates { found: 0 })
    );
}

#[test]
fn missing_coordinates() {
    assert_eq!(
        parse_cubic_bezier("0 0 0 10 0 0 0 5"),
        Err(ParseError::MissingCoordinates { found: 8 })
    );
}

#[test]
fn invalid_number() {
    assert_eq!(
        parse_cubic_bezier("1 2 x 4 5 6 7 8 9 10 11 12"),
        Err(ParseError::Number {
            src: "x".to_string(),
            line: 0,
            column: 4,
        })
    );

    assert_eq!(
        parse_cubic_bezier("1 2 3\n4 5 6\n- 8 9 10 11 12"),
        Err(ParseError::Number {
            src: "-".to_string(),
            line: 2,
            column: 0,
        })
    );
}

#[test]
fn trailing_input() {
    assert_eq!(
        parse_cubic_bezier("1 2 3 4 5 6 7 8 9 10 11 12 13"),
        Err(ParseError::TrailingInput {
            line: 0,
            column: 27,
        })
    );
}

#[test]
fn error_messages() {
    let err = parse_cubic_bezier("1 2").unwrap_err();
    assert_eq!(err.to_string(), "Expected 12 coordinates, got 2.");

    let err = parse_cubic_bezier("1 2 3 4 5 6 7 8 9 10 11 12 13").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Line 0 Column 27: Unexpected input after the last coordinate."
    );
}

#[test]
fn format_then_parse() {
    let curve = CubicBezier::new(
        point(1.25, -2.0, 3.0),
        point(-4.0, 8.5, 0.1),
        point(5.0, -1.0, 7.75),
        point(2.5, 3.5, -6.0),
    );

    let text = format_cubic_bezier(&curve);
    assert_eq!(text, "1.25 -2 3, -4 8.5 0.1, 5 -1 7.75, 2.5 3.5 -6");
    assert_eq!(parse_cubic_bezier(&text), Ok(curve));
}

#[test]
fn numbers_must_be_separated() {
    assert_eq!(
        parse_cubic_bezier("1-2 3 4 5 6 7 8 9 10 11 12"),
        Err(ParseError::Number {
            src: "1-2".to_string(),
            line: 0,
            column: 0,
        })
    );

    assert_eq!(
        parse_cubic_bezier("0 1.5.5 3 4 5 6 7 8 9 10 11 12"),
        Err(ParseError::Number {
            src: "1.5.5".to_string(),
            line: 0,
            column: 2,
        })
    );

    assert_eq!(
        parse_cubic_bezier("1 2 3 4 5 6 7 8 9 10 11 12x"),
        Err(ParseError::Number {
            src: "12x".to_string(),
            line: 0,
            column: 24,
        })
    );
}

#[test]
fn non_finite_coordinates() {
    let curve = CubicBezier::new(
        point(f32::NAN, 0.0, 0.0),
        point(f32::INFINITY, 0.0, 0.0),
        point(0.0, f32::NEG_INFINITY, 0.0),
        point(0.0, 0.0, 0.0),
    );

    let text = format_cubic_bezier(&curve);
    assert_eq!(text, "NaN 0 0, inf 0 0, 0 -inf 0, 0 0 0");

    let parsed = parse_cubic_bezier(&text).unwrap();
    assert!(parsed.start.x.is_nan());
    assert_eq!(parsed.end, curve.end);
    assert_eq!(parsed.control1, curve.control1);
    assert_eq!(parsed.control2, curve.control2);
}

#[test]
fn leading_newline_position() {
    assert_eq!(
        parse_cubic_bezier("\nx"),
        Err(ParseError::Number {
            src: "x".to_string(),
            line: 1,
            column: 0,
        })
    );
}
