//! The JSON save format: a solid square is its color name, a split is a
//! 4-element array of its parts in NW, NE, SW, SE order.

use std::error::Error;
use std::fmt::{self, Display};

use serde_json::Value;

use crate::{Color, Path, Quadrant, Square};

impl Square {
    /// Encodes this square as a JSON value.
    ///
    /// Total: every square has an encoding, and [`from_json`] decodes it back
    /// to an equal square.
    ///
    /// [`from_json`]: Square::from_json
    pub fn to_json(&self) -> Value {
        match self {
            Square::Solid(color) => Value::String(color.name().to_owned()),
            Square::Split(children) => Value::Array(children.iter().map(Square::to_json).collect()),
        }
    }
    /// the compact wire form of [`to_json`](Square::to_json)
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Decodes a JSON value produced by [`to_json`](Square::to_json).
    pub fn from_json(value: &Value) -> Result<Square, DecodeError> {
        decode(value, &mut Vec::new())
    }
    /// Parses JSON text and decodes it.
    pub fn from_json_str(s: &str) -> Result<Square, ReadError> {
        let value = serde_json::from_str(s)?;
        Ok(Square::from_json(&value)?)
    }
}

fn decode(value: &Value, at: &mut Vec<Quadrant>) -> Result<Square, DecodeError> {
    match value {
        Value::String(name) => match name.parse::<Color>() {
            Ok(color) => Ok(Square::solid(color)),
            Err(err) => Err(DecodeError::new(at, DecodeHint::UnknownColor(err.into_name()))),
        },
        Value::Array(parts) => {
            let [nw, ne, sw, se]: &[Value; 4] = parts
                .as_slice()
                .try_into()
                .map_err(|_| DecodeError::new(at, DecodeHint::WrongLength(parts.len())))?;
            let mut part = |step: Quadrant, value: &Value| {
                at.push(step);
                let part = decode(value, at);
                at.pop();
                part
            };
            Ok(Square::split(
                part(Quadrant::NW, nw)?,
                part(Quadrant::NE, ne)?,
                part(Quadrant::SW, sw)?,
                part(Quadrant::SE, se)?,
            ))
        }
        other => Err(DecodeError::new(at, DecodeHint::WrongType(json_type(other)))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The coarse classification of a [`DecodeError`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DecodeErrorKind {
    /// a string that names no color
    InvalidColor,
    /// an array of the wrong length, or a value that is neither string nor array
    InvalidShape,
}

#[derive(Clone, PartialEq, Eq, Debug)]
enum DecodeHint {
    UnknownColor(Box<str>),
    WrongLength(usize),
    WrongType(&'static str),
}

#[derive(Clone, PartialEq, Eq, Debug)]
struct DecodeErrorData {
    at: Path,
    hint: DecodeHint,
}

/// A JSON value that does not describe a square.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DecodeError(Box<DecodeErrorData>);

impl DecodeError {
    fn new(at: &[Quadrant], hint: DecodeHint) -> Self {
        DecodeError(Box::new(DecodeErrorData {
            at: Path::new(at.iter().copied()),
            hint,
        }))
    }
    pub fn kind(&self) -> DecodeErrorKind {
        match self.0.hint {
            DecodeHint::UnknownColor(_) => DecodeErrorKind::InvalidColor,
            DecodeHint::WrongLength(_) | DecodeHint::WrongType(_) => DecodeErrorKind::InvalidShape,
        }
    }
    /// where in the tree the offending value sits
    pub fn at(&self) -> &Path {
        &self.0.at
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = &self.0.at;
        match &self.0.hint {
            DecodeHint::UnknownColor(name) => {
                write!(f, "invalid square at {at}: unknown color {name:?}")
            }
            DecodeHint::WrongLength(len) => {
                write!(f, "invalid square at {at}: a split needs 4 parts, found {len}")
            }
            DecodeHint::WrongType(ty) => write!(
                f,
                "invalid square at {at}: expected a color name or an array of parts, found {ty}"
            ),
        }
    }
}

impl Error for DecodeError {}

/// Failure of [`Square::from_json_str`]: either the text is not JSON at all,
/// or the JSON does not describe a square.
#[derive(Debug)]
pub enum ReadError {
    Syntax(serde_json::Error),
    Decode(DecodeError),
}

impl Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Syntax(err) => write!(f, "invalid JSON: {err}"),
            ReadError::Decode(err) => Display::fmt(err, f),
        }
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReadError::Syntax(err) => Some(err),
            ReadError::Decode(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ReadError {
    fn from(err: serde_json::Error) -> Self {
        ReadError::Syntax(err)
    }
}

impl From<DecodeError> for ReadError {
    fn from(err: DecodeError) -> Self {
        ReadError::Decode(err)
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use serde_json::json;
    use unindent::unindent;

    use super::DecodeErrorKind;
    use crate::Quadrant::{NE, SE, SW};
    use crate::{Color, Path, ReadError, Square};

    fn corners() -> Square {
        Square::split(
            Square::solid(Color::Blue),
            Square::solid(Color::Orange),
            Square::solid(Color::Purple),
            Square::solid(Color::Red),
        )
    }

    #[test]
    fn solid_encodes_to_its_color_name() {
        assert_eq!(Square::solid(Color::Green).to_json(), json!("green"));
        assert_eq!(Square::solid(Color::Green).to_json_string(), "\"green\"");
    }

    #[test]
    fn split_encodes_to_a_4_array_in_order() {
        assert_eq!(
            corners().to_json(),
            json!(["blue", "orange", "purple", "red"])
        );
        assert_eq!(
            corners().to_json_string(),
            r#"["blue","orange","purple","red"]"#
        );
    }

    #[test]
    fn decodes_what_it_encodes() {
        let nested = Square::split(
            corners(),
            Square::solid(Color::Green),
            corners(),
            Square::solid(Color::White),
        );
        assert_eq!(Square::from_json(&nested.to_json()), Ok(nested));
        assert_eq!(
            Square::from_json(&json!(["blue", "orange", "purple", "red"])),
            Ok(corners())
        );
    }

    #[test]
    fn reads_formatted_json_text() {
        let src = unindent(
            r#"
            [["blue", "orange", "purple", "white"],
             "green",
             ["blue", "orange", "purple", "white"],
             "red"]
            "#,
        );
        let square = Square::from_json_str(&src).unwrap();
        assert_eq!(
            square.locate(&Path::new([SW, SE])),
            Ok(&Square::solid(Color::White))
        );
    }

    #[test]
    fn rejects_unknown_colors() {
        let err = Square::from_json(&json!("chartreuse")).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::InvalidColor);
        assert_eq!(err.at(), &Path::root());
    }

    #[test]
    fn rejects_wrong_length_arrays() {
        let err = Square::from_json(&json!(["red", "blue", "green"])).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::InvalidShape);
        let err = Square::from_json(&json!([])).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::InvalidShape);
        let err =
            Square::from_json(&json!(["red", "blue", "green", "white", "purple"])).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::InvalidShape);
    }

    #[test]
    fn rejects_other_json_types() {
        for value in [json!(null), json!(true), json!(17), json!({"nw": "red"})] {
            let err = Square::from_json(&value).unwrap_err();
            assert_eq!(err.kind(), DecodeErrorKind::InvalidShape);
        }
    }

    #[test]
    fn reports_where_a_nested_value_went_wrong() {
        let err = Square::from_json(&json!([
            "red",
            ["blue", "green", "red"],
            "white",
            "purple"
        ]))
        .unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::InvalidShape);
        assert_eq!(err.at(), &Path::new([NE]));

        let err = Square::from_json(&json!([
            "red",
            "blue",
            "white",
            ["purple", "purple", "purple", "mauve"]
        ]))
        .unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::InvalidColor);
        assert_eq!(err.at(), &Path::new([SE, SE]));
    }

    #[test]
    fn read_errors_distinguish_syntax_from_shape() {
        assert!(matches!(
            Square::from_json_str("not json").unwrap_err(),
            ReadError::Syntax(_)
        ));
        assert!(matches!(
            Square::from_json_str("[\"red\"]").unwrap_err(),
            ReadError::Decode(_)
        ));
    }

    fn arb_square() -> impl Strategy<Value = Square> {
        let solid = (0..Color::ALL.len()).prop_map(|i| Square::solid(Color::ALL[i]));
        solid.prop_recursive(4, 64, 4, |inner| {
            (inner.clone(), inner.clone(), inner.clone(), inner)
                .prop_map(|(nw, ne, sw, se)| Square::split(nw, ne, sw, se))
        })
    }

    proptest! {
        #[test]
        fn round_trips(square in arb_square()) {
            prop_assert_eq!(Square::from_json(&square.to_json()), Ok(square));
        }
    }
}
