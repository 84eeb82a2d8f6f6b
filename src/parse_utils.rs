use std::{fmt, num::ParseFloatError};

use glam::Vec3;

#[derive(Debug)]
pub enum ParseError {
    MissingComponent { expected: usize, found: usize },
    InvalidNumber(ParseFloatError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingComponent { expected, found } => write!(f, "expected {} components, found {}", expected, found),
            ParseError::InvalidNumber(e) => write!(f, "invalid number: {}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::InvalidNumber(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseFloatError> for ParseError {
    fn from(value: ParseFloatError) -> Self {
        ParseError::InvalidNumber(value)
    }
}

pub fn parse_f32(src: &str) -> Result<f32, ParseError> {
    Ok(src.trim().parse::<f32>()?)
}

pub fn parse_vec3(src: &str) -> Result<Vec3, ParseError> {
    let parts = src.split_whitespace()
        .map(|s| s.parse::<f32>())
        .collect::<Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(ParseError::MissingComponent { expected: 3, found: parts.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vec3() {
        let v = parse_vec3(" 1 -2.5\t3 ").unwrap();
        assert_eq!((v.x, v.y, v.z), (1.0, -2.5, 3.0));
    }

    #[test]
    fn rejects_short_vec3() {
        assert!(matches!(parse_vec3("1 2"), Err(ParseError::MissingComponent { expected: 3, found: 2 })));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_f32("fast"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(parse_vec3("1 two 3"), Err(ParseError::InvalidNumber(_))));
        assert_eq!(parse_f32(" 0.5 ").unwrap(), 0.5);
    }
}
