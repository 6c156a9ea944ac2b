//! Glyph manipulators
//!
//! Manipulators are given on the command line as `name` or `name,argument`
//! and are parsed once, up front, into [`Manipulator`]. Directional shifts
//! are normalized into signed `ShiftX`/`ShiftY` values.

use std::str::FromStr;

use log::debug;
use thiserror::Error as ThisError;

use crate::core::errors::FontError;
use crate::data::font::FontCatalog;
use crate::data::glyph::Glyph;

/// Names accepted on the command line, sorted
pub const MANIPULATOR_NAMES: &[&str] = &[
    "monospace",
    "optimize",
    "shift_down",
    "shift_left",
    "shift_right",
    "shift_up",
    "shift_x",
    "shift_y",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Manipulator {
    /// Crop to the ink bounding box
    Optimize,
    /// Move horizontally; positive is right
    ShiftX(i32),
    /// Move vertically; positive is down
    ShiftY(i32),
    /// Set every advance to the same value
    Monospace(i32),
}

impl Manipulator {
    pub fn apply(&self, glyph: &Glyph) -> Result<Glyph, FontError> {
        match *self {
            Manipulator::Optimize => glyph.optimize(),
            Manipulator::ShiftX(dx) => glyph.shifted(dx, 0),
            Manipulator::ShiftY(dy) => glyph.shifted(0, dy),
            Manipulator::Monospace(xadvance) => Ok(glyph.with_xadvance(xadvance)),
        }
    }
}

/// Rejected manipulator text, one variant per kind of mistake
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ParseManipulatorError {
    #[error(
        "Invalid manipulator given: {name} (must be one of {names})",
        names = MANIPULATOR_NAMES.join(", ")
    )]
    UnknownName { name: String },

    #[error(
        "Invalid manipulator argument count: {name} requires {expected} argument(s), but {given} given."
    )]
    ArgumentCount {
        name: String,
        expected: usize,
        given: usize,
    },

    #[error("Invalid manipulator argument for {name}: {value:?} is not an integer")]
    NotAnInteger { name: String, value: String },

    #[error("Invalid manipulator argument for {name}: {value} cannot be negated")]
    OutOfRange { name: String, value: i32 },
}

impl FromStr for Manipulator {
    type Err = ParseManipulatorError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut parts = text.split(',');
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        if !MANIPULATOR_NAMES.contains(&name) {
            return Err(ParseManipulatorError::UnknownName {
                name: name.to_string(),
            });
        }

        let expected = if name == "optimize" { 0 } else { 1 };
        if args.len() != expected {
            return Err(ParseManipulatorError::ArgumentCount {
                name: name.to_string(),
                expected,
                given: args.len(),
            });
        }

        if name == "optimize" {
            return Ok(Manipulator::Optimize);
        }

        let value: i32 = args[0]
            .trim()
            .parse()
            .map_err(|_| ParseManipulatorError::NotAnInteger {
                name: name.to_string(),
                value: args[0].to_string(),
            })?;

        let negated = || {
            value
                .checked_neg()
                .ok_or_else(|| ParseManipulatorError::OutOfRange {
                    name: name.to_string(),
                    value,
                })
        };
        Ok(match name {
            "shift_right" | "shift_x" => Manipulator::ShiftX(value),
            "shift_left" => Manipulator::ShiftX(negated()?),
            "shift_down" | "shift_y" => Manipulator::ShiftY(value),
            "shift_up" => Manipulator::ShiftY(negated()?),
            _ => Manipulator::Monospace(value),
        })
    }
}

/// Run every manipulator in order over the selected glyphs and store the
/// results back into the font. `None` selects every glyph; characters without
/// a glyph are skipped.
pub fn manipulate_font(
    font: &mut FontCatalog,
    selection: Option<&[char]>,
    manipulators: &[Manipulator],
) -> Result<usize, FontError> {
    let mut glyphs: Vec<Glyph> = match selection {
        None => font.iter().cloned().collect(),
        Some(chars) => {
            let mut chars = chars.to_vec();
            chars.sort_unstable();
            chars.dedup();
            chars.iter().filter_map(|&c| font.get(c)).cloned().collect()
        }
    };

    for manipulator in manipulators {
        debug!("Applying {:?} to {} glyphs", manipulator, glyphs.len());
        glyphs = glyphs
            .iter()
            .map(|glyph| manipulator.apply(glyph))
            .collect::<Result<_, _>>()?;
    }

    let count = glyphs.len();
    for glyph in glyphs {
        font.replace(glyph);
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framed(codepoint: char) -> Glyph {
        #[rustfmt::skip]
        let data = vec![
            255, 255, 255,
            255,   0, 255,
            255, 255, 255,
        ];
        Glyph::new(codepoint, 3, 3, 0, -3, 4, data).unwrap()
    }

    #[test]
    fn test_parse_manipulators() {
        let parsed: Vec<Manipulator> = [
            "optimize",
            "shift_right,2",
            "shift_left,2",
            "shift_up,3",
            "shift_down,3",
            "shift_x,-1",
            "shift_y,4",
            "monospace,6",
        ]
        .iter()
        .map(|text| text.parse().unwrap())
        .collect();

        assert_eq!(
            parsed,
            vec![
                Manipulator::Optimize,
                Manipulator::ShiftX(2),
                Manipulator::ShiftX(-2),
                Manipulator::ShiftY(-3),
                Manipulator::ShiftY(3),
                Manipulator::ShiftX(-1),
                Manipulator::ShiftY(4),
                Manipulator::Monospace(6),
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        let unknown = "rotate,90".parse::<Manipulator>().unwrap_err();
        assert!(unknown.to_string().contains("must be one of monospace, optimize"));

        let count = "optimize,1".parse::<Manipulator>().unwrap_err();
        assert!(count.to_string().contains("requires 0 argument(s), but 1 given"));

        assert_eq!(
            "shift_x".parse::<Manipulator>(),
            Err(ParseManipulatorError::ArgumentCount {
                name: "shift_x".to_string(),
                expected: 1,
                given: 0,
            })
        );
        assert_eq!(
            "monospace,wide".parse::<Manipulator>(),
            Err(ParseManipulatorError::NotAnInteger {
                name: "monospace".to_string(),
                value: "wide".to_string(),
            })
        );
    }

    #[test]
    fn test_negating_the_smallest_shift_is_rejected() {
        assert_eq!(
            "shift_left,-2147483648".parse::<Manipulator>(),
            Err(ParseManipulatorError::OutOfRange {
                name: "shift_left".to_string(),
                value: i32::MIN,
            })
        );
        assert_eq!(
            "shift_up,2147483647".parse::<Manipulator>(),
            Ok(Manipulator::ShiftY(-i32::MAX))
        );
    }

    #[test]
    fn test_shift_overflow_leaves_font_untouched() {
        let mut font = FontCatalog::new();
        font.add(framed('a').shifted(1, 0).unwrap()).unwrap();

        let result = manipulate_font(&mut font, None, &[Manipulator::ShiftX(i32::MAX)]);
        assert_eq!(result, Err(FontError::CoordinateOverflow { codepoint: 'a' }));
        assert_eq!(font.get('a').unwrap().xoffset(), 1);
    }

    #[test]
    fn test_manipulators_run_in_order_on_selection() {
        let mut font = FontCatalog::new();
        font.add(framed('a')).unwrap();
        font.add(framed('b')).unwrap();

        let changed = manipulate_font(
            &mut font,
            Some(&['a', 'a', 'z']),
            &[Manipulator::Optimize, Manipulator::ShiftX(2), Manipulator::Monospace(7)],
        )
        .unwrap();

        assert_eq!(changed, 1);
        let a = font.get('a').unwrap();
        assert_eq!((a.width(), a.height()), (1, 1));
        assert_eq!((a.xoffset(), a.yoffset(), a.xadvance()), (3, -2, 7));
        assert_eq!(font.get('b').unwrap(), &framed('b'));
    }

    #[test]
    fn test_blank_glyph_aborts_optimize() {
        let mut font = FontCatalog::new();
        font.add(framed('a')).unwrap();
        font.add(Glyph::new(' ', 1, 1, 0, -1, 2, vec![255]).unwrap())
            .unwrap();

        let result = manipulate_font(&mut font, None, &[Manipulator::Optimize]);
        assert_eq!(result, Err(FontError::EmptyGlyph { codepoint: ' ' }));
        assert_eq!(
            font.get('a').unwrap().width(),
            3,
            "Nothing is written back when a manipulator fails"
        );
    }
}
