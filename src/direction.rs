//! Compass directions and the 2-bit mask codes that select them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::template::TemplateError;

/// Firing direction of the cannon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    West,
    South,
}

impl Direction {
    /// All directions in selector order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::West,
        Direction::South,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::West => "West",
            Direction::South => "South",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            "south" | "s" => Ok(Direction::South),
            _ => Err(TemplateError::UnknownDirection(s.to_string())),
        }
    }
}

/// One of the four 2-bit codes a direction can be assigned to.
///
/// Variant order is the lexicographic order of the codes, so the derived
/// `Ord` doubles as the decode tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaskCode {
    #[serde(rename = "00")]
    B00,
    #[serde(rename = "01")]
    B01,
    #[serde(rename = "10")]
    B10,
    #[serde(rename = "11")]
    B11,
}

impl MaskCode {
    pub const ALL: [MaskCode; 4] = [MaskCode::B00, MaskCode::B01, MaskCode::B10, MaskCode::B11];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaskCode::B00 => "00",
            MaskCode::B01 => "01",
            MaskCode::B10 => "10",
            MaskCode::B11 => "11",
        }
    }

    /// The two switch states encoded by this code, high bit first
    pub fn bits(&self) -> [bool; 2] {
        match self {
            MaskCode::B00 => [false, false],
            MaskCode::B01 => [false, true],
            MaskCode::B10 => [true, false],
            MaskCode::B11 => [true, true],
        }
    }

    pub fn from_bits(bits: [bool; 2]) -> Self {
        match bits {
            [false, false] => MaskCode::B00,
            [false, true] => MaskCode::B01,
            [true, false] => MaskCode::B10,
            [true, true] => MaskCode::B11,
        }
    }
}

impl fmt::Display for MaskCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaskCode {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "00" => Ok(MaskCode::B00),
            "01" => Ok(MaskCode::B01),
            "10" => Ok(MaskCode::B10),
            "11" => Ok(MaskCode::B11),
            _ => Err(TemplateError::UnknownMaskCode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse_is_case_insensitive() {
        assert_eq!("north".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!(" SOUTH ".parse::<Direction>().unwrap(), Direction::South);
        assert_eq!("w".parse::<Direction>().unwrap(), Direction::West);
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_mask_code_bits_roundtrip() {
        for code in MaskCode::ALL {
            assert_eq!(MaskCode::from_bits(code.bits()), code);
            assert_eq!(code.as_str().parse::<MaskCode>().unwrap(), code);
        }
        assert_eq!(MaskCode::B10.bits(), [true, false]);
    }

    #[test]
    fn test_mask_code_rejects_non_canonical() {
        assert!("2".parse::<MaskCode>().is_err());
        assert!("011".parse::<MaskCode>().is_err());
        assert!(" 01".parse::<MaskCode>().is_err());
    }

    #[test]
    fn test_mask_code_order_is_lexicographic() {
        let mut codes = vec![MaskCode::B11, MaskCode::B00, MaskCode::B10, MaskCode::B01];
        codes.sort();
        assert_eq!(codes, MaskCode::ALL.to_vec());
    }

    #[test]
    fn test_mask_code_serializes_as_map_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(MaskCode::B01, Direction::East);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"01":"East"}"#);
        let back: std::collections::BTreeMap<MaskCode, Direction> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
