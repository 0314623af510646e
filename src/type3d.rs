use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// The meaning of the third dimension of a 3D polyline.
///
/// Code `0` is not a variant: in the header it marks a polyline without a third dimension, which
/// this crate represents as `Option<Type3d>::None`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Type3d {
    /// E.g. floor of a building
    Level = 1,
    /// E.g. altitude (in the air) relative to ground level or mean sea level
    Altitude = 2,
    /// E.g. elevation above mean sea level
    Elevation = 3,
    /// Reserved for future types
    Reserved1 = 4,
    /// Reserved for future types
    Reserved2 = 5,
    /// Reserved for custom types
    Custom1 = 6,
    /// Reserved for custom types
    Custom2 = 7,
}

impl Type3d {
    /// All variants in code order.
    pub const ALL: [Type3d; 7] = [
        Type3d::Level,
        Type3d::Altitude,
        Type3d::Elevation,
        Type3d::Reserved1,
        Type3d::Reserved2,
        Type3d::Custom1,
        Type3d::Custom2,
    ];

    /// Returns the three-bit code written to the header.
    pub fn code(&self) -> u8 {
        (*self).into()
    }

    /// Whether this type is one of the codes set aside for future versions of the format.
    pub fn is_reserved(&self) -> bool {
        matches!(self, Type3d::Reserved1 | Type3d::Reserved2)
    }

    /// Maps the three-bit header field to a type; code `0` means "no third dimension".
    pub(crate) fn from_header_bits(bits: u64) -> Option<Self> {
        Self::try_from_primitive((bits & 0x7) as u8).ok()
    }
}

impl Display for Type3d {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type3d::Level => write!(f, "Level"),
            Type3d::Altitude => write!(f, "Altitude"),
            Type3d::Elevation => write!(f, "Elevation"),
            Type3d::Reserved1 => write!(f, "Reserved1"),
            Type3d::Reserved2 => write!(f, "Reserved2"),
            Type3d::Custom1 => write!(f, "Custom1"),
            Type3d::Custom2 => write!(f, "Custom2"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn codes() {
        for (expected, type3d) in (1_u8..).zip(Type3d::ALL) {
            assert_eq!(type3d.code(), expected);
            assert_eq!(Type3d::try_from(expected).unwrap(), type3d);
        }
        assert!(Type3d::try_from(0_u8).is_err());
        assert!(Type3d::try_from(8_u8).is_err());
    }

    #[test]
    fn header_bits() {
        assert_eq!(Type3d::from_header_bits(0), None);
        assert_eq!(Type3d::from_header_bits(2), Some(Type3d::Altitude));
        assert_eq!(Type3d::from_header_bits(4), Some(Type3d::Reserved1));
        assert_eq!(Type3d::from_header_bits(0xF), Some(Type3d::Custom2));
    }

    #[test]
    fn reserved() {
        let reserved: Vec<_> = Type3d::ALL.into_iter().filter(Type3d::is_reserved).collect();
        assert_eq!(reserved, [Type3d::Reserved1, Type3d::Reserved2]);
    }
}
