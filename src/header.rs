//! The two leading varints of every encoded polyline.
//!
//! The first varint is the format version. The second packs the metadata into 11 bits:
//!
//! | bits | field |
//! | --- | --- |
//! | `0..=3` | 2D precision |
//! | `4..=6` | third dimension type code (`0` if absent) |
//! | `7..=10` | 3D precision |

use serde::{Deserialize, Serialize};

use crate::error::{PolylineError, Result};
use crate::precision::Precision;
use crate::type3d::Type3d;
use crate::varint::{encode_unsigned, VarintReader};

/// The only format version this crate reads and writes.
pub const FORMAT_VERSION: u64 = 1;

const HEADER_BITS: u32 = 11;
const TYPE3D_SHIFT: u32 = 4;
const PRECISION3D_SHIFT: u32 = 7;

/// Metadata stored in the header of an encoded polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolylineHeader {
    precision2d: Precision,
    precision3d: Precision,
    type3d: Option<Type3d>,
}

impl PolylineHeader {
    /// Header of a polyline without a third dimension.
    pub fn new_2d(precision2d: Precision) -> Self {
        Self {
            precision2d,
            precision3d: Precision::MIN,
            type3d: None,
        }
    }

    /// Header of a polyline whose third dimension has type `type3d`.
    pub fn new_3d(precision2d: Precision, precision3d: Precision, type3d: Type3d) -> Self {
        Self {
            precision2d,
            precision3d,
            type3d: Some(type3d),
        }
    }

    /// Precision of the latitude and longitude components.
    pub fn precision2d(&self) -> Precision {
        self.precision2d
    }

    /// Precision of the third component.
    ///
    /// Headers written by this crate store zero here for 2D polylines.
    pub fn precision3d(&self) -> Precision {
        self.precision3d
    }

    /// Type of the third component, or `None` for a 2D polyline.
    pub fn type3d(&self) -> Option<Type3d> {
        self.type3d
    }

    /// The number of values stored per point.
    pub fn dimensions(&self) -> usize {
        if self.type3d.is_some() {
            3
        } else {
            2
        }
    }

    fn packed(&self) -> u64 {
        let type3d = self.type3d.map(|t| t.code()).unwrap_or(0);
        (u64::from(self.precision3d.digits()) << PRECISION3D_SHIFT)
            | (u64::from(type3d) << TYPE3D_SHIFT)
            | u64::from(self.precision2d.digits())
    }

    /// Appends the version and the packed header to `out`.
    pub(crate) fn encode(&self, out: &mut String) {
        encode_unsigned(FORMAT_VERSION, out);
        encode_unsigned(self.packed(), out);
    }

    /// Reads the version and the packed header, leaving `reader` at the first coordinate.
    pub(crate) fn decode(reader: &mut VarintReader<'_>) -> Result<Self> {
        let version = reader.read_unsigned()?;
        if version != FORMAT_VERSION {
            return Err(PolylineError::UnsupportedVersion(version));
        }

        let header = reader.read_unsigned()?;
        if header >= (1 << HEADER_BITS) {
            return Err(PolylineError::invalid_encoding(format!(
                "header {header} does not fit in {HEADER_BITS} bits"
            )));
        }

        Ok(Self {
            precision2d: Precision::from_header_bits(header),
            type3d: Type3d::from_header_bits(header >> TYPE3D_SHIFT),
            precision3d: Precision::from_header_bits(header >> PRECISION3D_SHIFT),
        })
    }
}

/// Decodes only the header of an encoded polyline.
///
/// ```
/// use flexpolyline::{decode_header, Type3d};
///
/// let header = decode_header("BlBoz5xJ67i1BU").unwrap();
/// assert_eq!(header.precision2d().digits(), 5);
/// assert_eq!(header.type3d(), Some(Type3d::Altitude));
/// ```
pub fn decode_header(encoded: impl AsRef<str>) -> Result<PolylineHeader> {
    let mut reader = VarintReader::new(encoded.as_ref().as_bytes());
    PolylineHeader::decode(&mut reader)
}

/// Returns the type of the third dimension without decoding any coordinates.
///
/// `None` means the polyline has no third dimension.
pub fn peek_third_dimension_type(encoded: impl AsRef<str>) -> Result<Option<Type3d>> {
    decode_header(encoded).map(|header| header.type3d())
}
