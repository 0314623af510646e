//! Lazy decoding of coordinates.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::delta::DeltaDecoder;
use crate::error::Result;
use crate::header::PolylineHeader;
use crate::varint::VarintReader;

/// A single decoded point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Third dimension, present if the header declares one
    pub z: Option<f64>,
}

#[derive(Debug, Clone)]
enum DecoderState {
    TwoD(DeltaDecoder<2>),
    ThreeD(DeltaDecoder<3>),
}

/// Iterator over the points of an encoded polyline, created by [`iter_decode`].
///
/// Points are decoded on demand. The iterator ends with `None` once the input is exhausted on a
/// point boundary; a corrupt point is reported as a single `Some(Err(_))`, after which the
/// iterator yields `None`.
#[derive(Debug, Clone)]
pub struct Coordinates<'a> {
    header: PolylineHeader,
    reader: VarintReader<'a>,
    state: DecoderState,
    failed: bool,
}

impl<'a> Coordinates<'a> {
    fn new(encoded: &'a str) -> Result<Self> {
        let mut reader = VarintReader::new(encoded.as_bytes());
        let header = PolylineHeader::decode(&mut reader)?;
        let precision2d = header.precision2d();
        let state = match header.type3d() {
            None => DecoderState::TwoD(DeltaDecoder::new([precision2d; 2])),
            Some(_) => DecoderState::ThreeD(DeltaDecoder::new([
                precision2d,
                precision2d,
                header.precision3d(),
            ])),
        };
        Ok(Self {
            header,
            reader,
            state,
            failed: false,
        })
    }

    /// The header of the polyline being decoded.
    pub fn header(&self) -> PolylineHeader {
        self.header
    }
}

impl Iterator for Coordinates<'_> {
    type Item = Result<Coordinate>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let item = match &mut self.state {
            DecoderState::TwoD(decoder) => decoder.next_point(&mut self.reader).map(|point| {
                point.map(|[lat, lng]| Coordinate { lat, lng, z: None })
            }),
            DecoderState::ThreeD(decoder) => decoder.next_point(&mut self.reader).map(|point| {
                point.map(|[lat, lng, z]| Coordinate {
                    lat,
                    lng,
                    z: Some(z),
                })
            }),
        };

        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

impl FusedIterator for Coordinates<'_> {}

/// Decodes the header eagerly and returns a lazy iterator over the points.
///
/// ```
/// use flexpolyline::iter_decode;
///
/// let mut points = iter_decode("BFoz5xJ67i1B1B7PzIhaxL7Y").unwrap();
/// let first = points.next().unwrap().unwrap();
/// assert_eq!((first.lat, first.lng, first.z), (50.10228, 8.69821, None));
/// assert_eq!(points.count(), 3);
/// ```
pub fn iter_decode(encoded: &str) -> Result<Coordinates<'_>> {
    Coordinates::new(encoded)
}
