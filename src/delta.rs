//! Delta coding of scaled coordinates.
//!
//! Every axis keeps an integer accumulator starting at zero. A value is scaled by `10^precision`,
//! rounded half away from zero and written as the zig-zag varint of its difference to the
//! previous value on that axis. Accumulators wrap on overflow so that arbitrary input never
//! panics and still decodes to the same integers.

use crate::error::{PolylineError, Result};
use crate::header::PolylineHeader;
use crate::precision::Precision;
use crate::varint::{encode_signed, VarintReader};

/// Per-axis encoder state for points with `D` values.
#[derive(Debug, Clone)]
pub(crate) struct DeltaEncoder<const D: usize> {
    scales: [f64; D],
    last: [i64; D],
}

impl<const D: usize> DeltaEncoder<D> {
    pub(crate) fn new(precisions: [Precision; D]) -> Self {
        Self {
            scales: precisions.map(|precision| precision.scale()),
            last: [0; D],
        }
    }

    pub(crate) fn push(&mut self, point: [f64; D], out: &mut String) {
        for ((value, scale), last) in point.iter().zip(&self.scales).zip(&mut self.last) {
            let scaled = (value * scale).round() as i64;
            encode_signed(scaled.wrapping_sub(*last), out);
            *last = scaled;
        }
    }
}

/// Per-axis decoder state for points with `D` values.
#[derive(Debug, Clone)]
pub(crate) struct DeltaDecoder<const D: usize> {
    scales: [f64; D],
    last: [i64; D],
}

impl<const D: usize> DeltaDecoder<D> {
    pub(crate) fn new(precisions: [Precision; D]) -> Self {
        Self {
            scales: precisions.map(|precision| precision.scale()),
            last: [0; D],
        }
    }

    /// Reads the next point, or `None` once `reader` is exhausted at a point boundary.
    pub(crate) fn next_point(&mut self, reader: &mut VarintReader<'_>) -> Option<Result<[f64; D]>> {
        if reader.is_empty() {
            return None;
        }
        Some(self.read_point(reader))
    }

    fn read_point(&mut self, reader: &mut VarintReader<'_>) -> Result<[f64; D]> {
        let mut point = [0.0; D];
        let axes = point.iter_mut().zip(&self.scales).zip(&mut self.last);
        for (axis, ((value, scale), last)) in axes.enumerate() {
            if axis > 0 && reader.is_empty() {
                return Err(PolylineError::invalid_encoding(format!(
                    "input ends after {axis} of {} values of a point",
                    D
                )));
            }
            let delta = reader.read_signed()?;
            *last = last.wrapping_add(delta);
            *value = *last as f64 / scale;
        }
        Ok(point)
    }
}

#[derive(Debug, Clone)]
enum EncoderState {
    TwoD(DeltaEncoder<2>),
    ThreeD(DeltaEncoder<3>),
}

/// Incremental polyline encoder.
///
/// The header is written on construction and every pushed point is appended immediately, so the
/// output of [`Encoder::finish`] is identical to [`Polyline::encode`] for the same points.
///
/// ```
/// use flexpolyline::{Encoder, PolylineHeader, Precision};
///
/// let mut encoder = Encoder::new(PolylineHeader::new_2d(Precision::new(5).unwrap()));
/// encoder.push_2d(50.1022829, 8.6982122).unwrap();
/// encoder.push_2d(50.1020076, 8.6956695).unwrap();
/// assert_eq!(encoder.finish(), "BFoz5xJ67i1B1B7P");
/// ```
///
/// [`Polyline::encode`]: crate::Polyline::encode
#[derive(Debug, Clone)]
pub struct Encoder {
    header: PolylineHeader,
    state: EncoderState,
    out: String,
}

impl Encoder {
    /// Creates an encoder for polylines described by `header`.
    pub fn new(header: PolylineHeader) -> Self {
        Self::with_capacity(header, 0)
    }

    /// Creates an encoder with output space reserved for roughly `num_points` points.
    pub fn with_capacity(header: PolylineHeader, num_points: usize) -> Self {
        let state = match header.type3d() {
            None => EncoderState::TwoD(DeltaEncoder::new([header.precision2d(); 2])),
            Some(_) => EncoderState::ThreeD(DeltaEncoder::new([
                header.precision2d(),
                header.precision2d(),
                header.precision3d(),
            ])),
        };

        // a few characters per value is typical for geographic deltas
        let mut out = String::with_capacity(4 + num_points * header.dimensions() * 4);
        header.encode(&mut out);

        Self { header, state, out }
    }

    /// The header this encoder writes.
    pub fn header(&self) -> PolylineHeader {
        self.header
    }

    /// Appends a 2D point.
    ///
    /// Fails with [`PolylineError::InvalidEncoding`] if the header declares a third dimension.
    pub fn push_2d(&mut self, lat: f64, lng: f64) -> Result<()> {
        match &mut self.state {
            EncoderState::TwoD(encoder) => {
                encoder.push([lat, lng], &mut self.out);
                Ok(())
            }
            EncoderState::ThreeD(_) => Err(PolylineError::invalid_encoding(
                "2D point pushed to an encoder with a third dimension",
            )),
        }
    }

    /// Appends a 3D point.
    ///
    /// Fails with [`PolylineError::InvalidEncoding`] if the header has no third dimension.
    pub fn push_3d(&mut self, lat: f64, lng: f64, z: f64) -> Result<()> {
        match &mut self.state {
            EncoderState::ThreeD(encoder) => {
                encoder.push([lat, lng, z], &mut self.out);
                Ok(())
            }
            EncoderState::TwoD(_) => Err(PolylineError::invalid_encoding(
                "3D point pushed to an encoder without a third dimension",
            )),
        }
    }

    /// Returns the encoded polyline.
    pub fn finish(self) -> String {
        self.out
    }
}
