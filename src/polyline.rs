use serde::{Deserialize, Serialize};

use crate::delta::{DeltaDecoder, Encoder};
use crate::error::Result;
use crate::header::PolylineHeader;
use crate::precision::Precision;
use crate::type3d::Type3d;
use crate::varint::VarintReader;

/// A 2- or 3-dimensional polyline.
///
/// Coordinates are `(lat, lng)` or `(lat, lng, z)` tuples in path order. Duplicate points and
/// reversals are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Polyline {
    /// 2-dimensional polyline
    TwoD {
        /// List of 2D coordinates making up this polyline
        coordinates: Vec<(f64, f64)>,
        /// Precision of the coordinates (e.g. used for encoding,
        /// or to report the precision supplied in encoded data)
        precision2d: Precision,
    },
    /// 3-dimensional polyline
    ThreeD {
        /// List of 3D coordinates making up this polyline
        coordinates: Vec<(f64, f64, f64)>,
        /// Precision of the 2D part of the coordinates
        precision2d: Precision,
        /// Precision of the third component
        precision3d: Precision,
        /// Type of the third component
        type3d: Type3d,
    },
}

impl Polyline {
    /// Creates a 2D polyline.
    pub fn new_2d(coordinates: Vec<(f64, f64)>, precision2d: Precision) -> Self {
        Self::TwoD {
            coordinates,
            precision2d,
        }
    }

    /// Creates a 3D polyline.
    pub fn new_3d(
        coordinates: Vec<(f64, f64, f64)>,
        precision2d: Precision,
        precision3d: Precision,
        type3d: Type3d,
    ) -> Self {
        Self::ThreeD {
            coordinates,
            precision2d,
            precision3d,
            type3d,
        }
    }

    /// The header describing this polyline.
    pub fn header(&self) -> PolylineHeader {
        match self {
            Polyline::TwoD { precision2d, .. } => PolylineHeader::new_2d(*precision2d),
            Polyline::ThreeD {
                precision2d,
                precision3d,
                type3d,
                ..
            } => PolylineHeader::new_3d(*precision2d, *precision3d, *type3d),
        }
    }

    /// Precision of the latitude and longitude components.
    pub fn precision2d(&self) -> Precision {
        match self {
            Polyline::TwoD { precision2d, .. } | Polyline::ThreeD { precision2d, .. } => {
                *precision2d
            }
        }
    }

    /// Precision of the third component, if any.
    pub fn precision3d(&self) -> Option<Precision> {
        match self {
            Polyline::TwoD { .. } => None,
            Polyline::ThreeD { precision3d, .. } => Some(*precision3d),
        }
    }

    /// Type of the third component, if any.
    pub fn type3d(&self) -> Option<Type3d> {
        match self {
            Polyline::TwoD { .. } => None,
            Polyline::ThreeD { type3d, .. } => Some(*type3d),
        }
    }

    /// The number of points.
    pub fn len(&self) -> usize {
        match self {
            Polyline::TwoD { coordinates, .. } => coordinates.len(),
            Polyline::ThreeD { coordinates, .. } => coordinates.len(),
        }
    }

    /// Whether this polyline has no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encodes this polyline into a string.
    ///
    /// Coordinates are rounded to the declared precision, so the transformation is lossy.
    ///
    /// ```
    /// use flexpolyline::{Polyline, Precision};
    ///
    /// let polyline = Polyline::new_2d(
    ///     vec![
    ///         (50.1022829, 8.6982122),
    ///         (50.1020076, 8.6956695),
    ///         (50.1006313, 8.6914960),
    ///         (50.0987800, 8.6875156),
    ///     ],
    ///     Precision::new(5).unwrap(),
    /// );
    /// assert_eq!(polyline.encode().unwrap(), "BFoz5xJ67i1B1B7PzIhaxL7Y");
    /// ```
    pub fn encode(&self) -> Result<String> {
        let mut encoder = Encoder::with_capacity(self.header(), self.len());
        match self {
            Polyline::TwoD { coordinates, .. } => {
                for &(lat, lng) in coordinates {
                    encoder.push_2d(lat, lng)?;
                }
            }
            Polyline::ThreeD { coordinates, .. } => {
                for &(lat, lng, z) in coordinates {
                    encoder.push_3d(lat, lng, z)?;
                }
            }
        }
        Ok(encoder.finish())
    }

    /// Decodes an encoded polyline.
    ///
    /// The dimensionality, precisions and third dimension type are taken from the header.
    pub fn decode(encoded: impl AsRef<str>) -> Result<Self> {
        let mut reader = VarintReader::new(encoded.as_ref().as_bytes());
        let header = PolylineHeader::decode(&mut reader)?;
        let precision2d = header.precision2d();

        match header.type3d() {
            None => {
                let mut decoder = DeltaDecoder::new([precision2d; 2]);
                let mut coordinates = Vec::with_capacity(reader.remaining() / 4);
                while let Some(point) = decoder.next_point(&mut reader) {
                    let [lat, lng] = point?;
                    coordinates.push((lat, lng));
                }
                Ok(Self::new_2d(coordinates, precision2d))
            }
            Some(type3d) => {
                let precision3d = header.precision3d();
                let mut decoder = DeltaDecoder::new([precision2d, precision2d, precision3d]);
                let mut coordinates = Vec::with_capacity(reader.remaining() / 6);
                while let Some(point) = decoder.next_point(&mut reader) {
                    let [lat, lng, z] = point?;
                    coordinates.push((lat, lng, z));
                }
                Ok(Self::new_3d(coordinates, precision2d, precision3d, type3d))
            }
        }
    }
}

/// Encodes `polyline` into a string. See [`Polyline::encode`].
pub fn encode(polyline: &Polyline) -> Result<String> {
    polyline.encode()
}

/// Decodes an encoded polyline. See [`Polyline::decode`].
pub fn decode(encoded: impl AsRef<str>) -> Result<Polyline> {
    Polyline::decode(encoded)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::PolylineError;
    use crate::test::polyline::{berlin_2d, frankfurt_2d, frankfurt_3d, p, pseudo_random_values};

    fn assert_coords_2d(actual: &[(f64, f64)], expected: &[(f64, f64)], epsilon: f64) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(a.0, e.0, epsilon = epsilon);
            assert_abs_diff_eq!(a.1, e.1, epsilon = epsilon);
        }
    }

    #[test]
    fn encode_2d_example_1() {
        assert_eq!(frankfurt_2d().encode().unwrap(), "BFoz5xJ67i1B1B7PzIhaxL7Y");
    }

    #[test]
    fn encode_2d_example_2() {
        assert_eq!(
            encode(&berlin_2d()).unwrap(),
            "BF05xgKuy2xCx9B7vUl0OhnR54EqSzpEl-HxjD3pBiGnyGi2CvwFsgD3nD4vB6e"
        );
    }

    #[test]
    fn encode_3d_example_1() {
        assert_eq!(
            frankfurt_3d(Type3d::Altitude).encode().unwrap(),
            "BlBoz5xJ67i1BU1B7PUzIhaUxL7YU"
        );
        assert_eq!(
            frankfurt_3d(Type3d::Level).encode().unwrap(),
            "BVoz5xJ67i1BU1B7PUzIhaUxL7YU"
        );
    }

    #[test]
    fn encode_is_deterministic() {
        let polyline = berlin_2d();
        assert_eq!(polyline.encode().unwrap(), polyline.encode().unwrap());
    }

    #[test]
    fn decode_2d_example_1() {
        let polyline = Polyline::decode("BFoz5xJ67i1B1B7PzIhaxL7Y").unwrap();
        assert_eq!(polyline.precision2d(), p(5));
        assert_eq!(polyline.type3d(), None);
        let Polyline::TwoD { coordinates, .. } = polyline else {
            panic!("expected a 2D polyline");
        };
        assert_coords_2d(
            &coordinates,
            &[
                (50.10228, 8.69821),
                (50.10201, 8.69567),
                (50.10063, 8.69150),
                (50.09878, 8.68752),
            ],
            1e-5,
        );
    }

    #[test]
    fn decode_2d_example_2() {
        let polyline =
            decode("BF05xgKuy2xCx9B7vUl0OhnR54EqSzpEl-HxjD3pBiGnyGi2CvwFsgD3nD4vB6e").unwrap();
        let Polyline::TwoD { coordinates, .. } = polyline else {
            panic!("expected a 2D polyline");
        };
        assert_coords_2d(
            &coordinates,
            &[
                (52.51994, 13.38663),
                (52.51009, 13.28169),
                (52.43518, 13.19352),
                (52.41073, 13.19645),
                (52.38871, 13.15578),
                (52.37278, 13.14910),
                (52.37375, 13.11546),
                (52.38752, 13.08722),
                (52.40294, 13.07062),
                (52.41058, 13.07555),
            ],
            1e-9,
        );
    }

    #[test]
    fn decode_3d_example_1() {
        let polyline = Polyline::decode("BlBoz5xJ67i1BU1B7PUzIhaUxL7YU").unwrap();
        assert_eq!(polyline.header(), frankfurt_3d(Type3d::Altitude).header());
        assert_eq!(polyline.precision3d(), Some(p(0)));
        let Polyline::ThreeD { coordinates, .. } = polyline else {
            panic!("expected a 3D polyline");
        };
        let z: Vec<f64> = coordinates.iter().map(|c| c.2).collect();
        assert_eq!(z, [10.0, 20.0, 30.0, 40.0]);
        assert_abs_diff_eq!(coordinates[3].0, 50.09878, epsilon = 1e-9);
        assert_abs_diff_eq!(coordinates[3].1, 8.68752, epsilon = 1e-9);
    }

    #[test]
    fn empty() {
        for digits in [0, 5, 15] {
            let encoded = Polyline::new_2d(vec![], p(digits)).encode().unwrap();
            assert_eq!(encoded.len(), 2);
            let decoded = decode(&encoded).unwrap();
            assert!(decoded.is_empty());
            assert_eq!(decoded.precision2d(), p(digits));
        }

        let encoded = Polyline::new_3d(vec![], p(5), p(0), Type3d::Elevation)
            .encode()
            .unwrap();
        assert_eq!(encoded, "B1B");
        let decoded = decode(&encoded).unwrap();
        assert!(decoded.is_empty());
        assert_eq!(decoded.type3d(), Some(Type3d::Elevation));
    }

    #[test]
    fn reserved_types_round_trip() {
        for type3d in [Type3d::Reserved1, Type3d::Reserved2] {
            let encoded = frankfurt_3d(type3d).encode().unwrap();
            assert_eq!(decode(encoded).unwrap().type3d(), Some(type3d));
        }
    }

    #[test]
    fn unsupported_version() {
        assert_eq!(
            decode("CFoz5xJ67i1B").unwrap_err(),
            PolylineError::UnsupportedVersion(2)
        );
    }

    #[test]
    fn truncation_never_yields_garbage() {
        for full in [
            frankfurt_2d().encode().unwrap(),
            berlin_2d().encode().unwrap(),
            frankfurt_3d(Type3d::Custom1).encode().unwrap(),
        ] {
            let original = decode(&full).unwrap();
            for end in 0..full.len() {
                match decode(&full[..end]) {
                    Ok(truncated) => {
                        assert!(truncated.len() < original.len());
                        assert_eq!(truncated.header(), original.header());
                        let prefix = match (&truncated, &original) {
                            (
                                Polyline::TwoD { coordinates: t, .. },
                                Polyline::TwoD { coordinates: o, .. },
                            ) => t[..] == o[..t.len()],
                            (
                                Polyline::ThreeD { coordinates: t, .. },
                                Polyline::ThreeD { coordinates: o, .. },
                            ) => t[..] == o[..t.len()],
                            _ => false,
                        };
                        assert!(prefix, "truncated at {end}: {truncated:?}");
                    }
                    Err(err) => assert!(
                        matches!(err, PolylineError::InvalidEncoding(_)),
                        "truncated at {end}: {err}"
                    ),
                }
            }
        }
    }

    #[test]
    fn invalid_character() {
        assert!(matches!(
            decode("BFoz5xJ67i1B1B7P=IhaxL7Y"),
            Err(PolylineError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn encode_decode_2d() {
        let values = pseudo_random_values();
        for digits in 0..=15 {
            let precision = p(digits);
            let scale = precision.scale();
            let input: Vec<(f64, f64)> = values.iter().map(|v| (v[0], v[1])).collect();
            let expected: Vec<(f64, f64)> = input
                .iter()
                .map(|(lat, lng)| ((lat * scale).round() / scale, (lng * scale).round() / scale))
                .collect();

            let encoded = Polyline::new_2d(input, precision).encode().unwrap();
            let decoded = decode(encoded).unwrap();
            assert_eq!(decoded.precision2d(), precision);
            let Polyline::TwoD { coordinates, .. } = decoded else {
                panic!("expected a 2D polyline");
            };
            assert_coords_2d(&coordinates, &expected, 1e-12_f64.max(0.5 / scale));
        }
    }

    #[test]
    fn encode_decode_3d() {
        let values = pseudo_random_values();
        let precision2d = p(5);
        for digits in 0..=15 {
            for type3d in Type3d::ALL {
                let precision3d = p(digits);
                let input: Vec<(f64, f64, f64)> =
                    values.iter().map(|v| (v[0], v[1], v[2])).collect();
                let polyline = Polyline::new_3d(input.clone(), precision2d, precision3d, type3d);

                let decoded = decode(polyline.encode().unwrap()).unwrap();
                assert_eq!(decoded.header(), polyline.header());
                let Polyline::ThreeD { coordinates, .. } = decoded else {
                    panic!("expected a 3D polyline");
                };
                assert_eq!(coordinates.len(), input.len());
                let scale3d = precision3d.scale();
                for (actual, original) in coordinates.iter().zip(&input) {
                    assert_abs_diff_eq!(actual.0, original.0, epsilon = 0.5e-5 + 1e-12);
                    assert_abs_diff_eq!(actual.1, original.1, epsilon = 0.5e-5 + 1e-12);
                    let expected_z = (original.2 * scale3d).round() / scale3d;
                    assert_abs_diff_eq!(actual.2, expected_z, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn serde_round_trip() {
        let polyline = Polyline::new_3d(
            vec![(50.5, 8.25, 10.0), (50.125, 8.0, -3.5)],
            p(5),
            p(1),
            Type3d::Elevation,
        );
        let json = serde_json::to_string(&polyline).unwrap();
        assert!(json.contains("\"Elevation\""));
        let back: Polyline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, polyline);
    }
}
