//! Conversions between polylines and [`geo`] types.
//!
//! `geo` coordinates are `x = longitude`, `y = latitude`, while polylines store `(lat, lng)`.

use geo::{Coord, LineString};

use crate::iter::Coordinate;
use crate::polyline::Polyline;
use crate::precision::Precision;

/// Convert a decoded [`Coordinate`] to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coordinate_to_geo(coordinate: &Coordinate) -> Coord<f64> {
    Coord {
        x: coordinate.lng,
        y: coordinate.lat,
    }
}

/// Convert any Polyline to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn polyline_to_geo(polyline: &Polyline) -> LineString<f64> {
    let coords = match polyline {
        Polyline::TwoD { coordinates, .. } => coordinates
            .iter()
            .map(|&(lat, lng)| Coord { x: lng, y: lat })
            .collect(),
        Polyline::ThreeD { coordinates, .. } => coordinates
            .iter()
            .map(|&(lat, lng, _)| Coord { x: lng, y: lat })
            .collect(),
    };
    LineString::new(coords)
}

impl From<&Polyline> for LineString<f64> {
    fn from(value: &Polyline) -> Self {
        polyline_to_geo(value)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        coordinate_to_geo(&value)
    }
}

impl Polyline {
    /// Creates a 2D polyline from a [`geo::LineString`].
    pub fn from_line_string(line_string: &LineString<f64>, precision2d: Precision) -> Self {
        let coordinates = line_string.coords().map(|c| (c.y, c.x)).collect();
        Polyline::new_2d(coordinates, precision2d)
    }
}

#[cfg(test)]
mod test {
    use geo::line_string;

    use super::*;
    use crate::test::polyline::{frankfurt_3d, p};
    use crate::Type3d;

    #[test]
    fn from_geo_and_back() {
        let ls = line_string![
            (x: 8.25, y: 50.5),
            (x: 8.5, y: 50.75)
        ];
        let polyline = Polyline::from_line_string(&ls, p(5));
        let Polyline::TwoD { coordinates, .. } = &polyline else {
            panic!("expected a 2D polyline");
        };
        assert_eq!(coordinates, &[(50.5, 8.25), (50.75, 8.5)]);

        let decoded = Polyline::decode(polyline.encode().unwrap()).unwrap();
        assert_eq!(LineString::from(&decoded), ls);
    }

    #[test]
    fn third_dimension_is_dropped() {
        let ls: LineString<f64> = (&frankfurt_3d(Type3d::Level)).into();
        assert_eq!(ls.0.len(), 4);
        assert_eq!(ls.0[0], Coord { x: 8.6982122, y: 50.1022829 });
    }

    #[test]
    fn coordinate() {
        let coord: Coord<f64> = Coordinate {
            lat: 1.0,
            lng: 2.0,
            z: Some(3.0),
        }
        .into();
        assert_eq!(coord, Coord { x: 2.0, y: 1.0 });
    }
}
