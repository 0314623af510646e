//! Encoding and decoding of [flexible polylines]: lossy, URL-safe strings carrying a sequence of
//! 2D or 3D coordinates.
//!
//! ```
//! use flexpolyline::{Polyline, Precision, Type3d};
//!
//! let polyline = Polyline::new_3d(
//!     vec![(50.1022829, 8.6982122, 10.0), (50.1020076, 8.6956695, 20.0)],
//!     Precision::new(5).unwrap(),
//!     Precision::new(0).unwrap(),
//!     Type3d::Altitude,
//! );
//! let encoded = polyline.encode().unwrap();
//! assert_eq!(encoded, "BlBoz5xJ67i1BU1B7PU");
//!
//! let decoded = Polyline::decode(&encoded).unwrap();
//! assert_eq!(decoded.type3d(), Some(Type3d::Altitude));
//! ```
//!
//! All functions are pure: nothing is logged, printed or cached, and every failure is returned
//! as a [`PolylineError`].
//!
//! [flexible polylines]: https://github.com/heremaps/flexible-polyline

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub use delta::Encoder;
pub use error::{PolylineError, Result};
pub use header::{decode_header, peek_third_dimension_type, PolylineHeader, FORMAT_VERSION};
pub use iter::{iter_decode, Coordinate, Coordinates};
pub use polyline::{decode, encode, Polyline};
pub use precision::Precision;
pub use type3d::Type3d;

mod delta;
pub mod error;
mod header;
pub mod io;
mod iter;
mod polyline;
mod precision;
mod type3d;
pub mod varint;
