//! Interoperability with other geospatial crates.

pub mod geo;
