//! Well-Known Text (WKT) reader and writer for the [`sfgeo_types`] geometry model.
//!
//! The reader is a recursive-descent parser over a whitespace-and-punctuation tokenizer. It
//! accepts the OGC simple feature types plus the extended types `CIRCULARSTRING`,
//! `COMPOUNDCURVE`, `CURVEPOLYGON`, `POLYHEDRALSURFACE`, `TIN` and `TRIANGLE`, with optional
//! `Z`/`M`/`ZM` dimension suffixes. `MULTICURVE` and `MULTISURFACE` documents parse to plain
//! geometry collections; [`sfgeo_types::ExtendedGeometryCollection`] recovers the abstract label
//! for writing.
//!
//! ```
//! use sfgeo_wkt::{read_geometry, write_geometry};
//!
//! let geometry = read_geometry("LINESTRING (0 0, 1 1, 2 2)")?.unwrap();
//! assert_eq!(write_geometry(&geometry), "LINESTRING (0 0, 1 1, 2 2)");
//! # Ok::<(), sfgeo_wkt::SfgeoWktError>(())
//! ```

pub mod error;
pub mod reader;
pub mod text_reader;
pub mod writer;

pub use error::SfgeoWktError;
pub use reader::{
    read_geometry, read_geometry_filtered, read_geometry_from, read_geometry_type,
    GeometryTypeInfo,
};
pub use text_reader::TextReader;
pub use writer::{write_extended_collection, write_geometry, Wkt};
