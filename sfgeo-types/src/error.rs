//! Error type used by the crate.

use thiserror::Error;

use crate::geometry::GeometryType;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SfgeoTypesError {
    /// A geometry did not have the type a conversion required.
    #[error("unexpected geometry type, expected: {expected}, actual: {actual}")]
    Conversion {
        /// Name of the type the conversion expected.
        expected: &'static str,
        /// Type of the geometry that was provided.
        actual: GeometryType,
    },
}
