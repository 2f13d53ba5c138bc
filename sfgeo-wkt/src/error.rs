//! Error type used by the crate.

use sfgeo_types::{GeometryType, SfgeoTypesError};
use thiserror::Error;

/// Error enum.
///
/// Every parse failure aborts the whole document; there is no recovery or partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SfgeoWktError {
    /// The type name token did not match any known geometry type.
    #[error("unsupported geometry type: '{0}'")]
    UnsupportedGeometryType(String),

    /// One of the abstract categories was used as a geometry constructor.
    #[error("unexpected geometry type {0} which is abstract")]
    AbstractGeometryType(GeometryType),

    /// The token following the type name was not a dimension suffix, `(` or `EMPTY`.
    #[error("invalid value following geometry type '{geometry_type}': '{value}'")]
    InvalidDimensionValue {
        /// The geometry type that was being read.
        geometry_type: GeometryType,
        /// The offending token.
        value: String,
    },

    /// A structural token was not one of the expected alternatives.
    #[error("invalid token, expected {expected}, found: '{found}'")]
    UnexpectedToken {
        /// Description of the expected alternatives.
        expected: &'static str,
        /// The offending token.
        found: String,
    },

    /// The token stream ended in the middle of a geometry.
    #[error("unexpected end of text")]
    UnexpectedEnd,

    /// A token could not be parsed as a 64-bit floating point number.
    #[error("invalid number: '{0}'")]
    InvalidNumber(String),

    /// A parsed geometry did not have the type the grammar required at this position.
    #[error("unexpected geometry type, expected: {expected}, actual: {actual}")]
    UnexpectedGeometryType {
        /// Name of the expected type or type bound.
        expected: &'static str,
        /// Type of the geometry that was parsed.
        actual: GeometryType,
    },
}

impl From<SfgeoTypesError> for SfgeoWktError {
    fn from(value: SfgeoTypesError) -> Self {
        match value {
            SfgeoTypesError::Conversion { expected, actual } => {
                Self::UnexpectedGeometryType { expected, actual }
            }
        }
    }
}
