// SPDX-License-Identifier: MPL-2.0
//! EXIF field identities and the values they carry.

use std::fmt;

// =============================================================================
// Rational
// =============================================================================

/// Unsigned EXIF rational (`RATIONAL` type, two `u32`s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    #[must_use]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the value as a float. A zero denominator yields `NaN`.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// =============================================================================
// FieldValue
// =============================================================================

/// Value stored in, or destined for, a single EXIF field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// `ASCII` text without the trailing NUL.
    Ascii(String),
    /// A single `RATIONAL`.
    Rational(Rational),
    /// Degrees, minutes and seconds as three `RATIONAL`s.
    RationalTriple([Rational; 3]),
}

impl FieldValue {
    /// Returns the text if this is an [`FieldValue::Ascii`] value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Ascii(text) => Some(text),
            _ => None,
        }
    }

    /// Short name of the value shape, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            FieldValue::Ascii(_) => "ascii",
            FieldValue::Rational(_) => "rational",
            FieldValue::RationalTriple(_) => "rational triple",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Ascii(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Ascii(text)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Ascii(text) => write!(f, "{text:?}"),
            FieldValue::Rational(r) => write!(f, "{r}"),
            FieldValue::RationalTriple([a, b, c]) => write!(f, "[{a}, {b}, {c}]"),
        }
    }
}

// =============================================================================
// FieldGroup
// =============================================================================

/// The IFD a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldGroup {
    /// The Exif sub-IFD (capture time fields).
    Exif,
    /// The GPS sub-IFD.
    GpsInfo,
}

impl FieldGroup {
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            FieldGroup::Exif => "IFD/Exif",
            FieldGroup::GpsInfo => "IFD/GPSInfo",
        }
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// =============================================================================
// ExifField
// =============================================================================

/// EXIF fields read or written during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExifField {
    DateTimeOriginal,
    OffsetTimeOriginal,
    SubSecTimeOriginal,
    GpsLatitude,
    GpsLatitudeRef,
    GpsLongitude,
    GpsLongitudeRef,
    GpsAltitude,
}

impl ExifField {
    /// The EXIF tag name as it appears in the standard.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ExifField::DateTimeOriginal => "DateTimeOriginal",
            ExifField::OffsetTimeOriginal => "OffsetTimeOriginal",
            ExifField::SubSecTimeOriginal => "SubSecTimeOriginal",
            ExifField::GpsLatitude => "GPSLatitude",
            ExifField::GpsLatitudeRef => "GPSLatitudeRef",
            ExifField::GpsLongitude => "GPSLongitude",
            ExifField::GpsLongitudeRef => "GPSLongitudeRef",
            ExifField::GpsAltitude => "GPSAltitude",
        }
    }

    #[must_use]
    pub const fn group(&self) -> FieldGroup {
        match self {
            ExifField::DateTimeOriginal
            | ExifField::OffsetTimeOriginal
            | ExifField::SubSecTimeOriginal => FieldGroup::Exif,
            ExifField::GpsLatitude
            | ExifField::GpsLatitudeRef
            | ExifField::GpsLongitude
            | ExifField::GpsLongitudeRef
            | ExifField::GpsAltitude => FieldGroup::GpsInfo,
        }
    }
}

impl fmt::Display for ExifField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
