//! Result types for card classification.
//!
//! `ValidationResult` is a plain value: three fields, created fresh on every
//! call, never mutated. The core has no failure mode that is not expressible
//! through these fields, so there is no error type anywhere in this crate.

use std::fmt;

use crate::catalog::{BrandRule, DEFAULT_ASSET};

/// Classification outcome for a card number.
///
/// `Unknown` and `Invalid` are ordinary outcomes, not errors: `Unknown`
/// means digits were present but no catalog rule matched, `Invalid` means
/// the input contained no digits at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    /// A catalog brand matched; holds its lowercase identifier.
    Known(&'static str),
    /// Digits were present but no rule matched them.
    Unknown,
    /// The input contained no digits at all.
    Invalid,
}

impl Brand {
    /// Returns the brand's string form: the catalog name, `"unknown"`, or
    /// `"invalid"`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Known(name) => name,
            Self::Unknown => "unknown",
            Self::Invalid => "invalid",
        }
    }

    /// Returns true if this is a catalog brand rather than a sentinel.
    #[inline]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The outcome of validating one card number.
///
/// Immutable value with no identity beyond its fields. `is_valid` is true
/// only when a brand matched and the Luhn checksum passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidationResult {
    brand: Brand,
    image: &'static str,
    is_valid: bool,
}

impl ValidationResult {
    /// Result for a number that matched a catalog rule.
    #[inline]
    pub(crate) const fn matched(rule: &'static BrandRule, is_valid: bool) -> Self {
        Self {
            brand: Brand::Known(rule.name),
            image: rule.image,
            is_valid,
        }
    }

    /// Result for a digit string no catalog rule matched.
    #[inline]
    pub(crate) const fn unknown() -> Self {
        Self {
            brand: Brand::Unknown,
            image: DEFAULT_ASSET,
            is_valid: false,
        }
    }

    /// Result for input that contained no digits.
    #[inline]
    pub(crate) const fn invalid() -> Self {
        Self {
            brand: Brand::Invalid,
            image: DEFAULT_ASSET,
            is_valid: false,
        }
    }

    /// The classified brand.
    #[inline]
    pub const fn brand(&self) -> Brand {
        self.brand
    }

    /// Opaque display-asset reference: the matched brand's image, or the
    /// default sentinel for `Unknown`/`Invalid`.
    ///
    /// Front ends map this to an on-disk or bundled asset; the core never
    /// touches the filesystem.
    #[inline]
    pub const fn image_ref(&self) -> &'static str {
        self.image
    }

    /// True only if a brand matched and the checksum passed.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.brand,
            if self.is_valid { "valid" } else { "not valid" }
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("brand", self.brand.name())?;
        state.serialize_field("image", self.image)?;
        state.serialize_field("valid", &self.is_valid)?;
        state.end()
    }
}
