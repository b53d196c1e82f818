//! Static catalog of card brand matching rules.
//!
//! Each brand is described by a set of literal digit-string prefixes and a
//! set of accepted lengths. The catalog is an ordered table and the order is
//! part of the contract: prefixes overlap across brands ("6304" appears in
//! both maestro and laser, "6759" in both maestro and switch), and the first
//! rule that matches wins. Reordering the table changes classification
//! results for those overlapping ranges.
//!
//! The catalog is a process-wide constant. It is built from a hard-coded
//! literal table, never from external input, so no construction can fail.

/// Asset reference used when no brand matched or the input held no digits.
///
/// Distinct from every brand image in the catalog. Front ends map this to a
/// placeholder graphic; the core attaches no meaning to it.
pub const DEFAULT_ASSET: &str = "assets/default.webp";

/// A single brand matching rule.
///
/// `image` is an opaque display-asset reference for front ends. The core
/// never opens it, so it carries no filesystem semantics here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandRule {
    /// Lowercase brand identifier, e.g. `"visa"`.
    pub name: &'static str,
    /// Literal digit-string prefixes. A number matches if it starts with any
    /// of them. Digit strings only, no wildcards or ranges.
    pub prefixes: &'static [&'static str],
    /// Accepted digit counts for this brand.
    pub lengths: &'static [u8],
    /// Opaque display-asset reference for this brand.
    pub image: &'static str,
}

impl BrandRule {
    /// Returns true if `digits` (an already-normalized digit string)
    /// satisfies both the length set and at least one prefix.
    #[inline]
    pub fn matches(&self, digits: &str) -> bool {
        self.accepts_length(digits.len()) && self.prefixes.iter().any(|p| digits.starts_with(p))
    }

    /// Returns true if `length` is one of the accepted digit counts.
    #[inline]
    pub const fn accepts_length(&self, length: usize) -> bool {
        let mut i = 0;
        while i < self.lengths.len() {
            if self.lengths[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }
}

/// The brand catalog, in priority order. First match wins.
///
/// Note the intentional shadowing this order produces: any 16-digit number
/// starting with "4" is visa, so the visa_electron row only documents its
/// prefixes; switch's "6759" is covered by maestro at every shared length.
pub static CATALOG: &[BrandRule] = &[
    BrandRule {
        name: "visa",
        prefixes: &["4"],
        lengths: &[16],
        image: "assets/visa.webp",
    },
    BrandRule {
        name: "visa_electron",
        prefixes: &["4026", "417500", "4508", "4844", "4913", "4917"],
        lengths: &[16],
        image: "assets/visa_electron.webp",
    },
    BrandRule {
        name: "mastercard",
        prefixes: &["51", "52", "53", "54", "55"],
        lengths: &[16],
        image: "assets/mastercard.webp",
    },
    BrandRule {
        name: "amex",
        prefixes: &["34", "37"],
        lengths: &[15],
        image: "assets/amex.webp",
    },
    BrandRule {
        name: "diners",
        prefixes: &["36", "38", "300", "301", "302", "303", "304", "305"],
        lengths: &[14],
        image: "assets/diners.webp",
    },
    BrandRule {
        name: "discover",
        prefixes: &["6011", "65"],
        lengths: &[16],
        image: "assets/discover.webp",
    },
    BrandRule {
        name: "enroute",
        prefixes: &["2014", "2149"],
        lengths: &[15],
        image: "assets/enroute.webp",
    },
    BrandRule {
        name: "jcb",
        prefixes: &["35"],
        lengths: &[16],
        image: "assets/jcb.webp",
    },
    BrandRule {
        name: "maestro",
        prefixes: &["5018", "5020", "5038", "6304", "6759", "6761", "6763"],
        lengths: &[12, 13, 14, 15, 16, 17, 18, 19],
        image: "assets/maestro.webp",
    },
    BrandRule {
        name: "solo",
        prefixes: &["6334", "6767"],
        lengths: &[16, 18, 19],
        image: "assets/solo.webp",
    },
    BrandRule {
        name: "switch",
        prefixes: &["4903", "4905", "4911", "4936", "564182", "633110", "6333", "6759"],
        lengths: &[16, 18, 19],
        image: "assets/switch.webp",
    },
    BrandRule {
        name: "laser",
        prefixes: &["6304", "6706", "6771", "6709"],
        lengths: &[16, 17, 18, 19],
        image: "assets/laser.webp",
    },
];

/// Finds the first catalog rule matching the given normalized digit string.
///
/// Returns `None` when no rule matches (unknown brand).
///
/// # Example
///
/// ```
/// use brandcheck::catalog::classify;
///
/// let rule = classify("5500000000000004").unwrap();
/// assert_eq!(rule.name, "mastercard");
///
/// assert!(classify("123").is_none());
/// ```
#[inline]
pub fn classify(digits: &str) -> Option<&'static BrandRule> {
    CATALOG.iter().find(|rule| rule.matches(digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static BrandRule {
        CATALOG.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_catalog_shape() {
        assert_eq!(CATALOG.len(), 12);
        for r in CATALOG {
            assert!(!r.prefixes.is_empty(), "{} has no prefixes", r.name);
            assert!(!r.lengths.is_empty(), "{} has no lengths", r.name);
            assert!(
                r.prefixes.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())),
                "{} has a non-digit prefix",
                r.name
            );
            assert_ne!(r.image, DEFAULT_ASSET, "{} reuses the default asset", r.name);
        }
    }

    #[test]
    fn test_catalog_order() {
        let names: Vec<&str> = CATALOG.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "visa",
                "visa_electron",
                "mastercard",
                "amex",
                "diners",
                "discover",
                "enroute",
                "jcb",
                "maestro",
                "solo",
                "switch",
                "laser",
            ]
        );
    }

    #[test]
    fn test_accepts_length() {
        assert!(rule("visa").accepts_length(16));
        assert!(!rule("visa").accepts_length(15));

        assert!(rule("maestro").accepts_length(12));
        assert!(rule("maestro").accepts_length(19));
        assert!(!rule("maestro").accepts_length(11));
        assert!(!rule("maestro").accepts_length(20));

        assert!(rule("solo").accepts_length(16));
        assert!(!rule("solo").accepts_length(17));
        assert!(rule("solo").accepts_length(18));
    }

    #[test]
    fn test_classify_basic() {
        assert_eq!(classify("4000000000000002").unwrap().name, "visa");
        assert_eq!(classify("5100000000000008").unwrap().name, "mastercard");
        assert_eq!(classify("340000000000009").unwrap().name, "amex");
        assert_eq!(classify("36000000000008").unwrap().name, "diners");
        assert_eq!(classify("6011000000000004").unwrap().name, "discover");
        assert_eq!(classify("201400000000009").unwrap().name, "enroute");
        assert_eq!(classify("3500000000000009").unwrap().name, "jcb");
        assert_eq!(classify("501800000009").unwrap().name, "maestro");
        assert_eq!(classify("6334000000000004").unwrap().name, "solo");
        assert_eq!(classify("564182000000000005").unwrap().name, "switch");
        assert_eq!(classify("67060000000000006").unwrap().name, "laser");
    }

    #[test]
    fn test_first_match_wins_on_overlaps() {
        // "6304" appears in both maestro and laser; maestro is earlier.
        assert_eq!(classify("6304000000000000").unwrap().name, "maestro");
        // "6759" appears in both maestro and switch; maestro is earlier.
        assert_eq!(classify("6759000000000000").unwrap().name, "maestro");
        // Every 16-digit visa_electron prefix starts with "4", so the visa
        // row shadows it entirely.
        assert_eq!(classify("4026000000000002").unwrap().name, "visa");
        assert_eq!(classify("4508000000000009").unwrap().name, "visa");
        // Switch "4903" at 16 digits is likewise shadowed by visa, but
        // reachable at 18 digits where no earlier rule applies.
        assert_eq!(classify("4903000000000000").unwrap().name, "visa");
        assert_eq!(classify("490300000000000000").unwrap().name, "switch");
    }

    #[test]
    fn test_classify_unknown() {
        // No prefix match at a known length.
        assert!(classify("9999999999999999").is_none());
        // Known prefix at an unknown length.
        assert!(classify("411111111").is_none());
        // Below every minimum length.
        assert!(classify("123").is_none());
        assert!(classify("").is_none());
    }
}
