use crate::error::ValidationError;
use nutype::nutype;

pub const MAX_HANDLE_LENGTH: usize = 128;

fn is_slug(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Opaque backend identifier, e.g. `prod_01HX...`.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 64),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ProductId(String);

/// URL handle of a product or category (`autumn-scarf`, `sewing-supplies`).
#[nutype(
    sanitize(trim, lowercase),
    validate(not_empty, len_char_max = MAX_HANDLE_LENGTH, predicate = |s| is_slug(s)),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Handle(String);

/// Palette key such as `olive` or `dusty-rose`.
#[nutype(
    sanitize(trim, lowercase),
    validate(not_empty, len_char_max = 32, predicate = |s| is_slug(s)),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ColorTag(String);

impl ProductId {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::try_new(s.to_string()).map_err(|_| ValidationError::InvalidProductId(s.to_string()))
    }
}

impl Handle {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::try_new(s.to_string()).map_err(|_| ValidationError::InvalidHandle(s.to_string()))
    }
}

impl ColorTag {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::try_new(s.to_string()).map_err(|_| ValidationError::InvalidColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_is_trimmed_and_lowercased() {
        let handle = Handle::parse("  Sewing-Supplies ").unwrap();
        assert_eq!(handle.as_str(), "sewing-supplies");
    }

    #[test]
    fn handle_rejects_separators() {
        assert!(Handle::parse("clothing,accessories").is_err());
        assert!(Handle::parse("a&b").is_err());
        assert!(Handle::parse("").is_err());
        assert!(Handle::parse("   ").is_err());
    }

    #[test]
    fn color_rejects_too_long() {
        let long = "a".repeat(33);
        assert_eq!(
            ColorTag::parse(&long),
            Err(ValidationError::InvalidColor(long.clone()))
        );
    }

    #[test]
    fn product_id_keeps_case() {
        let id = ProductId::parse(" prod_01HXABC ").unwrap();
        assert_eq!(id.as_str(), "prod_01HXABC");
    }
}
