// Locale conventions for grouping and decimal symbols.
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Grouping and decimal symbols used to render and read back numbers.
///
/// The business screens group thousands with `.` and write decimals with `,`
/// (`1.234.567,89`), which is what [`NumberLocale::default`] gives you.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LocaleRepr")]
pub struct NumberLocale {
    grouping: char,
    decimal: char,
}

// Config files may name a locale ("pt-BR") or spell out both symbols.
#[derive(Deserialize)]
#[serde(untagged)]
enum LocaleRepr {
    Tag(String),
    Custom { grouping: char, decimal: char },
}

impl TryFrom<LocaleRepr> for NumberLocale {
    type Error = FormatError;

    fn try_from(repr: LocaleRepr) -> Result<Self, Self::Error> {
        match repr {
            LocaleRepr::Tag(tag) => Self::from_tag(&tag),
            LocaleRepr::Custom { grouping, decimal } => Self::new(grouping, decimal),
        }
    }
}

impl NumberLocale {
    pub fn new(grouping: char, decimal: char) -> Result<Self, FormatError> {
        for symbol in [grouping, decimal] {
            if symbol.is_ascii_digit() || symbol == '-' || symbol == '\u{2212}' {
                return Err(FormatError::InvalidSeparator(symbol));
            }
        }
        if grouping == decimal {
            return Err(FormatError::SeparatorClash(grouping));
        }
        Ok(Self { grouping, decimal })
    }

    /// Brazilian Portuguese: `1.234.567,89`.
    pub const fn pt_br() -> Self {
        Self { grouping: '.', decimal: ',' }
    }

    /// Indonesian uses the same symbols as pt-BR.
    pub const fn id_id() -> Self {
        Self { grouping: '.', decimal: ',' }
    }

    pub const fn en_us() -> Self {
        Self { grouping: ',', decimal: '.' }
    }

    /// French groups with a narrow no-break space.
    pub const fn fr_fr() -> Self {
        Self { grouping: '\u{202F}', decimal: ',' }
    }

    pub const fn de_ch() -> Self {
        Self { grouping: '\'', decimal: '.' }
    }

    /// Resolves a locale tag such as `"pt-BR"`, `"pt_br"` or a bare language `"en"`.
    pub fn from_tag(tag: &str) -> Result<Self, FormatError> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        let language = normalized.split('-').next().unwrap_or_default();

        match (normalized.as_str(), language) {
            ("de-ch", _) => Ok(Self::de_ch()),
            (_, "pt") => Ok(Self::pt_br()),
            (_, "id") => Ok(Self::id_id()),
            (_, "en") => Ok(Self::en_us()),
            (_, "fr") => Ok(Self::fr_fr()),
            _ => Err(FormatError::UnknownLocale(tag.to_string())),
        }
    }

    pub fn grouping(&self) -> char {
        self.grouping
    }

    pub fn decimal(&self) -> char {
        self.decimal
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::pt_br()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_variants() {
        assert_eq!(NumberLocale::from_tag("pt-BR").unwrap(), NumberLocale::pt_br());
        assert_eq!(NumberLocale::from_tag("pt_br").unwrap(), NumberLocale::pt_br());
        assert_eq!(NumberLocale::from_tag(" en ").unwrap(), NumberLocale::en_us());
        assert_eq!(NumberLocale::from_tag("id-ID").unwrap(), NumberLocale::id_id());
        assert_eq!(NumberLocale::from_tag("de-CH").unwrap(), NumberLocale::de_ch());
        assert_eq!(NumberLocale::from_tag("fr-CA").unwrap(), NumberLocale::fr_fr());
    }

    #[test]
    fn test_from_tag_unknown() {
        assert_eq!(
            NumberLocale::from_tag("xx-YY"),
            Err(FormatError::UnknownLocale("xx-YY".to_string()))
        );
    }

    #[test]
    fn test_new_rejects_clashing_separators() {
        assert_eq!(NumberLocale::new('.', '.'), Err(FormatError::SeparatorClash('.')));
    }

    #[test]
    fn test_new_rejects_digits_and_signs() {
        assert_eq!(NumberLocale::new('1', ','), Err(FormatError::InvalidSeparator('1')));
        assert_eq!(NumberLocale::new('.', '-'), Err(FormatError::InvalidSeparator('-')));
    }

    #[test]
    fn test_deserialize_tag_and_custom() {
        let tagged: NumberLocale = serde_json::from_str("\"en-US\"").unwrap();
        assert_eq!(tagged, NumberLocale::en_us());

        let custom: NumberLocale =
            serde_json::from_str(r#"{ "grouping": " ", "decimal": "," }"#).unwrap();
        assert_eq!(custom.grouping(), ' ');
        assert_eq!(custom.decimal(), ',');

        let clash = serde_json::from_str::<NumberLocale>(r#"{ "grouping": ",", "decimal": "," }"#);
        assert!(clash.is_err());
    }
}
