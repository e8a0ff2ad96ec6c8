// px -> rem conversion for inline styles.
use crate::error::FormatError;

/// Root font size the rem values are computed against.
pub const ROOT_FONT_PX: f64 = 16.0;

pub fn px_to_rem(px: f64) -> f64 {
    if px.is_finite() {
        px / ROOT_FONT_PX
    } else {
        0.0
    }
}

/// CSS length, e.g. `rem(24.0) == "1.5rem"`.
pub fn rem(px: f64) -> String {
    format!("{}rem", px_to_rem(px))
}

/// Reads a pixel size coming from upstream text: `"24"`, `"24px"`, `" 12.5 px "`.
pub fn parse_px(text: &str) -> Result<f64, FormatError> {
    let trimmed = text.trim();
    let number = trimmed
        .strip_suffix("px")
        .map(str::trim_end)
        .unwrap_or(trimmed);
    number
        .parse::<f64>()
        .ok()
        .filter(|px| px.is_finite())
        .ok_or_else(|| FormatError::InvalidSize(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_to_rem() {
        assert_eq!(px_to_rem(24.0), 1.5);
        assert_eq!(px_to_rem(0.0), 0.0);
        assert_eq!(px_to_rem(f64::NAN), 0.0);
        assert_eq!(rem(24.0), "1.5rem");
        assert_eq!(rem(32.0), "2rem");
    }

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("24"), Ok(24.0));
        assert_eq!(parse_px("24px"), Ok(24.0));
        assert_eq!(parse_px(" 12.5 px "), Ok(12.5));
        assert_eq!(parse_px("2rem"), Err(FormatError::InvalidSize("2rem".to_string())));
        assert_eq!(parse_px("inf"), Err(FormatError::InvalidSize("inf".to_string())));
        assert!(parse_px("").is_err());
    }
}
