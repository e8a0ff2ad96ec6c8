// Theme specific configurations (colors, spacing) for the form widgets
use serde::{Deserialize, Serialize};
use shared::size::rem;
use shared::Tone;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub muted: String,
    pub info: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            border: "#565656".to_string(),
            muted: "#8a8f98".to_string(),
            info: "#4fa3e0".to_string(),
            success: "#26a69a".to_string(),
            warning: "#f0b429".to_string(),
            danger: "#ef5350".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#1f2328".to_string(),
            border: "#d0d7de".to_string(),
            muted: "#6e7781".to_string(),
            info: "#0969da".to_string(),
            success: "#1a7f37".to_string(),
            warning: "#9a6700".to_string(),
            danger: "#cf222e".to_string(),
        }
    }

    pub fn for_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::default_dark()),
            "light" => Some(Self::default_light()),
            _ => None,
        }
    }

    pub fn tone(&self, tone: Tone) -> &str {
        match tone {
            Tone::Neutral => &self.muted,
            Tone::Info => &self.info,
            Tone::Success => &self.success,
            Tone::Warning => &self.warning,
            Tone::Danger => &self.danger,
        }
    }

    // Inline style shared by every text input in the form.
    pub fn input_style(&self) -> String {
        format!(
            "width: 100%; padding: {} {}; font-size: {}; text-align: right; background-color: {}; color: {}; border: 1px solid {}; border-radius: {};",
            rem(6.0),
            rem(10.0),
            rem(15.0),
            self.background,
            self.foreground,
            self.border,
            rem(4.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_name() {
        assert_eq!(ThemePalette::for_name("Dark"), Some(ThemePalette::default_dark()));
        assert_eq!(ThemePalette::for_name("light"), Some(ThemePalette::default_light()));
        assert_eq!(ThemePalette::for_name("neon"), None);
    }

    #[test]
    fn test_tone_colors() {
        let palette = ThemePalette::default_light();
        assert_eq!(palette.tone(Tone::Danger), "#cf222e");
        assert_eq!(palette.tone(Tone::Neutral), palette.muted);
    }

    #[test]
    fn test_input_style_uses_rem() {
        let style = ThemePalette::default_dark().input_style();
        assert!(style.contains("padding: 0.375rem 0.625rem;"));
        assert!(style.contains("border-radius: 0.25rem;"));
    }
}
