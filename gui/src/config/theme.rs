// Theme specific configurations (colors)
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub surface: String,
    pub foreground: String,
    pub muted: String,
    /// Fill of the "Converter" button.
    pub primary: String,
    pub on_primary: String,
    pub error: String,
}

impl ThemePalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::default_dark(),
            Theme::Light => Self::default_light(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            surface: "#2b2b2b".to_string(),
            foreground: "#e5e5e5".to_string(),
            muted: "#9a9a9a".to_string(),
            primary: "#1f6aa5".to_string(),
            on_primary: "#ffffff".to_string(),
            error: "#ff6b6b".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f0f0f0".to_string(),
            foreground: "#1a1a1a".to_string(),
            muted: "#6b6b6b".to_string(),
            primary: "#3b8ed0".to_string(),
            on_primary: "#ffffff".to_string(),
            error: "#c62828".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_colours_stand_out() {
        for theme in [Theme::Dark, Theme::Light] {
            let palette = ThemePalette::for_theme(theme);
            assert_ne!(palette.primary, palette.background, "{:?}", theme);
            assert_ne!(palette.primary, palette.on_primary, "{:?}", theme);
        }
    }

    #[test]
    fn test_theme_names() {
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(ThemePalette::for_theme(theme), ThemePalette::default_light());
    }
}
