use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::modules::document_store::application::domain::entities::Fields;
use crate::modules::settings::application::domain::document_id::SettingsDocId;
use crate::modules::settings::application::domain::entities::SettingsDocument;
use crate::modules::settings::application::domain::text_or;

pub const DEFAULT_PRIMARY_COLOR: &str = "#00f0ff";

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})$").expect("static regex is valid")
});

/// `#rrggbb` (leading `#` optional, any case) into its RGB channels.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let caps = HEX_COLOR.captures(value.trim())?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();

    Some((channel(1)?, channel(2)?, channel(3)?))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSettings {
    /// As stored; may not parse. Readers use [`ThemeSettings::primary_hex`].
    pub primary_color: String,
    pub default_theme: Theme,
}

impl ThemeSettings {
    pub fn primary_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.primary_color)
    }

    /// Lowercase `#rrggbb`, or [`DEFAULT_PRIMARY_COLOR`] when the stored
    /// value does not parse.
    pub fn primary_hex(&self) -> String {
        match self.primary_rgb() {
            Some((r, g, b)) => format!("#{r:02x}{g:02x}{b:02x}"),
            None => DEFAULT_PRIMARY_COLOR.to_string(),
        }
    }

    pub(crate) fn check_field(key: &str, value: &Value) -> Result<(), String> {
        match (key, value) {
            ("primaryColor", Value::String(hex)) if parse_hex_color(hex).is_none() => {
                Err(format!("primaryColor must be a #rrggbb hex color (got {hex})"))
            }
            ("defaultTheme", Value::String(theme)) if Theme::parse(theme).is_none() => {
                Err(format!("defaultTheme must be light or dark (got {theme})"))
            }
            _ => Ok(()),
        }
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            default_theme: Theme::Dark,
        }
    }
}

impl SettingsDocument for ThemeSettings {
    const ID: SettingsDocId = SettingsDocId::Theme;

    fn from_fields(fields: &Fields) -> Self {
        Self {
            primary_color: text_or(fields, "primaryColor", DEFAULT_PRIMARY_COLOR),
            default_theme: fields
                .get("defaultTheme")
                .and_then(Value::as_str)
                .and_then(Theme::parse)
                .unwrap_or_default(),
        }
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.insert("primaryColor".into(), self.primary_color.clone().into());
        f.insert("defaultTheme".into(), self.default_theme.as_str().into());
        f
    }
}
