use crate::modules::settings::application::domain::theme::parse_hex_color;

/// Used when the stored primary colour is not a `#rrggbb` hex.
pub const DEFAULT_PRIMARY_HSL: &str = "194 98% 49%";

/// `#rrggbb` as the space-separated `"H S% L%"` triple the stylesheet
/// variables expect, each component rounded to an integer.
pub fn hex_to_hsl(hex: &str) -> String {
    let Some((r, g, b)) = parse_hex_color(hex) else {
        return DEFAULT_PRIMARY_HSL.to_string();
    };
    let (r, g, b) = (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    format!(
        "{} {}% {}%",
        (h * 360.0).round() as i64,
        (s * 100.0).round() as i64,
        (l * 100.0).round() as i64
    )
}
