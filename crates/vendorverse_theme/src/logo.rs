//! Logo variants
//!
//! One inline SVG per theme: the diamond mark plus the wordmark, recolored
//! to sit on that theme's background.

use crate::id::ThemeId;

const LOGO_LIGHT: &str = r##"<svg width="150" height="40" viewBox="0 0 150 40" fill="none" xmlns="http://www.w3.org/2000/svg">
    <g id="logo-light">
        <path d="M20 8L28 20L20 32L12 20L20 8Z" fill="#6366f1" stroke="#6366f1" stroke-width="1.5"/>
        <path d="M20 12L24 20L20 28L16 20L20 12Z" fill="#8b5cf6"/>
        <text x="35" y="27" font-family="Inter, sans-serif" font-size="18" font-weight="700" fill="#1F2937">VendorVerse</text>
    </g>
</svg>"##;

const LOGO_DARK: &str = r##"<svg width="150" height="40" viewBox="0 0 150 40" fill="none" xmlns="http://www.w3.org/2000/svg">
    <g id="logo-dark">
        <path d="M20 8L28 20L20 32L12 20L20 8Z" fill="#8b5cf6" stroke="#a78bfa" stroke-width="1.5"/>
        <path d="M20 12L24 20L20 28L16 20L20 12Z" fill="#c4b5fd"/>
        <text x="35" y="27" font-family="Inter, sans-serif" font-size="18" font-weight="700" fill="#F9FAFB">VendorVerse</text>
    </g>
</svg>"##;

const LOGO_BLUE: &str = r##"<svg width="150" height="40" viewBox="0 0 150 40" fill="none" xmlns="http://www.w3.org/2000/svg">
    <g id="logo-blue">
        <path d="M20 8L28 20L20 32L12 20L20 8Z" fill="#3b82f6" stroke="#60a5fa" stroke-width="1.5"/>
        <path d="M20 12L24 20L20 28L16 20L20 12Z" fill="#93c5fd"/>
        <text x="35" y="27" font-family="Inter, sans-serif" font-size="18" font-weight="700" fill="#1e40af">VendorVerse</text>
    </g>
</svg>"##;

/// SVG markup for a theme's logo
pub fn logo_svg(theme: ThemeId) -> &'static str {
    match theme {
        ThemeId::Light => LOGO_LIGHT,
        ThemeId::Dark => LOGO_DARK,
        ThemeId::Blue => LOGO_BLUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_has_a_distinct_tagged_logo() {
        for theme in ThemeId::all() {
            let svg = logo_svg(*theme);
            assert!(svg.starts_with("<svg"));
            assert!(svg.contains(&format!("id=\"logo-{}\"", theme.id())));
        }
        assert_ne!(logo_svg(ThemeId::Light), logo_svg(ThemeId::Dark));
        assert_ne!(logo_svg(ThemeId::Dark), logo_svg(ThemeId::Blue));
    }
}
