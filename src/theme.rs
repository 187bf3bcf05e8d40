//! Bundled color theme shipped inside the binary.

/// Dreamweaver `Colors.xml` installed by the default flow.
pub const BUNDLED_THEME: &str = include_str!("../assets/Colors.xml");

/// Background color the user should pick after installing the theme.
pub const THEME_BACKGROUND: &str = "252A32";

/// Dreamweaver's stock background, to pick after reverting.
pub const DEFAULT_BACKGROUND: &str = "FFFFFF";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_theme_is_a_colors_document() {
        assert!(BUNDLED_THEME.trim_start().starts_with("<?xml"));
        assert!(BUNDLED_THEME.contains("<colors>"));
        assert!(BUNDLED_THEME.trim_end().ends_with("</colors>"));
    }
}
