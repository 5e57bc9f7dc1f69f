//! Theme and colors.

use common::Color;

/// Named color role in the window chrome palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Window,
    WindowText,
    Base,
    AlternateBase,
    ToolTipBase,
    ToolTipText,
    Text,
    Button,
    ButtonText,
    BrightText,
    Highlight,
    HighlightedText,
}

impl ColorRole {
    pub const ALL: [ColorRole; 12] = [
        ColorRole::Window,
        ColorRole::WindowText,
        ColorRole::Base,
        ColorRole::AlternateBase,
        ColorRole::ToolTipBase,
        ColorRole::ToolTipText,
        ColorRole::Text,
        ColorRole::Button,
        ColorRole::ButtonText,
        ColorRole::BrightText,
        ColorRole::Highlight,
        ColorRole::HighlightedText,
    ];

    /// CSS custom property name for this role.
    pub fn css_variable(&self) -> &'static str {
        match self {
            ColorRole::Window => "--window",
            ColorRole::WindowText => "--window-text",
            ColorRole::Base => "--base",
            ColorRole::AlternateBase => "--alternate-base",
            ColorRole::ToolTipBase => "--tooltip-base",
            ColorRole::ToolTipText => "--tooltip-text",
            ColorRole::Text => "--text",
            ColorRole::Button => "--button",
            ColorRole::ButtonText => "--button-text",
            ColorRole::BrightText => "--bright-text",
            ColorRole::Highlight => "--highlight",
            ColorRole::HighlightedText => "--highlighted-text",
        }
    }
}

/// Window chrome palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: String,
    colors: [Color; 12],
}

impl Palette {
    /// The fixed dark palette.
    pub fn dark() -> Self {
        let panel = Color::rgb(53, 53, 53);

        Self {
            name: "Dark".to_string(),
            colors: [
                panel,
                Color::WHITE,
                Color::rgb(35, 35, 35),
                panel,
                Color::WHITE,
                Color::WHITE,
                Color::WHITE,
                panel,
                Color::WHITE,
                Color::RED,
                Color::rgb(142, 45, 197).lighter(150),
                Color::BLACK,
            ],
        }
    }

    /// Get the color assigned to a role.
    pub fn color(&self, role: ColorRole) -> Color {
        self.colors[role as usize]
    }

    /// Iterate over every role and its color.
    pub fn entries(&self) -> impl Iterator<Item = (ColorRole, Color)> + '_ {
        ColorRole::ALL.iter().map(move |&role| (role, self.color(role)))
    }

    /// Render the palette as a `:root` block of CSS custom properties.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (role, color) in self.entries() {
            css.push_str(&format!("  {}: {};\n", role.css_variable(), color.to_hex()));
        }
        css.push('}');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_palette_roles() {
        let palette = Palette::dark();

        assert_eq!(palette.color(ColorRole::Window), Color::rgb(53, 53, 53));
        assert_eq!(palette.color(ColorRole::Base), Color::rgb(35, 35, 35));
        assert_eq!(palette.color(ColorRole::BrightText), Color::rgb(255, 0, 0));
        assert_eq!(palette.color(ColorRole::Highlight), Color::rgb(198, 99, 255));
        assert_eq!(palette.color(ColorRole::HighlightedText), Color::BLACK);
        assert_eq!(palette.entries().count(), 12);
    }

    #[test]
    fn test_css_rendering() {
        let css = Palette::dark().to_css();

        assert!(css.starts_with(":root {"));
        assert!(css.contains("  --window: #353535;\n"));
        assert!(css.contains("  --highlight: #c663ff;\n"));
        assert!(css.ends_with('}'));
    }
}
