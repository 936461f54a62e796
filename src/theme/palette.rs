//! Light and dark style palettes for the visits panel

use serde::Serialize;

/// Colors and container classes for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub line: &'static str,
    pub fill: &'static str,
    pub tick: &'static str,
    pub x_grid: &'static str,
    pub y_grid: &'static str,
    /// Bootstrap background variant for the card ("light" / "dark")
    pub container_bg: &'static str,
    /// Bootstrap text variant for the card
    pub container_fg: &'static str,
    /// Canvas backdrop, matching the card background
    pub canvas_bg: &'static str,
}

pub const LIGHT: Palette = Palette {
    line: "rgba(75,192,192,1)",
    fill: "rgba(75,192,192,0.2)",
    tick: "#b4b4b4",
    x_grid: "rgba(201,201,201,0.48)",
    y_grid: "rgba(201,201,201,0.48)",
    container_bg: "light",
    container_fg: "dark",
    canvas_bg: "#f8f9fa",
};

pub const DARK: Palette = Palette {
    line: "rgba(255,205,86,1)",
    fill: "rgba(255,205,86,0.2)",
    tick: "#f0f0f0",
    x_grid: "rgba(255,255,255,0.84)",
    y_grid: "rgba(255,255,255,0.5)",
    container_bg: "dark",
    container_fg: "light",
    canvas_bg: "#212529",
};

impl Palette {
    /// Palette for the given dark-mode state
    pub fn for_theme(dark: bool) -> &'static Palette {
        if dark {
            &DARK
        } else {
            &LIGHT
        }
    }

    /// Bootstrap classes for the surrounding card, e.g. `bg-dark text-light`
    pub fn container_classes(&self) -> String {
        format!("bg-{} text-{}", self.container_bg, self.container_fg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_selection() {
        assert_eq!(Palette::for_theme(false).line, "rgba(75,192,192,1)");
        assert_eq!(Palette::for_theme(true).line, "rgba(255,205,86,1)");
    }

    #[test]
    fn test_container_classes() {
        assert_eq!(LIGHT.container_classes(), "bg-light text-dark");
        assert_eq!(DARK.container_classes(), "bg-dark text-light");
    }

    #[test]
    fn test_canvas_backdrop_matches_card() {
        // Bootstrap's bg-light / bg-dark colors
        assert_eq!(Palette::for_theme(false).canvas_bg, "#f8f9fa");
        assert_eq!(Palette::for_theme(true).canvas_bg, "#212529");
    }
}
