use egui::Color32;
use serde::{Deserialize, Serialize};

/// One selectable kimono, obi or obijime option.
///
/// Items are immutable once built; they live as long as the catalog that
/// owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableItem {
    /// Unique identifier within its category
    pub id: String,
    /// Display name (e.g. 紅色)
    pub name: String,
    /// Any CSS color: hex, `rgb()`/`hsl()` functions or a named color
    pub color: String,
}

impl SelectableItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// The fill color, or `None` if `color` is not a CSS color.
    pub fn fill(&self) -> Option<Color32> {
        parse_css_color(&self.color)
    }

    /// Accessibility label for the control that selects this item
    pub fn select_label(&self) -> String {
        format!("{}を選択", self.name)
    }
}

/// Parses a CSS color string into an egui color, keeping its alpha.
pub fn parse_css_color(css: &str) -> Option<Color32> {
    match csscolorparser::parse(css.trim()) {
        Ok(color) => {
            let [r, g, b, a] = color.to_rgba8();
            Some(Color32::from_rgba_unmultiplied(r, g, b, a))
        }
        Err(err) => {
            log::debug!("Not a CSS color {css:?}: {err}");
            None
        }
    }
}
