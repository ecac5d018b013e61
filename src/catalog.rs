use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::item::SelectableItem;

/// The garment categories that can be swiped independently.
///
/// Order is bottom-to-top in the stacked view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Kimono,
    Obi,
    Obijime,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Kimono, Category::Obi, Category::Obijime];

    pub fn index(self) -> usize {
        match self {
            Category::Kimono => 0,
            Category::Obi => 1,
            Category::Obijime => 2,
        }
    }

    /// Label shown next to the selection readout and indicators
    pub fn label(self) -> &'static str {
        match self {
            Category::Kimono => "着物",
            Category::Obi => "帯",
            Category::Obijime => "帯締め",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Kimono => write!(f, "kimono"),
            Category::Obi => write!(f, "obi"),
            Category::Obijime => write!(f, "obijime"),
        }
    }
}

/// Ordered item lists, one per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub kimono: Vec<SelectableItem>,
    pub obi: Vec<SelectableItem>,
    #[serde(default)]
    pub obijime: Vec<SelectableItem>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl Catalog {
    pub fn items(&self, category: Category) -> &[SelectableItem] {
        match category {
            Category::Kimono => &self.kimono,
            Category::Obi => &self.obi,
            Category::Obijime => &self.obijime,
        }
    }

    /// The built-in sample catalog
    pub fn sample() -> Self {
        let items = |rows: &[(&str, &str, &str)]| -> Vec<SelectableItem> {
            rows.iter()
                .map(|(id, name, color)| SelectableItem::new(*id, *name, *color))
                .collect()
        };

        Self {
            kimono: items(&[
                ("kimono-1", "紅色", "#C41E3A"),
                ("kimono-2", "藍色", "#264348"),
                ("kimono-3", "若草色", "#8DB255"),
                ("kimono-4", "山吹色", "#F8B500"),
                ("kimono-5", "藤色", "#A388C4"),
            ]),
            obi: items(&[
                ("obi-1", "金色", "#C9A84C"),
                ("obi-2", "銀色", "#A0A0A0"),
                ("obi-3", "朱色", "#E24D3D"),
                ("obi-4", "深緑", "#004D40"),
                ("obi-5", "紫紺", "#460E44"),
            ]),
            obijime: items(&[
                ("obijime-1", "白練", "#F3F3F2"),
                ("obijime-2", "紅梅", "#E16B8C"),
                ("obijime-3", "萌黄", "#A8C97F"),
                ("obijime-4", "瑠璃", "#005CAF"),
                ("obijime-5", "黄金", "#E6B422"),
            ]),
        }
    }

    /// Parses and validates a JSON catalog.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a JSON catalog from disk.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        log::info!(
            "Loaded catalog from {}: {} kimono, {} obi, {} obijime",
            path.display(),
            catalog.kimono.len(),
            catalog.obi.len(),
            catalog.obijime.len()
        );
        Ok(catalog)
    }

    /// Loads `path` if given, falling back to the sample catalog on any error.
    pub fn load_or_sample(path: Option<impl AsRef<Path>>) -> Self {
        let Some(path) = path else {
            return Self::sample();
        };
        match Self::load(&path) {
            Ok(catalog) => catalog,
            Err(err) => {
                log::warn!(
                    "Using sample catalog, could not load {}: {err}",
                    path.as_ref().display()
                );
                Self::sample()
            }
        }
    }

    /// Checks every category is non-empty, ids are unique per category and
    /// every color parses.
    pub fn validate(&self) -> CatalogResult<()> {
        for category in Category::ALL {
            let items = self.items(category);
            if items.is_empty() {
                return Err(CatalogError::Empty { category });
            }

            let mut seen = HashSet::new();
            for item in items {
                if !seen.insert(item.id.as_str()) {
                    return Err(CatalogError::DuplicateId {
                        category,
                        id: item.id.clone(),
                    });
                }
                if item.fill().is_none() {
                    return Err(CatalogError::InvalidColor {
                        id: item.id.clone(),
                        color: item.color.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_is_valid() {
        let catalog = Catalog::sample();
        assert!(catalog.validate().is_ok());
        for category in Category::ALL {
            assert_eq!(catalog.items(category).len(), 5);
        }
        assert_eq!(catalog.kimono[0].name, "紅色");
        assert_eq!(catalog.obi[4].color, "#460E44");
    }

    #[test]
    fn parses_json_catalog() {
        let json = r##"{
            "kimono": [{"id": "k", "name": "紅色", "color": "#C41E3A"}],
            "obi": [{"id": "o", "name": "金色", "color": "#C9A84C"}],
            "obijime": [{"id": "j", "name": "白練", "color": "#fff"}]
        }"##;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.items(Category::Obijime)[0].id, "j");
    }

    #[test]
    fn accepts_any_css_color_form() {
        for color in ["red", "#C41E3Acc", "rgb(196, 30, 58)"] {
            let json = format!(
                r##"{{
                "kimono": [{{"id": "k", "name": "紅色", "color": "{color}"}}],
                "obi": [{{"id": "o", "name": "金色", "color": "#C9A84C"}}],
                "obijime": [{{"id": "j", "name": "白練", "color": "#fff"}}]
            }}"##
            );
            let catalog = Catalog::from_json_str(&json).unwrap();
            assert_eq!(catalog.kimono[0].color, color);
        }
    }

    #[test]
    fn rejects_missing_category() {
        let json = r##"{
            "kimono": [{"id": "k", "name": "紅色", "color": "#C41E3A"}],
            "obi": [{"id": "o", "name": "金色", "color": "#C9A84C"}]
        }"##;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::Empty { category: Category::Obijime }));
    }

    #[test]
    fn rejects_duplicate_ids_and_bad_colors() {
        let mut catalog = Catalog::sample();
        catalog.obi[1].id = "obi-1".to_string();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateId { category: Category::Obi, .. })
        ));

        let mut catalog = Catalog::sample();
        catalog.kimono[2].color = "wakakusa".to_string();
        assert!(matches!(catalog.validate(), Err(CatalogError::InvalidColor { .. })));
    }

    #[test]
    fn unreadable_file_falls_back_to_sample() {
        let catalog = Catalog::load_or_sample(Some("/nonexistent/kimono-catalog.json"));
        assert_eq!(catalog, Catalog::sample());
        assert_eq!(Catalog::load_or_sample(None::<&str>), Catalog::sample());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json_str("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
