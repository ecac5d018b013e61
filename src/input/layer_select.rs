use egui::Rect;

use crate::catalog::Category;
use crate::silhouette;

/// Vertical extent of a swipeable layer, as fractions of the container height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerBand {
    pub layer: Category,
    pub start: f32,
    pub end: f32,
}

impl LayerBand {
    pub fn new(layer: Category, start: f32, end: f32) -> Self {
        Self { layer, start, end }
    }

    pub fn contains(&self, ratio: f32) -> bool {
        ratio >= self.start && ratio <= self.end
    }

    pub fn height(&self) -> f32 {
        self.end - self.start
    }
}

/// Picks which stacked layer a gesture belongs to from where it started.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSelector {
    base: Category,
    /// Narrowest band first so nested bands win over the ones enclosing them
    bands: Vec<LayerBand>,
}

impl Default for LayerSelector {
    /// Bands taken from the obi and obijime silhouettes, kimono everywhere else.
    fn default() -> Self {
        Self::new(
            Category::Kimono,
            vec![
                LayerBand::new(
                    Category::Obi,
                    silhouette::OBI_TOP / silhouette::DESIGN_HEIGHT,
                    silhouette::OBI_BOTTOM / silhouette::DESIGN_HEIGHT,
                ),
                LayerBand::new(
                    Category::Obijime,
                    silhouette::OBIJIME_TOP / silhouette::DESIGN_HEIGHT,
                    silhouette::OBIJIME_BOTTOM / silhouette::DESIGN_HEIGHT,
                ),
            ],
        )
    }
}

impl LayerSelector {
    pub fn new(base: Category, mut bands: Vec<LayerBand>) -> Self {
        bands.sort_by(|a, b| a.height().total_cmp(&b.height()));
        Self { base, bands }
    }

    pub fn base(&self) -> Category {
        self.base
    }

    pub fn bands(&self) -> &[LayerBand] {
        &self.bands
    }

    /// Layer for a position expressed as a fraction of the container height.
    pub fn select_ratio(&self, ratio: f32) -> Category {
        self.bands
            .iter()
            .find(|band| band.contains(ratio))
            .map_or(self.base, |band| band.layer)
    }

    /// Layer for a gesture starting at screen `y` inside `container`.
    ///
    /// Falls back to the base layer when the container has not been laid out.
    pub fn select(&self, y: f32, container: Option<Rect>) -> Category {
        let Some(rect) = container.filter(|r| r.height() > 0.0) else {
            log::warn!("Container not measured yet, routing gesture to {}", self.base);
            return self.base;
        };
        let ratio = (y - rect.top()) / rect.height();
        let layer = self.select_ratio(ratio);
        log::debug!("Gesture at ratio {ratio:.3} goes to {layer}");
        layer
    }
}
