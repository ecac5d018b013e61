use egui::{Color32, Response, Sense, Stroke, Ui, WidgetInfo, WidgetType};

use crate::item::SelectableItem;

/// A round selection dot for one catalog item.
pub struct IndicatorDot<'a> {
    pub item: &'a SelectableItem,
    pub selected: bool,
    pub diameter: f32,
    /// Fill the selected dot with the item's own color
    pub tinted: bool,
}

impl<'a> IndicatorDot<'a> {
    pub fn new(item: &'a SelectableItem, selected: bool) -> Self {
        Self {
            item,
            selected,
            diameter: 12.0,
            tinted: true,
        }
    }

    pub fn small(mut self) -> Self {
        self.diameter = 8.0;
        self.tinted = false;
        self
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let size = egui::vec2(self.diameter, self.diameter);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let label = self.item.select_label();
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, ui.is_enabled(), &label));

        if ui.is_rect_visible(rect) {
            let radius = self.diameter / 2.0;
            let (fill, stroke) = match (self.selected, self.tinted) {
                (true, true) => (
                    self.item.fill().unwrap_or(Color32::from_gray(40)),
                    Stroke::new(1.0, Color32::from_gray(40)),
                ),
                (true, false) => (Color32::from_gray(40), Stroke::NONE),
                (false, true) => (Color32::WHITE, Stroke::new(1.0, Color32::from_gray(160))),
                (false, false) => (Color32::from_gray(210), Stroke::NONE),
            };
            let fill = if response.hovered() && !self.selected {
                fill.gamma_multiply(0.85)
            } else {
                fill
            };
            ui.painter().circle(rect.center(), radius, fill, stroke);
        }

        response.on_hover_text(label)
    }
}

/// A row of dots, one per item. Returns the index that was clicked.
pub fn indicator_row(ui: &mut Ui, items: &[SelectableItem], current: usize, small: bool) -> Option<usize> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        for (index, item) in items.iter().enumerate() {
            let dot = IndicatorDot::new(item, index == current);
            let dot = if small { dot.small() } else { dot };
            if dot.show(ui).clicked() {
                clicked = Some(index);
            }
        }
    });
    clicked
}
