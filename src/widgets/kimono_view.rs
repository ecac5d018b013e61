use egui::{Color32, CursorIcon, Rect, RichText, Sense, Ui, vec2};

use crate::catalog::{Catalog, Category};
use crate::coordinator::Coordinator;
use crate::error::CatalogResult;
use crate::input::InputHandler;
use crate::layer::SwipeConfig;
use crate::silhouette;
use crate::widgets::indicator_row;

/// Height of the stacked outfit view in points
pub const CONTAINER_HEIGHT: f32 = 400.0;

/// Kimono, obi and obijime stacked on top of each other; swipe where a
/// garment sits to change it.
pub struct KimonoView {
    coordinator: Coordinator,
    input: InputHandler,
    container_width: f32,
}

impl KimonoView {
    pub fn new(catalog: &Catalog, config: SwipeConfig) -> CatalogResult<Self> {
        Ok(Self {
            coordinator: Coordinator::new(catalog, config)?,
            input: InputHandler::new(),
            container_width: config.container_width,
        })
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let size = vec2(self.container_width, CONTAINER_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::drag());
        let _ = response.on_hover_cursor(CursorIcon::Grab);

        let now = ui.input(|i| i.time);
        self.coordinator.tick(now);

        self.input.set_container_rect(rect);
        for input in self.input.process_input(ui.ctx()) {
            self.coordinator.handle(input, Some(rect), now);
        }

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, now);
        }
        if self.coordinator.needs_repaint(now) {
            ui.ctx().request_repaint();
        }

        ui.add_space(8.0);
        self.readout(ui);
        ui.add_space(8.0);
        self.indicators(ui);
    }

    fn paint(&self, ui: &Ui, rect: Rect, now: f64) {
        let painter = ui.painter_at(rect);
        for category in Category::ALL {
            let current = self.coordinator.current(category);
            let offset = self.coordinator.displayed_offset(category, now);
            silhouette::paint(&painter, category, rect, fill(current.fill()), offset);

            if let Some((adjacent, offset)) = self.coordinator.adjacent(category, now) {
                silhouette::paint(&painter, category, rect, fill(adjacent.fill()), offset);
            }
        }
    }

    fn readout(&self, ui: &mut Ui) {
        ui.label(RichText::new(self.coordinator.readout()).size(16.0));
        ui.label(
            RichText::new("← スワイプで切り替え（帯部分をタッチで帯を変更）→")
                .small()
                .color(Color32::GRAY),
        );
    }

    fn indicators(&mut self, ui: &mut Ui) {
        for category in Category::ALL {
            let selection = self.coordinator.selection(category);
            let mut clicked = None;
            ui.horizontal(|ui| {
                ui.add_sized([48.0, 14.0], egui::Label::new(RichText::new(category.label()).small()));
                clicked = indicator_row(ui, selection.items(), selection.current_index(), false);
            });
            if let Some(index) = clicked {
                if let Err(err) = self.coordinator.select(category, index) {
                    log::warn!("Ignoring indicator click: {err}");
                }
            }
        }
    }
}

fn fill(color: Option<Color32>) -> Color32 {
    color.unwrap_or(Color32::GRAY)
}
