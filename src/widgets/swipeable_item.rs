use egui::{Align2, Color32, CursorIcon, FontId, Rect, RichText, Sense, Ui, vec2};

use crate::catalog::Category;
use crate::input::{InputHandler, SwipeInput};
use crate::item::SelectableItem;
use crate::layer::{SwipeConfig, SwipeLayer};
use crate::selection::SelectionIndex;
use crate::widgets::indicator_row;

pub const DEFAULT_CARD_HEIGHT: f32 = 200.0;

/// A labelled color card for a single category that changes item on swipe.
pub struct SwipeableItem {
    label: String,
    /// `None` when built from an empty list; nothing is rendered then.
    selection: Option<SelectionIndex>,
    layer: SwipeLayer,
    input: InputHandler,
}

impl SwipeableItem {
    pub fn new(category: Category, label: impl Into<String>, items: Vec<SelectableItem>) -> Self {
        let selection = match SelectionIndex::new(category, items) {
            Ok(selection) => Some(selection),
            Err(err) => {
                log::warn!("Not rendering swipe card: {err}");
                None
            }
        };
        Self {
            label: label.into(),
            selection,
            layer: SwipeLayer::new(SwipeConfig::immediate()),
            input: InputHandler::new(),
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let Some(selection) = self.selection.as_mut() else {
            return;
        };

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&self.label).size(18.0).strong());

            let size = vec2(ui.available_width(), DEFAULT_CARD_HEIGHT);
            let (rect, response) = ui.allocate_exact_size(size, Sense::drag());
            let _ = response.on_hover_cursor(CursorIcon::Grab);

            let now = ui.input(|i| i.time);
            self.input.set_container_rect(rect);
            for input in self.input.process_input(ui.ctx()) {
                let committed = match input {
                    SwipeInput::Start { pos } => {
                        self.layer.start(pos.x, now);
                        None
                    }
                    SwipeInput::Move { pos } => {
                        self.layer.drag_to(pos.x, now);
                        None
                    }
                    SwipeInput::End => self.layer.end(now),
                    SwipeInput::Leave => self.layer.leave(now),
                };
                if let Some(direction) = committed {
                    selection.apply_swipe(direction);
                    log::debug!("{} card now shows {}", self.label, selection.current().name);
                }
            }

            if ui.is_rect_visible(rect) {
                paint_card(ui, rect, selection.current(), self.layer.displayed_offset(now));
            }
            if self.layer.needs_repaint(now) {
                ui.ctx().request_repaint();
            }

            ui.add_space(6.0);
            if let Some(index) = indicator_row(ui, selection.items(), selection.current_index(), true) {
                if let Err(err) = selection.set_index(index) {
                    log::warn!("Ignoring indicator click: {err}");
                }
            }
        });
    }
}

fn paint_card(ui: &Ui, rect: Rect, item: &SelectableItem, offset_x: f32) {
    let painter = ui.painter_at(rect);
    let card = rect.translate(vec2(offset_x, 0.0));
    painter.rect_filled(card, 8.0, item.fill().unwrap_or(Color32::TRANSPARENT));

    let text_pos = card.center();
    let font = FontId::proportional(28.0);
    painter.text(
        text_pos + vec2(1.0, 2.0),
        Align2::CENTER_CENTER,
        &item.name,
        font.clone(),
        Color32::from_black_alpha(120),
    );
    painter.text(text_pos, Align2::CENTER_CENTER, &item.name, font, Color32::WHITE);
}
