use crate::catalog::{Catalog, Category};
use crate::fonts;
use crate::layer::SwipeConfig;
use crate::widgets::{KimonoView, SwipeableItem};

pub struct CoordinatorApp {
    // None when the catalog could not back a view; nothing is drawn then
    view: Option<KimonoView>,
    cards: Vec<SwipeableItem>,
}

impl CoordinatorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, catalog: Catalog) -> Self {
        fonts::install_cjk_fallback(&cc.egui_ctx);
        Self::from_catalog(&catalog)
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        let view = match KimonoView::new(catalog, SwipeConfig::default()) {
            Ok(view) => Some(view),
            Err(err) => {
                log::warn!("Not rendering outfit view: {err}");
                None
            }
        };
        let cards = Category::ALL
            .iter()
            .map(|&c| SwipeableItem::new(c, c.label(), catalog.items(c).to_vec()))
            .collect();
        Self { view, cards }
    }
}

impl eframe::App for CoordinatorApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(448.0);
                    ui.add_space(16.0);
                    ui.heading("Kimono Coordinator");
                    ui.label(
                        egui::RichText::new("着物と帯の組み合わせをお試しください")
                            .color(egui::Color32::GRAY),
                    );
                    ui.add_space(16.0);

                    if let Some(view) = &mut self.view {
                        view.show(ui);
                    }

                    ui.add_space(16.0);
                    egui::CollapsingHeader::new("単品で選ぶ")
                        .default_open(false)
                        .show(ui, |ui| {
                            for card in &mut self.cards {
                                card.show(ui);
                                ui.add_space(12.0);
                            }
                        });
                });
            });
        });
    }
}
