use egui::{Pos2, Rect};

use crate::catalog::{Catalog, Category};
use crate::error::{CatalogResult, SelectionError};
use crate::input::{LayerSelector, SwipeDirection, SwipeInput};
use crate::item::SelectableItem;
use crate::layer::{SwipeConfig, SwipeLayer};
use crate::selection::SelectionIndex;

/// The stacked kimono/obi/obijime outfit and its swipe state.
///
/// Each category owns a selection and a swipe layer. A gesture is routed to
/// the layer picked at its start and stays there until it ends.
#[derive(Debug, Clone)]
pub struct Coordinator {
    selections: [SelectionIndex; 3],
    layers: [SwipeLayer; 3],
    selector: LayerSelector,
    active: Category,
}

impl Coordinator {
    pub fn new(catalog: &Catalog, config: SwipeConfig) -> CatalogResult<Self> {
        Self::with_selector(catalog, config, LayerSelector::default())
    }

    pub fn with_selector(
        catalog: &Catalog,
        config: SwipeConfig,
        selector: LayerSelector,
    ) -> CatalogResult<Self> {
        let selection = |category| SelectionIndex::new(category, catalog.items(category).to_vec());
        Ok(Self {
            selections: [
                selection(Category::Kimono)?,
                selection(Category::Obi)?,
                selection(Category::Obijime)?,
            ],
            layers: std::array::from_fn(|_| SwipeLayer::new(config)),
            active: selector.base(),
            selector,
        })
    }

    pub fn selection(&self, category: Category) -> &SelectionIndex {
        &self.selections[category.index()]
    }

    pub fn current(&self, category: Category) -> &SelectableItem {
        self.selection(category).current()
    }

    pub fn layer(&self, category: Category) -> &SwipeLayer {
        &self.layers[category.index()]
    }

    /// Layer receiving the current (or most recent) gesture
    pub fn active_layer(&self) -> Category {
        self.active
    }

    fn active_mut(&mut self) -> &mut SwipeLayer {
        &mut self.layers[self.active.index()]
    }

    /// True while any layer is still sliding out or settling a commit
    pub fn is_committing(&self) -> bool {
        self.layers.iter().any(SwipeLayer::is_busy)
    }

    pub fn needs_repaint(&self, now: f64) -> bool {
        self.layers.iter().any(|layer| layer.needs_repaint(now))
    }

    /// Starts a gesture at `pos`, choosing the target layer from its height.
    ///
    /// Ignored while a commit is still in flight.
    pub fn pointer_down(&mut self, pos: Pos2, container: Option<Rect>, now: f64) {
        if self.is_committing() {
            log::debug!("Ignoring gesture start while a commit is settling");
            return;
        }
        if self.layer(self.active).is_swiping() {
            return;
        }
        self.active = self.selector.select(pos.y, container);
        self.active_mut().start(pos.x, now);
    }

    pub fn pointer_move(&mut self, pos: Pos2, now: f64) {
        self.active_mut().drag_to(pos.x, now);
    }

    pub fn pointer_up(&mut self, now: f64) {
        let committed = self.active_mut().end(now);
        self.apply(self.active, committed);
    }

    pub fn pointer_leave(&mut self, now: f64) {
        let committed = self.active_mut().leave(now);
        self.apply(self.active, committed);
    }

    pub fn handle(&mut self, input: SwipeInput, container: Option<Rect>, now: f64) {
        match input {
            SwipeInput::Start { pos } => self.pointer_down(pos, container, now),
            SwipeInput::Move { pos } => self.pointer_move(pos, now),
            SwipeInput::End => self.pointer_up(now),
            SwipeInput::Leave => self.pointer_leave(now),
        }
    }

    /// Advances deferred commits. Call once per frame.
    pub fn tick(&mut self, now: f64) {
        for category in Category::ALL {
            let committed = self.layers[category.index()].tick(now);
            self.apply(category, committed);
        }
    }

    fn apply(&mut self, category: Category, committed: Option<SwipeDirection>) {
        let Some(direction) = committed else {
            return;
        };
        let selection = &mut self.selections[category.index()];
        selection.apply_swipe(direction);
        log::debug!(
            "{category} now shows {} ({}/{})",
            selection.current().name,
            selection.current_index() + 1,
            selection.len()
        );
    }

    /// Direct jump from an indicator.
    pub fn select(&mut self, category: Category, index: usize) -> Result<(), SelectionError> {
        self.selections[category.index()].set_index(index)
    }

    /// Replaces a category's items, dropping any gesture or pending commit on
    /// its layer. The selection restarts at the first item.
    pub fn replace_items(
        &mut self,
        category: Category,
        items: Vec<SelectableItem>,
        now: f64,
    ) -> CatalogResult<()> {
        let selection = SelectionIndex::new(category, items)?;
        self.layers[category.index()].cancel(now);
        self.selections[category.index()] = selection;
        Ok(())
    }

    /// Offset at which to paint `category`'s current item. Layers at rest sit
    /// at 0; a layer that lost focus mid snap-back keeps easing home.
    pub fn displayed_offset(&self, category: Category, now: f64) -> f32 {
        self.layer(category).displayed_offset(now)
    }

    /// "着物: <name> | 帯: <name> | 帯締め: <name>"
    pub fn readout(&self) -> String {
        Category::ALL
            .iter()
            .map(|&c| format!("{}: {}", c.label(), self.current(c).name))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// The neighbouring item sliding into view on the active layer, with its offset
    pub fn adjacent(&self, category: Category, now: f64) -> Option<(&SelectableItem, f32)> {
        if category != self.active {
            return None;
        }
        let layer = self.layer(category);
        let direction = layer.direction()?;
        let offset = layer.adjacent_offset(now)?;
        Some((self.selection(category).adjacent(direction), offset))
    }
}
