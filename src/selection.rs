use crate::catalog::Category;
use crate::error::{CatalogError, CatalogResult, SelectionError};
use crate::input::SwipeDirection;
use crate::item::SelectableItem;

/// Circular cursor into one category's item list.
///
/// The list is never empty, so `current_index` is always valid.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionIndex {
    items: Vec<SelectableItem>,
    current_index: usize,
}

impl SelectionIndex {
    pub fn new(category: Category, items: Vec<SelectableItem>) -> CatalogResult<Self> {
        if items.is_empty() {
            return Err(CatalogError::Empty { category });
        }
        Ok(Self {
            items,
            current_index: 0,
        })
    }

    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> &SelectableItem {
        &self.items[self.current_index]
    }

    pub fn next_index(&self) -> usize {
        (self.current_index + 1) % self.items.len()
    }

    pub fn prev_index(&self) -> usize {
        (self.current_index + self.items.len() - 1) % self.items.len()
    }

    pub fn advance(&mut self) {
        self.current_index = self.next_index();
    }

    pub fn retreat(&mut self) {
        self.current_index = self.prev_index();
    }

    /// Jumps straight to `index`.
    pub fn set_index(&mut self, index: usize) -> Result<(), SelectionError> {
        if index >= self.items.len() {
            return Err(SelectionError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Applies a committed swipe: left shows the next item, right the previous.
    pub fn apply_swipe(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Left => self.advance(),
            SwipeDirection::Right => self.retreat(),
        }
    }

    /// The item that slides in while dragging in `direction`.
    pub fn adjacent(&self, direction: SwipeDirection) -> &SelectableItem {
        match direction {
            SwipeDirection::Left => &self.items[self.next_index()],
            SwipeDirection::Right => &self.items[self.prev_index()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<SelectableItem> {
        names
            .iter()
            .map(|n| SelectableItem::new(*n, *n, "#000000"))
            .collect()
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = SelectionIndex::new(Category::Obi, Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::Empty { category: Category::Obi }));
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut selection = SelectionIndex::new(Category::Kimono, items(&["A", "B", "C"])).unwrap();
        selection.retreat();
        assert_eq!(selection.current_index(), 2);
        selection.advance();
        assert_eq!(selection.current_index(), 0);
        selection.advance();
        selection.advance();
        selection.advance();
        assert_eq!(selection.current().id, "A");
    }

    #[test]
    fn set_index_checks_bounds() {
        let mut selection = SelectionIndex::new(Category::Kimono, items(&["A", "B"])).unwrap();
        assert_eq!(selection.set_index(1), Ok(()));
        assert_eq!(selection.current().id, "B");
        assert_eq!(
            selection.set_index(2),
            Err(SelectionError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(selection.current_index(), 1);
    }

    #[test]
    fn swipe_mapping_is_left_next_right_previous() {
        let mut selection = SelectionIndex::new(Category::Obi, items(&["A", "B", "C"])).unwrap();
        assert_eq!(selection.adjacent(SwipeDirection::Left).id, "B");
        assert_eq!(selection.adjacent(SwipeDirection::Right).id, "C");

        selection.apply_swipe(SwipeDirection::Left);
        assert_eq!(selection.current().id, "B");
        selection.apply_swipe(SwipeDirection::Right);
        assert_eq!(selection.current().id, "A");
    }

    #[test]
    fn single_item_wraps_to_itself() {
        let mut selection = SelectionIndex::new(Category::Obijime, items(&["only"])).unwrap();
        selection.apply_swipe(SwipeDirection::Left);
        assert_eq!(selection.current_index(), 0);
        selection.apply_swipe(SwipeDirection::Right);
        assert_eq!(selection.current_index(), 0);
        assert_eq!(selection.adjacent(SwipeDirection::Left).id, "only");
    }
}
