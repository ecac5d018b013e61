#![warn(clippy::all, rust_2018_idioms)]

pub mod animation;
pub mod app;
pub mod catalog;
pub mod coordinator;
pub mod error;
pub mod fonts;
pub mod input;
pub mod item;
pub mod layer;
pub mod selection;
pub mod silhouette;
pub mod widgets;

pub use app::CoordinatorApp;
pub use catalog::{Catalog, Category};
pub use coordinator::Coordinator;
pub use error::{CatalogError, SelectionError};
pub use input::{InputHandler, LayerSelector, SwipeDirection, SwipeInput, SwipeTracker};
pub use item::SelectableItem;
pub use layer::{SwipeConfig, SwipeLayer, SwipeMode};
pub use selection::SelectionIndex;
