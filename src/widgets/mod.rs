mod indicator;
mod kimono_view;
mod swipeable_item;

pub use indicator::{IndicatorDot, indicator_row};
pub use kimono_view::{CONTAINER_HEIGHT, KimonoView};
pub use swipeable_item::{DEFAULT_CARD_HEIGHT, SwipeableItem};
