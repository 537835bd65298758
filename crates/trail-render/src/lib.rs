pub mod display;
pub mod paint;
pub mod theme;

pub use display::{DisplayItem, DisplayList, ItemKey, Shape};
pub use paint::paint_display_list;
pub use theme::{CircleStyle, LineStyle, Rgba, Theme};
