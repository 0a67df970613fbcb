pub mod heatmap;
pub mod theme;
pub mod widgets;
