pub mod detail_view;
pub mod style;
pub mod table_renderer;
