pub mod app;
pub mod stylesheet;
pub mod theme;
pub mod widgets;

pub use stylesheet::Stylesheet;
pub use widgets::copyright_label::CopyrightLabel;
