pub mod app;
pub mod dashboard;
pub mod label;
pub mod slider;
pub mod theme;
pub mod window;
