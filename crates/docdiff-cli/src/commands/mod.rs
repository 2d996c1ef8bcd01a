pub mod detail;
pub mod legend;
pub mod list;
