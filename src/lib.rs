pub mod input;
pub mod phy;
pub mod render;
pub mod ui;
pub mod utils;
