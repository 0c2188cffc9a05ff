pub mod button;
pub mod header;
pub mod nav_menu;
pub mod ui;
