// src/gui/components/mod.rs
pub mod data_table;
pub mod planet_panel;
pub mod tabs;
pub mod top_bar;
