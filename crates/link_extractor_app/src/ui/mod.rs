pub mod commands;
pub mod dialog;
pub mod render;
