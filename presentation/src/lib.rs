pub mod cli;
pub mod panel;
pub mod settings_panel;
pub mod terminal;
