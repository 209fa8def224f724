use shared::types::Result;

/// View type of the dockable results panel.
pub const PANEL_VIEW_TYPE: &str = "thought-partner-view";

/// What the orchestrator needs from the host beyond the editor itself.
pub trait Host: Send + Sync {
    /// Shows a transient message to the user.
    fn notice(&self, message: &str);

    fn is_panel_open(&self) -> bool;

    fn open_panel(&self);

    /// Called with the status bar text whenever the orchestrator changes it.
    fn show_status(&self, _text: &str) {}
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}
