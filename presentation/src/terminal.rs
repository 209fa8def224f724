use application::host::{Clipboard, Host, PANEL_VIEW_TYPE};
use colored::Colorize;
use shared::types::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Host backed by the terminal. Notices go to stderr so that stdout only
/// carries documents and panel output.
#[derive(Debug, Default)]
pub struct TerminalHost {
    panel_open: AtomicBool,
}

impl TerminalHost {
    pub fn new(panel_open: bool) -> Self {
        Self {
            panel_open: AtomicBool::new(panel_open),
        }
    }

    pub fn close_panel(&self) {
        self.panel_open.store(false, Ordering::SeqCst);
    }
}

impl Host for TerminalHost {
    fn notice(&self, message: &str) {
        eprintln!("{}", message.yellow());
    }

    fn is_panel_open(&self) -> bool {
        self.panel_open.load(Ordering::SeqCst)
    }

    fn open_panel(&self) {
        debug!(view = PANEL_VIEW_TYPE, "opening results panel");
        self.panel_open.store(true, Ordering::SeqCst);
    }

    fn show_status(&self, text: &str) {
        if !text.is_empty() {
            eprintln!("{}", text.dimmed());
        }
    }
}

/// System clipboard; the handle is opened per write.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}
