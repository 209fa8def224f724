use crossterm::tty::IsTty;
use std::path::Path;

pub fn is_markdown_file(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    matches!(ext.to_ascii_lowercase().as_str(), "md" | "markdown")
}

/// True when both stdin and stdout are attached to a terminal.
pub fn is_interactive() -> bool {
    std::io::stdin().is_tty() && std::io::stdout().is_tty()
}
