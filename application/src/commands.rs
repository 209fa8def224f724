use domain::mode::GenerationMode;

/// A command the host registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub hotkey: Option<&'static str>,
    /// `None` for the command that only opens the results panel.
    pub mode: Option<GenerationMode>,
    /// Title in the editor context menu, if listed there.
    pub menu_title: Option<&'static str>,
}

pub const COMMANDS: [CommandSpec; 6] = [
    CommandSpec {
        id: "open-view",
        name: "Open Thought Partner",
        hotkey: None,
        mode: None,
        menu_title: None,
    },
    CommandSpec {
        id: "extend-text",
        name: "extend (continue writing)",
        hotkey: Some("Ctrl+J"),
        mode: Some(GenerationMode::Extend),
        menu_title: None,
    },
    CommandSpec {
        id: "summarise",
        name: "summarise (tldr)",
        hotkey: Some("Ctrl+T"),
        mode: Some(GenerationMode::Summarise),
        menu_title: Some("Summarise"),
    },
    CommandSpec {
        id: "critique",
        name: "critique",
        hotkey: Some("Ctrl+Q"),
        mode: Some(GenerationMode::Critique),
        menu_title: Some("Critique"),
    },
    CommandSpec {
        id: "prose-ify",
        name: "prose-ify",
        hotkey: None,
        mode: Some(GenerationMode::Proseify),
        menu_title: Some("Prose-ify"),
    },
    CommandSpec {
        id: "suggestions",
        name: "suggestions",
        hotkey: None,
        mode: Some(GenerationMode::Suggest),
        menu_title: Some("Suggest improvements"),
    },
];

pub fn for_mode(mode: GenerationMode) -> &'static CommandSpec {
    match mode {
        GenerationMode::Extend => &COMMANDS[1],
        GenerationMode::Summarise => &COMMANDS[2],
        GenerationMode::Critique => &COMMANDS[3],
        GenerationMode::Proseify => &COMMANDS[4],
        GenerationMode::Suggest => &COMMANDS[5],
    }
}

/// Entries of the editor context menu, in display order.
pub fn editor_menu() -> impl Iterator<Item = &'static CommandSpec> {
    COMMANDS.iter().filter(|c| c.menu_title.is_some())
}
