use crate::insertion::InsertLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote generation profile selected by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Extend,
    Summarise,
    Critique,
    Proseify,
    Suggest,
}

impl GenerationMode {
    pub const ALL: [GenerationMode; 5] = [
        GenerationMode::Extend,
        GenerationMode::Summarise,
        GenerationMode::Critique,
        GenerationMode::Proseify,
        GenerationMode::Suggest,
    ];

    /// Project name on the generation service.
    pub fn project(self) -> &'static str {
        match self {
            GenerationMode::Extend => "Extend",
            GenerationMode::Summarise => "summarise",
            GenerationMode::Critique => "critique",
            GenerationMode::Proseify => "proseify",
            GenerationMode::Suggest => "suggestions",
        }
    }

    /// Where the first sample is written, or `None` for read-only modes.
    pub fn insert_location(self) -> Option<InsertLocation> {
        match self {
            GenerationMode::Extend => Some(InsertLocation::Cursor),
            GenerationMode::Summarise => Some(InsertLocation::Top),
            GenerationMode::Proseify => Some(InsertLocation::Bottom),
            GenerationMode::Critique | GenerationMode::Suggest => None,
        }
    }

    pub fn mutates_document(self) -> bool {
        self.insert_location().is_some()
    }

    /// Transient notice shown when the request starts.
    pub fn progress_notice(self) -> &'static str {
        match self {
            GenerationMode::Extend => "Generating...",
            GenerationMode::Summarise => "Summarising...",
            GenerationMode::Proseify => "Converting into fluid prose...",
            GenerationMode::Critique | GenerationMode::Suggest => "Hmmm... thinking...",
        }
    }

    pub fn status_label(self) -> &'static str {
        match self {
            GenerationMode::Extend => "writing... ",
            GenerationMode::Summarise => "Summarising... ",
            GenerationMode::Proseify => "Prose-ifying... ",
            GenerationMode::Critique => "critiquing... ",
            GenerationMode::Suggest => "suggesting improvements... ",
        }
    }

    /// Header shown above the result cards.
    pub fn result_header(self) -> &'static str {
        match self {
            GenerationMode::Extend => "Extend",
            GenerationMode::Summarise => "Summary",
            GenerationMode::Critique => "Critique",
            GenerationMode::Proseify => "Proseify",
            GenerationMode::Suggest => "Suggestions",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenerationMode::Extend => "extend",
            GenerationMode::Summarise => "summarise",
            GenerationMode::Critique => "critique",
            GenerationMode::Proseify => "proseify",
            GenerationMode::Suggest => "suggest",
        };
        f.write_str(name)
    }
}
