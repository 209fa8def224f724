//! Where generated text lands in the document.
//!
//! Summaries go above the content, prose rewrites below it and continuations
//! exactly where the user left off, after any active selection.

use serde::{Deserialize, Serialize};

/// Line/column coordinate. Columns count characters, not bytes.
///
/// Ordering is document order: the greater line wins, and on the same line
/// the greater column wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }

    pub const fn zero() -> Self {
        Self { line: 0, ch: 0 }
    }
}

/// A selection as the host reports it: the anchor stays put while the head
/// follows the cursor, so either may come first in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    pub const fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    pub fn start(&self) -> Position {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.head)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }
}

/// Snapshot of the editor coordinates the policy needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorState {
    pub cursor: Position,
    pub selection: Option<Selection>,
    pub document_end: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertLocation {
    Top,
    Bottom,
    #[default]
    Cursor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub position: Position,
    pub text: String,
}

const PADDING: &str = "\n\n";

pub fn compute_insertion(state: &EditorState, generated: &str, location: InsertLocation) -> Insertion {
    match location {
        InsertLocation::Top => Insertion {
            position: Position::zero(),
            text: format!("{generated}{PADDING}"),
        },
        InsertLocation::Bottom => Insertion {
            position: state.document_end,
            text: format!("{PADDING}{generated}"),
        },
        InsertLocation::Cursor => {
            let position = match state.selection {
                Some(selection) => state.cursor.max(selection.end()),
                None => state.cursor,
            };
            Insertion {
                position,
                text: generated.to_string(),
            }
        }
    }
}
