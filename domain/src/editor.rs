use crate::insertion::{compute_insertion, EditorState, InsertLocation, Insertion, Position, Selection};

/// The host editor's cursor/selection primitives.
pub trait Editor {
    /// Whole document text.
    fn value(&self) -> String;

    /// Text covered by the active selection, empty when nothing is selected.
    fn selection_text(&self) -> String;

    fn cursor(&self) -> Position;

    fn selection(&self) -> Option<Selection>;

    fn document_end(&self) -> Position;

    /// Inserts `text` at `at` without replacing anything.
    fn replace_range(&mut self, text: &str, at: Position);

    /// Text submitted for generation: the selection if non-empty, else the
    /// whole document.
    fn context(&self) -> String {
        let selected = self.selection_text();
        if selected.is_empty() {
            self.value()
        } else {
            selected
        }
    }

    fn state(&self) -> EditorState {
        EditorState {
            cursor: self.cursor(),
            selection: self.selection(),
            document_end: self.document_end(),
        }
    }

    fn insert_generated(&mut self, generated: &str, location: InsertLocation) -> Insertion {
        let insertion = compute_insertion(&self.state(), generated, location);
        self.replace_range(&insertion.text, insertion.position);
        insertion
    }
}

/// In-memory Markdown buffer. The cursor starts at the end of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocument {
    text: String,
    cursor: Position,
    selection: Option<Selection>,
}

impl MarkdownDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let mut doc = Self {
            text: text.into(),
            cursor: Position::zero(),
            selection: None,
        };
        doc.cursor = doc.document_end();
        doc
    }

    /// Moves the cursor, clipping it to the document. Clears the selection.
    pub fn set_cursor(&mut self, position: Position) {
        self.cursor = self.clip(position);
        self.selection = None;
    }

    /// Selects from `anchor` to `head`; the cursor follows the head.
    pub fn set_selection(&mut self, anchor: Position, head: Position) {
        let selection = Selection::new(self.clip(anchor), self.clip(head));
        self.cursor = selection.head;
        self.selection = (!selection.is_empty()).then_some(selection);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn clip(&self, position: Position) -> Position {
        let end = self.document_end();
        if position.line > end.line {
            return end;
        }
        let width = self
            .text
            .split('\n')
            .nth(position.line)
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().count())
            .unwrap_or(0);
        Position::new(position.line, position.ch.min(width))
    }

    /// Byte offset of a (clipped) position.
    fn offset(&self, position: Position) -> usize {
        let position = self.clip(position);
        let mut offset = 0;
        for (index, line) in self.text.split('\n').enumerate() {
            if index == position.line {
                return offset
                    + line
                        .char_indices()
                        .nth(position.ch)
                        .map(|(byte, _)| byte)
                        .unwrap_or(line.len());
            }
            offset += line.len() + 1;
        }
        self.text.len()
    }
}

impl Editor for MarkdownDocument {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn selection_text(&self) -> String {
        match self.selection {
            Some(selection) => {
                self.text[self.offset(selection.start())..self.offset(selection.end())].to_string()
            }
            None => String::new(),
        }
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn selection(&self) -> Option<Selection> {
        self.selection
    }

    fn document_end(&self) -> Position {
        let last = self.text.rsplit('\n').next().unwrap_or("");
        Position::new(self.line_count() - 1, last.chars().count())
    }

    fn replace_range(&mut self, text: &str, at: Position) {
        let offset = self.offset(at);
        self.text.insert_str(offset, text);
    }
}
