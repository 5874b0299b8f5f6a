//! State for the terminal widget: the visible transcript and display mode.
//!
//! Command resolution itself lives in `crate::term`; this module only holds
//! what the panel renders.

/// One executed line: what the visitor typed and what came back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermEntry {
    pub input: String,
    pub output: String,
}

/// Terminal transcript plus the matrix visual-mode flag.
#[derive(Clone, Debug, Default)]
pub struct TerminalState {
    pub entries: Vec<TermEntry>,
    pub matrix_mode: bool,
}

impl TerminalState {
    pub fn push(&mut self, input: String, output: String) {
        self.entries.push(TermEntry { input, output });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
