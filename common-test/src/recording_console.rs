use std::{cell::RefCell, rc::Rc};

use common::console::Console;

/// Console keeping every printed line. Clones share the same transcript.
#[derive(Debug, Default, Clone)]
pub struct RecordingConsole {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Returns the recorded lines and starts a fresh transcript.
    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }
}

impl Console for RecordingConsole {
    fn print_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_owned());
    }
}
