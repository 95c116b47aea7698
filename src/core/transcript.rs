use std::cell::RefCell;
use std::rc::Rc;

/// Ordered record of the console lines a demo produced.
///
/// Clones share the same underlying buffer, so a receiver or listener can
/// hold its own handle and write into the demo's transcript. A stdout
/// transcript also echoes every line as it is written.
#[derive(Debug, Clone)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
    echo: bool,
}

impl Transcript {
    /// Transcript that prints each line to standard output
    pub fn stdout() -> Self {
        Self {
            lines: Rc::new(RefCell::new(Vec::new())),
            echo: true,
        }
    }

    /// Transcript that only records lines
    pub fn recording() -> Self {
        Self {
            lines: Rc::new(RefCell::new(Vec::new())),
            echo: false,
        }
    }

    /// Write one line
    pub fn line(&self, text: impl Into<String>) {
        let text = text.into();
        if self.echo {
            println!("{}", text);
        }
        self.lines.borrow_mut().push(text);
    }

    /// Write an empty separator line
    pub fn blank(&self) {
        self.line("");
    }

    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::recording()
    }
}
