//! Observational trace sinks for search progress.
//!
//! Both engines emit a human-readable line per node visit (e.g.
//! "BFS visiting (0,1) letter A word CA") to an optional sink. Sinks are
//! purely observational and never affect control flow.

/// Receiver for per-visit trace lines.
pub trait TraceSink {
    fn trace(&mut self, line: &str);
}

/// Forwards trace lines to `log::debug!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn trace(&mut self, line: &str) {
        log::debug!("{line}");
    }
}

/// Collects trace lines in memory. Useful in tests and for driving a
/// diagnostic display.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    lines: Vec<String>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl TraceSink for CollectingSink {
    fn trace(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Shared sink: lets a caller keep a handle to a sink that an engine owns.
impl<S: TraceSink> TraceSink for std::rc::Rc<std::cell::RefCell<S>> {
    fn trace(&mut self, line: &str) {
        self.borrow_mut().trace(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_keeps_lines_in_order() {
        let mut sink = CollectingSink::new();
        sink.trace("first");
        sink.trace("second");
        assert_eq!(sink.lines(), ["first", "second"]);
    }
}
