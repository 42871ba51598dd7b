//! Where rejected and malformed commands are reported.
//!
//! The interpreter never logs directly; it hands every notice to a
//! [`DiagnosticSink`] supplied at construction. [`LogSink`] forwards to the
//! `log` facade for the binary, [`MemorySink`] keeps entries for inspection.

use log::Level;

/// Write-only consumer of diagnostic notices.
pub trait DiagnosticSink {
    fn record(&mut self, level: Level, message: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn record(&mut self, level: Level, message: &str) {
        (**self).record(level, message);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn record(&mut self, level: Level, message: &str) {
        (**self).record(level, message);
    }
}

/// Forwards notices to the global `log` logger under the `toy_robot` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&mut self, level: Level, message: &str) {
        log::log!(target: "toy_robot", level, "{message}");
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _level: Level, _message: &str) {}
}

/// A single captured notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

/// Collects notices in arrival order.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    entries: Vec<Diagnostic>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries recorded at exactly `level`.
    pub fn count(&self, level: Level) -> usize {
        self.entries.iter().filter(|d| d.level == level).count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&mut self, level: Level, message: &str) {
        self.entries.push(Diagnostic {
            level,
            message: message.to_string(),
        });
    }
}
