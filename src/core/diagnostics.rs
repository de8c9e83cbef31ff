use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Mutex;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DiagnosticLevel {
    Info,
    Warn,
    Error,
}

impl Display for DiagnosticLevel {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "Info"),
            DiagnosticLevel::Warn => write!(f, "Warn"),
            DiagnosticLevel::Error => write!(f, "Error"),
        }
    }
}

/// Sink for the notable events of the catalog (loads, saves, rejected operations).
///
/// Messages carry no behavioral contract; the store works the same with any sink.
pub trait Diagnostics: Sync + Send {
    fn emit(&self, level: DiagnosticLevel, message: &str);

    fn info(&self, message: &str) {
        self.emit(DiagnosticLevel::Info, message)
    }

    fn warn(&self, message: &str) {
        self.emit(DiagnosticLevel::Warn, message)
    }

    fn error(&self, message: &str) {
        self.emit(DiagnosticLevel::Error, message)
    }
}

// TracingDiagnostics forwards everything to the process-wide tracing subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, level: DiagnosticLevel, message: &str) {
        match level {
            DiagnosticLevel::Info => tracing::info!("{}", message),
            DiagnosticLevel::Warn => tracing::warn!("{}", message),
            DiagnosticLevel::Error => tracing::error!("{}", message),
        }
    }
}

// RecordingDiagnostics keeps the trail in memory so it can be inspected afterwards
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<(DiagnosticLevel, String)>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(DiagnosticLevel, String)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn count(&self, level: DiagnosticLevel) -> usize {
        self.entries().iter().filter(|(l, _)| *l == level).count()
    }

    pub fn contains(&self, level: DiagnosticLevel, fragment: &str) -> bool {
        self.entries().iter().any(|(l, m)| *l == level && m.contains(fragment))
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn emit(&self, level: DiagnosticLevel, message: &str) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use crate::core::diagnostics::{DiagnosticLevel, Diagnostics, RecordingDiagnostics, TracingDiagnostics};

    #[tokio::test]
    async fn test_should_record_levels() {
        let diagnostics = RecordingDiagnostics::new();
        diagnostics.info("loaded 2 books");
        diagnostics.warn("duplicate isbn 111");
        diagnostics.error("failed to save");
        assert_eq!(3, diagnostics.entries().len());
        assert_eq!(1, diagnostics.count(DiagnosticLevel::Warn));
        assert!(diagnostics.contains(DiagnosticLevel::Info, "loaded"));
        assert!(!diagnostics.contains(DiagnosticLevel::Error, "loaded"));
    }

    #[tokio::test]
    async fn test_should_forward_to_tracing() {
        let diagnostics = TracingDiagnostics;
        diagnostics.info("no subscriber installed");
        diagnostics.error("still no panic");
    }
}
