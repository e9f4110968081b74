//! Append-only log sink for mission narration. The executor and engine
//! outcomes are narrated here as human-readable lines; the terminal renderer
//! shows a rolling window of the most recent ones.

/// Append-only buffer of narrative mission messages.
pub struct MissionLog {
    lines: Vec<String>,
}

impl MissionLog {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Appends one narrative line. Lines are never rewritten or removed.
    pub fn log(&mut self, message: impl Into<String>) {
        self.lines.push(message.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The trailing window shown by the display panel.
    pub fn recent(&self, count: usize) -> &[String] {
        let start = self.lines.len().saturating_sub(count);
        &self.lines[start..]
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// True if any line contains the given fragment. Test helper for
    /// asserting on narration without pinning exact wording everywhere.
    pub fn contains(&self, fragment: &str) -> bool {
        self.lines.iter().any(|line| line.contains(fragment))
    }
}

impl Default for MissionLog {
    fn default() -> Self {
        Self::new()
    }
}
