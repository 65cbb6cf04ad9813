use std::collections::VecDeque;

use bevy::prelude::*;
use constants::render_settings::DEBUG_LOG_CAPACITY;

/// Recent log lines for the on-screen debug panel.
///
/// `record` also forwards the line to Bevy's logger, so callers never log twice.
#[derive(Resource, Debug)]
pub struct DebugLog {
    lines: VecDeque<String>,
    capacity: usize,
    visible: bool,
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::with_capacity(DEBUG_LOG_CAPACITY)
    }
}

impl DebugLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            visible: false,
        }
    }

    pub fn record(&mut self, line: impl Into<String>) {
        let line = line.into();
        info!("{}", line);
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip panel visibility, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Panel text, oldest line first.
    pub fn render(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }
}
