use log::{debug, trace};

use super::Command;
use crate::surface::RenderSurface;

/// Linear undo/redo log.
///
/// `applied` counts the entries currently reflected on the surface; entries
/// past it are only reachable through redo and are dropped on the next commit.
#[derive(Debug, Default)]
pub struct CommandHistory {
    entries: Vec<Command>,
    applied: usize,
    limit: Option<usize>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history that keeps at most `limit` entries, evicting the oldest
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    /// Record a command and apply it to the surface.
    ///
    /// Anything that could have been redone is discarded first.
    pub fn commit(&mut self, command: Command, surface: &mut impl RenderSurface) {
        if self.applied < self.entries.len() {
            let pruned = self.entries.len() - self.applied;
            self.entries.truncate(self.applied);
            debug!("Pruned {pruned} redo entries");
        }

        command.forward(surface);
        debug!(
            "Committed {} command with {} segments",
            command.name(),
            command.segments().len()
        );
        self.entries.push(command);
        self.applied = self.entries.len();

        if let Some(limit) = self.limit {
            if self.entries.len() > limit {
                let evicted = self.entries.len() - limit;
                self.entries.drain(..evicted);
                self.applied -= evicted;
                debug!("Evicted {evicted} oldest history entries");
            }
        }
    }

    /// Revert the last applied command. Returns false if there was nothing to undo.
    pub fn undo(&mut self, surface: &mut impl RenderSurface) -> bool {
        let Some(index) = self.cursor() else {
            trace!("Nothing to undo");
            return false;
        };
        let command = &self.entries[index];
        command.reverse(surface);
        self.applied = index;
        debug!("Undid {} command at {index}", command.name());
        true
    }

    /// Re-apply the next undone command. Returns false if there was nothing to redo.
    pub fn redo(&mut self, surface: &mut impl RenderSurface) -> bool {
        let Some(command) = self.entries.get(self.applied) else {
            trace!("Nothing to redo");
            return false;
        };
        command.forward(surface);
        debug!("Redid {} command at {}", command.name(), self.applied);
        self.applied += 1;
        true
    }

    /// Index of the last applied entry; `None` means before the first entry
    pub fn cursor(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    pub fn entries(&self) -> &[Command] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        self.applied < self.entries.len()
    }
}
