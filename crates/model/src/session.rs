//! Process-wide editing session.
//!
//! The document engine behind this crate tolerates exactly one editing
//! session per process, so [`Engine::acquire`] claims a global slot before
//! any document is opened. A slot left claimed by an earlier session (a
//! crash, or an interactive run that deliberately kept its documents open)
//! is logged and taken over rather than treated as an error.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Result;
use crate::presentation::Presentation;
use crate::store;

static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Handle on the process-wide editing session.
///
/// Dropping the engine releases the slot again, except in visible mode,
/// where documents are intentionally left open for inspection and the next
/// acquisition takes the slot over.
#[derive(Debug)]
pub struct Engine {
    visible: bool,
}

impl Engine {
    /// Claim the editing session, forcibly taking over a stale one.
    pub fn acquire(visible: bool) -> Engine {
        if SESSION_ACTIVE.swap(true, Ordering::SeqCst) {
            log::warn!("previous editing session was never released, taking it over");
        }
        Engine { visible }
    }

    /// Whether documents stay open for inspection after the run.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Open a deck package from disk.
    pub fn open(&self, path: &Path) -> Result<Presentation> {
        store::load(path)
    }

    /// Copy a deck package file, typically a style template to the
    /// destination path before it is opened for editing.
    pub fn copy_file(&self, from: &Path, to: &Path) -> Result<()> {
        fs::copy(from, to)?;
        Ok(())
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if !self.visible {
            SESSION_ACTIVE.store(false, Ordering::SeqCst);
        }
    }
}
