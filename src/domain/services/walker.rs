//! Discovery walk over a source tree
//!
//! Depth-first, children in name order. Every directory gets one decision:
//! excluded names are pruned, directories holding the `src` marker are
//! yielded as module roots (and not descended into), everything else is
//! descended. The root itself goes through the same decision.
//!
//! Symbolic links are followed; a set of canonical paths already visited
//! stops cycles. A directory that cannot be listed is logged and skipped.
//! Only the root failing to list aborts the walk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ExclusionSet;
use crate::error::{PortalError, PortalResult};

/// Child whose presence marks a module root
pub const MODULE_MARKER: &str = "src";

/// What the walker does with one directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Descend,
    Yield,
    Prune,
}

#[derive(Clone, Copy)]
pub struct DiscoveryWalker<'a> {
    fs: &'a dyn FileSystem,
    excluded: &'a ExclusionSet,
}

impl<'a> DiscoveryWalker<'a> {
    pub fn new(fs: &'a dyn FileSystem, excluded: &'a ExclusionSet) -> Self {
        Self { fs, excluded }
    }

    pub fn decide(&self, dir: &Path) -> Decision {
        if self.excluded.is_excluded(dir) {
            Decision::Prune
        } else if self.fs.exists(&dir.join(MODULE_MARKER)) {
            Decision::Yield
        } else {
            Decision::Descend
        }
    }

    /// Start a walk at `root`. Fails only when the root cannot be listed.
    pub fn walk(&self, root: &Path) -> PortalResult<Walk<'a>> {
        self.fs
            .read_dir(root)
            .map_err(|source| PortalError::RootUnreadable {
                path: root.to_path_buf(),
                source,
            })?;
        Ok(Walk {
            walker: *self,
            stack: vec![root.to_path_buf()],
            visited: HashSet::new(),
        })
    }
}

/// Lazy sequence of discovered module roots
pub struct Walk<'a> {
    walker: DiscoveryWalker<'a>,
    stack: Vec<PathBuf>,
    visited: HashSet<PathBuf>,
}

impl Walk<'_> {
    fn push_children(&mut self, dir: &Path) {
        match self.walker.fs.read_dir(dir) {
            Ok(entries) => {
                // Reverse so the smallest name is popped first.
                self.stack.extend(
                    entries
                        .into_iter()
                        .rev()
                        .filter(|entry| entry.is_dir())
                        .map(|entry| entry.path),
                );
            }
            Err(error) => warn!(
                directory = %dir.display(),
                %error,
                "cannot list directory; skipping its subtree"
            ),
        }
    }
}

impl Iterator for Walk<'_> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        while let Some(dir) = self.stack.pop() {
            let key = self
                .walker
                .fs
                .canonicalize(&dir)
                .unwrap_or_else(|_| dir.clone());
            if !self.visited.insert(key) {
                debug!(directory = %dir.display(), "already visited; skipping");
                continue;
            }

            match self.walker.decide(&dir) {
                Decision::Prune => trace!(directory = %dir.display(), "excluded"),
                Decision::Yield => return Some(dir),
                Decision::Descend => self.push_children(&dir),
            }
        }
        None
    }
}
