//! TreeWalker - streams tree lines into a sink without building the tree in memory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ExportError;

use super::config::WalkerConfig;

/// Counts accumulated over one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub dirs: usize,
    pub files: usize,
    /// Subdirectories whose contents could not be listed.
    pub denied: usize,
}

/// Callback for streaming output - receives one call per emitted line.
pub trait TreeSink {
    /// The resolved root directory name, emitted once before the body.
    fn root(&mut self, name: &str) -> io::Result<()>;

    /// One kept entry at its position in the tree.
    fn entry(&mut self, name: &str, is_dir: bool, is_last: bool, prefix: &str) -> io::Result<()>;

    /// Marker for a directory whose contents could not be listed.
    fn permission_denied(&mut self, prefix: &str) -> io::Result<()>;
}

/// Streaming tree walker.
///
/// Entries are filtered against the ignore sets, then sorted with
/// directories before files and case-insensitive name order within each
/// group, so two runs over an unchanged tree emit identical output.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` depth-first and stream one line per kept entry into `sink`.
    ///
    /// Fails with [`ExportError::NotADirectory`] before anything is written
    /// if `root` does not name a directory. A subdirectory that cannot be
    /// listed contributes a single marker line and is not descended into;
    /// other I/O errors propagate and abort the walk.
    pub fn walk<S: TreeSink>(&self, root: &Path, sink: &mut S) -> Result<WalkStats, ExportError> {
        if !root.is_dir() {
            return Err(ExportError::NotADirectory(root.to_path_buf()));
        }

        sink.root(&resolved_root_name(root)?)?;

        let mut stats = WalkStats::default();
        self.walk_dir(root, 0, "", sink, &mut stats)?;
        Ok(stats)
    }

    fn walk_dir<S: TreeSink>(
        &self,
        path: &Path,
        depth: usize,
        prefix: &str,
        sink: &mut S,
        stats: &mut WalkStats,
    ) -> io::Result<()> {
        let entries = match fs::read_dir(path) {
            Ok(e) => e,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                sink.permission_denied(prefix)?;
                stats.denied += 1;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        // Keep directories whose name passes the dir ignore set and files
        // whose name passes the file ignore set; anything else (broken
        // symlinks, sockets) is dropped. is_dir/is_file follow symlinks.
        let mut kept: Vec<(String, PathBuf, bool)> = Vec::new();
        for entry in entries {
            let entry = entry?;
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            if entry_path.is_dir() {
                if self.config.ignore.keeps_dir(&name) {
                    kept.push((name, entry_path, true));
                }
            } else if entry_path.is_file() && self.config.ignore.keeps_file(&name) {
                kept.push((name, entry_path, false));
            }
        }

        // Directories first, then case-insensitive name order.
        kept.sort_by_key(|(name, _, is_dir)| (!is_dir, name.to_lowercase()));

        let total = kept.len();
        for (i, (name, entry_path, is_dir)) in kept.into_iter().enumerate() {
            let is_last = i + 1 == total;
            sink.entry(&name, is_dir, is_last, prefix)?;

            if is_dir {
                stats.dirs += 1;
                if self.config.max_depth.is_none_or(|max| depth + 1 < max) {
                    // Descendants align under non-last ancestors via the
                    // continuation bar; last siblings indent with spaces.
                    let child_prefix = if is_last {
                        format!("{prefix}    ")
                    } else {
                        format!("{prefix}│   ")
                    };
                    self.walk_dir(&entry_path, depth + 1, &child_prefix, sink, stats)?;
                }
            } else {
                stats.files += 1;
            }
        }

        Ok(())
    }
}

/// Final component of the canonicalized root, the name the tree body hangs
/// under. Empty for a filesystem root.
fn resolved_root_name(root: &Path) -> io::Result<String> {
    let resolved = root.canonicalize()?;
    Ok(resolved
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default())
}
