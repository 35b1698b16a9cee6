use super::DataStore;
use crate::error::{HumansError, Result};
use crate::model::Human;
use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const INDENT: &[u8] = b"    ";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file a save should replace. An existing symlink is followed so
    /// the file it points to is rewritten, not the link.
    fn write_target(&self) -> Result<PathBuf> {
        match fs::symlink_metadata(&self.path) {
            Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(&self.path) {
                Ok(resolved) => Ok(resolved),
                // Dangling link: create the file it names.
                Err(_) => {
                    let link = fs::read_link(&self.path).map_err(HumansError::Io)?;
                    Ok(parent_dir(&self.path).join(link))
                }
            },
            _ => Ok(self.path.clone()),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(HumansError::Io)?;
        }
        Ok(())
    }
}

/// Serialize records the way the store file is written.
pub fn to_pretty_json(humans: &[Human]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    humans.serialize(&mut ser).map_err(HumansError::Serialization)?;
    String::from_utf8(buf).map_err(|e| HumansError::Store(e.to_string()))
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Human>> {
        if !self.path.exists() {
            debug!("store {} does not exist, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(HumansError::Io)?;
        let humans: Vec<Human> =
            serde_json::from_str(&content).map_err(HumansError::Serialization)?;
        debug!("loaded {} humans from {}", humans.len(), self.path.display());
        Ok(humans)
    }

    fn save(&mut self, humans: &[Human]) -> Result<()> {
        let target = self.write_target()?;
        let dir = parent_dir(&target).to_path_buf();
        self.ensure_dir(&dir)?;

        let content = to_pretty_json(humans)?;

        // Write next to the target so the rename stays on one filesystem.
        let mut tmp = NamedTempFile::new_in(&dir).map_err(HumansError::Io)?;
        tmp.write_all(content.as_bytes()).map_err(HumansError::Io)?;
        tmp.as_file().sync_all().map_err(HumansError::Io)?;

        if let Ok(meta) = fs::metadata(&target) {
            fs::set_permissions(tmp.path(), meta.permissions()).map_err(HumansError::Io)?;
        }

        tmp.persist(&target).map_err(|e| {
            HumansError::Store(format!(
                "could not replace {}: {}",
                target.display(),
                e.error
            ))
        })?;

        debug!("saved {} humans to {}", humans.len(), target.display());
        Ok(())
    }
}

/// Directory a store file lives in. A bare file name means the cwd.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}
