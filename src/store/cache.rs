//! On-device cache mirroring the persisted resume state.
//!
//! Two fixed keys, each one JSON file in the cache directory. Reads
//! happen on startup before any remote call resolves; writes happen on
//! every change and simply overwrite (last-write-wins per key). A
//! missing or unreadable entry degrades to the default value, never an
//! error the user sees.

use std::fs;
use std::path::PathBuf;

use log::warn;

use crate::error::Result;
use crate::generate::ResumeForm;

/// Cache key for the form data record.
pub const FORM_KEY: &str = "resumeData";

/// Cache key for the generated resume text.
pub const CONTENT_KEY: &str = "resumeContent";

/// Directory-backed key/value cache.
#[derive(Debug, Clone)]
pub struct LocalCache {
    dir: PathBuf,
}

impl LocalCache {
    /// Open a cache rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Load the cached form, falling back to the default on any failure.
    pub fn load_form(&self) -> ResumeForm {
        match fs::read_to_string(self.key_path(FORM_KEY)) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                warn!("discarding unreadable cached form: {err}");
                ResumeForm::default()
            }),
            Err(_) => ResumeForm::default(),
        }
    }

    /// Load the cached resume text, falling back to empty.
    pub fn load_content(&self) -> String {
        fs::read_to_string(self.key_path(CONTENT_KEY)).unwrap_or_default()
    }

    /// Overwrite the cached form.
    pub fn save_form(&self, form: &ResumeForm) -> Result<()> {
        let json = serde_json::to_string(form)?;
        fs::write(self.key_path(FORM_KEY), json)?;
        Ok(())
    }

    /// Overwrite the cached resume text.
    pub fn save_content(&self, content: &str) -> Result<()> {
        fs::write(self.key_path(CONTENT_KEY), content)?;
        Ok(())
    }

    /// Remove both keys (sign-out path). Missing entries are fine.
    pub fn clear(&self) -> Result<()> {
        for key in [FORM_KEY, CONTENT_KEY] {
            match fs::remove_file(self.key_path(key)) {
                Ok(()) => {}
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}
