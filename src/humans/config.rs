use log::{debug, warn};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable (and `.env` key) naming the data file.
pub const DATA_ENV_VAR: &str = "HUMANS_DATA";
const DOTENV_FILENAME: &str = ".env";

/// Where the data file path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataPathSource {
    Flag,
    Env,
    DotEnv,
}

/// Candidate values for the data file path, in precedence order.
///
/// `resolve` only looks at these fields, so callers (and tests) decide
/// what goes in. Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataPathSources {
    pub flag: Option<PathBuf>,
    pub env: Option<OsString>,
    pub dotenv: Option<String>,
}

impl DataPathSources {
    pub fn resolve(&self) -> Option<PathBuf> {
        self.resolve_with_source().map(|(path, _)| path)
    }

    pub fn resolve_with_source(&self) -> Option<(PathBuf, DataPathSource)> {
        if let Some(flag) = self.flag.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            return Some((flag.clone(), DataPathSource::Flag));
        }
        if let Some(env) = self.env.as_ref().filter(|v| !v.is_empty()) {
            return Some((PathBuf::from(env), DataPathSource::Env));
        }
        if let Some(dotenv) = self.dotenv.as_ref().filter(|v| !v.is_empty()) {
            return Some((PathBuf::from(dotenv), DataPathSource::DotEnv));
        }
        None
    }

    /// Fill the sources from the running process: `HUMANS_DATA` from the
    /// environment, then the `.env` file next to the executable. Later
    /// sources are only read when the earlier ones are empty.
    pub fn from_process(flag: Option<PathBuf>) -> Self {
        let mut sources = Self {
            flag,
            ..Self::default()
        };
        if sources.resolve().is_some() {
            return sources;
        }

        sources.env = env::var_os(DATA_ENV_VAR);
        if sources.resolve().is_some() {
            return sources;
        }

        sources.dotenv = dotenv_path()
            .filter(|p| p.exists())
            .and_then(|p| read_dotenv_value(&p, DATA_ENV_VAR));
        sources
    }
}

/// The `.env` file beside the current executable.
pub fn dotenv_path() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    exe.parent().map(|dir| dir.join(DOTENV_FILENAME))
}

/// Look up `key` in a `.env` file without touching the process environment.
///
/// Unreadable files and malformed lines are logged and skipped.
pub fn read_dotenv_value(path: &Path, key: &str) -> Option<String> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) => {
            warn!("could not read {}: {}", path.display(), e);
            return None;
        }
    };

    let mut found = None;
    for item in iter {
        match item {
            Ok((k, v)) if k == key => found = Some(v),
            Ok(_) => {}
            Err(e) => warn!("skipping bad line in {}: {}", path.display(), e),
        }
    }
    if found.is_some() {
        debug!("{} found in {}", key, path.display());
    }
    found
}
