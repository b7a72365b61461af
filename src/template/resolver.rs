//! Template resolution - maps slot names to stored fragment content
//!
//! A resolver answers `resolve(name)` with the template's full content,
//! `None` when no template of that name exists (the normal fallback
//! signal), or an error for genuine failures such as an unreadable file.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A resolver failure other than "not found"
///
/// Not-found is not an error; resolvers report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The template file exists but could not be read
    #[error("error reading template file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Capability to look up a named template fragment.
///
/// `Ok(None)` is the not-found signal; it triggers the default/empty
/// fallback in the substitution engine and is never treated as a failure.
pub trait TemplateResolver {
    fn resolve(&mut self, name: &str) -> Result<Option<String>, ResolveError>;
}

/// Any matching closure or function is a resolver; tests and embedders can
/// pass a lookup function directly.
impl<F> TemplateResolver for F
where
    F: FnMut(&str) -> Result<Option<String>, ResolveError>,
{
    fn resolve(&mut self, name: &str) -> Result<Option<String>, ResolveError> {
        self(name)
    }
}

/// File-backed resolver: the template named `hero` lives at
/// `<dir>/hero.html`.
///
/// Lookups are memoized per instance, hits and misses alike, so a fragment
/// referenced from every page is read once per generation run.
#[derive(Debug)]
pub struct DirResolver {
    dir: PathBuf,
    cache: HashMap<String, Option<String>>,
}

impl DirResolver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }

    /// The template directory this resolver reads from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn template_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.html"))
    }
}

impl TemplateResolver for DirResolver {
    fn resolve(&mut self, name: &str) -> Result<Option<String>, ResolveError> {
        if let Some(cached) = self.cache.get(name) {
            return Ok(cached.clone());
        }
        let path = self.template_path(name);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(source) => return Err(ResolveError::Io { path, source }),
        };
        self.cache.insert(name.to_string(), content.clone());
        Ok(content)
    }
}
