//! Site generation - walks the data directory and writes the output tree
//!
//! Every `.html` file under the data directory is rendered through the
//! substitution pipeline; everything else is copied verbatim. A configured
//! static directory is copied into the output root after page generation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::config::SiteConfig;
use crate::substitute::render_page;
use crate::template::{DirResolver, ResolveError};

/// Errors that abort a generation run
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("data directory {} does not exist", .0.display())]
    MissingDataDir(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A resolver failure while rendering one page; there is no
    /// partial-output mode for a document.
    #[error("failed to render {}: {source}", page.display())]
    Render {
        page: PathBuf,
        #[source]
        source: ResolveError,
    },
}

/// Counts reported after a successful run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Pages rendered through the substitution pipeline
    pub pages: usize,
    /// Files copied verbatim (non-HTML data files and static assets)
    pub assets: usize,
}

/// Generate the site described by `config`.
pub fn generate(config: &SiteConfig) -> Result<Summary, GenerateError> {
    if !config.data_dir.is_dir() {
        return Err(GenerateError::MissingDataDir(config.data_dir.clone()));
    }

    let mut resolver = DirResolver::new(&config.template_dir);
    let mut summary = Summary::default();

    for entry in WalkDir::new(&config.data_dir) {
        let entry = entry.map_err(|source| GenerateError::Walk {
            path: config.data_dir.clone(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(&config.data_dir)
            .expect("walkdir yields paths under its root");

        if entry.path().extension().is_some_and(|ext| ext == "html") {
            let source = fs::read_to_string(entry.path()).map_err(|source| GenerateError::Read {
                path: entry.path().to_path_buf(),
                source,
            })?;
            let rendered =
                render_page(&source, &mut resolver).map_err(|source| GenerateError::Render {
                    page: entry.path().to_path_buf(),
                    source,
                })?;
            let dest = config.output_dir.join(page_output_path(rel));
            write_file(&dest, rendered.as_bytes())?;
            debug!(page = %rel.display(), dest = %dest.display(), "rendered page");
            summary.pages += 1;
        } else {
            let dest = config.output_dir.join(rel);
            copy_file(entry.path(), &dest)?;
            debug!(asset = %rel.display(), "copied data file");
            summary.assets += 1;
        }
    }

    if let Some(static_dir) = &config.static_dir {
        copy_tree(static_dir, &config.output_dir, &mut summary)?;
    }

    info!(
        pages = summary.pages,
        assets = summary.assets,
        output = %config.output_dir.display(),
        "site generated"
    );
    Ok(summary)
}

/// Derive the output path for a page.
///
/// The relative directory is preserved; a dotted file stem denotes further
/// nesting, so `guides/intro.setup.html` lands at `guides/intro/setup.html`
/// while an undotted stem maps through unchanged.
fn page_output_path(rel: &Path) -> PathBuf {
    let Some(stem) = rel.file_stem().and_then(|s| s.to_str()) else {
        return rel.to_path_buf();
    };
    let segments: Vec<&str> = stem.split('.').filter(|s| !s.is_empty()).collect();
    let Some((page, dirs)) = segments.split_last() else {
        return rel.to_path_buf();
    };
    let mut out = rel.parent().map(Path::to_path_buf).unwrap_or_default();
    for dir in dirs {
        out.push(dir);
    }
    out.push(format!("{page}.html"));
    out
}

fn write_file(dest: &Path, contents: &[u8]) -> Result<(), GenerateError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(dest, contents).map_err(|source| GenerateError::Write {
        path: dest.to_path_buf(),
        source,
    })
}

fn copy_file(src: &Path, dest: &Path) -> Result<(), GenerateError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::copy(src, dest).map_err(|source| GenerateError::Write {
        path: dest.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Copy a directory tree verbatim into `output_dir`.
fn copy_tree(src: &Path, output_dir: &Path, summary: &mut Summary) -> Result<(), GenerateError> {
    if !src.is_dir() {
        return Ok(());
    }
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|source| GenerateError::Walk {
            path: src.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        copy_file(entry.path(), &output_dir.join(rel))?;
        debug!(asset = %rel.display(), "copied static file");
        summary.assets += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_output_path_plain_stem() {
        assert_eq!(page_output_path(Path::new("index.html")), PathBuf::from("index.html"));
        assert_eq!(
            page_output_path(Path::new("sub/page.html")),
            PathBuf::from("sub/page.html")
        );
    }

    #[test]
    fn test_page_output_path_dotted_stem_nests() {
        assert_eq!(
            page_output_path(Path::new("about.team.html")),
            PathBuf::from("about/team.html")
        );
        assert_eq!(
            page_output_path(Path::new("guides/intro.setup.deps.html")),
            PathBuf::from("guides/intro/setup/deps.html")
        );
    }

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_generate_full_tree() {
        let root = tempfile::tempdir().unwrap();
        let data = root.path().join("data");
        let templates = root.path().join("templates");
        let statics = root.path().join("static");
        let output = root.path().join("output");

        write(
            &data.join("index.html"),
            "<h1><template slot=\"title\">Untitled</template></h1>",
        );
        write(
            &data.join("about.team.html"),
            "Team: <template slot=\"team\"/>",
        );
        write(&data.join("sub/page.html"), "plain page");
        write(&data.join("style.css"), "body {}");
        write(&templates.join("title.html"), "Welcome");
        write(&statics.join("img/logo.svg"), "<svg/>");

        let config = SiteConfig {
            data_dir: data,
            output_dir: output.clone(),
            template_dir: templates,
            static_dir: Some(statics),
        };
        let summary = generate(&config).unwrap();

        assert_eq!(summary, Summary { pages: 3, assets: 2 });
        assert_eq!(read(&output.join("index.html")), "<h1>Welcome</h1>");
        assert_eq!(read(&output.join("about/team.html")), "Team: ");
        assert_eq!(read(&output.join("sub/page.html")), "plain page");
        assert_eq!(read(&output.join("style.css")), "body {}");
        assert_eq!(read(&output.join("img/logo.svg")), "<svg/>");
    }

    #[test]
    fn test_generate_without_template_dir_uses_defaults() {
        let root = tempfile::tempdir().unwrap();
        let data = root.path().join("data");
        let output = root.path().join("output");
        write(
            &data.join("index.html"),
            "Hello <template slot=\"name\">World</template>!",
        );

        let config = SiteConfig {
            data_dir: data,
            output_dir: output.clone(),
            template_dir: root.path().join("templates"),
            static_dir: None,
        };
        generate(&config).unwrap();
        assert_eq!(read(&output.join("index.html")), "Hello World!");
    }

    #[test]
    fn test_generate_missing_data_dir_errors() {
        let root = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            data_dir: root.path().join("nope"),
            output_dir: root.path().join("output"),
            template_dir: root.path().join("templates"),
            static_dir: None,
        };
        let result = generate(&config);
        assert!(matches!(result, Err(GenerateError::MissingDataDir(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolver_failure_names_the_page() {
        let root = tempfile::tempdir().unwrap();
        let data = root.path().join("data");
        let templates = root.path().join("templates");
        write(&data.join("page.html"), "<template slot=\"broken\"/>");
        // A directory where the template file is expected forces a
        // resolver failure distinct from not-found.
        fs::create_dir_all(templates.join("broken.html")).unwrap();

        let config = SiteConfig {
            data_dir: data,
            output_dir: root.path().join("output"),
            template_dir: templates,
            static_dir: None,
        };
        match generate(&config) {
            Err(GenerateError::Render { page, .. }) => {
                assert!(page.ends_with("page.html"));
            }
            other => panic!("expected Render error, got {other:?}"),
        }
    }
}
