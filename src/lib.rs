//! slotpress - a minimal static-site generator
//!
//! Pages in a data directory are plain HTML with placeholder tags; each
//! placeholder names a slot that is filled from a directory of template
//! fragment files, falling back to the tag's own literal body:
//!
//! ```text
//! <template slot="header"/>
//! <template slot="title">My Site</template>
//! ```
//!
//! The core is two pure pieces: a pattern matcher that locates placeholder
//! occurrences in raw text ([`find_occurrences`]) and a substitution engine
//! that splices resolved fragments into the document ([`substitute`]).
//! Everything filesystem-shaped lives in [`site`] and [`template`].
//!
//! # Example
//!
//! ```rust
//! use slotpress::{render_page, ResolveError};
//!
//! fn resolve(name: &str) -> Result<Option<String>, ResolveError> {
//!     Ok((name == "name").then(|| "Universe".to_string()))
//! }
//!
//! let source = r#"Hello <template slot="name">World</template>!"#;
//! let html = render_page(source, &mut resolve).unwrap();
//! assert_eq!(html, "Hello Universe!");
//! ```

pub mod pattern;
pub mod site;
pub mod substitute;
pub mod template;

pub use pattern::{find_occurrences, Occurrence, Occurrences, Span, TagShape};
pub use site::{generate, SiteConfig, Summary};
pub use substitute::{render_page, substitute};
pub use template::{DirResolver, ResolveError, TemplateResolver};

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found(_: &str) -> Result<Option<String>, ResolveError> {
        Ok(None)
    }

    #[test]
    fn test_render_page_with_default() {
        let html = render_page(
            r#"Hello <template slot="name">World</template>!"#,
            &mut not_found,
        )
        .unwrap();
        assert_eq!(html, "Hello World!");
    }

    #[test]
    fn test_render_page_no_placeholders() {
        let source = "<html><body>static</body></html>";
        assert_eq!(render_page(source, &mut not_found).unwrap(), source);
    }

    #[test]
    fn test_find_occurrences_reexport() {
        let occs: Vec<_> = find_occurrences(r#"<template slot="a"/>"#).collect();
        assert_eq!(occs.len(), 1);
        assert_eq!(occs[0].shape, TagShape::SelfClosing);
    }
}
