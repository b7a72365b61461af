//! Substitution engine - rewrites a document from its occurrence list
//!
//! Walks the occurrences in order, copying untouched source spans verbatim
//! and splicing a resolved fragment in place of each tag. Resolution
//! priority per occurrence: template store hit, then the occurrence's own
//! default body, then the empty string.

use crate::pattern::{find_occurrences, Occurrence};
use crate::template::{ResolveError, TemplateResolver};

/// Substitute resolved fragments into `source`.
///
/// `occurrences` must come from scanning this exact source text; behavior
/// is unspecified otherwise. An empty occurrence list returns the source
/// unchanged. A store hit wins even when the occurrence has a default and
/// even when the stored template is empty (empty is a valid fragment,
/// distinct from not-found). Inserted fragments are literal text; they are
/// not re-scanned for nested tags.
///
/// Resolver failures other than not-found abort the document and propagate
/// unchanged; not-found is a normal outcome, not an error.
pub fn substitute<I, R>(source: &str, occurrences: I, resolver: &mut R) -> Result<String, ResolveError>
where
    I: IntoIterator<Item = Occurrence>,
    R: TemplateResolver + ?Sized,
{
    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    for occ in occurrences {
        debug_assert!(cursor <= occ.span.start && occ.span.end <= source.len());
        output.push_str(&source[cursor..occ.span.start]);
        match resolver.resolve(&occ.name)? {
            Some(fragment) => output.push_str(&fragment),
            None => {
                if let Some(default) = &occ.default {
                    output.push_str(default);
                }
            }
        }
        cursor = occ.span.end;
    }
    output.push_str(&source[cursor..]);
    Ok(output)
}

/// Render one page: scan `source` for placeholder tags and substitute them.
///
/// This is the per-document pipeline entry point.
///
/// # Example
///
/// ```rust
/// use slotpress::{render_page, ResolveError};
///
/// fn no_templates(_: &str) -> Result<Option<String>, ResolveError> {
///     Ok(None)
/// }
///
/// let source = r#"Hello <template slot="name">World</template>!"#;
/// let html = render_page(source, &mut no_templates).unwrap();
/// assert_eq!(html, "Hello World!");
/// ```
pub fn render_page<R>(source: &str, resolver: &mut R) -> Result<String, ResolveError>
where
    R: TemplateResolver + ?Sized,
{
    substitute(source, find_occurrences(source), resolver)
}
