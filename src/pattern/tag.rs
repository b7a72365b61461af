//! Occurrence types produced by the placeholder tag scanner

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// The two recognized placeholder tag shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagShape {
    /// `<template slot="name"/>` - no fallback body
    SelfClosing,
    /// `<template slot="name">fallback</template>` - carries a literal
    /// fallback body (possibly empty)
    WithDefault,
}

/// One located placeholder tag within source text
///
/// Occurrences are produced in ascending, non-overlapping span order, with
/// `span.start < span.end <= source.len()`. `default` is `Some` exactly
/// when the shape is [`TagShape::WithDefault`]; an empty default body is
/// `Some("")`, distinct from no default at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Which shape matched
    pub shape: TagShape,
    /// The slot name extracted from the `slot` attribute
    pub name: String,
    /// Literal fallback body for `WithDefault` occurrences
    pub default: Option<String>,
    /// Byte range of the whole tag within the source
    pub span: Span,
}

impl Occurrence {
    /// True if the occurrence carries a fallback body
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}
