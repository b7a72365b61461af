//! Pattern matcher for `template`/`slot` placeholder tags
//!
//! Two shapes are recognized inside otherwise-opaque HTML text:
//!
//! ```text
//! <template slot="name"/>                    self-closing, no fallback
//! <template slot="name">fallback</template>  with a literal fallback body
//! ```
//!
//! Matching is purely textual: there is no DOM, no nesting validation, and
//! malformed tag-like text is treated as plain content.

pub mod scanner;
pub mod tag;

pub use scanner::{find_occurrences, Occurrences};
pub use tag::{Occurrence, Span, TagShape};
