//! Template store lookup for substitution
//!
//! The substitution engine asks a [`TemplateResolver`] for each slot name
//! it encounters. The conventional store is a directory of `<name>.html`
//! fragment files ([`DirResolver`]); tests and embedders can supply a
//! closure instead.

mod resolver;

pub use resolver::{DirResolver, ResolveError, TemplateResolver};
