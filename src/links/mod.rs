//! Custom documentation-link resolution.
//!
//! The documentation generator calls [`DocLinkResolver::resolve`] once for
//! every symbol it renders, so the contract is total: a strategy answers
//! `None` for names it has no custom link for instead of failing. The shipped
//! default, [`NoCustomLinks`], has no custom links at all and answers `None`
//! for every input; a richer strategy can be swapped in without changing
//! callers.

/// Strategy for mapping a symbol name to an external documentation URL.
pub trait DocLinkResolver: Send + Sync {
    /// Return the custom URL for `name`, or `None` when the generator should
    /// fall back to the standard per-notebook page.
    fn resolve(&self, name: &str) -> Option<String>;
}

/// The inert default strategy: no symbol has a custom link.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCustomLinks;

impl DocLinkResolver for NoCustomLinks {
    fn resolve(&self, _name: &str) -> Option<String> {
        None
    }
}
