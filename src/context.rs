//! Admin context: the single source of truth for building action URLs
//!
//! Every widget on a page resolves its server endpoints through the same
//! `AdminContext`, so URL construction stays consistent across the page. The
//! context is an immutable value installed once per page load; widgets hold a
//! shared handle to it rather than reaching into a mutable global.

use std::rc::Rc;

use once_cell::unsync::OnceCell;

thread_local! {
    static INSTALLED: OnceCell<Rc<AdminContext>> = OnceCell::new();
}

/// Immutable per-page configuration for resolving admin action URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminContext {
    base_url: String,
    admin_path: String,
}

impl AdminContext {
    pub fn new(base_url: impl Into<String>, admin_path: impl Into<String>) -> Self {
        AdminContext {
            base_url: base_url.into(),
            admin_path: admin_path.into(),
        }
    }

    /// Install the page-wide context, or return the one already installed.
    ///
    /// Installation is idempotent: the first call wins and every later call
    /// returns the existing instance, so there is never a second context on
    /// the page regardless of how many widgets are constructed.
    pub fn install(base_url: impl Into<String>, admin_path: impl Into<String>) -> Rc<AdminContext> {
        INSTALLED.with(|cell| {
            Rc::clone(cell.get_or_init(|| Rc::new(AdminContext::new(base_url, admin_path))))
        })
    }

    /// The context installed for this page, if any.
    pub fn current() -> Option<Rc<AdminContext>> {
        INSTALLED.with(|cell| cell.get().cloned())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn admin_path(&self) -> &str {
        &self.admin_path
    }

    /// Fully-qualified admin URL prefix: `base_url + admin_path + "/"`.
    pub fn admin_url(&self) -> String {
        format!("{}{}/", self.base_url, self.admin_path)
    }

    /// Absolute URL for an admin action endpoint such as
    /// `action/json/widget/load`.
    pub fn action_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.admin_url(), endpoint)
    }
}
