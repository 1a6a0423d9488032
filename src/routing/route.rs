//! Route entries and view loaders.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by a view loader.
pub type ViewFuture = Pin<Box<dyn Future<Output = Result<ViewHandle, ViewLoadError>> + Send>>;

/// Handle to a loaded view component.
///
/// The shell does not render; it hands this to whatever renderer hosts it.
/// `module` identifies the view the renderer should mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHandle {
    pub module: String,
}

/// Error raised when a view fails to load.
#[derive(Debug, Clone, thiserror::Error)]
#[error("view module `{module}` failed to load: {reason}")]
pub struct ViewLoadError {
    pub module: String,
    pub reason: String,
}

/// Deferred reference to a view component.
///
/// The thunk is invoked only when a navigation actually reaches the route,
/// so the cost of bringing in a view is paid on first use.
#[derive(Clone)]
pub struct ViewLoader {
    load: Arc<dyn Fn() -> ViewFuture + Send + Sync>,
}

impl ViewLoader {
    /// Wrap an arbitrary loading thunk.
    pub fn new<F>(load: F) -> Self
    where
        F: Fn() -> ViewFuture + Send + Sync + 'static,
    {
        Self {
            load: Arc::new(load),
        }
    }

    /// Loader for a statically known view module.
    ///
    /// Resolves immediately; stands in for the dynamic-import thunk a
    /// bundled frontend would generate.
    pub fn module(module: &'static str) -> Self {
        Self::new(move || {
            Box::pin(async move {
                Ok(ViewHandle {
                    module: module.to_string(),
                })
            })
        })
    }

    /// Invoke the thunk and await the view.
    pub async fn load(&self) -> Result<ViewHandle, ViewLoadError> {
        (self.load)().await
    }
}

impl fmt::Debug for ViewLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ViewLoader")
    }
}

/// A single entry in the route table.
#[derive(Debug, Clone)]
pub struct Route {
    /// Path pattern. Absolute for top-level routes (`/admin`), relative
    /// for children (`model/train`).
    pub path: String,

    /// Identifier, unique across the whole table.
    pub name: String,

    /// Deferred view for this route.
    pub loader: ViewLoader,

    /// Nested routes, matched relative to this route's path.
    pub children: Vec<Route>,
}

impl Route {
    /// Create a leaf route.
    pub fn new(path: impl Into<String>, name: impl Into<String>, loader: ViewLoader) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            loader,
            children: Vec::new(),
        }
    }

    /// Attach nested routes.
    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }

    /// Path split into non-empty segments.
    pub(crate) fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }
}
