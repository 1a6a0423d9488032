//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Collect route declarations through a builder
//! - Validate the table before it is accepted (all errors, not just first)
//! - Look up a matching route chain for a requested path
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Duplicate route names are a construction error, never last-wins

use std::collections::HashSet;

use crate::routing::resolver::{self, Resolution};
use crate::routing::route::{Route, ViewLoader};

/// A single problem found while validating a route table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("duplicate route name `{name}`")]
    DuplicateName { name: String },

    #[error("route `{name}` has an empty path")]
    EmptyPath { name: String },

    #[error("route at `{path}` has an empty name")]
    EmptyName { path: String },

    #[error("top-level route `{name}` must have an absolute path, got `{path}`")]
    RelativeTopLevel { name: String, path: String },

    #[error("child route `{name}` must have a path relative to its parent, got `{path}`")]
    AbsoluteChild { name: String, path: String },
}

/// Error type for route table construction.
#[derive(Debug)]
pub enum RouteTableError {
    Invalid(Vec<ValidationError>),
}

impl std::fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteTableError::Invalid(errors) => {
                write!(f, "route table validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for RouteTableError {}

impl RouteTableError {
    /// Every validation error found.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            RouteTableError::Invalid(errors) => errors,
        }
    }
}

/// The console's navigation table: declared once, validated, then frozen.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder { routes: Vec::new() }
    }

    /// Top-level route declarations, in order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a requested path to its route chain.
    pub fn resolve(&self, path: &str) -> Option<Resolution<'_>> {
        let resolution = resolver::resolve(&self.routes, path);
        match &resolution {
            Some(r) => {
                tracing::debug!(path, route = %r.leaf().name, "navigation resolved");
            }
            None => {
                tracing::debug!(path, "no route matched");
            }
        }
        resolution
    }
}

/// Builder for [`RouteTable`]. `build` validates the collected routes.
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    /// Append a route declaration.
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Validate and freeze the table.
    pub fn build(self) -> Result<RouteTable, RouteTableError> {
        let errors = validate(&self.routes);
        if !errors.is_empty() {
            tracing::error!(count = errors.len(), "route table validation failed");
            return Err(RouteTableError::Invalid(errors));
        }
        Ok(RouteTable {
            routes: self.routes,
        })
    }
}

fn validate(routes: &[Route]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    fn walk(
        route: &Route,
        top_level: bool,
        seen: &mut HashSet<String>,
        errors: &mut Vec<ValidationError>,
    ) {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyName {
                path: route.path.clone(),
            });
        } else if !seen.insert(route.name.clone()) {
            errors.push(ValidationError::DuplicateName {
                name: route.name.clone(),
            });
        }

        if route.path.is_empty() {
            errors.push(ValidationError::EmptyPath {
                name: route.name.clone(),
            });
        } else if top_level && !route.path.starts_with('/') {
            errors.push(ValidationError::RelativeTopLevel {
                name: route.name.clone(),
                path: route.path.clone(),
            });
        } else if !top_level && route.path.starts_with('/') {
            errors.push(ValidationError::AbsoluteChild {
                name: route.name.clone(),
                path: route.path.clone(),
            });
        }

        for child in &route.children {
            walk(child, false, seen, errors);
        }
    }

    for route in routes {
        walk(route, true, &mut seen, &mut errors);
    }

    errors
}

/// The console's canonical navigation table.
///
/// Public pages at the top level, management pages nested under `/admin`.
pub fn console_routes() -> Result<RouteTable, RouteTableError> {
    RouteTable::builder()
        .route(Route::new("/", "home", ViewLoader::module("views/Home")))
        .route(Route::new("/login", "login", ViewLoader::module("views/Login")))
        .route(Route::new(
            "/register",
            "register",
            ViewLoader::module("views/Register"),
        ))
        .route(
            Route::new("/admin", "admin", ViewLoader::module("views/admin/Admin")).with_children(
                vec![
                    Route::new(
                        "system/analysis",
                        "system-analysis",
                        ViewLoader::module("views/admin/SystemAnalysis"),
                    ),
                    Route::new(
                        "system/role",
                        "system-role",
                        ViewLoader::module("views/admin/SystemRole"),
                    ),
                    Route::new(
                        "user/insert",
                        "user-insert",
                        ViewLoader::module("views/admin/UserInsert"),
                    ),
                    Route::new(
                        "user/update",
                        "user-update",
                        ViewLoader::module("views/admin/UserUpdate"),
                    ),
                    Route::new(
                        "device/upload",
                        "device-upload",
                        ViewLoader::module("views/admin/DataUpload"),
                    ),
                    Route::new(
                        "model/train",
                        "model-train",
                        ViewLoader::module("views/admin/ModelTrain"),
                    ),
                    Route::new(
                        "model/predict",
                        "model-predict",
                        ViewLoader::module("views/admin/ModelPredict"),
                    ),
                    Route::new(
                        "model/advice",
                        "model-advice",
                        ViewLoader::module("views/admin/ModelAdvice"),
                    ),
                    Route::new(
                        "equip/order",
                        "equip-order",
                        ViewLoader::module("views/admin/EquipOrder"),
                    ),
                    Route::new(
                        "equip/process",
                        "equip-process",
                        ViewLoader::module("views/admin/EquipProcess"),
                    ),
                    Route::new(
                        "equip/list",
                        "equip-list",
                        ViewLoader::module("views/admin/EquipList"),
                    ),
                ],
            ),
        )
        // `/home` mirrored `/` in an earlier console build under the same
        // name; the table rejects duplicate names, so the alias gets its own.
        .route(Route::new(
            "/home",
            "home-alias",
            ViewLoader::module("views/Home"),
        ))
        .build()
}
