//! Path resolution.
//!
//! # Responsibilities
//! - Normalize the requested path (strip query/fragment, collapse slashes)
//! - Match segments against top-level routes in declaration order
//! - Descend into children with the unmatched remainder
//! - Return the matched chain or an explicit no-match
//!
//! # Design Decisions
//! - Segment comparison only, no regex
//! - First structural match wins
//! - Resolution is stateless per navigation

use crate::routing::route::{Route, ViewHandle, ViewLoadError};

/// Result of resolving a path: the matched routes, parent first.
///
/// A nested match carries the whole chain so a renderer can mount the
/// parent layout before the leaf view.
#[derive(Debug)]
pub struct Resolution<'a> {
    chain: Vec<&'a Route>,
}

impl<'a> Resolution<'a> {
    /// Matched routes, parent first, leaf last.
    pub fn chain(&self) -> &[&'a Route] {
        &self.chain
    }

    /// The route the navigation targets.
    pub fn leaf(&self) -> &'a Route {
        // chain holds at least the matched route itself
        self.chain[self.chain.len() - 1]
    }

    /// Full path pattern of the matched chain.
    pub fn path_pattern(&self) -> String {
        let mut pattern = String::new();
        for route in &self.chain {
            for segment in route.segments() {
                pattern.push('/');
                pattern.push_str(segment);
            }
        }
        if pattern.is_empty() {
            pattern.push('/');
        }
        pattern
    }

    /// Invoke every loader along the chain, parent first.
    ///
    /// This is the only point at which view loaders run.
    pub async fn load_views(&self) -> Result<Vec<ViewHandle>, ViewLoadError> {
        let mut views = Vec::with_capacity(self.chain.len());
        for route in &self.chain {
            views.push(route.loader.load().await?);
        }
        Ok(views)
    }
}

/// Resolve `path` against `routes`, first match wins.
pub(crate) fn resolve<'a>(routes: &'a [Route], path: &str) -> Option<Resolution<'a>> {
    let segments = normalize(path);
    routes
        .iter()
        .find_map(|route| match_route(route, &segments))
        .map(|chain| Resolution { chain })
}

/// Split a request path into segments, dropping query string, fragment,
/// empty segments, and trailing slashes along the way.
fn normalize(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or("");
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_route<'a>(route: &'a Route, segments: &[&str]) -> Option<Vec<&'a Route>> {
    let own = route.segments();
    if segments.len() < own.len() || segments[..own.len()] != own[..] {
        return None;
    }

    let rest = &segments[own.len()..];
    if rest.is_empty() {
        return Some(vec![route]);
    }

    for child in &route.children {
        if let Some(mut chain) = match_route(child, rest) {
            chain.insert(0, route);
            return Some(chain);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::ViewLoader;

    fn leaf(path: &str, name: &str) -> Route {
        Route::new(path, name, ViewLoader::module("views/Test"))
    }

    #[test]
    fn root_matches_only_the_root_path() {
        let routes = vec![leaf("/", "home"), leaf("/login", "login")];

        assert_eq!(resolve(&routes, "/").unwrap().leaf().name, "home");
        assert_eq!(resolve(&routes, "/login").unwrap().leaf().name, "login");
        assert!(resolve(&routes, "/logout").is_none());
    }

    #[test]
    fn declaration_order_breaks_ties() {
        let routes = vec![leaf("/login", "first"), leaf("/login", "second")];
        assert_eq!(resolve(&routes, "/login").unwrap().leaf().name, "first");
    }

    #[test]
    fn children_match_relative_to_the_parent() {
        let routes = vec![
            leaf("/", "home"),
            leaf("/admin", "admin").with_children(vec![leaf("model/train", "model-train")]),
        ];

        let resolution = resolve(&routes, "/admin/model/train").unwrap();
        assert_eq!(resolution.leaf().name, "model-train");
        assert_eq!(resolution.path_pattern(), "/admin/model/train");

        let names: Vec<_> = resolution.chain().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["admin", "model-train"]);

        // the child path alone is not a route
        assert!(resolve(&routes, "/model/train").is_none());
    }

    #[test]
    fn parent_path_resolves_to_the_parent_itself() {
        let routes =
            vec![leaf("/admin", "admin").with_children(vec![leaf("system/role", "system-role")])];
        assert_eq!(resolve(&routes, "/admin").unwrap().leaf().name, "admin");
    }

    #[test]
    fn unmatched_remainder_is_no_match() {
        let routes =
            vec![leaf("/admin", "admin").with_children(vec![leaf("system/role", "system-role")])];
        assert!(resolve(&routes, "/admin/system/unknown").is_none());
        assert!(resolve(&routes, "/admin/system/role/extra").is_none());
    }

    #[test]
    fn normalization_strips_query_fragment_and_extra_slashes() {
        let routes = vec![leaf("/login", "login")];
        assert_eq!(resolve(&routes, "/login?next=%2Fadmin").unwrap().leaf().name, "login");
        assert_eq!(resolve(&routes, "/login#form").unwrap().leaf().name, "login");
        assert_eq!(resolve(&routes, "//login/").unwrap().leaf().name, "login");
    }
}
