//! Path-based navigation history over the route table
//!
//! Mirrors a browser session history: a list of visited locations and a
//! cursor. Pushing after going back drops the forward entries.

use crate::error::RouteError;
use crate::router::{ResolvedRoute, Router};

pub struct History {
    router: Router,
    entries: Vec<ResolvedRoute>,
    index: usize,
}

impl History {
    /// Start a history at `initial`
    ///
    /// # Errors
    /// Returns `RouteError::NoMatch` if the router cannot resolve `initial`
    pub fn new(router: Router, initial: &str) -> Result<Self, RouteError> {
        let first = resolve(&router, initial)?;
        Ok(Self {
            router,
            entries: vec![first],
            index: 0,
        })
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn current(&self) -> &ResolvedRoute {
        &self.entries[self.index]
    }

    /// Navigate to `location`, adding an entry
    ///
    /// Navigating to the location already shown is a no-op.
    pub fn push(&mut self, location: &str) -> Result<&ResolvedRoute, RouteError> {
        let route = resolve(&self.router, location)?;
        if route.full_path == self.current().full_path {
            tracing::debug!("Already at {}, navigation skipped", route.full_path);
            return Ok(self.current());
        }

        self.entries.truncate(self.index + 1);
        self.entries.push(route);
        self.index += 1;
        Ok(self.current())
    }

    /// Navigate to a named route
    pub fn push_named(
        &mut self,
        name: &str,
        params: &[(&str, &str)],
    ) -> Result<&ResolvedRoute, RouteError> {
        let location = self.router.href(name, params)?;
        self.push(&location)
    }

    /// Navigate to `location`, overwriting the current entry
    pub fn replace(&mut self, location: &str) -> Result<&ResolvedRoute, RouteError> {
        let route = resolve(&self.router, location)?;
        self.entries[self.index] = route;
        Ok(self.current())
    }

    pub fn back(&mut self) -> Option<&ResolvedRoute> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&ResolvedRoute> {
        self.go(1)
    }

    /// Move the cursor by `delta` entries. Out-of-range moves change nothing.
    pub fn go(&mut self, delta: isize) -> Option<&ResolvedRoute> {
        let target = self.index.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.index = target;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn resolve(router: &Router, location: &str) -> Result<ResolvedRoute, RouteError> {
    router
        .resolve(location)
        .ok_or_else(|| RouteError::NoMatch(location.to_string()))
}
