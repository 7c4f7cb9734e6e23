//! Client route table
//!
//! Maps URL paths to named views. Patterns are matched segment by segment in
//! declaration order and the first structural match wins, so `/plants` and
//! `/plants/:id` never shadow each other. Literal segments compare
//! case-insensitively and a single trailing slash is ignored.

use std::collections::{BTreeMap, HashSet};

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use crate::error::RouteError;

/// Characters escaped when a param is written into a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    PlantList,
    PlantDetail,
    EventForm,
    TaskList,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

pub const DASHBOARD: &str = "Dashboard";
pub const PLANT_LIST: &str = "PlantList";
pub const PLANT_DETAIL: &str = "PlantDetail";
pub const EVENT_FORM: &str = "EventForm";
pub const TASK_LIST: &str = "TaskList";
pub const NOT_FOUND: &str = "NotFound";

/// Application routes, in match order. The catch-all must stay last.
pub const APP_ROUTES: &[RouteRecord] = &[
    RouteRecord { path: "/", name: DASHBOARD, view: View::Dashboard },
    RouteRecord { path: "/plants", name: PLANT_LIST, view: View::PlantList },
    RouteRecord { path: "/plants/:id", name: PLANT_DETAIL, view: View::PlantDetail },
    RouteRecord { path: "/events/new", name: EVENT_FORM, view: View::EventForm },
    RouteRecord { path: "/tasks", name: TASK_LIST, view: View::TaskList },
    RouteRecord { path: "/*pathMatch", name: NOT_FOUND, view: View::NotFound },
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    /// Swallows the remaining segments, possibly none
    CatchAll(String),
}

#[derive(Debug, Clone)]
struct CompiledRoute {
    record: RouteRecord,
    segments: Vec<Segment>,
}

impl CompiledRoute {
    fn compile(record: RouteRecord) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: record.path.to_string(),
            reason: reason.to_string(),
        };

        if !record.path.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let parts = split_path(record.path);
        let mut segments = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            let segment = if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("param without a name"));
                }
                Segment::Param(name.to_string())
            } else if let Some(name) = part.strip_prefix('*') {
                if name.is_empty() {
                    return Err(invalid("catch-all without a name"));
                }
                if i + 1 != parts.len() {
                    return Err(invalid("catch-all must be the last segment"));
                }
                Segment::CatchAll(name.to_string())
            } else if part.is_empty() {
                return Err(invalid("empty segment"));
            } else {
                Segment::Static(part.to_string())
            };
            segments.push(segment);
        }

        Ok(Self { record, segments })
    }

    fn matches(&self, parts: &[&str]) -> Option<BTreeMap<String, String>> {
        let mut params = BTreeMap::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(literal) => {
                    if !parts.get(i)?.eq_ignore_ascii_case(literal) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let part = parts.get(i)?;
                    if part.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), decode(part));
                }
                Segment::CatchAll(name) => {
                    params.insert(name.clone(), decode(&parts[i..].join("/")));
                    return Some(params);
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(params)
    }
}

/// A location matched against the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub name: &'static str,
    pub view: View,
    /// Path without query or hash
    pub path: String,
    /// Path, query and hash as navigated to
    pub full_path: String,
    pub params: BTreeMap<String, String>,
    pub query: Vec<(String, String)>,
    pub hash: Option<String>,
}

impl ResolvedRoute {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// First value of a query parameter
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<CompiledRoute>,
}

impl Router {
    /// Compile a route table
    ///
    /// # Errors
    /// Returns an error on a malformed pattern or a repeated route name
    pub fn new(records: &[RouteRecord]) -> Result<Self, RouteError> {
        let mut names = HashSet::new();
        let mut routes = Vec::with_capacity(records.len());

        for record in records {
            if !names.insert(record.name) {
                return Err(RouteError::DuplicateName(record.name.to_string()));
            }
            routes.push(CompiledRoute::compile(*record)?);
        }

        tracing::debug!("Compiled {} routes", routes.len());
        Ok(Self { routes })
    }

    /// Router over [`APP_ROUTES`]
    pub fn app() -> Result<Self, RouteError> {
        Self::new(APP_ROUTES)
    }

    pub fn records(&self) -> impl Iterator<Item = &RouteRecord> {
        self.routes.iter().map(|r| &r.record)
    }

    /// Match a location such as `/plants/42?tab=events#notes`
    pub fn resolve(&self, location: &str) -> Option<ResolvedRoute> {
        let (rest, hash) = match location.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (location, None),
        };
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        let path = absolute(path);

        let parts = split_path(&path);
        let Some((route, params)) = self
            .routes
            .iter()
            .find_map(|route| route.matches(&parts).map(|params| (route, params)))
        else {
            tracing::debug!("No route matches {}", path);
            return None;
        };

        tracing::debug!("Resolved {} to route {}", path, route.record.name);

        let full_path = absolute(location);
        Some(ResolvedRoute {
            name: route.record.name,
            view: route.record.view,
            path,
            full_path,
            params,
            query: parse_query(query),
            hash,
        })
    }

    /// Build the path of a named route
    ///
    /// # Errors
    /// Returns an error if no route has this name or a required param is missing
    pub fn href(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let route = self
            .routes
            .iter()
            .find(|r| r.record.name == name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;

        let lookup = |key: &str| params.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

        let mut path = String::new();
        for segment in &route.segments {
            match segment {
                Segment::Static(literal) => {
                    path.push('/');
                    path.push_str(literal);
                }
                Segment::Param(param) => {
                    let value = lookup(param)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| RouteError::MissingParam {
                            route: name.to_string(),
                            param: param.clone(),
                        })?;
                    path.push('/');
                    path.extend(utf8_percent_encode(value, SEGMENT));
                }
                Segment::CatchAll(param) => {
                    let value = lookup(param).unwrap_or("");
                    for part in value.trim_start_matches('/').split('/') {
                        path.push('/');
                        path.extend(utf8_percent_encode(part, SEGMENT));
                    }
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

/// `plants` -> `/plants`, `?a=1` -> `/?a=1`
fn absolute(location: &str) -> String {
    if location.starts_with('/') {
        location.to_string()
    } else {
        format!("/{}", location)
    }
}

/// `/plants/42/` -> `["plants", "42"]`; `/` -> `[]`
fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (
                decode(&key.replace('+', " ")),
                decode(&value.replace('+', " ")),
            )
        })
        .collect()
}
