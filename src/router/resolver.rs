use std::collections::HashMap;

use essentials::{debug, warn};
use http::Uri;

use super::path;
use super::route::{Mapping, Route};
use super::table::RouteTable;
use super::{Error, Result};

/// Resolves raw request targets against a route table.
pub struct Router {
    table: RouteTable,
    base_path: String,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            base_path: String::new(),
        }
    }

    /// Set the base path stripped from every request target.
    /// The default is empty, for a site served at the domain root.
    pub fn with_base_path<S: AsRef<str>>(mut self, base_path: S) -> Self {
        self.base_path = path::normalize_base(base_path.as_ref());
        self
    }

    /// Derive the base path from the site root URL.
    pub fn with_site_url(self, url: &Uri) -> Self {
        self.with_base_path(url.path())
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Look up a named static route, see [RouteTable::static_route].
    pub fn static_route(&self, name: &str) -> Result<&Route> {
        self.table.static_route(name)
    }

    /// Resolve a raw request target to a route and its bound parameters.
    ///
    /// Every route in the table is tested; the highest priority match wins,
    /// with ties going to the later declaration. The caller merges the
    /// returned parameters into its request context, see
    /// [Params::merge_into].
    pub fn resolve(&self, target: &str) -> Result<Match<'_>> {
        let request_path = path::request_path(target, &self.base_path);
        let mut winner: Option<(&super::table::Entry, Vec<Option<String>>)> = None;
        for entry in self.table.entries() {
            if let Some(captures) = entry.pattern.captures(&request_path) {
                let replace = match &winner {
                    Some((current, _)) => entry.priority >= current.priority,
                    None => true,
                };
                if replace {
                    winner = Some((entry, captures));
                }
            }
        }
        match winner {
            Some((entry, captures)) => {
                debug!(
                    "path {:?} resolved to route {:?}",
                    request_path,
                    entry.route.name()
                );
                Ok(Match {
                    params: bind(&entry.route, &captures),
                    route: &entry.route,
                })
            }
            None => {
                warn!("no route matched path {:?}", request_path);
                Err(Error::no_match(request_path))
            }
        }
    }
}

/// The route selected for a request plus the parameters extracted from it.
/// Created fresh per request, discarded after dispatch.
#[derive(Debug)]
pub struct Match<'a> {
    pub route: &'a Route,
    pub params: Params,
}

/// Immutable map of parameter names to values bound during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(HashMap<String, String>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge into a request parameter bag. Router-bound values overwrite
    /// client-supplied values of the same name.
    pub fn merge_into(&self, query: &mut HashMap<String, String>) {
        for (key, value) in &self.0 {
            query.insert(key.clone(), value.clone());
        }
    }
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Bind a route's mapping list against the captures of a match.
///
/// Positional entries consume capture groups in order, counting positional
/// entries only; literal entries pass their constant through. A capture
/// group that did not participate binds an empty value.
fn bind(route: &Route, captures: &[Option<String>]) -> Params {
    let mut params = HashMap::new();
    let mut position = 0;
    for mapping in route.mappings() {
        match mapping {
            Mapping::Literal(key, value) => {
                params.insert(key.to_string(), value.to_string());
            }
            Mapping::Param(name) => {
                let value = captures
                    .get(position)
                    .cloned()
                    .flatten()
                    .unwrap_or_default();
                params.insert(name.to_string(), value);
                position += 1;
            }
        }
    }
    Params(params)
}
