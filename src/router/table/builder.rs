use std::collections::HashMap;

use crate::router::pattern::Pattern;
use crate::router::route::Route;
use crate::router::Result;

use super::{Entry, RouteTable};

/// Transforms the route list before the table is built.
///
/// Filters may append, remove or reorder routes; they receive the full
/// declaration list and return a list of the same shape. Register with
/// [RouteTableBuilder::register_filter].
pub trait RoutesFilter {
    fn filter(&self, routes: Vec<Route>) -> Vec<Route>;
}

impl<F> RoutesFilter for F
where
    F: Fn(Vec<Route>) -> Vec<Route>,
{
    fn filter(&self, routes: Vec<Route>) -> Vec<Route> {
        self(routes)
    }
}

pub type RoutesFilterService = Box<dyn RoutesFilter>;

/// A builder for a route table.
#[derive(Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
    filters: Vec<RoutesFilterService>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a route. Declaration order decides priority: a later route
    /// overrides an earlier one for any path both patterns match.
    pub fn add_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Register a filter applied to the declaration list when the table is
    /// built. Filters run once per build, in registration order.
    pub fn register_filter(mut self, filter: impl RoutesFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build the table: run the filters, compile every pattern and assign
    /// priorities. Routes without an explicit weight get their position in
    /// the filtered list, which preserves last-declared-wins resolution.
    pub fn build(self) -> Result<RouteTable> {
        let mut routes = self.routes;
        for filter in &self.filters {
            routes = filter.filter(routes);
        }
        let mut entries = Vec::with_capacity(routes.len());
        let mut names = HashMap::with_capacity(routes.len());
        for (position, route) in routes.into_iter().enumerate() {
            let pattern = Pattern::compile(route.name(), route.pattern())?;
            let priority = route.explicit_weight().unwrap_or(position);
            names.insert(route.name().into(), position);
            entries.push(Entry {
                route,
                pattern,
                priority,
            });
        }
        Ok(RouteTable::new(entries, names))
    }
}

impl From<Vec<Route>> for RouteTableBuilder {
    fn from(routes: Vec<Route>) -> Self {
        Self {
            routes,
            filters: Vec::new(),
        }
    }
}

impl FromIterator<Route> for RouteTableBuilder {
    fn from_iter<T: IntoIterator<Item = Route>>(iter: T) -> Self {
        Self {
            routes: iter.into_iter().collect(),
            filters: Vec::new(),
        }
    }
}
