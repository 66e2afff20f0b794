use std::collections::HashMap;

pub use builder::{RouteTableBuilder, RoutesFilter, RoutesFilterService};

mod builder;

use super::pattern::Pattern;
use super::route::Route;
use super::{Error, Result};

#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) route: Route,
    pub(crate) pattern: Pattern,
    pub(crate) priority: usize,
}

/// The ordered, immutable collection of all routes.
///
/// Built once by [RouteTableBuilder::build], read for the lifetime of the
/// application and never mutated afterwards.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<Entry>,
    names: HashMap<Box<str>, usize>,
}

impl RouteTable {
    pub(crate) fn new(entries: Vec<Entry>, names: HashMap<Box<str>, usize>) -> Self {
        Self { entries, names }
    }

    /// Look up a route by name, used for building canonical URLs.
    ///
    /// Unknown names are a broken internal link, not bad user input, and
    /// fail loudly.
    pub fn static_route(&self, name: &str) -> Result<&Route> {
        self.names
            .get(name)
            .and_then(|position| self.entries.get(*position))
            .map(|entry| &entry.route)
            .ok_or_else(|| Error::unknown_static_route(name))
    }

    /// Compiled pattern of a named route.
    pub fn pattern(&self, name: &str) -> Result<&Pattern> {
        self.names
            .get(name)
            .and_then(|position| self.entries.get(*position))
            .map(|entry| &entry.pattern)
            .ok_or_else(|| Error::unknown_static_route(name))
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.entries.iter().map(|entry| &entry.route)
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
