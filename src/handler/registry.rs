use std::collections::HashMap;

use essentials::warn;

use crate::router::{Error, Result};

use super::Location;

/// Lookup table from handler locations to registered handlers.
///
/// Generic over the handler representation: register controller objects,
/// functions, or whatever the host dispatch loop invokes. Looking up a
/// location nothing was registered for fails loudly, since it means a route
/// points at a controller the host forgot to wire up.
#[derive(Debug, Default)]
pub struct HandlerRegistry<H> {
    handlers: HashMap<Location, H>,
}

impl<H> HandlerRegistry<H> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for the given location.
    pub fn register(mut self, location: Location, handler: H) -> Self {
        self.handlers.insert(location, handler);
        self
    }

    pub fn get(&self, location: &Location) -> Result<&H> {
        match self.handlers.get(location) {
            Some(handler) => Ok(handler),
            None => {
                warn!("no handler registered for location {}", location);
                Err(Error::unregistered_handler(location.clone()))
            }
        }
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.handlers.contains_key(location)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<H> From<HashMap<Location, H>> for HandlerRegistry<H> {
    fn from(handlers: HashMap<Location, H>) -> Self {
        Self { handlers }
    }
}

impl<H> FromIterator<(Location, H)> for HandlerRegistry<H> {
    fn from_iter<T: IntoIterator<Item = (Location, H)>>(iter: T) -> Self {
        Self {
            handlers: iter.into_iter().collect(),
        }
    }
}
