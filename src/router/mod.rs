pub mod path;
pub mod pattern;
pub mod resolver;
pub mod route;
pub mod table;

use std::fmt::Display;

use http::StatusCode;

use crate::handler::Location;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A named static route was requested that is not in the table.
    UnknownStaticRoute(String),
    /// No route pattern matched the normalized path.
    NoMatch(String),
    /// A route's path template failed to compile.
    Pattern { route: String, source: regex::Error },
    /// A handler location was looked up without a registered handler.
    UnregisteredHandler(Location),
}

impl Error {
    pub fn unknown_static_route<S: AsRef<str>>(name: S) -> Self {
        Self::UnknownStaticRoute(name.as_ref().to_string())
    }

    pub fn no_match<S: AsRef<str>>(path: S) -> Self {
        Self::NoMatch(path.as_ref().to_string())
    }

    pub(crate) fn pattern<S: AsRef<str>>(route: S, source: regex::Error) -> Self {
        Self::Pattern {
            route: route.as_ref().to_string(),
            source,
        }
    }

    pub fn unregistered_handler(location: Location) -> Self {
        Self::UnregisteredHandler(location)
    }

    /// Status the host should answer with when this error escalates.
    /// An unmatched path is the visitor's fault, everything else is ours.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NoMatch(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStaticRoute(name) => {
                "Unknown static route ".fmt(f)?;
                name.fmt(f)
            }
            Self::NoMatch(path) => {
                "No route matched path ".fmt(f)?;
                path.fmt(f)
            }
            Self::Pattern { route, .. } => {
                "Invalid path pattern for route ".fmt(f)?;
                route.fmt(f)
            }
            Self::UnregisteredHandler(location) => {
                "No handler registered for ".fmt(f)?;
                location.fmt(f)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern { source, .. } => Some(source),
            _ => None,
        }
    }
}
