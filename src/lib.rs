//! Routing library for a video sharing CMS front controller.
//!
//! Holds the ordered table of site routes, derives the routable path from a
//! raw request target and resolves it to a handler [Location] together with
//! the parameters bound from the path. The host application owns dispatch:
//! it looks the location up in a [HandlerRegistry] and invokes whatever it
//! registered there.
//!
//! # Example usage
//!
//! ```
//! use router::{built_in, Location, Router};
//!
//! let table = built_in().build().unwrap();
//! let router = Router::new(table);
//!
//! let found = router.resolve("/videos/comedy/page/3?ref=home").unwrap();
//! assert_eq!(found.route.location(), &Location::Videos);
//! assert_eq!(found.params.get("category"), Some("comedy"));
//! assert_eq!(found.params.get("page"), Some("3"));
//!
//! let play = router.static_route("play").unwrap();
//! assert_eq!(play.location(), &Location::Play);
//! ```

pub(crate) mod catalog;
pub(crate) mod handler;
pub(crate) mod router;

pub use catalog::built_in;
pub use handler::{HandlerRegistry, Location};
pub use router::pattern::Pattern;
pub use router::resolver::{Match, Params, Router};
pub use router::route::{Mapping, Route};
pub use router::table::{RouteTable, RouteTableBuilder, RoutesFilter, RoutesFilterService};
pub use router::{Error, Result};
