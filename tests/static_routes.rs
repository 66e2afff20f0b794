use std::collections::HashMap;

use http::StatusCode;
use pretty_assertions::assert_eq;
use router::{built_in, Error, HandlerRegistry, Location, Route, Router};

fn router() -> Router {
    Router::new(built_in().build().unwrap())
}

#[test]
fn static_route_lookup() {
    let router = router();
    let play = router.static_route("play").unwrap();
    assert_eq!(play.location(), &Location::Play);
    assert_eq!(play.pattern(), r"videos/([0-9]+)/[a-z0-9\-]+");
}

#[test]
fn unknown_static_route_fails() {
    let router = router();
    let err = router.static_route("doesNotExist").unwrap_err();
    assert!(matches!(err, Error::UnknownStaticRoute(_)));
    assert_eq!(err.to_string(), "Unknown static route doesNotExist");
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn filter_appends_routes() {
    let table = built_in()
        .register_filter(|mut routes: Vec<Route>| {
            routes.push(Route::new(
                "promotedVideos",
                r"videos",
                Location::Extension("promoted".to_string()),
            ));
            routes
        })
        .build()
        .unwrap();
    let router = Router::new(table);
    // Appended last, so it overrides the built-in videos route.
    let found = router.resolve("videos").unwrap();
    assert_eq!(found.route.name(), "promotedVideos");
    assert_eq!(
        found.route.location(),
        &Location::Extension("promoted".to_string())
    );
}

#[test]
fn filters_run_once_in_registration_order() {
    let table = built_in()
        .register_filter(|mut routes: Vec<Route>| {
            routes.push(Route::new(
                "promotedVideos",
                r"videos",
                Location::Extension("promoted".to_string()),
            ));
            routes
        })
        .register_filter(|routes: Vec<Route>| {
            routes
                .into_iter()
                .filter(|route| route.name() != "promotedVideos")
                .collect()
        })
        .build()
        .unwrap();
    let router = Router::new(table);
    // The second filter saw and removed what the first one appended.
    assert_eq!(router.resolve("videos").unwrap().route.name(), "browseVideos");
    assert_eq!(router.table().len(), 79);
}

#[test]
fn filter_can_remove_routes() {
    let table = built_in()
        .register_filter(|routes: Vec<Route>| {
            routes
                .into_iter()
                .filter(|route| route.location() != &Location::ApiVideoList)
                .collect()
        })
        .build()
        .unwrap();
    let router = Router::new(table);
    assert!(matches!(
        router.static_route("apiGetVideoList").unwrap_err(),
        Error::UnknownStaticRoute(_)
    ));
    // The path still resolves, one group down the table.
    assert_eq!(router.resolve("api/video/list").unwrap().route.name(), "pages");
}

#[test]
fn registry_resolves_registered_locations() {
    let registry = HandlerRegistry::new()
        .register(Location::Videos, "videos controller")
        .register(Location::Play, "play controller");
    assert_eq!(registry.get(&Location::Videos).unwrap(), &"videos controller");
    assert!(registry.contains(&Location::Play));
    assert_eq!(registry.len(), 2);
}

#[test]
fn registry_fails_loudly_for_unbound_locations() {
    let registry: HandlerRegistry<&str> = HandlerRegistry::new();
    let err = registry.get(&Location::Contact).unwrap_err();
    assert!(matches!(err, Error::UnregisteredHandler(Location::Contact)));
    assert_eq!(err.to_string(), "No handler registered for contact");
}

#[test]
fn registry_builds_from_iterator() {
    let registry: HandlerRegistry<&str> =
        HashMap::from([(Location::Index, "index controller")])
            .into_iter()
            .collect();
    assert_eq!(registry.get(&Location::Index).unwrap(), &"index controller");
}

#[test]
fn resolved_location_drives_dispatch() {
    let router = router();
    let registry = HandlerRegistry::new().register(Location::Embed, "embed controller");
    let found = router.resolve("embed/55").unwrap();
    assert_eq!(found.params.get("vid"), Some("55"));
    let handler = registry.get(found.route.location()).unwrap();
    assert_eq!(handler, &"embed controller");
}
