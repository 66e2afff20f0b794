use std::collections::HashSet;

use anyhow::Result;
use pretty_assertions::assert_eq;
use router::{built_in, Location, Mapping, RouteTable};

fn table() -> RouteTable {
    built_in().build().unwrap()
}

#[test]
fn catch_all_is_declared_first() {
    let table = table();
    let first = table.routes().next().unwrap();
    assert_eq!(first.name(), "pages");
    assert_eq!(first.pattern(), ".*");
    assert_eq!(first.location(), &Location::Page);
}

#[test]
fn route_names_are_unique() {
    let table = table();
    let names: HashSet<&str> = table.routes().map(|route| route.name()).collect();
    assert_eq!(names.len(), table.len());
}

#[test]
fn full_catalog_is_present() {
    assert_eq!(table().len(), 79);
}

#[test]
fn every_positional_mapping_has_a_capture_group() -> Result<()> {
    let table = table();
    for route in table.routes() {
        let positional = route
            .mappings()
            .iter()
            .filter(|mapping| matches!(mapping, Mapping::Param(_)))
            .count();
        let captures = table.pattern(route.name())?.capture_count();
        assert!(
            positional <= captures,
            "route {} maps {} positional parameters onto {} capture groups",
            route.name(),
            positional,
            captures,
        );
    }
    Ok(())
}

#[test]
fn mobile_routes_are_flagged() -> Result<()> {
    let table = table();
    for name in [
        "mobile",
        "mobileBrowseVideos",
        "mobilePlay",
        "mobileSearch",
        "mobileLogin",
        "mobileUser",
        "ajaxMobileLoadMoreVideos",
        "ajaxMobileLoadMoreSearch",
    ] {
        assert!(table.static_route(name)?.is_mobile(), "{name} is mobile");
    }
    assert!(!table.static_route("play")?.is_mobile());
    Ok(())
}

#[test]
fn group_spot_checks() -> Result<()> {
    let table = table();
    assert_eq!(table.static_route("embed")?.location(), &Location::Embed);
    assert_eq!(
        table.static_route("apiGetVideo")?.location(),
        &Location::ApiVideo
    );
    assert_eq!(
        table.static_route("myaccountChangePassword")?.location(),
        &Location::ChangePassword
    );
    assert_eq!(
        table.static_route("videoSitemapPaginated")?.pattern(),
        r"video-sitemap-([0-9]+)\.xml"
    );
    Ok(())
}
