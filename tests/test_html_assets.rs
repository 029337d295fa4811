use gmaps_helper::html_assets::{
    dom_id, script_block, script_link, wrap_in_tag, PageAssetRegistry, PageAssets,
};
use gmaps_helper::map_options::HtmlAttributes;

#[test]
fn test_dom_id() {
    assert_eq!(dom_id("Location.lat").as_str(), "LocationLat");
    assert_eq!(dom_id("Location.map_lng").as_str(), "LocationMapLng");
    assert_eq!(dom_id("lat").as_str(), "Lat");
}

#[test]
fn test_wrap_in_tag() {
    let attributes = HtmlAttributes::new().with_attr("id", "MapDiv");
    assert_eq!(
        wrap_in_tag("div", "inner", &attributes).as_str(),
        r#"<div id="MapDiv">inner</div>"#
    );
}

#[test]
fn test_script_block() {
    assert_eq!(
        script_block("var x = 1;").as_str(),
        "<script type=\"text/javascript\">\n//<![CDATA[\nvar x = 1;\n//]]>\n</script>"
    );
}

#[test]
fn test_registry_dedups_by_url() {
    let mut registry = PageAssetRegistry::new();
    let url = "http://maps.google.com/maps/api/js?sensor=false";

    assert!(!registry.has_script_been_added(url));
    registry.register_script(url, script_link(url));
    assert!(registry.has_script_been_added(url));
    registry.register_script(url, script_link(url));

    assert_eq!(registry.scripts().len(), 1);
    assert!(registry.scripts()[0].contains("src=\"http://maps.google.com"));
}
