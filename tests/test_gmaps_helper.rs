use gmaps_helper::gmaps_config::GmapsConfig;
use gmaps_helper::gmaps_helper::{GmapsHelper, DEFAULT_CANVAS_ID};
use gmaps_helper::html_assets::PageAssetRegistry;
use gmaps_helper::map_options::{HtmlAttributes, MapOptions, MarkerSpec, StaticMapOpts};

fn get_helper() -> GmapsHelper<PageAssetRegistry> {
    GmapsHelper::new(GmapsConfig::new(), PageAssetRegistry::new())
}

#[test]
fn test_map_with_defaults() {
    let mut helper = get_helper();
    let div = helper
        .map(
            "44.788414",
            "20.469589",
            &MapOptions::new(),
            &HtmlAttributes::new(),
        )
        .unwrap();

    assert!(div.starts_with(
        r#"<div style="height: 400px" class="GoogleMap" id="GoogleMapCanvas"><script"#
    ));
    assert!(div.contains("GoogleMapCanvasOpt = {};"));
    assert!(div.contains("GoogleMapCanvasOpt.center = new google.maps.LatLng(44.788414, 20.469589);"));
    assert!(div.contains("GoogleMapCanvasOpt.zoom = 5;"));
    assert!(div.contains("GoogleMapCanvasOpt.mapTypeId = google.maps.MapTypeId.ROADMAP;"));
    assert!(div.contains(
        "var GoogleMapCanvas = new \
         google.maps.Map(document.getElementById('GoogleMapCanvas'), GoogleMapCanvasOpt);"
    ));
    assert!(div.ends_with("</script></div>"));
}

#[test]
fn test_map_substitutes_default_coordinate() {
    env_logger::builder().is_test(true).try_init().ok();

    let mut helper = get_helper();
    let div = helper
        .map("91", "20", &MapOptions::new(), &HtmlAttributes::new())
        .unwrap();

    assert!(div.contains("new google.maps.LatLng(44.788414, 20.469589);"));
    assert!(!div.contains("LatLng(91"));
}

#[test]
fn test_map_option_overrides_and_js_id() {
    let mut helper = get_helper();
    let options = MapOptions::new()
        .with_option("zoom", 12)
        .with_option("draggable", false)
        .with_option("id", "MyMap");
    let attributes = HtmlAttributes::new().with_attr("id", "map_div");
    let div = helper
        .map("44.788414", "20.469589", &options, &attributes)
        .unwrap();

    // options.id names the js variable, the element keeps its own id
    assert!(div.contains(r#" id="map_div""#));
    assert!(div.contains("MyMapOpt.zoom = 12;"));
    assert!(div.contains("MyMapOpt.draggable = false;"));
    assert!(div.contains("var MyMap = new google.maps.Map(document.getElementById('map_div'), MyMapOpt);"));
    assert!(!div.contains("MyMapOpt.id"));
}

#[test]
fn test_map_registers_loader_once() {
    let mut helper = get_helper();
    helper
        .map("44.788414", "20.469589", &MapOptions::new(), &HtmlAttributes::new())
        .unwrap();
    helper
        .map("12.3456", "78.90123", &MapOptions::new(), &HtmlAttributes::new())
        .unwrap();

    let scripts = helper.assets().scripts();
    assert_eq!(scripts.len(), 1);
    assert_eq!(
        scripts[0].as_str(),
        r#"<script type="text/javascript" src="http://maps.google.com/maps/api/js?sensor=false"></script>"#
    );
}

#[test]
fn test_add_markers() {
    let helper = get_helper();
    let markers = vec![
        MarkerSpec::new("44.788414", "20.469589").with_title("'A'"),
        MarkerSpec::new("999", "20.469589").with_title("'bad'"),
    ];
    let script = helper.add_markers(&markers, &MapOptions::new()).unwrap();

    assert!(script.contains("marker0Opt = {};"));
    assert!(script.contains("marker0Opt.position = new google.maps.LatLng(44.788414, 20.469589);"));
    assert!(script.contains(&format!("marker0Opt.map = {DEFAULT_CANVAS_ID};")));
    assert!(script.contains("marker0Opt.title = 'A';"));
    assert!(script.contains("var marker0 = new google.maps.Marker(marker0Opt);"));

    // the invalid marker is dropped entirely, the index is positional
    assert!(!script.contains("marker1"));
    assert!(!script.contains("'bad'"));
}

#[test]
fn test_add_markers_batch_options_precede_marker_options() {
    let helper = get_helper();
    let markers = vec![MarkerSpec::new("44.788414", "20.469589")
        .with_title("'A'")
        .with_option("clickable", true)];
    let options = MapOptions::new().with_option("map", "MyMap");
    let script = helper.add_markers(&markers, &options).unwrap();

    let map_pos = script.find("marker0Opt.map = MyMap;").unwrap();
    let title_pos = script.find("marker0Opt.title = 'A';").unwrap();
    let clickable_pos = script.find("marker0Opt.clickable = true;").unwrap();
    assert!(map_pos < title_pos);
    assert!(title_pos < clickable_pos);
}

#[test]
fn test_add_markers_info_window() {
    let helper = get_helper();
    let markers = vec![MarkerSpec::new("44.788414", "20.469589")
        .with_title("'First Marker'")
        .with_info_window(MapOptions::new().with_option("content", "'Hello'"))];
    let script = helper.add_markers(&markers, &MapOptions::new()).unwrap();

    assert!(script.contains("marker0IWOpt = {};"));
    assert!(script.contains("marker0IWOpt.position = new google.maps.LatLng(44.788414, 20.469589);"));
    assert!(script.contains("marker0IWOpt.content = 'Hello';"));
    assert!(script.contains("marker0IW = new google.maps.InfoWindow(marker0IWOpt);"));
    assert!(script.contains(&format!("marker0IW.open({DEFAULT_CANVAS_ID}, marker0);")));
}

#[test]
fn test_add_draggable_marker() {
    let helper = get_helper();
    let options = MapOptions::new().with_option("draggable", false);
    let script = helper
        .add_draggable_marker("Location.lat", "Location.lng", None, &options)
        .unwrap();

    assert!(script.contains("document.getElementById('LocationLat').value;"));
    assert!(script.contains("document.getElementById('LocationLng').value;"));
    assert!(script.contains(&format!("markerOpt.map = {DEFAULT_CANVAS_ID};")));
    assert!(script.contains(&format!(
        "markerOpt.position = new google.maps.LatLng(44.788414, 20.469589);\n\t{DEFAULT_CANVAS_ID}.setZoom(5);"
    )));
    assert!(script.contains(&format!("{DEFAULT_CANVAS_ID}.panTo(markerOpt.position);")));

    // caller overrides are emitted after the defaults, later assignments win
    let default_pos = script.find("markerOpt.draggable = true;").unwrap();
    let override_pos = script.find("markerOpt.draggable = false;").unwrap();
    assert!(default_pos < override_pos);
}

#[test]
fn test_static_url() {
    let helper = get_helper();
    let opts = StaticMapOpts::new()
        .with_zoom(12)
        .with_size("300x300")
        .with_maptype("hybrid")
        .with_marker_group(&["color:red", "label:A", "10,10"]);
    let url = helper.static_url("44.788414", "20.469589", &opts);

    assert_eq!(
        url.as_str(),
        "http://maps.google.com/maps/api/staticmap?sensor=false&\
         center=44.788414,20.469589&zoom=12&size=300x300&maptype=hybrid&\
         markers=color:red|label:A|10,10"
    );
}

#[test]
fn test_static_url_defaults_and_substitution() {
    let helper = get_helper();
    let url = helper.static_url("999", "999", &StaticMapOpts::new());

    assert_eq!(
        url.as_str(),
        "http://maps.google.com/maps/api/staticmap?sensor=false&\
         center=44.788414,20.469589&zoom=5&size=256x256&maptype=roadmap"
    );
}
