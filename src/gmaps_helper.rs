use anyhow::Error;
use itertools::Itertools;
use log::debug;
use maplit::hashmap;
use stack_string::{format_sstr, StackString};

use crate::{
    gmaps_config::GmapsConfig,
    gmaps_templates::HBR,
    html_assets::{dom_id, script_block, script_link, wrap_in_tag, PageAssets},
    latlon::{is_valid_lat, is_valid_lng, lat_or_default, lng_or_default, DEFAULT_LAT, DEFAULT_LNG},
    map_options::{HtmlAttributes, MapOptions, MarkerSpec, StaticMapOpts},
};

pub const DEFAULT_CANVAS_ID: &str = "GoogleMapCanvas";

/// Builds html/javascript fragments for embedding google maps into server
/// rendered pages. The helper owns no page state itself, the loader-script
/// dedup flag lives behind the `PageAssets` seam.
///
/// No method fails on user input: invalid coordinates are replaced with the
/// default coordinate and invalid markers are dropped from the output, the
/// only fallible step is template rendering.
pub struct GmapsHelper<A: PageAssets> {
    config: GmapsConfig,
    assets: A,
}

impl<A: PageAssets> GmapsHelper<A> {
    pub fn new(config: GmapsConfig, assets: A) -> Self {
        Self { config, assets }
    }

    pub fn assets(&self) -> &A {
        &self.assets
    }

    /// Inject the maps api loader into the page, at most once.
    fn add_api_js(&mut self) {
        let url = self.config.loader_url();
        if !self.assets.has_script_been_added(&url) {
            let markup = script_link(&url);
            self.assets.register_script(&url, markup);
        }
    }

    /// Create a map canvas div with its initialization script.
    ///
    /// `options` are merged over `{zoom: 5, mapTypeId: ROADMAP}` and passed
    /// through to the `google.maps.Map` constructor verbatim, pre-quote
    /// string values. An `id` option overrides the javascript variable name
    /// without changing the canvas element id.
    ///
    /// ```
    /// use gmaps_helper::gmaps_config::GmapsConfig;
    /// use gmaps_helper::gmaps_helper::GmapsHelper;
    /// use gmaps_helper::html_assets::PageAssetRegistry;
    /// use gmaps_helper::map_options::{HtmlAttributes, MapOptions};
    ///
    /// let mut helper = GmapsHelper::new(GmapsConfig::new(), PageAssetRegistry::new());
    /// let options = MapOptions::new()
    ///     .with_option("zoom", 12)
    ///     .with_option("backgroundColor", "'#ff0000'");
    /// let div = helper
    ///     .map("44.788414", "20.469589", &options, &HtmlAttributes::new())
    ///     .unwrap();
    /// assert!(div.contains("new google.maps.Map"));
    /// ```
    pub fn map(
        &mut self,
        lat: &str,
        lng: &str,
        options: &MapOptions,
        html_attributes: &HtmlAttributes,
    ) -> Result<StackString, Error> {
        self.add_api_js();

        let lat = lat_or_default(lat);
        let lng = lng_or_default(lng);

        let default_options = MapOptions::new()
            .with_option("zoom", 5)
            .with_option("mapTypeId", "google.maps.MapTypeId.ROADMAP");
        let mut options = options.merged_over(&default_options);

        let default_attributes = HtmlAttributes::new()
            .with_attr("style", "height: 400px")
            .with_attr("class", "GoogleMap");
        let mut html_attributes = html_attributes.merged_over(&default_attributes);

        if !html_attributes.contains_key("id") {
            html_attributes.set("id", DEFAULT_CANVAS_ID);
        }
        let canvas_id = html_attributes
            .get("id")
            .cloned()
            .unwrap_or_else(|| DEFAULT_CANVAS_ID.into());
        let js_id = match options.remove("id") {
            Some(id) => format_sstr!("{id}"),
            None => canvas_id.clone(),
        };

        let option_lines = options.assignment_lines(&format_sstr!("{js_id}Opt"));

        let params = hashmap! {
            "JSID" => js_id.as_str(),
            "CENTERLAT" => lat.as_str(),
            "CENTERLON" => lng.as_str(),
            "OPTIONLINES" => option_lines.as_str(),
            "CANVASID" => canvas_id.as_str(),
        };
        let script = HBR.render("MAP_SCRIPT", &params)?;

        Ok(wrap_in_tag("div", &script_block(&script), &html_attributes))
    }

    /// Create markers on an existing map. The map canvas must already be in
    /// the page, this is not verified.
    ///
    /// Markers are numbered from 0 in input order, a marker with an invalid
    /// coordinate produces no output at all. `options` apply to every marker
    /// in the batch and default to `{map: GoogleMapCanvas}`.
    pub fn add_markers(
        &self,
        markers: &[MarkerSpec],
        options: &MapOptions,
    ) -> Result<StackString, Error> {
        let default_options = MapOptions::new().with_option("map", DEFAULT_CANVAS_ID);
        let options = options.merged_over(&default_options);
        let map_id = options
            .get("map")
            .map_or_else(|| DEFAULT_CANVAS_ID.into(), |v| format_sstr!("{v}"));

        let mut script = String::new();
        for (idx, marker) in markers.iter().enumerate() {
            if !is_valid_lat(&marker.lat) || !is_valid_lng(&marker.lng) {
                debug!(
                    "skipping marker {idx} with invalid coordinate ({}, {})",
                    marker.lat, marker.lng
                );
                continue;
            }

            let idx = format_sstr!("{idx}");
            let prefix = format_sstr!("marker{idx}Opt");
            let mut option_lines = String::new();
            option_lines.push_str(&options.assignment_lines(&prefix));
            if let Some(title) = &marker.title {
                option_lines.push_str(&format!("{prefix}.title = {title};\n"));
            }
            option_lines.push_str(&marker.options.assignment_lines(&prefix));

            let params = hashmap! {
                "IDX" => idx.as_str(),
                "LAT" => marker.lat.as_str(),
                "LON" => marker.lng.as_str(),
                "OPTIONLINES" => option_lines.as_str(),
            };
            script.push_str(&HBR.render("MARKER_SCRIPT", &params)?);

            if let Some(info_window) = &marker.info_window {
                let iw_prefix = format_sstr!("marker{idx}IWOpt");
                let iw_lines = info_window.assignment_lines(&iw_prefix);
                let params = hashmap! {
                    "IDX" => idx.as_str(),
                    "LAT" => marker.lat.as_str(),
                    "LON" => marker.lng.as_str(),
                    "OPTIONLINES" => iw_lines.as_str(),
                    "MAPID" => map_id.as_str(),
                };
                script.push_str(&HBR.render("INFO_WINDOW_SCRIPT", &params)?);
            }
        }

        Ok(script_block(&script))
    }

    /// Create a draggable marker that writes its position back into the two
    /// named form fields on every drag event.
    ///
    /// The default marker options `draggable = true` and `cursor = 'move'`
    /// are emitted first and caller overrides afterward, later assignments
    /// win when the script runs so a caller can reinstate
    /// `draggable = false`. The field values are only known in the browser,
    /// the NaN/empty fallback to the default coordinate happens at script
    /// execution time.
    pub fn add_draggable_marker(
        &self,
        lat_field: &str,
        lng_field: &str,
        canvas_id: Option<&str>,
        marker_options: &MapOptions,
    ) -> Result<StackString, Error> {
        let lat_field = dom_id(lat_field);
        let lng_field = dom_id(lng_field);
        let canvas_id = canvas_id.unwrap_or(DEFAULT_CANVAS_ID);

        let option_lines = marker_options.assignment_lines("markerOpt");

        let params = hashmap! {
            "LATFIELD" => lat_field.as_str(),
            "LNGFIELD" => lng_field.as_str(),
            "CANVASID" => canvas_id,
            "OPTIONLINES" => option_lines.as_str(),
            "DEFAULTLAT" => DEFAULT_LAT,
            "DEFAULTLON" => DEFAULT_LNG,
        };
        let script = HBR.render("DRAGGABLE_MARKER_SCRIPT", &params)?;

        Ok(script_block(&script))
    }

    /// Static map image url. Query parameter order is fixed
    /// (`center`, `zoom`, `size`, `maptype`, then one `markers` per group)
    /// and field values are passed through without url-encoding, callers
    /// must pre-encode anything that needs it.
    pub fn static_url(&self, lat: &str, lng: &str, opts: &StaticMapOpts) -> StackString {
        let lat = lat_or_default(lat);
        let lng = lng_or_default(lng);

        let markers: String = opts
            .markers
            .iter()
            .map(|group| format_sstr!("&markers={group}"))
            .join("");

        format_sstr!(
            "{url}center={lat},{lng}&zoom={zoom}&size={size}&maptype={maptype}{markers}",
            url = self.config.static_maps_url,
            zoom = opts.zoom,
            size = opts.size,
            maptype = opts.maptype,
        )
    }
}
