#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::similar_names)]

pub mod gmaps_config;
pub mod gmaps_helper;
pub mod gmaps_templates;
pub mod html_assets;
pub mod latlon;
pub mod map_options;
