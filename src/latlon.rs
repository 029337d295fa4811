use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use stack_string::StackString;

/// Fallback coordinate used whenever a supplied latitude or longitude fails
/// validation (Belgrade, Serbia). Substitution is silent, no call ever fails
/// on a malformed coordinate.
pub const DEFAULT_LAT: &str = "44.788414";
pub const DEFAULT_LNG: &str = "20.469589";

lazy_static! {
    static ref LAT_REG: Regex =
        Regex::new(r"\A[+-]?(?:90(?:\.0{1,6})?|(?:[0-8]\d|\d)\.\d{1,12})\z").expect("Bad regex");
    static ref LNG_REG: Regex =
        Regex::new(r"\A[+-]?(?:180(?:\.0{1,6})?|(?:1[0-7]\d|\d\d?)\.\d{1,12})\z")
            .expect("Bad regex");
}

/// Accepts decimal latitudes in [-90, 90] with 1 to 12 fractional digits,
/// plus the bare poles `90` / `-90` (optionally `.0` with up to six zeros).
/// Whole-degree strings other than the poles are not valid.
pub fn is_valid_lat(lat: &str) -> bool {
    LAT_REG.is_match(lat)
}

/// Longitude analogue of `is_valid_lat`, range [-180, 180].
pub fn is_valid_lng(lng: &str) -> bool {
    LNG_REG.is_match(lng)
}

pub fn lat_or_default(lat: &str) -> StackString {
    if is_valid_lat(lat) {
        lat.into()
    } else {
        debug!("invalid latitude {lat}, substituting {DEFAULT_LAT}");
        DEFAULT_LAT.into()
    }
}

pub fn lng_or_default(lng: &str) -> StackString {
    if is_valid_lng(lng) {
        lng.into()
    } else {
        debug!("invalid longitude {lng}, substituting {DEFAULT_LNG}");
        DEFAULT_LNG.into()
    }
}
