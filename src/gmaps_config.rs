use anyhow::{format_err, Error};
use stack_string::{format_sstr, StackString};
use std::{env::var, ops::Deref, path::Path, sync::Arc};

/// `GmapsConfig` holds the map api urls and the optional api key, which can
/// be set either through environment variables or a config.env file, see the
/// dotenv crate for more information about the config file format.
#[derive(Default, Debug)]
pub struct GmapsConfigInner {
    pub maps_js_url: StackString,
    pub static_maps_url: StackString,
    pub maps_api_key: StackString,
}

macro_rules! set_config_from_env {
    ($s:ident, $id:ident) => {
        if let Ok($id) = var(&stringify!($id).to_uppercase()) {
            $s.$id = $id.into()
        }
    };
}

impl GmapsConfigInner {
    /// The urls have natural default values, which we set in the new()
    /// method.
    pub fn new() -> Self {
        Self {
            maps_js_url: "http://maps.google.com/maps/api/js?sensor=false".into(),
            static_maps_url: "http://maps.google.com/maps/api/staticmap?sensor=false&".into(),
            ..Self::default()
        }
    }

    /// Each variable maps to an environment variable, if the variable exists,
    /// use it.
    pub fn from_env(mut self) -> Self {
        set_config_from_env!(self, maps_js_url);
        set_config_from_env!(self, static_maps_url);
        set_config_from_env!(self, maps_api_key);
        self
    }

    /// Loader script url, with the api key appended when one is configured.
    pub fn loader_url(&self) -> StackString {
        if self.maps_api_key.is_empty() {
            self.maps_js_url.clone()
        } else {
            format_sstr!("{}&key={}", self.maps_js_url, self.maps_api_key)
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct GmapsConfig(Arc<GmapsConfigInner>);

impl GmapsConfig {
    pub fn new() -> Self {
        Self(Arc::new(GmapsConfigInner::new()))
    }

    /// Pull configuration from a file if it exists,
    /// first look for a config.env file in the current directory,
    /// then try `${HOME}/.config/gmaps_helper/config.env`,
    /// if that doesn't exist fall back on the default behaviour of dotenv.
    pub fn get_config(fname: Option<&str>) -> Result<Self, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| format_err!("No CONFIG directory"))?;
        let default_fname = config_dir.join("gmaps_helper").join("config.env");

        let env_file = match fname.map(Path::new) {
            Some(fname) if fname.exists() => fname,
            _ => &default_fname,
        };

        dotenv::dotenv().ok();

        if env_file.exists() {
            dotenv::from_path(env_file).ok();
        } else if Path::new("config.env").exists() {
            dotenv::from_filename("config.env").ok();
        }

        let conf = GmapsConfigInner::new().from_env();

        Ok(Self(Arc::new(conf)))
    }
}

impl Deref for GmapsConfig {
    type Target = GmapsConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
