use itertools::Itertools;
use stack_string::StackString;
use std::fmt;

/// A single value destined for a generated javascript object literal.
///
/// `Raw` values are emitted verbatim with no quoting or escaping, which lets
/// callers pass pre-quoted strings (`"'#ff0000'"`), enum references
/// (`"google.maps.MapTypeId.HYBRID"`) or whole JSON objects. This
/// pass-through is a documented contract, callers own the quoting.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    Raw(StackString),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Raw(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(item: &str) -> Self {
        Self::Raw(item.into())
    }
}

impl From<String> for OptionValue {
    fn from(item: String) -> Self {
        Self::Raw(item.into())
    }
}

impl From<StackString> for OptionValue {
    fn from(item: StackString) -> Self {
        Self::Raw(item)
    }
}

impl From<bool> for OptionValue {
    fn from(item: bool) -> Self {
        Self::Bool(item)
    }
}

impl From<i32> for OptionValue {
    fn from(item: i32) -> Self {
        Self::Int(item.into())
    }
}

impl From<i64> for OptionValue {
    fn from(item: i64) -> Self {
        Self::Int(item)
    }
}

impl From<f64> for OptionValue {
    fn from(item: f64) -> Self {
        Self::Float(item)
    }
}

/// Insertion-ordered option mapping, the order of `with_option`/`set` calls
/// is the order the assignments appear in the generated script.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapOptions(Vec<(StackString, OptionValue)>);

impl MapOptions {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_option(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Replace the value in place when the key exists, append otherwise.
    pub fn set(&mut self, key: &str, value: impl Into<OptionValue>) {
        let value = value.into();
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| k.as_str() == key) {
            entry.1 = value;
        } else {
            self.0.push((key.into(), value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0
            .iter()
            .find_map(|(k, v)| if k.as_str() == key { Some(v) } else { None })
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.0
            .iter()
            .position(|(k, _)| k.as_str() == key)
            .map(|idx| self.0.remove(idx).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k.as_str() == key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(StackString, OptionValue)> {
        self.0.iter()
    }

    /// Merge `self` over `defaults`: keys of `defaults` keep their position
    /// (values overridden where supplied), novel keys of `self` follow in
    /// their own insertion order.
    pub fn merged_over(&self, defaults: &Self) -> Self {
        let mut merged = defaults.clone();
        for (k, v) in &self.0 {
            merged.set(k, v.clone());
        }
        merged
    }

    /// One `prefix.key = value;` line per entry, insertion order, booleans as
    /// bare `true`/`false`, everything else verbatim.
    pub fn assignment_lines(&self, prefix: &str) -> StackString {
        let mut lines = String::new();
        for (k, v) in &self.0 {
            lines.push_str(&format!("{prefix}.{k} = {v};\n"));
        }
        lines.into()
    }
}

/// Insertion-ordered html attribute mapping with the same merge semantics as
/// `MapOptions`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HtmlAttributes(Vec<(StackString, StackString)>);

impl HtmlAttributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| k.as_str() == key) {
            entry.1 = value.into();
        } else {
            self.0.push((key.into(), value.into()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&StackString> {
        self.0
            .iter()
            .find_map(|(k, v)| if k.as_str() == key { Some(v) } else { None })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k.as_str() == key)
    }

    pub fn merged_over(&self, defaults: &Self) -> Self {
        let mut merged = defaults.clone();
        for (k, v) in &self.0 {
            merged.set(k, v);
        }
        merged
    }

    /// Rendered as ` name="value"` pairs, attribute values are emitted as-is.
    pub fn render(&self) -> StackString {
        let mut out = String::new();
        for (k, v) in &self.0 {
            out.push_str(&format!(r#" {k}="{v}""#));
        }
        out.into()
    }
}

/// One marker for `GmapsHelper::add_markers`. The title and any extra
/// options are emitted verbatim, pre-quote string values.
#[derive(Clone, Debug, Default)]
pub struct MarkerSpec {
    pub lat: StackString,
    pub lng: StackString,
    pub title: Option<StackString>,
    pub info_window: Option<MapOptions>,
    pub options: MapOptions,
}

impl MarkerSpec {
    pub fn new(lat: &str, lng: &str) -> Self {
        Self {
            lat: lat.into(),
            lng: lng.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_info_window(mut self, options: MapOptions) -> Self {
        self.info_window = Some(options);
        self
    }

    pub fn with_option(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.options.set(key, value);
        self
    }
}

/// Options for `GmapsHelper::static_url`, defaults match the interactive map
/// defaults (`zoom=5`) plus the static api defaults.
#[derive(Clone, Debug)]
pub struct StaticMapOpts {
    pub zoom: i64,
    pub size: StackString,
    pub maptype: StackString,
    pub markers: Vec<StackString>,
}

impl Default for StaticMapOpts {
    fn default() -> Self {
        Self {
            zoom: 5,
            size: "256x256".into(),
            maptype: "roadmap".into(),
            markers: Vec::new(),
        }
    }
}

impl StaticMapOpts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zoom(mut self, zoom: i64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_size(mut self, size: &str) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_maptype(mut self, maptype: &str) -> Self {
        self.maptype = maptype.into();
        self
    }

    /// Append one `markers=` query parameter, the group fields are joined
    /// with `|` and are NOT url-encoded.
    pub fn with_marker_group<T: AsRef<str>>(mut self, group: &[T]) -> Self {
        let group: StackString = group.iter().map(AsRef::as_ref).join("|").into();
        self.markers.push(group);
        self
    }
}
