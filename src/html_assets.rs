use stack_string::{format_sstr, StackString};
use std::collections::HashSet;

use crate::map_options::HtmlAttributes;

/// Page-level script registry. The map api loader must appear exactly once
/// per page no matter how many maps are rendered, the page renderer owns the
/// "already injected" state behind this seam.
pub trait PageAssets {
    fn has_script_been_added(&self, url: &str) -> bool;
    fn register_script(&mut self, url: &str, markup: StackString);
}

/// In-memory `PageAssets` implementation, suitable for a single page render.
#[derive(Default, Debug)]
pub struct PageAssetRegistry {
    seen: HashSet<StackString>,
    scripts: Vec<StackString>,
}

impl PageAssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered markup in registration order, the page layout emits these
    /// into the document head.
    pub fn scripts(&self) -> &[StackString] {
        &self.scripts
    }
}

impl PageAssets for PageAssetRegistry {
    fn has_script_been_added(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    fn register_script(&mut self, url: &str, markup: StackString) {
        if self.seen.insert(url.into()) {
            self.scripts.push(markup);
        }
    }
}

/// Resolve a logical form-field name such as `Location.map_lat` to its
/// rendered dom id `LocationMapLat`.
pub fn dom_id(field: &str) -> StackString {
    let mut id = String::new();
    for part in field.split(|c| c == '.' || c == '_') {
        if part.is_empty() {
            continue;
        }
        id.push_str(&part[0..1].to_uppercase());
        id.push_str(&part[1..]);
    }
    id.into()
}

pub fn wrap_in_tag(tag: &str, inner: &str, attributes: &HtmlAttributes) -> StackString {
    format_sstr!("<{tag}{attrs}>{inner}</{tag}>", attrs = attributes.render())
}

/// Wrap generated javascript the way the page renderer does, cdata-guarded
/// script element.
pub fn script_block(code: &str) -> StackString {
    format_sstr!("<script type=\"text/javascript\">\n//<![CDATA[\n{code}\n//]]>\n</script>")
}

pub fn script_link(url: &str) -> StackString {
    format_sstr!(r#"<script type="text/javascript" src="{url}"></script>"#)
}
