use anyhow::Error;
use handlebars::Handlebars;
use lazy_static::lazy_static;

fn get_templates() -> Result<Handlebars<'static>, Error> {
    let mut h = Handlebars::new();
    h.register_template_string("MAP_SCRIPT", include_str!("../templates/MAP_SCRIPT.js.hbr"))?;
    h.register_template_string(
        "MARKER_SCRIPT",
        include_str!("../templates/MARKER_SCRIPT.js.hbr"),
    )?;
    h.register_template_string(
        "INFO_WINDOW_SCRIPT",
        include_str!("../templates/INFO_WINDOW_SCRIPT.js.hbr"),
    )?;
    h.register_template_string(
        "DRAGGABLE_MARKER_SCRIPT",
        include_str!("../templates/DRAGGABLE_MARKER_SCRIPT.js.hbr"),
    )?;

    Ok(h)
}

lazy_static! {
    pub static ref HBR: Handlebars<'static> = get_templates().expect("Failed to parse templates");
}
