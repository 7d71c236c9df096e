//! Printable output for a finalized map.

use dynmap_dna::{MapTag, RegistrarCall};
use serde_json::Value;

/// Script path of the rendering runtime bundle.
pub const RUNTIME_BUNDLE: &str = "/dynamic-map/dynamic-map.js";

/// The map element, followed by one script element per registrar request
/// when `with_scripts` is set.
pub fn render_output(tag: &MapTag, calls: &[RegistrarCall], with_scripts: bool) -> String {
    let mut lines = vec![tag.to_html()];
    if with_scripts {
        lines.extend(calls.iter().map(script_element));
    }
    lines.join("\n")
}

fn script_element(call: &RegistrarCall) -> String {
    match call {
        RegistrarCall::PreloadLibrary => format!(r#"<script src="{RUNTIME_BUNDLE}"></script>"#),
        RegistrarCall::RegisterInit(map_id) => {
            let id = Value::String(map_id.to_string());
            format!(
                "<script>window.addEventListener('load', function () {{ dynamicMap.init({id}); }});</script>"
            )
        }
    }
}
