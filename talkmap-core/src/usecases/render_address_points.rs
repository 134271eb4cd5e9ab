use super::prelude::*;
use serde_json::Value;

pub const DEFAULT_VARIABLE_NAME: &str = "addressPoints";

/// Renders a JavaScript array declaration of `[label, lat, lng]` entries
/// that can be loaded by the map front end.
pub fn render_address_points(variable_name: &str, locations: &[ResolvedLocation]) -> String {
    let mut js = format!("var {variable_name} = [\n");
    for loc in locations {
        let label = Value::String(loc.label());
        let Coordinates {
            latitude,
            longitude,
        } = loc.pos;
        js.push_str(&format!("  [{label}, {latitude:?}, {longitude:?}],\n"));
    }
    js.push_str("];");
    js
}
