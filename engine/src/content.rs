use std::collections::HashMap;

pub fn builtin_presets() -> HashMap<&'static str, &'static str> {
    HashMap::from([("basic", include_str!("../content/presets/basic.json"))])
}
