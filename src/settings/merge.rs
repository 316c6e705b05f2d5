//! Deep merge: same keys override; arrays are replaced, never merged.

use serde_json::{Map, Value};

/// Merge `overlay` into `base`, returning a new object.
///
/// Rules, per key present in `overlay`:
/// - arrays replace the base value wholesale;
/// - object on both sides merges recursively;
/// - everything else (scalars, type mismatches, keys absent from base) takes
///   the overlay value.
///
/// Keys only present in `base` are preserved. Neither input is mutated and
/// identical inputs always produce identical output.
pub fn merge_configs(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut result = base.clone();
    for (key, overlay_val) in overlay {
        let merged = match (result.get(key), overlay_val) {
            // Array overlay wins even against an object base; checked first
            // so sequences are never element-wise merged.
            (_, Value::Array(_)) => overlay_val.clone(),
            (Some(Value::Object(base_obj)), Value::Object(overlay_obj)) => {
                Value::Object(merge_configs(base_obj, overlay_obj))
            }
            _ => overlay_val.clone(),
        };
        result.insert(key.clone(), merged);
    }
    result
}
