use tracing::debug;

use super::value::{Map, Value};

/// Deep merge `sources` into `target`, left to right, and return `target`.
///
/// Rules, per key `k` of an object source:
/// - an object `source[k]` is merged recursively into `target[k]`, which is
///   created as `{}` first when absent or falsy
/// - anything else (arrays included) replaces `target[k]`; an `Undefined`
///   value clears the key
///
/// Keys a source does not mention are left alone. A falsy `target` is
/// replaced wholesale by the next truthy source. Sources are never modified.
pub fn merge<'a, 'b, I>(target: &'a mut Value, sources: I) -> &'a mut Value
where
    I: IntoIterator<Item = &'b Value>,
{
    for source in sources {
        merge_one(target, source);
    }
    target
}

/// Owning form of [`merge`].
pub fn merged<'b, I>(mut target: Value, sources: I) -> Value
where
    I: IntoIterator<Item = &'b Value>,
{
    merge(&mut target, sources);
    target
}

fn merge_one(target: &mut Value, source: &Value) {
    if let (Value::Object(dest), Value::Object(src)) = (&mut *target, source) {
        merge_maps(dest, src);
    }

    // The replacement is a copy; the caller's source stays independent.
    if !target.is_truthy() && source.is_truthy() {
        debug!("merge target is falsy, replacing it with source");
        *target = source.clone();
    }
}

fn merge_maps(dest: &mut Map, src: &Map) {
    for (key, value) in src {
        if value.is_object() {
            let slot = dest.entry(key.clone()).or_default();
            if !slot.is_truthy() {
                *slot = Value::object();
            }
            // A truthy non-object slot absorbs nothing.
            merge_one(slot, value);
        } else {
            dest.insert(key.clone(), value.clone());
        }
    }
}
