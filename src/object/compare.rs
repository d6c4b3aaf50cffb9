use super::value::Value;

/// Structural equality over plain data trees.
///
/// Containers are compared through their key view: arrays expose the index
/// keys `"0"`, `"1"`, ..., so an array and an object with the same index keys
/// and values compare equal. Scalars use strict equality, which means
/// `NaN` never equals anything and there is no coercion between types.
///
/// This differs from the derived `PartialEq` on [`Value`], which never equates
/// an array with an object.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (a, b) if a.is_nullish() || b.is_nullish() => false,
        (a, b) if a.is_container() && b.is_container() => containers_equal(a, b),
        (a, b) => strict_equal(a, b),
    }
}

fn containers_equal(a: &Value, b: &Value) -> bool {
    if key_count(a) != key_count(b) {
        return false;
    }

    keys(a).into_iter().all(|key| {
        let left = a.get(&key);
        let right = b.get(&key);
        if left.is_container() {
            deep_equal(left, right)
        } else {
            strict_equal(left, right)
        }
    })
}

fn strict_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        _ => false,
    }
}

fn key_count(v: &Value) -> usize {
    match v {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        _ => 0,
    }
}

fn keys(v: &Value) -> Vec<String> {
    match v {
        Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
        Value::Object(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}
