#![allow(clippy::self_named_module_files)]

use serde_json::{Map, Value};

pub mod strategy;

pub use strategy::ArrayMergeStrategy;

/// Recursively merges `overlay` into `base`, producing a new value.
///
/// Both objects produce the union of their keys: keys only in `base` keep
/// base's value, keys only in `overlay` keep overlay's value, and keys in
/// both are merged recursively. The output preserves base's key order with
/// overlay-only keys appended in overlay's order. Both arrays dispatch to
/// the selected [`ArrayMergeStrategy`]. Any other pairing (scalars, nulls,
/// or mismatched types) resolves by replacement: overlay wins.
///
/// The inputs are never mutated; every branch copied into the result is
/// cloned, so callers may reuse both trees after the call.
#[must_use]
pub fn merge(base: &Value, overlay: &Value, strategy: ArrayMergeStrategy) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            Value::Object(merge_objects(base_map, overlay_map, strategy))
        },
        (Value::Array(base_items), Value::Array(overlay_items)) => {
            Value::Array(merge_arrays(base_items, overlay_items, strategy))
        },
        (_, overlay_value) => overlay_value.clone(),
    }
}

fn merge_objects(
    base: &Map<String, Value>,
    overlay: &Map<String, Value>,
    strategy: ArrayMergeStrategy,
) -> Map<String, Value> {
    let mut merged = Map::new();

    for (key, base_value) in base {
        let value = match overlay.get(key) {
            Some(overlay_value) => merge(base_value, overlay_value, strategy),
            None => base_value.clone(),
        };
        merged.insert(key.clone(), value);
    }

    for (key, overlay_value) in overlay {
        if !base.contains_key(key) {
            merged.insert(key.clone(), overlay_value.clone());
        }
    }

    merged
}

fn merge_arrays(base: &[Value], overlay: &[Value], strategy: ArrayMergeStrategy) -> Vec<Value> {
    match strategy {
        // TODO: give MergeByObjectName its own arm once the semantics for
        // matching elements by their "name" field are settled; until then it
        // behaves as CombineAll.
        ArrayMergeStrategy::CombineAll | ArrayMergeStrategy::MergeByObjectName => {
            base.iter().chain(overlay).cloned().collect()
        },
        ArrayMergeStrategy::OverwriteBaseArray => overlay.to_vec(),
        ArrayMergeStrategy::MergeByIndex => merge_arrays_by_index(base, overlay, strategy),
    }
}

/// Positional array merge.
///
/// Overlay elements past the end of the base array are appended. An
/// object or array overlay element merges recursively with the base
/// element at the same index. A scalar overlay element at an occupied
/// index never overwrites: it is appended as a trailing element unless an
/// equal value already exists somewhere in the base array, in which case
/// it is skipped. Base elements beyond the overlay's length survive
/// unchanged.
fn merge_arrays_by_index(
    base: &[Value],
    overlay: &[Value],
    strategy: ArrayMergeStrategy,
) -> Vec<Value> {
    let mut merged: Vec<Value> = base.to_vec();

    for (index, overlay_item) in overlay.iter().enumerate() {
        match base.get(index) {
            None => merged.push(overlay_item.clone()),
            Some(base_item) if overlay_item.is_object() || overlay_item.is_array() => {
                merged[index] = merge(base_item, overlay_item, strategy);
            },
            Some(_) => {
                if !base.contains(overlay_item) {
                    merged.push(overlay_item.clone());
                }
            },
        }
    }

    merged
}
