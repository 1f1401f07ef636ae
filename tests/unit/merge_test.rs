use json_file_merge::{merge, ArrayMergeStrategy};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case(ArrayMergeStrategy::CombineAll)]
    #[case(ArrayMergeStrategy::OverwriteBaseArray)]
    #[case(ArrayMergeStrategy::MergeByIndex)]
    #[case(ArrayMergeStrategy::MergeByObjectName)]
    fn test_unaffected_nested_data_round_trips(#[case] strategy: ArrayMergeStrategy) {
        let base = json!({
            "kept": {
                "deep": {
                    "string": "s",
                    "number": 1.5,
                    "boolean": false,
                    "null": null,
                    "list": [1, [2, 3], {"inner": true}]
                }
            },
            "shared": {"base_only": 1}
        });
        let overlay = json!({
            "added": {"deep": ["untouched", {"by": "merge"}]},
            "shared": {"overlay_only": 2}
        });

        let result = merge(&base, &overlay, strategy);

        assert_eq!(result.get("kept"), base.get("kept"));
        assert_eq!(result.get("added"), overlay.get("added"));
        assert_eq!(
            result.get("shared"),
            Some(&json!({"base_only": 1, "overlay_only": 2}))
        );
    }

    #[rstest]
    #[case(ArrayMergeStrategy::CombineAll, json!([1, 2, 3, 4]))]
    #[case(ArrayMergeStrategy::MergeByObjectName, json!([1, 2, 3, 4]))]
    #[case(ArrayMergeStrategy::OverwriteBaseArray, json!([3, 4]))]
    fn test_array_strategies_at_depth(
        #[case] strategy: ArrayMergeStrategy,
        #[case] expected: serde_json::Value,
    ) {
        let base = json!({"a": {"b": {"c": [1, 2]}}});
        let overlay = json!({"a": {"b": {"c": [3, 4]}}});

        let result = merge(&base, &overlay, strategy);

        assert_eq!(result, json!({"a": {"b": {"c": expected}}}));
    }

    #[test]
    fn test_merge_by_index_inside_nested_objects() {
        let base = json!({"config": {"servers": [
            {"host": "a", "port": 1},
            {"host": "b", "port": 2}
        ]}});
        let overlay = json!({"config": {"servers": [
            {"port": 10}
        ]}});

        let result = merge(&base, &overlay, ArrayMergeStrategy::MergeByIndex);

        assert_eq!(
            result,
            json!({"config": {"servers": [
                {"host": "a", "port": 10},
                {"host": "b", "port": 2}
            ]}})
        );
    }

    #[test]
    fn test_merge_by_index_base_longer_than_overlay() {
        let base = json!(["one", "two", "three"]);
        let overlay = json!(["one"]);

        let result = merge(&base, &overlay, ArrayMergeStrategy::MergeByIndex);

        assert_eq!(result, json!(["one", "two", "three"]));
    }

    #[test]
    fn test_merge_by_index_nested_arrays_merge_positionally() {
        let base = json!([[1, 2], [3]]);
        let overlay = json!([[1, 9]]);

        let result = merge(&base, &overlay, ArrayMergeStrategy::MergeByIndex);

        // Inner arrays at index 0 merge by index themselves: 1 is already
        // present, 9 is appended.
        assert_eq!(result, json!([[1, 2, 9], [3]]));
    }

    #[test]
    fn test_empty_object_inputs() {
        let populated = json!({"a": 1, "b": [true]});

        assert_eq!(
            merge(&json!({}), &populated, ArrayMergeStrategy::default()),
            populated
        );
        assert_eq!(
            merge(&populated, &json!({}), ArrayMergeStrategy::default()),
            populated
        );
    }

    #[test]
    fn test_empty_array_inputs() {
        assert_eq!(merge(&json!([]), &json!([1]), ArrayMergeStrategy::CombineAll), json!([1]));
        assert_eq!(merge(&json!([1]), &json!([]), ArrayMergeStrategy::CombineAll), json!([1]));
        assert_eq!(
            merge(&json!([1]), &json!([]), ArrayMergeStrategy::OverwriteBaseArray),
            json!([])
        );
        assert_eq!(
            merge(&json!([1]), &json!([]), ArrayMergeStrategy::MergeByIndex),
            json!([1])
        );
    }

    #[test]
    fn test_array_replaces_object_on_mismatch() {
        let base = json!({"field": {"was": "object"}});
        let overlay = json!({"field": [1, 2]});

        let result = merge(&base, &overlay, ArrayMergeStrategy::default());

        assert_eq!(result, json!({"field": [1, 2]}));
    }

    #[test]
    fn test_object_replaces_array_on_mismatch() {
        let base = json!({"field": [1, 2]});
        let overlay = json!({"field": {"now": "object"}});

        let result = merge(&base, &overlay, ArrayMergeStrategy::default());

        assert_eq!(result, json!({"field": {"now": "object"}}));
    }

    #[test]
    fn test_merge_is_associative_under_combine_all() {
        let a = json!({"x": 1, "list": [1]});
        let b = json!({"y": 2, "list": [2]});
        let c = json!({"z": 3, "list": [3]});
        let strategy = ArrayMergeStrategy::CombineAll;

        let left = merge(&merge(&a, &b, strategy), &c, strategy);
        let right = merge(&a, &merge(&b, &c, strategy), strategy);

        assert_eq!(left, right);
    }
}
