use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayMergeStrategy {
    /// Concatenate base elements followed by overlay elements
    CombineAll,
    /// Discard the base array and keep the overlay array verbatim
    OverwriteBaseArray,
    /// Reconcile arrays element-by-element at matching positions
    MergeByIndex,
    /// Reserved: match elements by a shared `name` field (unimplemented,
    /// currently behaves as `CombineAll`)
    MergeByObjectName,
}

impl Default for ArrayMergeStrategy {
    fn default() -> Self {
        Self::CombineAll
    }
}

impl ArrayMergeStrategy {
    /// Parse a strategy selector from raw invocation input.
    ///
    /// Unrecognized or empty input falls back to the default rather than
    /// failing; the caller supplied a merge request and the contract is to
    /// honor it with the default array behavior.
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        match input {
            "CombineAll" | "" => Self::CombineAll,
            "OverwriteBaseArray" => Self::OverwriteBaseArray,
            "MergeByIndex" => Self::MergeByIndex,
            "MergeByObjectName" => Self::MergeByObjectName,
            other => {
                warn!("Unrecognized array-merge-strategy \"{other}\", using CombineAll");
                Self::CombineAll
            },
        }
    }
}
