use polars::prelude::*;
use serde::{Deserialize, Serialize};

const LEFT_ROW: &str = "__left_row";

/// What to do when the right side of a join repeats a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// Emit one output row per matching right row.
    #[default]
    FanOut,
    /// Fail before joining.
    Reject,
}

impl std::str::FromStr for DuplicateKeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fan_out" | "fanout" => Ok(Self::FanOut),
            "reject" => Ok(Self::Reject),
            _ => Err(format!(
                "Invalid duplicate key policy: {}. Must be 'fan_out' or 'reject'",
                s
            )),
        }
    }
}

/// Number of non-null keys that appear more than once
fn duplicate_key_count(df: &DataFrame, key_col: &str) -> PolarsResult<usize> {
    let keys = df.column(key_col)?.drop_nulls();
    Ok(keys.len() - keys.n_unique()?)
}

/// Left-outer join of `left` and `right` on `key_col`.
///
/// Every left row is kept, in its original order. Right rows without a
/// matching left key are dropped; left rows without a match get nulls in
/// the right-side columns. Null keys never match.
pub fn left_join_on_bucket(
    left: &DataFrame,
    right: &DataFrame,
    key_col: &str,
    policy: DuplicateKeyPolicy,
) -> PolarsResult<DataFrame> {
    if policy == DuplicateKeyPolicy::Reject {
        let duplicates = duplicate_key_count(right, key_col)?;
        if duplicates > 0 {
            return Err(PolarsError::ComputeError(
                format!(
                    "Right side of join has {} duplicate value(s) in key column '{}'",
                    duplicates, key_col
                )
                .into(),
            ));
        }
    }

    let joined = left
        .clone()
        .lazy()
        .with_row_index(LEFT_ROW, None)
        .join(
            right.clone().lazy(),
            [col(key_col)],
            [col(key_col)],
            JoinArgs::new(JoinType::Left),
        )
        .sort(
            [LEFT_ROW],
            SortMultipleOptions::default().with_maintain_order(true),
        )
        .collect()?;

    joined.drop(LEFT_ROW)
}
