//! Grid positions for every element
//!
//! Elements with a group sit at (period, group). Groupless elements go into an
//! overflow block below the main grid: one row per distinct period, separated
//! from the grid by a spacer row, filling columns left to right from column 3.

use std::collections::{BTreeMap, BTreeSet};

use periodic_types::ElementRecord;

/// First column of the overflow block
const OVERFLOW_FIRST_COLUMN: u32 = 3;

/// Upper bound on background grid rows. Records with a larger period keep
/// their row but the grid behind them stops here.
pub const MAX_GRID_ROWS: u32 = 32;

/// Where a tile sits in the CSS grid (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlacement {
    pub row: u32,
    pub column: u32,
    /// Placed in the overflow block rather than at its (period, group)
    pub overflow: bool,
}

pub(super) struct Layout {
    pub max_period: u32,
    pub total_rows: u32,
    /// One placement per element, same order as the dataset
    pub placements: Vec<GridPlacement>,
}

impl Layout {
    pub fn compute(elements: &[ElementRecord]) -> Self {
        let raw_max = elements.iter().map(|e| e.period).max().unwrap_or(0);
        let max_period = raw_max.min(MAX_GRID_ROWS);
        if raw_max > max_period {
            tracing::warn!(period = raw_max, limit = MAX_GRID_ROWS, "Period exceeds grid bound");
        }
        let first_overflow_row = max_period.saturating_add(2);

        // Overflow rows in ascending period order, after one spacer row
        let overflow_rows: BTreeMap<u32, u32> = elements
            .iter()
            .filter(|e| !e.has_group())
            .map(|e| e.period)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(rank, period)| (period, first_overflow_row.saturating_add(rank as u32)))
            .collect();

        let mut next_column: BTreeMap<u32, u32> = BTreeMap::new();
        let placements = elements
            .iter()
            .map(|element| match element.group {
                Some(group) => GridPlacement {
                    row: element.period,
                    column: u32::from(group),
                    overflow: false,
                },
                None => {
                    let column = next_column
                        .entry(element.period)
                        .or_insert(OVERFLOW_FIRST_COLUMN);
                    let placement = GridPlacement {
                        row: overflow_rows
                            .get(&element.period)
                            .copied()
                            .unwrap_or(first_overflow_row),
                        column: *column,
                        overflow: true,
                    };
                    *column = column.saturating_add(1);
                    placement
                }
            })
            .collect();

        let total_rows = overflow_rows.values().max().copied().unwrap_or(max_period);

        Self {
            max_period,
            total_rows,
            placements,
        }
    }
}
