//! Display ordering and the pairwise `sortOrder` swap.
//!
//! Rows are ordered by `sort_order` ascending. Moving a row up or down
//! exchanges its `sort_order` with the adjacent row's; the plan produced
//! here is executed either as two independent updates or as one
//! transactional reorder request.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, SortOrder};

/// Anything that has an identity and a position in the list.
pub trait Ordered {
    fn id(&self) -> DbId;
    fn sort_order(&self) -> SortOrder;
}

/// Which neighbour to swap with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Assign `sort_order` to the row identified by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOrderMove {
    pub id: DbId,
    pub sort_order: SortOrder,
}

/// The two writes needed to swap a row with its neighbour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPlan {
    /// Current index of the row being moved.
    pub index: usize,
    /// Current index of the neighbour it trades places with.
    pub sibling_index: usize,
    /// `[moved row, neighbour]`, each taking the other's old `sort_order`.
    pub moves: [SortOrderMove; 2],
}

/// Sort order for a newly appended row: one past the current maximum,
/// or `0` for an empty list.
pub fn next_sort_order<I>(orders: I) -> SortOrder
where
    I: IntoIterator<Item = SortOrder>,
{
    orders
        .into_iter()
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

/// Stable sort by `sort_order`; rows sharing a value keep their relative order.
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(Ordered::sort_order);
}

/// Plan the swap of row `id` with its neighbour in `direction`.
///
/// Returns `None` when the row is not in `items` or has no neighbour on
/// that side (moving the first row up, or the last row down).
pub fn plan_swap<T: Ordered>(items: &[T], id: DbId, direction: Direction) -> Option<SwapPlan> {
    let index = items.iter().position(|item| item.id() == id)?;
    let sibling_index = match direction {
        Direction::Up => index.checked_sub(1)?,
        Direction::Down => index + 1,
    };
    let moved = items.get(index)?;
    let sibling = items.get(sibling_index)?;

    Some(SwapPlan {
        index,
        sibling_index,
        moves: [
            SortOrderMove {
                id: moved.id(),
                sort_order: sibling.sort_order(),
            },
            SortOrderMove {
                id: sibling.id(),
                sort_order: moved.sort_order(),
            },
        ],
    })
}

/// A reorder batch must name at least one row and each row at most once.
pub fn validate_moves(moves: &[SortOrderMove]) -> Result<(), CoreError> {
    if moves.is_empty() {
        return Err(CoreError::Validation(
            "moves must not be empty".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(moves.len());
    for mv in moves {
        if !seen.insert(mv.id) {
            return Err(CoreError::Validation(format!(
                "Workout {} appears more than once in moves",
                mv.id
            )));
        }
    }
    Ok(())
}
