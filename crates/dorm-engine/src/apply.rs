//! Transition application
//!
//! Pure function of (table, room, transition, name, target) → new table.
//! Only the rows named by the transition change; everything else is cloned
//! byte-identical, order preserved.

use crate::transition::Transition;
use dorm_table::{status, RoomTable};

/// Rejected transition request
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    /// Selected room absent from the current table snapshot
    #[error("room not found: '{0}'")]
    RoomNotFound(String),

    /// Move requested without a target room
    #[error("move from '{0}' requires a target room")]
    MissingTarget(String),

    /// Move target absent from the current table snapshot
    #[error("move target not found: '{0}'")]
    TargetNotFound(String),

    /// Move target equals the origin room
    #[error("cannot move room '{0}' onto itself")]
    TargetIsOrigin(String),
}

/// Apply one operator transition to the table
///
/// # Preconditions
/// `selected_room` must exist in `table`; for [`Transition::Move`] a target
/// room must be given, exist, and differ from the origin. Duplicate room
/// numbers resolve to the first occurrence, for both origin and target.
///
/// # Semantics
/// Every transition first snapshots the origin's pre-mutation room/status
/// into `prev_room`/`prev_status`, then branches:
///
/// - `Reset` forces `status`, `new_room`, `prev_status`, `prev_room` back to
///   empty (overriding the snapshot); `name` and `room` stay. Idempotent.
/// - `NewCheckIn`/`OvernightLeave` write the name and their status token and
///   clear `new_room`.
/// - `CheckOut` clears the name, writes `퇴소`, clears `new_room`.
/// - `Move` vacates the origin (`name`/`status` cleared; `new_room` is left
///   exactly as it was, so a stale destination marker survives) and stamps
///   the destination with the occupant, the `이동` token, the origin room as
///   `prev_room`, the origin's old status as `prev_status`, and the target as
///   `new_room`.
///
/// # Returns
/// A new table; the input is untouched.
pub fn apply_transition(
    table: &RoomTable,
    selected_room: &str,
    transition: Transition,
    new_name: &str,
    target_room: Option<&str>,
) -> Result<RoomTable, TransitionError> {
    let idx = table
        .position(selected_room)
        .ok_or_else(|| TransitionError::RoomNotFound(selected_room.to_string()))?;

    // Validate the move target before touching anything.
    let dest_idx = if transition == Transition::Move {
        let target = target_room
            .filter(|t| !t.is_empty())
            .ok_or_else(|| TransitionError::MissingTarget(selected_room.to_string()))?;
        if target == selected_room {
            return Err(TransitionError::TargetIsOrigin(selected_room.to_string()));
        }
        Some((
            table
                .position(target)
                .ok_or_else(|| TransitionError::TargetNotFound(target.to_string()))?,
            target,
        ))
    } else {
        None
    };

    let old_status = table.rows()[idx].status.clone();
    let old_room = table.rows()[idx].room.clone();

    let mut next = table.clone();
    {
        let origin = &mut next.rows_mut()[idx];
        // Uniform pre-capture, applied before every branch.
        origin.prev_status = old_status.clone();
        origin.prev_room = old_room;

        match transition {
            Transition::Reset => {
                origin.status.clear();
                origin.new_room.clear();
                origin.prev_status.clear();
                origin.prev_room.clear();
            }
            Transition::NewCheckIn | Transition::OvernightLeave => {
                origin.name = new_name.to_string();
                origin.status = transition.token().to_string();
                origin.new_room.clear();
            }
            Transition::CheckOut => {
                origin.name.clear();
                origin.status = status::CHECKOUT.to_string();
                origin.new_room.clear();
            }
            Transition::Move => {
                origin.name.clear();
                origin.status.clear();
                // Origin's new_room is intentionally not written here.
            }
        }
    }

    if let Some((di, target)) = dest_idx {
        let dest = &mut next.rows_mut()[di];
        dest.name = new_name.to_string();
        dest.status = status::MOVED.to_string();
        dest.prev_room = selected_room.to_string();
        dest.prev_status = old_status;
        dest.new_room = target.to_string();
    }

    Ok(next)
}
