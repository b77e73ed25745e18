//! Text rendering of the board and summary
//!
//! Output mirrors the operator-facing dashboard: a title line, the
//! room/name/status grid, and the five summary lines.

use crate::board::FloorView;
use dorm_engine::Summary;

/// Render the floor title and the room grid
#[must_use]
pub fn render_board(view: &FloorView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "기숙사 {}동 {}층 현황판\n\n",
        view.selector.building(),
        view.selector.floor_id()
    ));

    let name_width = view
        .rows
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once("name".len()))
        .max()
        .unwrap_or(4);
    let room_width = view
        .rows
        .iter()
        .map(|r| r.room.chars().count())
        .chain(std::iter::once("room".len()))
        .max()
        .unwrap_or(4);

    out.push_str(&format!(
        "{:room_width$}  {:name_width$}  {}\n",
        "room", "name", "status"
    ));
    for row in &view.rows {
        out.push_str(&format!(
            "{:room_width$}  {:name_width$}  {}\n",
            row.room, row.name, row.status
        ));
    }
    out
}

/// Render the five-line floor summary
#[must_use]
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "[{}동 {}층]\n",
        summary.selector.building(),
        summary.selector.floor_id()
    ));
    out.push_str(&format!(
        "퇴소:   {} ({})\n",
        summary.checkout.len(),
        Summary::fmt_rooms(&summary.checkout)
    ));
    out.push_str(&format!(
        "외박:   {} ({})\n",
        summary.leave.len(),
        Summary::fmt_rooms(&summary.leave)
    ));
    out.push_str(&format!(
        "신규:   {} ({})\n",
        summary.new.len(),
        Summary::fmt_rooms(&summary.new)
    ));
    out.push_str(&format!(
        "이동:   +{}/-{} ({})\n",
        summary.plus,
        summary.minus,
        summary.fmt_moves()
    ));
    out.push_str(&format!("현재원: {}\n", summary.present));
    out
}
