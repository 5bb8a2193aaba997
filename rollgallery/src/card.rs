//! Roll card painting and interaction
//!
//! Each card paints its geometry into an allocated rect through a unit →
//! screen transform (no aspect-ratio preservation) and runs the
//! drag-to-select interaction on the same surface.

use crate::gallery::RollCard;
use egui::emath::RectTransform;
use egui::{pos2, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2};
use rollcore::theme::{self, Colormaps, RollColors};

/// Card footprint in the gallery grid.
pub const GRID_CARD_SIZE: Vec2 = Vec2::new(240.0, 150.0);
/// Card footprint in the side list.
pub const LIST_CARD_SIZE: Vec2 = Vec2::new(200.0, 110.0);

/// Draw one card: caption above, roll surface below. Returns the surface
/// response so the caller can react to clicks.
pub fn roll_card(
    ui: &mut Ui,
    card: &mut RollCard,
    size: Vec2,
    colormaps: &Colormaps,
) -> Response {
    ui.vertical(|ui| {
        ui.label(format!("piano roll {}", card.id + 1));
        roll_surface(ui, card, size, colormaps)
    })
    .inner
}

/// Paint the roll and run the selection drag.
fn roll_surface(ui: &mut Ui, card: &mut RollCard, size: Vec2, colormaps: &Colormaps) -> Response {
    let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
    let rect = response.rect;
    let to_screen = RectTransform::from_to(Rect::from_min_max(Pos2::ZERO, pos2(1.0, 1.0)), rect);

    painter.rect_filled(rect, 0.0, RollColors::SURFACE);

    for row in card.geometry.black_key_rows() {
        painter.rect_filled(to_screen.transform_rect(row), 0.0, colormaps.row_fill());
    }
    for line in card.geometry.row_lines() {
        let y = to_screen.transform_pos(pos2(0.0, line.y)).y;
        painter.hline(
            rect.x_range(),
            y,
            Stroke::new(line.width * rect.height(), RollColors::OUTLINE),
        );
    }
    for note in &card.notes {
        painter.rect_filled(
            to_screen.transform_rect(card.geometry.note_rect(note)),
            0.0,
            colormaps.note_fill(note.velocity),
        );
    }

    // egui folds mouse and touch into the same pointer events, so one set
    // of handlers covers both
    if let Some(pos) = response.interact_pointer_pos() {
        let x = (pos.x - rect.left()) / rect.width();
        if response.drag_started() {
            card.selection.press(x);
        } else if response.dragged() {
            card.selection.drag_to(x);
        }
    }
    if response.drag_stopped() {
        card.selection.release();
    }

    if let Some(sel) = card.selection.visible() {
        let (lo, hi) = sel.bounds();
        let sel_rect = to_screen.transform_rect(Rect::from_min_max(pos2(lo, 0.0), pos2(hi, 1.0)));
        let fill = if card.selection.is_selecting() {
            theme::selection_active_fill()
        } else {
            theme::selection_fill()
        };
        painter.rect_filled(sel_rect, 0.0, fill);
        painter.rect_stroke(sel_rect, 0.0, Stroke::new(2.0, theme::selection_stroke()));
    }

    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, RollColors::OUTLINE));
    response
}
