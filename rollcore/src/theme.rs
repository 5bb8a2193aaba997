//! Gallery palette and visuals
//!
//! The roll colors come from the pianoroll.ai brand ramp: teal (#5DB5D5)
//! down to deep sea (#154151) for the background, and a muted teal-to-ink
//! ramp for the notes, indexed by velocity.

use crate::gradient::{gradient_table, Rgb};
use egui::Color32;

/// Number of velocity levels; one colormap entry each.
pub const VELOCITY_LEVELS: usize = 128;

/// Opacity of the shaded black-key rows (0.666).
const ROW_ALPHA: u8 = 170;

/// Colormap entry used for the black-key row shade.
const ROW_SHADE_INDEX: usize = 12;

/// Fixed palette for roll rendering.
pub struct RollColors;

impl RollColors {
    /// Brand teal (#5DB5D5), background ramp start.
    pub const BACKGROUND_START: Rgb = Rgb::new(93, 181, 213);
    /// Deep sea (#154151), background ramp end.
    pub const BACKGROUND_END: Rgb = Rgb::new(21, 65, 81);
    /// Note ramp start, velocity 0.
    pub const NOTE_START: Rgb = Rgb::new(66, 166, 161);
    /// Note ramp end, velocity 127.
    pub const NOTE_END: Rgb = Rgb::new(28, 28, 26);

    /// Card surface behind the key rows.
    pub const SURFACE: Color32 = Color32::from_rgb(245, 248, 248);
    /// Key separator lines and card outlines.
    pub const OUTLINE: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Selection rectangle fill once a drag has been released.
pub fn selection_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 255, 51)
}

/// Selection rectangle fill while a drag is in progress.
pub fn selection_active_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 255, 77)
}

/// Selection rectangle stroke color.
pub fn selection_stroke() -> Color32 {
    Color32::BLUE
}

/// Precomputed colormaps, shared by every card.
pub struct Colormaps {
    notes: Vec<Color32>,
    background: Vec<Color32>,
}

impl Colormaps {
    pub fn new() -> Self {
        Self {
            notes: gradient_table(RollColors::NOTE_START, RollColors::NOTE_END, VELOCITY_LEVELS),
            background: gradient_table(
                RollColors::BACKGROUND_START,
                RollColors::BACKGROUND_END,
                VELOCITY_LEVELS,
            ),
        }
    }

    /// Fill for a note rectangle. Velocities beyond the table clamp to the
    /// last entry; 0–127 is the input contract.
    pub fn note_fill(&self, velocity: u8) -> Color32 {
        self.notes[(velocity as usize).min(self.notes.len() - 1)]
    }

    /// Translucent shade for the black-key rows.
    pub fn row_fill(&self) -> Color32 {
        let c = self.background[ROW_SHADE_INDEX];
        Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), ROW_ALPHA)
    }
}

impl Default for Colormaps {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the gallery visuals to an egui context: dark panels in the brand
/// palette so the teal cards sit on a deep background.
pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = Color32::from_rgb(21, 65, 81);
    visuals.window_fill = Color32::from_rgb(21, 65, 81);
    visuals.extreme_bg_color = Color32::from_rgb(13, 40, 50);
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_fill_clamps_out_of_range_velocity() {
        let maps = Colormaps::new();
        assert_eq!(maps.note_fill(200), maps.note_fill(127));
        assert_ne!(maps.note_fill(0), maps.note_fill(127));
    }

    #[test]
    fn test_note_fill_endpoints_match_ramp() {
        let maps = Colormaps::new();
        assert_eq!(maps.note_fill(0), Color32::from_rgb(66, 166, 161));
        assert_eq!(maps.note_fill(127), Color32::from_rgb(28, 28, 26));
    }

    #[test]
    fn test_row_fill_is_translucent() {
        let maps = Colormaps::new();
        assert_eq!(maps.row_fill().a(), 170);
    }
}
