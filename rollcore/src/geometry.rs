//! Roll geometry
//!
//! Maps a note sequence into a normalized unit viewbox: time runs left to
//! right across [0,1], pitch runs bottom to top. All shapes are emitted in
//! unit coordinates; the caller scales them onto a screen rect at paint
//! time, without preserving aspect ratio.

use crate::notes::Note;
use egui::{pos2, vec2, Rect};

/// Minimum displayed pitch span before margin, in semitones (two octaves).
const MIN_PITCH_SPAN: i32 = 24;
/// Extra semitones of headroom added above and below the widened range.
const PITCH_MARGIN: i32 = 3;
/// Pitch classes drawn as shaded rows (the black keys of an octave).
const BLACK_KEY_CLASSES: [i32; 5] = [1, 3, 6, 8, 10];

/// Separator stroke widths in unit coordinates.
const OCTAVE_LINE_WIDTH: f32 = 0.003;
const SEMITONE_LINE_WIDTH: f32 = 0.001;

/// A horizontal separator between key rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLine {
    /// y position in unit coordinates.
    pub y: f32,
    /// Stroke width in unit coordinates, thicker at octave boundaries.
    pub width: f32,
}

/// Normalized drawing geometry for one note sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RollGeometry {
    seq_start: f64,
    duration: f64,
    pitch_min: i32,
    pitch_max: i32,
}

impl RollGeometry {
    /// Build geometry for a sequence.
    ///
    /// The sequence must be sorted by start time: the first note's start is
    /// taken as the global start and the last note's end as the global end,
    /// with no validation. Returns `None` for an empty sequence.
    pub fn new(sequence: &[Note]) -> Option<Self> {
        let first = sequence.first()?;
        let last = sequence.last()?;
        let seq_start = first.start;
        let duration = last.end - seq_start;

        let mut pitch_min = sequence.iter().map(|n| n.pitch as i32).min()?;
        let mut pitch_max = sequence.iter().map(|n| n.pitch as i32).max()?;

        // Widen narrow content to two octaves, odd semitone to the low side
        let span = pitch_max - pitch_min;
        if span < MIN_PITCH_SPAN {
            let diff = MIN_PITCH_SPAN - span;
            pitch_min -= (diff + 1) / 2;
            pitch_max += diff / 2;
        }
        pitch_min -= PITCH_MARGIN;
        pitch_max += PITCH_MARGIN;

        Some(Self {
            seq_start,
            duration,
            pitch_min,
            pitch_max,
        })
    }

    /// Lowest displayed pitch, margin included.
    pub fn pitch_min(&self) -> i32 {
        self.pitch_min
    }

    /// Highest displayed pitch, margin included.
    pub fn pitch_max(&self) -> i32 {
        self.pitch_max
    }

    /// Displayed pitch span in semitones.
    pub fn pitch_span(&self) -> i32 {
        self.pitch_max - self.pitch_min
    }

    /// Height of one semitone row in unit coordinates.
    pub fn row_height(&self) -> f32 {
        1.0 / self.pitch_span() as f32
    }

    /// Map a time offset from the sequence start into [0,1].
    pub fn time_to_x(&self, t: f64) -> f32 {
        (t / self.duration) as f32
    }

    /// Top edge of the row for `pitch`; higher pitches draw higher up.
    pub fn y_for_pitch(&self, pitch: i32) -> f32 {
        1.0 - (pitch - self.pitch_min) as f32 / self.pitch_span() as f32
    }

    /// Unit rectangle for one note; the caller picks the fill from the
    /// note's velocity.
    pub fn note_rect(&self, note: &Note) -> Rect {
        let x = self.time_to_x(note.start - self.seq_start);
        let w = self.time_to_x(note.end - note.start);
        let y = self.y_for_pitch(note.pitch as i32);
        Rect::from_min_size(pos2(x, y), vec2(w, self.row_height()))
    }

    /// Full-width shaded rows for the black-key pitch classes.
    pub fn black_key_rows(&self) -> Vec<Rect> {
        let mut rows = Vec::new();
        for pitch in self.pitch_min..=self.pitch_max + 1 {
            if BLACK_KEY_CLASSES.contains(&pitch.rem_euclid(12)) {
                rows.push(Rect::from_min_size(
                    pos2(0.0, self.y_for_pitch(pitch)),
                    vec2(1.0, self.row_height()),
                ));
            }
        }
        rows
    }

    /// Horizontal separators below every key row.
    pub fn row_lines(&self) -> Vec<RowLine> {
        let mut lines = Vec::new();
        for pitch in self.pitch_min..=self.pitch_max + 1 {
            let width = if pitch.rem_euclid(12) == 0 {
                OCTAVE_LINE_WIDTH
            } else {
                SEMITONE_LINE_WIDTH
            };
            lines.push(RowLine {
                y: self.y_for_pitch(pitch) + self.row_height(),
                width,
            });
        }
        lines
    }
}
