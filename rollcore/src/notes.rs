//! Note data model

use serde::{Deserialize, Serialize};

/// One note event in a sequence.
///
/// `end` is expected to be greater than `start`, and `velocity` indexes the
/// 128-entry velocity colormap. Neither is validated on decode; a field of
/// the wrong type fails the whole decode instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub start: f64,
    pub end: f64,
    pub pitch: u8,
    pub velocity: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_note_array() {
        let json = r#"[
            {"start": 0.0, "end": 0.5, "pitch": 60, "velocity": 64},
            {"start": 0.5, "end": 1.0, "pitch": 64, "velocity": 100}
        ]"#;
        let notes: Vec<Note> = serde_json::from_str(json).unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].pitch, 60);
        assert_eq!(notes[1].velocity, 100);
        assert_eq!(notes[1].start, 0.5);
    }

    #[test]
    fn test_decode_rejects_wrong_field_type() {
        let json = r#"[{"start": 0.0, "end": 1.0, "pitch": "C4", "velocity": 64}]"#;
        assert!(serde_json::from_str::<Vec<Note>>(json).is_err());
    }

    #[test]
    fn test_decode_rejects_out_of_range_pitch() {
        let json = r#"[{"start": 0.0, "end": 1.0, "pitch": 300, "velocity": 64}]"#;
        assert!(serde_json::from_str::<Vec<Note>>(json).is_err());
    }
}
