//! Gallery view-model
//!
//! Slices the fetched note list into fixed-size windows and tracks where
//! each card lives: the gallery grid, the focused main view, or the side
//! list. Rendering is derived entirely from these slots, so the focus
//! layout never depends on the order cards were moved around in.

use rollcore::{Note, RollGeometry, SelectionTool};

/// Cards generated per batch.
pub const ROLLS_PER_BATCH: usize = 36;
/// Notes consumed by each card.
pub const NOTES_PER_ROLL: usize = 10;

/// Where a card currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    /// In the gallery grid, before any focus exists.
    Grid,
    /// Expanded in the main view. At most one card at a time.
    Focused,
    /// In the side list next to the focused card.
    Listed,
}

/// One roll card: a window of notes plus its drawing state.
pub struct RollCard {
    pub id: usize,
    pub notes: Vec<Note>,
    pub geometry: RollGeometry,
    pub selection: SelectionTool,
    pub slot: CardSlot,
}

/// The fetched notes and the cards cut from them.
pub struct Gallery {
    notes: Vec<Note>,
    cards: Vec<RollCard>,
    /// Index of the first note not yet consumed by a card.
    offset: usize,
}

impl Gallery {
    /// Wrap a fetched note list and cut the first batch of cards.
    pub fn new(notes: Vec<Note>) -> Self {
        let mut gallery = Self {
            notes,
            cards: Vec::new(),
            offset: 0,
        };
        gallery.generate_batch();
        gallery
    }

    /// Cut up to [`ROLLS_PER_BATCH`] new cards from the remaining notes.
    ///
    /// Cards cover contiguous, non-overlapping windows of
    /// [`NOTES_PER_ROLL`] notes; a partial window at the tail is not shown.
    /// While a card is focused, new cards join the side list instead of the
    /// hidden grid. Returns the number of cards added.
    pub fn generate_batch(&mut self) -> usize {
        let slot = if self.focused().is_some() {
            CardSlot::Listed
        } else {
            CardSlot::Grid
        };

        let mut added = 0;
        while added < ROLLS_PER_BATCH {
            let end = self.offset + NOTES_PER_ROLL;
            if end > self.notes.len() {
                log::info!(
                    "note data exhausted: {} of {} notes on display",
                    self.offset,
                    self.notes.len()
                );
                break;
            }
            let window = self.notes[self.offset..end].to_vec();
            let Some(geometry) = RollGeometry::new(&window) else {
                break;
            };
            self.cards.push(RollCard {
                id: self.cards.len(),
                notes: window,
                geometry,
                selection: SelectionTool::new(),
                slot,
            });
            self.offset = end;
            added += 1;
        }
        added
    }

    /// True when enough notes remain for at least one more card.
    pub fn has_more(&self) -> bool {
        self.offset + NOTES_PER_ROLL <= self.notes.len()
    }

    /// Focus one card: it becomes the sole main-view card and every other
    /// card moves to the side list.
    pub fn focus(&mut self, id: usize) {
        if !self.cards.iter().any(|c| c.id == id) {
            return;
        }
        for card in &mut self.cards {
            card.slot = if card.id == id {
                CardSlot::Focused
            } else {
                CardSlot::Listed
            };
        }
    }

    /// The focused card's id, if any.
    pub fn focused(&self) -> Option<usize> {
        self.cards
            .iter()
            .find(|c| c.slot == CardSlot::Focused)
            .map(|c| c.id)
    }

    pub fn focused_card(&self) -> Option<&RollCard> {
        self.cards.iter().find(|c| c.slot == CardSlot::Focused)
    }

    pub fn cards(&self) -> &[RollCard] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [RollCard] {
        &mut self.cards
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_notes(count: usize) -> Vec<Note> {
        (0..count)
            .map(|i| Note {
                start: i as f64 * 0.5,
                end: i as f64 * 0.5 + 0.4,
                pitch: 48 + (i % 24) as u8,
                velocity: (i % 128) as u8,
            })
            .collect()
    }

    #[test]
    fn test_batch_cuts_contiguous_windows() {
        let notes = make_notes(100);
        let gallery = Gallery::new(notes.clone());
        assert_eq!(gallery.cards().len(), 10);

        for (i, card) in gallery.cards().iter().enumerate() {
            assert_eq!(card.notes.len(), NOTES_PER_ROLL);
            assert_eq!(card.notes[0], notes[i * NOTES_PER_ROLL]);
            assert_eq!(card.notes[9], notes[i * NOTES_PER_ROLL + 9]);
        }
        assert!(!gallery.has_more());
    }

    #[test]
    fn test_partial_tail_window_is_dropped() {
        let gallery = Gallery::new(make_notes(25));
        assert_eq!(gallery.cards().len(), 2);
        assert!(!gallery.has_more());
    }

    #[test]
    fn test_too_few_notes_make_no_cards() {
        let gallery = Gallery::new(make_notes(5));
        assert!(gallery.cards().is_empty());
        assert!(!gallery.has_more());

        let gallery = Gallery::new(Vec::new());
        assert!(gallery.cards().is_empty());
    }

    #[test]
    fn test_batches_are_capped_and_resume() {
        let notes = make_notes(400);
        let mut gallery = Gallery::new(notes.clone());
        assert_eq!(gallery.cards().len(), ROLLS_PER_BATCH);
        assert!(gallery.has_more());

        let added = gallery.generate_batch();
        assert_eq!(added, 4);
        // the second batch continues where the first stopped
        assert_eq!(
            gallery.cards()[ROLLS_PER_BATCH].notes[0],
            notes[ROLLS_PER_BATCH * NOTES_PER_ROLL]
        );
        assert!(!gallery.has_more());
    }

    #[test]
    fn test_focus_moves_previous_to_list() {
        let mut gallery = Gallery::new(make_notes(50));
        assert_eq!(gallery.focused(), None);

        gallery.focus(0);
        assert_eq!(gallery.focused(), Some(0));

        gallery.focus(3);
        assert_eq!(gallery.focused(), Some(3));
        assert_eq!(gallery.cards()[0].slot, CardSlot::Listed);

        // and back again
        gallery.focus(0);
        assert_eq!(gallery.focused(), Some(0));
        assert_eq!(gallery.cards()[3].slot, CardSlot::Listed);
    }

    #[test]
    fn test_single_focus_invariant() {
        let mut gallery = Gallery::new(make_notes(50));
        for id in [0, 2, 4, 2, 0] {
            gallery.focus(id);
            let focused = gallery
                .cards()
                .iter()
                .filter(|c| c.slot == CardSlot::Focused)
                .count();
            assert_eq!(focused, 1);
        }
    }

    #[test]
    fn test_focus_unknown_id_changes_nothing() {
        let mut gallery = Gallery::new(make_notes(50));
        gallery.focus(99);
        assert_eq!(gallery.focused(), None);
        assert!(gallery.cards().iter().all(|c| c.slot == CardSlot::Grid));
    }

    #[test]
    fn test_load_more_during_focus_joins_side_list() {
        let mut gallery = Gallery::new(make_notes(400));
        gallery.focus(1);

        let added = gallery.generate_batch();
        assert!(added > 0);
        assert!(gallery.cards()[ROLLS_PER_BATCH..]
            .iter()
            .all(|c| c.slot == CardSlot::Listed));
        // the focus is untouched
        assert_eq!(gallery.focused(), Some(1));
    }
}
