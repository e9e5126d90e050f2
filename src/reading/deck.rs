//! The fixed 22-card Major Arcana deck and reading sampling
//!
//! Card identity is an index into the deck; the rendering side resolves it
//! to `images/{index}.png`. A reading is three distinct cards with
//! independently random orientation.

use rand::seq::SliceRandom;
use rand::Rng;

pub const DECK_SIZE: usize = 22;
pub const READING_SIZE: usize = 3;

/// Display names, index-aligned with the card assets.
pub const MAJOR_ARCANA: [&str; DECK_SIZE] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

/// Rendered as a 180° rotation when reversed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Upright,
    Reversed,
}

/// One drawn card with its orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadingEntry {
    /// Index into the deck; kept private so it is always a valid slot.
    card: u8,
    pub orientation: Orientation,
}

impl ReadingEntry {
    /// Checked constructor: rejects indices outside the deck.
    pub fn new(card: u8, orientation: Orientation) -> Option<Self> {
        ((card as usize) < DECK_SIZE).then_some(Self { card, orientation })
    }

    pub fn card(&self) -> u8 {
        self.card
    }

    pub fn name(&self) -> &'static str {
        MAJOR_ARCANA[self.card as usize]
    }

    pub fn is_reversed(&self) -> bool {
        self.orientation == Orientation::Reversed
    }
}

/// Sample a reading: shuffle the full index set and take the first three,
/// so identities are distinct by construction. Orientation is an
/// independent fair coin per entry.
pub fn draw_reading<R: Rng>(rng: &mut R) -> [ReadingEntry; READING_SIZE] {
    let mut deck: [u8; DECK_SIZE] = core::array::from_fn(|i| i as u8);
    deck.shuffle(rng);

    core::array::from_fn(|i| ReadingEntry {
        card: deck[i],
        orientation: if rng.gen_bool(0.5) {
            Orientation::Reversed
        } else {
            Orientation::Upright
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn reading_has_three_distinct_cards() {
        for seed in 0..200 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let reading = draw_reading(&mut rng);
            assert_ne!(reading[0].card(), reading[1].card());
            assert_ne!(reading[0].card(), reading[2].card());
            assert_ne!(reading[1].card(), reading[2].card());
            for entry in &reading {
                assert!((entry.card() as usize) < DECK_SIZE);
            }
        }
    }

    #[test]
    fn every_card_is_reachable() {
        let mut seen = [false; DECK_SIZE];
        for seed in 0..2000 {
            let mut rng = SmallRng::seed_from_u64(seed);
            for entry in draw_reading(&mut rng) {
                seen[entry.card() as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "all 22 cards should appear");
    }

    #[test]
    fn both_orientations_occur() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut upright = 0;
        let mut reversed = 0;
        for _ in 0..100 {
            for entry in draw_reading(&mut rng) {
                match entry.orientation {
                    Orientation::Upright => upright += 1,
                    Orientation::Reversed => reversed += 1,
                }
            }
        }
        assert!(upright > 0 && reversed > 0);
    }

    #[test]
    fn entry_name_resolves() {
        let entry = ReadingEntry::new(0, Orientation::Upright).unwrap();
        assert_eq!(entry.name(), "The Fool");
        assert!(!entry.is_reversed());
    }

    #[test]
    fn entry_rejects_out_of_deck_index() {
        assert!(ReadingEntry::new(DECK_SIZE as u8, Orientation::Upright).is_none());
        assert!(ReadingEntry::new(u8::MAX, Orientation::Reversed).is_none());
        assert!(ReadingEntry::new(21, Orientation::Upright).is_some());
    }
}
