//! Reading module - deck, draw sampling and reveal orchestration
//!
//! Re-exports only. All logic in submodules.

mod deck;
mod orchestrator;

pub use deck::{
    draw_reading, Orientation, ReadingEntry, DECK_SIZE, MAJOR_ARCANA, READING_SIZE,
};
pub use orchestrator::{
    DrawPhase, ReadingOrchestrator, RevealEffect, RevealKind, ENTER_DELAY_MS, GLOW_DELAY_MS,
};
