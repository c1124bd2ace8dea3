//! The narration sink every rule writes to.
//!
//! Rules describe what happened as [`Narration`] values and hand them to a
//! [`Narrator`]. The engine binary renders them to stdout; tests collect
//! them into a `Vec` and assert on the sequence.

use carcel_types::Narration;

/// Receives narration lines in the order the rules emit them.
pub trait Narrator {
    /// Record one narration line.
    fn narrate(&mut self, line: Narration);
}

/// Collects every line, in order.
impl Narrator for Vec<Narration> {
    fn narrate(&mut self, line: Narration) {
        self.push(line);
    }
}

/// A narrator that drops every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn narrate(&mut self, _line: Narration) {}
}
