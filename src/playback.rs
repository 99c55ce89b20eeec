//! Playback state for stepping through a trace.
//!
//! The caller owns the timer; each tick calls [`Playback::advance`] and stops
//! the timer on [`Tick::Finished`], then draws the tree from
//! [`Playback::final_array`].

use crate::trace::{Step, generate_trace};

/// Outcome of one timer tick.
#[derive(Debug, PartialEq)]
pub enum Tick<'a> {
    /// The cursor moved forward; render this step.
    Advanced(&'a Step),
    /// The cursor was already on the last step; show the tree.
    Finished(&'a Step),
}

/// Input numbers, their trace, and a cursor into it.
#[derive(Debug, Clone)]
pub struct Playback {
    numbers: Vec<f64>,
    steps: Vec<Step>,
    cursor: usize,
}

impl Playback {
    /// Generate the trace for `numbers` and place the cursor on the first step.
    pub fn start(numbers: Vec<f64>) -> Self {
        let steps = generate_trace(&numbers);
        Self {
            numbers,
            steps,
            cursor: 0,
        }
    }

    pub fn numbers(&self) -> &[f64] {
        &self.numbers
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Zero-based position of the cursor.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current(&self) -> &Step {
        &self.steps[self.cursor]
    }

    pub fn is_finished(&self) -> bool {
        self.cursor + 1 >= self.steps.len()
    }

    /// Move to the next step unless already on the last one.
    pub fn advance(&mut self) -> Tick<'_> {
        if self.is_finished() {
            return Tick::Finished(&self.steps[self.cursor]);
        }
        self.cursor += 1;
        Tick::Advanced(&self.steps[self.cursor])
    }

    /// Badge text, e.g. `"Step 3 of 17"`.
    pub fn label(&self) -> String {
        format!("Step {} of {}", self.cursor + 1, self.steps.len())
    }

    /// Array of the last step: the sorted input.
    pub fn final_array(&self) -> &[f64] {
        self.steps.last().map(|s| s.array.as_slice()).unwrap_or(&[])
    }

    /// Rewind to the first step.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_on_initial_step() {
        let pb = Playback::start(vec![3.0, 1.0, 2.0]);
        assert_eq!(pb.position(), 0);
        assert_eq!(pb.current().description, "Initial array");
        assert_eq!(pb.label(), format!("Step 1 of {}", pb.len()));
        assert!(!pb.is_finished());
    }

    #[test]
    fn test_advance_until_finished() {
        let mut pb = Playback::start(vec![3.0, 1.0, 2.0]);
        let total = pb.len();
        let mut advanced = 0;
        while let Tick::Advanced(_) = pb.advance() {
            advanced += 1;
        }
        assert_eq!(advanced, total - 1);
        assert!(pb.is_finished());
        assert_eq!(pb.position(), total - 1);
        assert_eq!(pb.current().description, "Sorting complete!");
        // Further ticks stay on the last step.
        assert!(matches!(pb.advance(), Tick::Finished(_)));
        assert_eq!(pb.position(), total - 1);
    }

    #[test]
    fn test_final_array_and_reset() {
        let mut pb = Playback::start(vec![5.0, 1.0, 4.0, 2.0, 8.0]);
        while !pb.is_finished() {
            pb.advance();
        }
        assert_eq!(pb.final_array(), &[1.0, 2.0, 4.0, 5.0, 8.0]);
        pb.reset();
        assert_eq!(pb.position(), 0);
        assert_eq!(pb.numbers(), &[5.0, 1.0, 4.0, 2.0, 8.0]);
    }

    #[test]
    fn test_empty_numbers_still_playable() {
        let mut pb = Playback::start(Vec::new());
        assert_eq!(pb.len(), 3);
        while !pb.is_finished() {
            pb.advance();
        }
        assert!(pb.final_array().is_empty());
    }
}
