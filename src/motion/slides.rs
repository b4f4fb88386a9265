use super::error::{MotionError, Result};

/// Position of a looping carousel. `current` is always `< len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideIndex {
    current: usize,
    len: usize,
}

impl SlideIndex {
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(MotionError::EmptyCarousel);
        }
        Ok(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jumps to `index`, wrapping values past the end.
    pub fn go_to(&mut self, index: usize) {
        self.current = index % self.len;
    }
}
