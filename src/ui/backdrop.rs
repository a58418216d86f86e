//! Selection of the ambient backdrop movie.
//!
//! Views pick one result at random to decorate the page. The choice is made
//! by the controller through this seam so reducers stay pure and tests can
//! pin the index.

use rand::Rng;

pub trait BackdropPicker: Send {
    /// Index in `0..len` to use as backdrop, or `None` when `len == 0`.
    fn pick(&mut self, len: usize) -> Option<usize>;
}

/// Uniformly random choice from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl BackdropPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(rand::thread_rng().gen_range(0..len))
    }
}

/// Always the same index, clamped to the available results.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl BackdropPicker for FixedPicker {
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.0.min(len - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_pick_stays_in_range() {
        let mut picker = RandomPicker;
        assert_eq!(picker.pick(0), None);
        for _ in 0..200 {
            let index = picker.pick(5).unwrap();
            assert!(index < 5);
        }
    }

    #[test]
    fn fixed_pick_clamps() {
        let mut picker = FixedPicker(3);
        assert_eq!(picker.pick(10), Some(3));
        assert_eq!(picker.pick(2), Some(1));
        assert_eq!(picker.pick(0), None);
    }
}
