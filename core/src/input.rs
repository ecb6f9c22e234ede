use serde::{Deserialize, Serialize};

use crate::Coord2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonKind {
    /// Reveal, or chord on an already revealed number.
    Primary,
    /// Toggle a flag.
    Secondary,
}

/// A single press, already translated into grid coordinates by the input adapter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Click {
    pub button: ButtonKind,
    pub coords: Coord2,
}

impl Click {
    pub const fn primary(coords: Coord2) -> Self {
        Self {
            button: ButtonKind::Primary,
            coords,
        }
    }

    pub const fn secondary(coords: Coord2) -> Self {
        Self {
            button: ButtonKind::Secondary,
            coords,
        }
    }
}

/// Holds at most one press between frames.
///
/// The input side calls [`ClickLatch::press`] when a button goes down, the
/// frame driver calls [`ClickLatch::take`] once per tick. A held button is
/// never seen twice, and a later press in the same frame replaces an
/// earlier one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickLatch {
    pending: Option<Click>,
}

impl ClickLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, click: Click) {
        if let Some(dropped) = self.pending.replace(click) {
            log::trace!("Dropping unconsumed {:?}", dropped);
        }
    }

    pub fn take(&mut self) -> Option<Click> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_consumes_the_press() {
        let mut latch = ClickLatch::new();
        latch.press(Click::primary((1, 2)));

        assert!(latch.is_pending());
        assert_eq!(latch.take(), Some(Click::primary((1, 2))));
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn later_press_wins() {
        let mut latch = ClickLatch::new();
        latch.press(Click::primary((0, 0)));
        latch.press(Click::secondary((3, 3)));

        assert_eq!(latch.take(), Some(Click::secondary((3, 3))));
        assert!(!latch.is_pending());
    }
}
