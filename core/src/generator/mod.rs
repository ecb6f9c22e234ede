use crate::*;
pub use random::*;

mod random;

/// Decides where mines go on a board of the configured size.
pub trait MineGenerator {
    fn generate(self, config: &GameConfig) -> MineLayout;
}
