use ndarray::Array2;

use super::*;

/// Places a mine on each cell independently with a fixed probability.
///
/// There is no target mine total and no protection for the first cell
/// opened, so a board may come out with no mines, or a mine under the
/// player's first click.
#[derive(Clone, Debug, PartialEq)]
pub struct BernoulliMineGenerator {
    seed: u64,
}

impl BernoulliMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for BernoulliMineGenerator {
    fn generate(self, config: &GameConfig) -> MineLayout {
        use rand::prelude::*;

        let probability = if config.mine_probability.is_nan() {
            log::warn!("Mine probability is NaN, generating an empty minefield");
            0.0
        } else {
            config.mine_probability.clamp(0.0, 1.0)
        };
        if probability == 0.0 {
            log::warn!("Mine probability is zero, no mines will be placed");
        } else if probability == 1.0 {
            log::warn!("Mine probability is one, every cell will be a mine");
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        // standard layout fills in logical order, so rows are drawn top to bottom
        let mine_mask =
            Array2::from_shape_fn(nd_shape(config.size), |_| rng.random_bool(probability));

        let layout = MineLayout::from_mine_mask_unchecked(mine_mask);
        log::debug!(
            "Generated {}x{} minefield with {} mines (p = {}, seed = {})",
            config.size.0,
            config.size.1,
            layout.mine_count(),
            probability,
            self.seed
        );
        layout
    }
}
