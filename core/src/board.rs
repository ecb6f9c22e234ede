use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> GameOver
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    Playing,
    /// A mine was revealed, no more input is accepted
    GameOver,
}

impl BoardState {
    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Result of handing one click to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Rejected before touching the grid: game over, out of range, flagged
    /// target, or a flag toggle on a revealed cell.
    Ignored,
    /// Accepted but nothing changed, e.g. a chord with the wrong flag count.
    NoChange,
    Revealed,
    HitMine,
    Flagged,
    Unflagged,
}

impl ClickOutcome {
    /// Whether the grid may need to be drawn again
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            Ignored => false,
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Flagged => true,
            Unflagged => true,
        }
    }
}

impl From<RevealOutcome> for ClickOutcome {
    fn from(outcome: RevealOutcome) -> Self {
        match outcome {
            RevealOutcome::NoChange => Self::NoChange,
            RevealOutcome::Revealed => Self::Revealed,
            RevealOutcome::HitMine => Self::HitMine,
        }
    }
}

/// Game rules on top of a [`Grid`].
///
/// Always fully set up: every constructor places mines and computes numbers
/// before returning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    mine_count: CellCount,
    flag_count: CellCount,
    revealed_safe_count: CellCount,
    state: BoardState,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Random board seeded from the thread-local generator.
    pub fn new(width: Coord, height: Coord, mine_probability: f64) -> Result<Self> {
        let config = GameConfig::new_unchecked((width, height), mine_probability);
        Self::from_config(&config, rand::random())
    }

    pub fn from_config(config: &GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let layout = BernoulliMineGenerator::new(seed).generate(config);
        Ok(Self::from_layout(layout))
    }

    pub fn from_layout(layout: MineLayout) -> Self {
        Self {
            grid: Grid::from_layout(&layout),
            mine_count: layout.mine_count(),
            flag_count: 0,
            revealed_safe_count: 0,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn width(&self) -> Coord {
        self.grid.width()
    }

    pub fn height(&self) -> Coord {
        self.grid.height()
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.grid.cell_at(coords)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.mine_count as isize) - (self.flag_count as isize)
    }

    /// Number of non-mine cells revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_safe_count
    }

    pub fn safe_cells_remaining(&self) -> CellCount {
        let (width, height) = self.size();
        mult(width, height) - self.mine_count - self.revealed_safe_count
    }

    /// Every non-mine cell has been revealed.
    ///
    /// Only a query: a cleared board keeps accepting input.
    pub fn is_cleared(&self) -> bool {
        self.safe_cells_remaining() == 0
    }

    /// The first mine revealed, if any.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Consumes this frame's click, if there was one.
    pub fn tick(&mut self, click: Option<Click>) -> ClickOutcome {
        match click {
            Some(Click { button, coords }) => self.handle_input(button, coords),
            None => ClickOutcome::Ignored,
        }
    }

    pub fn handle_input(&mut self, button: ButtonKind, coords: Coord2) -> ClickOutcome {
        use ButtonKind::*;

        if self.state.is_game_over() {
            log::debug!("Ignoring {:?} click at {:?}, game is over", button, coords);
            return ClickOutcome::Ignored;
        }

        let Some(&cell) = self.grid.cell_at(coords) else {
            log::debug!("Ignoring {:?} click at {:?}, outside the grid", button, coords);
            return ClickOutcome::Ignored;
        };

        match button {
            Primary if cell.is_flagged() => ClickOutcome::Ignored,
            Primary if cell.is_revealed() && !cell.is_mine() => self.chord(coords).into(),
            Primary => self.reveal(coords, false).into(),
            Secondary => self.toggle_flag(coords),
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> ClickOutcome {
        if self.state.is_game_over() {
            return ClickOutcome::Ignored;
        }

        let Some(cell) = self.grid.cell_at_mut(coords) else {
            return ClickOutcome::Ignored;
        };
        if cell.is_revealed() {
            return ClickOutcome::Ignored;
        }

        if cell.toggle_flag() {
            self.flag_count += 1;
            log::debug!("Flagged cell at {:?}", coords);
            ClickOutcome::Flagged
        } else {
            self.flag_count -= 1;
            log::debug!("Unflagged cell at {:?}", coords);
            ClickOutcome::Unflagged
        }
    }

    /// Reveals every unflagged hidden neighbor of a revealed number, but only
    /// when the number of flagged neighbors equals it exactly.
    pub fn chord(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(&cell) = self.grid.cell_at(coords) else {
            return RevealOutcome::NoChange;
        };
        let Some(count) = cell.content().count() else {
            return RevealOutcome::NoChange;
        };
        if !cell.is_revealed() {
            return RevealOutcome::NoChange;
        }

        let flags = self.count_flagged_neighbors(coords);
        if flags != count {
            log::debug!(
                "Not chording at {:?}, {} flags around a {}",
                coords,
                flags,
                count
            );
            return RevealOutcome::NoChange;
        }

        log::debug!("Chording at {:?}", coords);
        self.reveal(coords, true)
    }

    /// Reveals `coords`, then keeps going through neighbors when chording or
    /// when the cell has no mines around it.
    ///
    /// Revealing a mine ends the game but does not stop the cells already
    /// queued by this call, so a chord that hits a wrongly flagged mine still
    /// opens the rest of its neighbors.
    pub fn reveal(&mut self, coords: Coord2, chording: bool) -> RevealOutcome {
        if self.state.is_game_over() || !self.grid.contains(coords) {
            return RevealOutcome::NoChange;
        }

        let mut to_visit = Vec::new();
        let mut outcome = self.reveal_cell(coords);
        self.queue_neighbors(coords, chording, &mut to_visit);

        while let Some(visit_coords) = to_visit.pop() {
            // already opened and expanded earlier in this call
            if self.grid[visit_coords].is_revealed() {
                continue;
            }

            outcome = outcome | self.reveal_cell(visit_coords);
            self.queue_neighbors(visit_coords, false, &mut to_visit);
        }

        outcome
    }

    fn reveal_cell(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(cell) = self.grid.cell_at_mut(coords) else {
            return RevealOutcome::NoChange;
        };
        let newly_revealed = cell.reveal();
        let content = cell.content();

        match content {
            CellContent::Mine => {
                self.end_game(coords);
                RevealOutcome::HitMine
            }
            CellContent::Count(count) if newly_revealed => {
                self.revealed_safe_count += 1;
                log::trace!("Revealed cell at {:?}, mine count: {}", coords, count);
                RevealOutcome::Revealed
            }
            CellContent::Count(_) => RevealOutcome::NoChange,
        }
    }

    fn queue_neighbors(&self, coords: Coord2, chording: bool, to_visit: &mut Vec<Coord2>) {
        if !chording && !self.grid[coords].content().is_zero() {
            return;
        }

        let queued_before = to_visit.len();
        // flags only hold back a chord, a zero opens everything around it
        to_visit.extend(
            self.grid
                .neighbor_cells(coords)
                .filter(|neighbor| !neighbor.is_revealed())
                .filter(|neighbor| !(chording && neighbor.is_flagged()))
                .map(Cell::coords),
        );
        log::trace!(
            "Expanding from {:?}, queued {} neighbors",
            coords,
            to_visit.len() - queued_before
        );
    }

    fn end_game(&mut self, coords: Coord2) {
        if self.state.is_game_over() {
            return;
        }

        log::debug!("Mine revealed at {:?}, game over", coords);
        self.state = BoardState::GameOver;
        self.triggered_mine = Some(coords);
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        self.grid
            .neighbor_cells(coords)
            .filter(|neighbor| neighbor.is_flagged())
            .fold(0, |count, _| count + 1)
    }
}
