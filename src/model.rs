use crate::stats::Tally;

/// Outcome of a single simulated game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    /// Sequence number of the trial within the simulation.
    pub run: usize,

    /// Door hiding the prize.
    pub winning_door: usize,

    /// Door initially chosen by the player.
    pub player_door: usize,

    /// Goat door opened by the presenter.
    pub presenter_goat_door: usize,

    /// Door proposed by the presenter as the switch alternative.
    pub switch_door: usize,

    /// All doors hiding a goat, in ascending order.
    pub goat_doors: Vec<usize>,

    /// Whether the player won the prize under the active switch policy.
    pub win: bool,
}

/// Aggregate outcome of a full simulation.
///
/// Owns the per-trial records in run order plus the win tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// Number of trials performed.
    pub runs: usize,

    /// Number of doors in the game.
    pub doors: usize,

    /// Whether the player switched doors in every trial.
    pub switch_policy: bool,

    /// Win tally over all trials.
    pub tally: Tally,

    /// Per-trial records, ordered by run.
    pub trials: Vec<Trial>,
}
