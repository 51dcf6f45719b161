use crate::config::Config;
use crate::model::{SimulationResult, Trial};
use crate::stats::Tally;
use anyhow::{Context, Result};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use rand_distr::Uniform;

/// Simulation engine.
///
/// Holds the configuration and random number generator, and provides
/// methods to run single trials or a full simulation.
pub struct Engine<R = ChaCha12Rng> {
    cfg: Config,
    rng: R,
}

impl Engine<ChaCha12Rng> {
    /// Create a new `Engine` with a generator seeded from the operating system.
    pub fn from_os_rng(cfg: Config) -> Result<Self> {
        let rng = ChaCha12Rng::try_from_os_rng()?;
        Ok(Self::with_rng(cfg, rng))
    }
}

impl<R: Rng> Engine<R> {
    /// Create a new `Engine` with the given random number generator.
    ///
    /// With a seeded generator the simulation is reproducible.
    pub fn with_rng(cfg: Config, rng: R) -> Self {
        Self { cfg, rng }
    }

    /// Run all trials and collect the results.
    pub fn run_simulation(&mut self) -> Result<SimulationResult> {
        let mut trials = Vec::with_capacity(self.cfg.runs);
        let mut tally = Tally::new();

        for run in 0..self.cfg.runs {
            let trial = self.run_trial(run).context("failed to run trial")?;
            tally.add(trial.win);
            trials.push(trial);
        }

        log::info!(
            "completed {} runs ({} wins, {:.2} % win rate)",
            tally.trials(),
            tally.wins(),
            tally.win_rate()
        );

        Ok(SimulationResult {
            runs: self.cfg.runs,
            doors: self.cfg.doors,
            switch_policy: self.cfg.do_switch,
            tally,
            trials,
        })
    }

    /// Simulate a single game.
    pub fn run_trial(&mut self, run: usize) -> Result<Trial> {
        let doors = self.cfg.doors;

        // The winning door and the player's first pick are independent draws.
        let door_dist = Uniform::new(0, doors)?;
        let winning_door = door_dist.sample(&mut self.rng);
        let player_door = door_dist.sample(&mut self.rng);

        // Every door but the winning one hides a goat.
        let goat_doors: Vec<_> = (0..doors).filter(|&door| door != winning_door).collect();

        // The presenter opens exactly one goat door that the player did not
        // choose, no matter how many doors are in play.
        let presenter_candidates: Vec<_> = (0..doors)
            .filter(|&door| door != winning_door && door != player_door)
            .collect();
        let &presenter_goat_door = presenter_candidates
            .choose(&mut self.rng)
            .context("failed to choose the presenter's goat door")?;

        // The switch proposal must avoid the opened door and the player's door.
        let switch_candidates: Vec<_> = (0..doors)
            .filter(|&door| door != presenter_goat_door && door != player_door)
            .collect();
        let &switch_door = switch_candidates
            .choose(&mut self.rng)
            .context("failed to choose the switch door")?;

        let win = if self.cfg.do_switch {
            switch_door == winning_door
        } else {
            player_door == winning_door
        };

        Ok(Trial {
            run,
            winning_door,
            player_door,
            presenter_goat_door,
            switch_door,
            goat_doors,
            win,
        })
    }
}
