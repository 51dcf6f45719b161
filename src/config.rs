use anyhow::{Context, Result, bail};
use std::{fmt::Debug, ops::RangeBounds};

/// Simulation configuration parameters.
///
/// Built from command line arguments and validated before use.
/// See [`Config::new`] for construction.
#[derive(Debug, PartialEq, Clone)]
pub struct Config {
    /// Number of trials to run.
    pub runs: usize,
    /// Number of doors in the game.
    pub doors: usize,
    /// Whether the player switches to the door proposed by the presenter.
    pub do_switch: bool,
}

impl Config {
    /// Create a [`Config`] with the given parameters.
    ///
    /// # Errors
    /// Returns an error if `runs` is below 1 or `doors` is below 3.
    pub fn new(runs: usize, doors: usize, do_switch: bool) -> Result<Self> {
        let config = Self {
            runs,
            doors,
            do_switch,
        };

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.runs, 1..).context("invalid number of runs")?;
        check_num(self.doors, 3..).context("invalid number of doors")?;

        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_parameters() {
        let cfg = Config::new(20, 3, false).expect("failed to construct config");
        assert_eq!(
            cfg,
            Config {
                runs: 20,
                doors: 3,
                do_switch: false
            }
        );

        Config::new(1, 3, true).expect("failed to construct minimal config");
    }

    #[test]
    fn rejects_runs_below_one() {
        let error = Config::new(0, 3, false).unwrap_err();
        assert!(format!("{error:#}").contains("invalid number of runs"));
    }

    #[test]
    fn rejects_doors_below_three() {
        let error = Config::new(20, 2, false).unwrap_err();
        assert!(format!("{error:#}").contains("invalid number of doors"));
    }
}
