use crate::model::SimulationResult;
use anyhow::Result;
use std::io::{self, Write};

/// Whether the tabular output capability was compiled in.
pub const TABLE_AVAILABLE: bool = cfg!(feature = "table");

/// Renders a [`SimulationResult`] as human-readable text.
pub struct Reporter<'a> {
    result: &'a SimulationResult,
}

impl<'a> Reporter<'a> {
    pub fn new(result: &'a SimulationResult) -> Self {
        Self { result }
    }

    /// Write the full report to standard output.
    pub fn print(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_report(&mut stdout.lock())
    }

    /// Write the full report to the given stream.
    ///
    /// The per-trial table is included only when the tabular output
    /// capability is available.
    pub fn write_report(&self, out: &mut dyn Write) -> Result<()> {
        let result = self.result;

        writeln!(
            out,
            "Monty Hall problem simulator: {} doors, {} runs, switch door: {}",
            result.doors,
            result.runs,
            if result.switch_policy { "yes" } else { "no" }
        )?;

        #[cfg(feature = "table")]
        self.write_trials(out)?;

        writeln!(
            out,
            "Summary: wins={} losses={} (win rate is {:.2} %)",
            result.tally.wins(),
            result.tally.losses(),
            result.tally.win_rate()
        )?;

        Ok(())
    }

    #[cfg(feature = "table")]
    fn write_trials(&self, out: &mut dyn Write) -> Result<()> {
        use comfy_table::Table;

        let result = self.result;

        let mut header = vec!["run #".to_string(), "Switch door?".to_string()];
        header.extend((1..=result.doors).map(|door| format!("Door{door}")));
        header.push("Win?".to_string());

        let mut table = Table::new();
        table.set_header(header);

        for trial in &result.trials {
            let mut door_cells = vec![String::new(); result.doors];
            for &door in &trial.goat_doors {
                door_cells[door].push('G');
            }
            door_cells[trial.winning_door].push('W');
            door_cells[trial.player_door].push('P');
            door_cells[trial.switch_door].push('S');
            door_cells[trial.presenter_goat_door].push('L');

            let mut row = vec![
                (trial.run + 1).to_string(),
                if result.switch_policy { "Yes" } else { "No" }.to_string(),
            ];
            row.extend(door_cells);
            row.push(if trial.win { "Yes" } else { "No" }.to_string());
            table.add_row(row);
        }

        writeln!(out, "\nSimulation details:")?;
        writeln!(out, "{table}")?;
        writeln!(out, "Legend:")?;
        writeln!(out, "  G: goat")?;
        writeln!(out, "  W: winning door")?;
        writeln!(out, "  P: door chosen by the player")?;
        writeln!(out, "  L: goat door chosen by the presenter")?;
        writeln!(out, "  S: proposed door by the presenter for the switch.")?;
        writeln!(out)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Trial;
    use crate::stats::Tally;

    fn lost_stay_result() -> SimulationResult {
        let trial = Trial {
            run: 0,
            winning_door: 0,
            player_door: 1,
            presenter_goat_door: 2,
            switch_door: 0,
            goat_doors: vec![1, 2],
            win: false,
        };

        let mut tally = Tally::new();
        tally.add(trial.win);

        SimulationResult {
            runs: 1,
            doors: 3,
            switch_policy: false,
            tally,
            trials: vec![trial],
        }
    }

    fn render(result: &SimulationResult) -> String {
        let mut out = Vec::new();
        Reporter::new(result)
            .write_report(&mut out)
            .expect("failed to write report");
        String::from_utf8(out).expect("report is not valid UTF-8")
    }

    #[test]
    fn report_contains_header_and_summary() {
        let text = render(&lost_stay_result());

        assert!(text.starts_with("Monty Hall problem simulator: 3 doors, 1 runs, switch door: no"));
        assert!(text.contains("Summary: wins=0 losses=1 (win rate is 0.00 %)"));
    }

    #[cfg(feature = "table")]
    #[test]
    fn table_annotates_doors_with_letter_codes() {
        let text = render(&lost_stay_result());

        assert!(text.contains("Simulation details:"));
        assert!(text.contains("Door1"));
        assert!(text.contains("Door3"));

        // Door 0 holds the prize and the switch proposal, door 1 the player's
        // goat, door 2 the goat opened by the presenter.
        assert!(text.contains("WS"));
        assert!(text.contains("GP"));
        assert!(text.contains("GL"));

        assert!(text.contains("Legend:"));
    }
}
