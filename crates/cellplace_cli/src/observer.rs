//! Console progress reporting and the interactive pacing gate.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use cellplace_config::{ViewCommand, ViewSettings};
use cellplace_core::{
    AnnealObserver, AnnealParams, AnnealReport, EpochControl, EpochProgress, Floorplan,
};

/// Reports annealing progress on a text stream and, when pacing is on,
/// waits for a [`ViewCommand`] at every report.
///
/// Status writes are best effort: a closed output stream never aborts the
/// run.
pub struct ConsoleObserver<R, W> {
    view: ViewSettings,
    verbose: bool,
    time_limit: Option<Duration>,
    deadline: Option<Instant>,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> ConsoleObserver<R, W> {
    /// Creates an observer reading commands from `input` and writing status
    /// lines to `out`.
    pub fn new(view: ViewSettings, verbose: bool, input: R, out: W) -> Self {
        Self {
            view,
            verbose,
            time_limit: None,
            deadline: None,
            input,
            out,
        }
    }

    /// Stops the run once `limit` has elapsed since it started.
    pub fn with_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit;
        self
    }

    /// Consumes the observer, returning its output stream.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Prompts until a valid command arrives. End of input runs to the end.
    fn read_command(&mut self, progress: &EpochProgress) -> ViewCommand {
        loop {
            let _ = write!(
                self.out,
                "epoch {} (T = {:.6}, cost = {}) [Enter/p, <n>, all, q] > ",
                progress.epoch, progress.temperature, progress.total_cost
            );
            let _ = self.out.flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return ViewCommand::RunToEnd,
                Ok(_) => {}
            }
            match line.parse::<ViewCommand>() {
                Ok(command) => return command,
                Err(e) => {
                    let _ = writeln!(self.out, "{e}");
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> AnnealObserver for ConsoleObserver<R, W> {
    fn on_start(&mut self, params: &AnnealParams, floorplan: &Floorplan) {
        self.deadline = self.time_limit.map(|limit| Instant::now() + limit);
        if !self.verbose {
            return;
        }
        let _ = writeln!(
            self.out,
            "Annealing {} ({} cells, {} nets, {}x{} grid), initial cost {}",
            floorplan.name(),
            floorplan.cell_count(),
            floorplan.net_count(),
            floorplan.nx(),
            floorplan.ny(),
            floorplan.total_cost()
        );
        let _ = writeln!(self.out, "  - moves per temperature: {}", params.moves_per_epoch);
        let _ = writeln!(self.out, "  - initial temperature: {}", params.initial_temperature);
        let _ = writeln!(self.out, "  - cooling rate: {}", params.cooling_rate);
        let _ = writeln!(self.out, "  - freezing temperature: {}", params.freezing_temperature);
        let _ = writeln!(self.out, "  - epochs: {}", params.epoch_count());
    }

    fn on_epoch(&mut self, progress: &EpochProgress, _floorplan: &Floorplan) -> EpochControl {
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            if self.verbose {
                let _ = writeln!(self.out, "- Time limit reached after {} epochs", progress.epoch);
            }
            return EpochControl::Stop;
        }
        if !self.view.should_report(progress.epoch) {
            return EpochControl::Continue;
        }
        if self.verbose {
            let _ = writeln!(
                self.out,
                "- Current temperature: {}, Cost: {}",
                progress.temperature, progress.total_cost
            );
        }
        if !self.view.step {
            return EpochControl::Continue;
        }
        let command = self.read_command(progress);
        self.view.apply(command)
    }

    fn on_finished(&mut self, report: &AnnealReport, _floorplan: &Floorplan) {
        if self.verbose {
            let _ = writeln!(self.out, "- Finished with final cost: {}", report.final_cost);
        }
    }
}
