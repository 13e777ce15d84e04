use std::path::Path;

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        let mut frames = SPINNER_FRAMES.to_vec();
        frames.push("✓");
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(&frames),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_loading(&mut self, path: &Path) {
        let spinner = self.create_spinner(&format!("Reading {}...", path.display()));
        self.current_bar = Some(spinner);
    }

    pub fn finish_loading(&mut self, rows: usize, columns: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "{} Loaded {}x{} matrix",
            style("✓").green(),
            style(rows).yellow().bold(),
            style(columns).yellow().bold()
        );
    }

    pub fn start_exponentiation(&mut self, steps: usize, workers: usize) {
        eprintln!(
            "\n{} Raising to power {} with {} product {}...",
            style("🔄").yellow(),
            steps + 1,
            style(workers).cyan(),
            pluralize("worker", workers)
        );
        if steps > 0 {
            let pb = self.create_progress_bar(steps as u64, "Multiplying");
            self.current_bar = Some(pb);
        }
    }

    pub fn update_exponentiation(&self, done: usize) {
        if let Some(ref pb) = self.current_bar {
            pb.set_position(done as u64);
        }
    }

    pub fn finish_exponentiation(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_with_message("Exponentiation complete");
        }
    }

    pub fn finish_cycle_detection(&self, cyclic: bool) {
        if cyclic {
            eprintln!(
                "{} Closed walks found on the diagonal",
                style("⚠").yellow().bold()
            );
        } else {
            eprintln!("{} No cycles detected!", style("✓").green().bold());
        }
    }
}
