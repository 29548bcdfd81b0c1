//! Progress display for batches of pattern fills

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for a batch of patterns
///
/// Each pattern in flight gets a bar advancing per filled column. Batches
/// larger than the bar limit also get an overall bar counting finished
/// patterns, and only the most recent patterns keep a bar of their own.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    pattern_bars: Vec<ProgressBar>,
    /// Stores (`label`, `columns_done`, `columns_total`) per pattern
    pattern_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PATTERN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Patterns: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            pattern_bars: Vec::new(),
            pattern_states: Vec::new(),
        }
    }

    /// Create a manager whose bars are never drawn
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(
                indicatif::ProgressDrawTarget::hidden(),
            ),
            ..Self::new()
        }
    }

    /// Initialize progress bars based on pattern count
    pub fn initialize(&mut self, pattern_count: usize) {
        if pattern_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(pattern_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = pattern_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let bar = ProgressBar::new(0);
            bar.set_style(PATTERN_STYLE.clone());
            self.pattern_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Configure progress for a new pattern or a new attempt at it
    pub fn start_pattern(&mut self, index: usize, label: String, columns: usize) {
        if index >= self.pattern_states.len() {
            self.pattern_states
                .resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.pattern_states.get_mut(index) {
            *state = (label, 0, columns);
        }
        self.update_bars();
    }

    /// Report the number of columns filled so far
    pub fn update_columns(&mut self, index: usize, columns_done: usize) {
        if let Some(state) = self.pattern_states.get_mut(index) {
            state.1 = columns_done;
        }
        self.update_bars();
    }

    /// Mark a pattern as finished and advance the batch bar
    pub fn complete_pattern(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.pattern_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Number of patterns seen so far
    pub const fn pattern_count(&self) -> usize {
        self.pattern_states.len()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All patterns generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the most recent patterns on the available bars
    fn update_bars(&self) {
        let active: Vec<&(String, usize, usize)> = self
            .pattern_states
            .iter()
            .filter(|(label, _, _)| !label.is_empty())
            .collect();

        let start = active.len().saturating_sub(self.pattern_bars.len());
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, (label, done, total)) in self.pattern_bars.iter().zip(visible) {
            bar.set_length(*total as u64);
            bar.set_position(*done as u64);
            let total_width = total.to_string().len();
            bar.set_message(format!("{done:>total_width$}/{total} columns"));
            bar.set_prefix(label.clone());
        }

        for bar in self.pattern_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
