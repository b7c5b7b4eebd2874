//! Dataset progress tracking for batch counting runs

use crate::algorithm::executor::CoverReport;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::spatial::grid::Grid;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates progress display while datasets are counted
///
/// Shows a batch bar over all datasets and a status line describing the
/// dataset currently being searched.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    status_bar: Option<ProgressBar>,
    dataset_count: usize,
    completed: usize,
    total_maximal_sets: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Datasets: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static STATUS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            status_bar: None,
            dataset_count: 0,
            completed: 0,
            total_maximal_sets: 0,
        }
    }

    /// Initialize progress bars for `dataset_count` datasets
    pub fn initialize(&mut self, dataset_count: usize) {
        self.dataset_count = dataset_count;
        self.completed = 0;
        self.total_maximal_sets = 0;

        let batch_bar = ProgressBar::new(dataset_count as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(batch_bar));

        let status_bar = ProgressBar::new_spinner();
        status_bar.set_style(STATUS_STYLE.clone());
        self.status_bar = Some(self.multi_progress.add(status_bar));
    }

    /// Describe the dataset about to be searched
    pub fn start_dataset(&self, index: usize, grid: &Grid) {
        if let Some(ref status_bar) = self.status_bar {
            status_bar.set_message(format!(
                "dataset {}/{}: {}x{} grid, {} special cells",
                index + 1,
                self.dataset_count,
                grid.rows(),
                grid.cols(),
                grid.special_count()
            ));
            status_bar.tick();
        }
    }

    /// Record a finished dataset
    pub fn complete_dataset(&mut self, report: &CoverReport, elapsed: Duration) {
        self.completed += 1;
        self.total_maximal_sets += report.maximal_sets;

        if let Some(ref status_bar) = self.status_bar {
            status_bar.set_message(format!(
                "{} distinct covers from {} maximal sets in {elapsed:.2?}",
                report.distinct_covers, report.maximal_sets
            ));
        }

        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Number of datasets completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Maximal sets visited across completed datasets
    pub const fn total_maximal_sets(&self) -> usize {
        self.total_maximal_sets
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref status_bar) = self.status_bar {
            status_bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message(format!(
                "{} datasets, {} maximal sets",
                self.completed, self.total_maximal_sets
            ));
        }
        let _ = self.multi_progress.clear();
    }
}
