//! Command-line interface for counting datasets and generating samples

use crate::algorithm::executor::{CoverCounter, CoverReport, EngineConfig};
use crate::io::configuration::{
    DEFAULT_MAX_PLACEMENTS, DEFAULT_SAMPLE_COLS, DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_ROWS,
    DEFAULT_SEED, DEFAULT_SPECIAL_DENSITY,
};
use crate::io::error::{CoverError, Result, WithPath, invalid_parameter};
use crate::io::parser::read_datasets;
use crate::io::progress::ProgressManager;
use crate::io::sample::{SampleConfig, generate_grids, write_datasets};
use crate::spatial::grid::Grid;
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tricover")]
#[command(
    author,
    version,
    about = "Count distinct coverages of maximal non-overlapping tromino placements"
)]
/// Command-line arguments for the cover counting tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Count distinct maximal coverages for every dataset of an input
    Count(CountArgs),
    /// Write randomly generated datasets
    Sample(SampleArgs),
}

/// Arguments of the `count` operation
#[derive(Args, Clone, Debug)]
pub struct CountArgs {
    /// Input file with datasets; reads standard input when omitted or `-`
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Maximum distinct placements accepted per dataset
    #[arg(short, long, default_value_t = DEFAULT_MAX_PLACEMENTS)]
    pub max_placements: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print per-dataset search statistics to standard error
    #[arg(short, long)]
    pub stats: bool,

    /// Cross-check small datasets against an exhaustive scan
    #[arg(short, long)]
    pub verify: bool,
}

impl CountArgs {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Input path, or `None` for standard input
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Engine settings derived from the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the placement cap is zero
    pub fn engine_config(&self) -> Result<EngineConfig> {
        if self.max_placements == 0 {
            return Err(invalid_parameter(
                "max-placements",
                &self.max_placements,
                &"must be at least 1",
            ));
        }
        Ok(EngineConfig {
            max_placements: self.max_placements,
            width: None,
        })
    }
}

/// Arguments of the `sample` operation
#[derive(Args, Clone, Debug)]
pub struct SampleArgs {
    /// Rows per grid
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_ROWS)]
    pub rows: usize,

    /// Columns per grid
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_COLS)]
    pub cols: usize,

    /// Probability that a cell is special
    #[arg(short, long, default_value_t = DEFAULT_SPECIAL_DENSITY)]
    pub density: f64,

    /// Number of datasets to write
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub count: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output file; writes to standard output when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl SampleArgs {
    /// Generator settings derived from the arguments
    pub const fn sample_config(&self) -> SampleConfig {
        SampleConfig {
            rows: self.rows,
            cols: self.cols,
            density: self.density,
            count: self.count,
            seed: self.seed,
        }
    }
}

/// Counts every dataset of an input and writes one answer per line
pub struct DatasetProcessor {
    args: CountArgs,
    counter: CoverCounter,
    progress_manager: Option<ProgressManager>,
}

impl DatasetProcessor {
    /// Create a processor for the given arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the arguments are inconsistent
    pub fn new(args: CountArgs) -> Result<Self> {
        let counter = CoverCounter::new(args.engine_config()?);
        let progress_manager = args.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            args,
            counter,
            progress_manager,
        })
    }

    /// Read datasets from the configured input
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or parsed
    pub fn load(&self) -> Result<Vec<Grid>> {
        match self.args.input_path() {
            Some(path) => {
                let file = File::open(path).with_path(path, "open")?;
                read_datasets(file)
            }
            None => read_datasets(std::io::stdin().lock()),
        }
    }

    /// Count every grid in order, writing one answer per line to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if a grid exceeds the placement cap, verification fails,
    /// or writing fails
    pub fn process<W: Write>(&mut self, grids: &[Grid], out: &mut W) -> Result<Vec<CoverReport>> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(grids.len());
        }

        let mut reports = Vec::with_capacity(grids.len());
        for (index, grid) in grids.iter().enumerate() {
            let report = self.process_grid(index, grid)?;
            writeln!(out, "{}", report.distinct_covers)?;
            reports.push(report);
        }
        out.flush()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    // Allow print for per-dataset statistics requested with --stats
    #[allow(clippy::print_stderr)]
    fn process_grid(&mut self, index: usize, grid: &Grid) -> Result<CoverReport> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_dataset(index, grid);
        }

        let report = if self.args.verify {
            let (report, reference) = self.counter.count_with_reference(grid)?;
            if let Some(reference) = reference
                && reference != report.distinct_covers
            {
                return Err(CoverError::VerificationFailed {
                    dataset: index,
                    optimized: report.distinct_covers,
                    reference,
                });
            }
            report
        } else {
            self.counter.count(grid)?
        };

        if self.args.stats {
            eprintln!(
                "dataset {index}: {}x{} grid, {} placements, {} maximal sets, {} search calls, {} distinct covers ({} masks, {:.2?})",
                grid.rows(),
                grid.cols(),
                report.placements,
                report.maximal_sets,
                report.search_calls,
                report.distinct_covers,
                report.width,
                start_time.elapsed()
            );
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_dataset(&report, start_time.elapsed());
        }

        Ok(report)
    }
}

/// Write sample datasets to the configured output
///
/// # Errors
///
/// Returns an error if the settings are invalid or the output cannot be written
pub fn run_sample(args: &SampleArgs) -> Result<()> {
    let grids = generate_grids(&args.sample_config())?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_path(path, "create")?;
            let mut writer = BufWriter::new(file);
            write_datasets(&mut writer, &grids)
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_datasets(&mut handle, &grids)
        }
    }
}

/// Run the operation selected on the command line
///
/// # Errors
///
/// Propagates any error of the selected operation
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Count(args) => {
            let mut processor = DatasetProcessor::new(args)?;
            let grids = processor.load()?;
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            processor.process(&grids, &mut handle)?;
            Ok(())
        }
        Command::Sample(args) => run_sample(&args),
    }
}
