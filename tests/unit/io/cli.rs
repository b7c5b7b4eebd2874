//! Tests for command-line parsing and dataset processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use tricover::CoverError;
    use tricover::io::cli::{Cli, Command, CountArgs, DatasetProcessor, run_sample};
    use tricover::io::configuration::{DEFAULT_MAX_PLACEMENTS, DEFAULT_SEED};
    use tricover::io::parser::parse_datasets;

    fn count_args(cli: Cli) -> CountArgs {
        match cli.command {
            Command::Count(args) => args,
            Command::Sample(_) => unreachable!("Expected count command"),
        }
    }

    fn quiet_args() -> CountArgs {
        count_args(Cli::parse_from(["tricover", "count", "--quiet"]))
    }

    // Tests count parsing with only the subcommand
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_count_parse_minimal_args() {
        let args = count_args(Cli::parse_from(["tricover", "count"]));

        assert_eq!(args.input, None);
        assert_eq!(args.input_path(), None);
        assert_eq!(args.max_placements, DEFAULT_MAX_PLACEMENTS);
        assert!(!args.quiet);
        assert!(!args.stats);
        assert!(!args.verify);
        assert!(args.should_show_progress());
    }

    // Tests count parsing with all available arguments
    // Verified by dropping the long names from the argument attributes
    #[test]
    fn test_count_parse_all_args() {
        let args = count_args(Cli::parse_from([
            "tricover",
            "count",
            "grids.txt",
            "--max-placements",
            "100",
            "--quiet",
            "--stats",
            "--verify",
        ]));

        assert_eq!(args.input, Some(PathBuf::from("grids.txt")));
        assert_eq!(args.input_path(), Some(Path::new("grids.txt")));
        assert_eq!(args.max_placements, 100);
        assert!(args.quiet);
        assert!(args.stats);
        assert!(args.verify);
        assert!(!args.should_show_progress());
    }

    // Tests a dash selects standard input
    // Verified by treating the dash as a file name
    #[test]
    fn test_dash_means_stdin() {
        let args = count_args(Cli::parse_from(["tricover", "count", "-"]));
        assert_eq!(args.input_path(), None);
    }

    // Tests a zero placement cap is rejected
    // Verified by accepting any cap
    #[test]
    fn test_zero_cap_rejected() {
        let mut args = quiet_args();
        args.max_placements = 0;
        assert!(matches!(
            DatasetProcessor::new(args),
            Err(CoverError::InvalidParameter { .. })
        ));
    }

    // Tests sample parsing defaults
    // Verified by changing the default seed
    #[test]
    fn test_sample_parse_defaults() {
        let cli = Cli::parse_from(["tricover", "sample", "--rows", "3", "-n", "2"]);
        let Command::Sample(args) = cli.command else {
            unreachable!("Expected sample command");
        };

        assert_eq!(args.rows, 3);
        assert_eq!(args.count, 2);
        assert_eq!(args.seed, DEFAULT_SEED);
        assert_eq!(args.sample_config().rows, 3);
        assert!(args.output.is_none());
    }

    // Tests answers are written one per line in input order
    // Verified by writing answers in reverse order
    #[test]
    fn test_process_writes_answers_in_order() {
        let grids = parse_datasets("3 3\n*..\n...\n...\n3 3\n...\n.*.\n...\n3 3\n***\n***\n***\n")
            .unwrap();
        let mut processor = DatasetProcessor::new(quiet_args()).unwrap();

        let mut out = Vec::new();
        let reports = processor.process(&grids, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "2\n1\n1\n");
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[2].maximal_sets, 2);
    }

    // Tests verification passes when both counters agree
    // Verified by comparing against the maximal set count
    #[test]
    fn test_process_with_verification() {
        let grids = parse_datasets("4 4\n*..*\n....\n.*..\n...*\n").unwrap();
        let mut args = quiet_args();
        args.verify = true;
        let mut processor = DatasetProcessor::new(args).unwrap();

        let mut out = Vec::new();
        assert!(processor.process(&grids, &mut out).is_ok());
        assert!(!out.is_empty());
    }

    // Tests datasets are loaded from an input file
    // Verified by always reading standard input
    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1 5\n..*..\n").unwrap();

        let mut args = quiet_args();
        args.input = Some(file.path().to_path_buf());
        let mut processor = DatasetProcessor::new(args).unwrap();

        let grids = processor.load().unwrap();
        let mut out = Vec::new();
        processor.process(&grids, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2\n");
    }

    // Tests a missing input file reports the path
    // Verified by dropping the path context from open errors
    #[test]
    fn test_load_missing_file() {
        let mut args = quiet_args();
        args.input = Some(PathBuf::from("/nonexistent/grids.txt"));
        let processor = DatasetProcessor::new(args).unwrap();

        match processor.load() {
            Err(CoverError::FileSystem { path, operation, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/grids.txt"));
                assert_eq!(operation, "open");
            }
            _ => unreachable!("Expected FileSystem error type"),
        }
    }

    // Tests sample output can be written to a file and parsed back
    // Verified by ignoring the output path
    #[test]
    fn test_run_sample_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        let cli = Cli::parse_from([
            "tricover",
            "sample",
            "--rows",
            "4",
            "--cols",
            "5",
            "-n",
            "3",
            "--output",
            path.to_str().unwrap(),
        ]);
        let Command::Sample(args) = cli.command else {
            unreachable!("Expected sample command");
        };

        run_sample(&args).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let grids = parse_datasets(&text).unwrap();
        assert_eq!(grids.len(), 3);
        assert!(grids.iter().all(|grid| grid.cell_count() == 20));
    }
}
