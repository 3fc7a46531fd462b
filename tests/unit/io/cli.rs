//! Tests for command-line parsing and the drawing processor

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridlines::GridError;
    use gridlines::composition::style::Unit;
    use gridlines::io::cli::{Cli, DrawingProcessor};
    use gridlines::io::configuration::{
        DEFAULT_COLUMNS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_OUTPUT_PATH,
        DEFAULT_ROWS,
    };
    use std::path::PathBuf;

    // Tests parsing with no arguments reproduces the reference configuration
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["gridlines"]);

        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!((cli.width - DEFAULT_GRID_WIDTH).abs() < f64::EPSILON);
        assert!((cli.height - DEFAULT_GRID_HEIGHT).abs() < f64::EPSILON);
        assert_eq!(cli.columns, DEFAULT_COLUMNS);
        assert_eq!(cli.rows, DEFAULT_ROWS);
        assert_eq!(cli.unit, Unit::Inch);
        assert!(!cli.strict);
        assert!(!cli.quiet);
    }

    // Tests parsing with all available arguments
    // Verified by renaming the unit values
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "gridlines",
            "--output",
            "out/grid.svg",
            "--width",
            "300",
            "--height",
            "200",
            "--columns",
            "6",
            "--rows",
            "4",
            "--unit",
            "mm",
            "--strict",
            "--quiet",
        ]);

        assert_eq!(cli.output, PathBuf::from("out/grid.svg"));
        assert!((cli.width - 300.0).abs() < f64::EPSILON);
        assert!((cli.height - 200.0).abs() < f64::EPSILON);
        assert_eq!(cli.columns, 6);
        assert_eq!(cli.rows, 4);
        assert_eq!(cli.unit, Unit::Millimeter);
        assert!(cli.strict);
        assert!(cli.quiet);
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "gridlines", "-W", "10", "-H", "8", "-c", "2", "-r", "3", "-u", "cm", "-s", "-q",
        ]);

        assert_eq!(cli.columns, 2);
        assert_eq!(cli.rows, 3);
        assert_eq!(cli.unit, Unit::Centimeter);
        assert!(cli.strict && cli.quiet);
    }

    // Tests unknown units are rejected by the parser
    // Verified by accepting arbitrary unit strings
    #[test]
    fn test_cli_rejects_unknown_unit() {
        assert!(Cli::try_parse_from(["gridlines", "--unit", "ft"]).is_err());
    }

    // Tests configuration validation happens before composing
    // Verified by building the config without Dimensions::new
    #[test]
    fn test_to_config_validates() {
        let valid = Cli::parse_from(["gridlines", "--columns", "3"]).to_config();
        assert!(valid.is_ok_and(|config| config.dimensions.columns == 3));

        let zero_rows = Cli::parse_from(["gridlines", "--rows", "0"]).to_config();
        assert!(matches!(
            zero_rows,
            Err(GridError::InvalidConfiguration {
                parameter: "rows",
                ..
            })
        ));

        let negative = Cli::parse_from(["gridlines", "--width=-2"]).to_config();
        assert!(negative.is_err());
    }

    // Tests the processor writes the drawing to the configured output
    // Verified by skipping the export step
    #[test]
    fn test_processor_writes_output() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let output = dir.path().join("nested").join("grid.svg");
        let path = output.to_string_lossy().to_string();
        let cli = Cli::parse_from(["gridlines", "--output", path.as_str()]);

        let drawing = DrawingProcessor::new(cli).process();

        assert!(drawing.is_ok_and(|drawing| drawing.layers().len() == 4));
        let contents = std::fs::read_to_string(&output).unwrap_or_default();
        assert!(contents.contains("<svg"));
        assert!(contents.contains("id=\"right-offset\""));
    }

    // Tests strict mode rejects drawings with empty line layers
    // Verified by ignoring the strict flag
    #[test]
    fn test_processor_strict_mode() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let output = dir.path().join("single.svg");
        let path = output.to_string_lossy().to_string();

        let strict = Cli::parse_from(["gridlines", "-o", path.as_str(), "-c", "1", "--strict"]);
        assert!(matches!(
            DrawingProcessor::new(strict).process(),
            Err(GridError::EmptyResult { .. })
        ));
        assert!(!output.exists());

        let lenient = Cli::parse_from(["gridlines", "-o", path.as_str(), "-c", "1"]);
        assert!(DrawingProcessor::new(lenient).process().is_ok());
        assert!(output.exists());
    }
}
