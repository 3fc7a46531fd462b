//! Tests for drawing constants and defaults

#[cfg(test)]
mod tests {
    use gridlines::composition::composer::DrawingConfig;
    use gridlines::composition::style::Unit;
    use gridlines::io::configuration::{
        ALL_LAYER, BACKGROUND_LAYER, CENTER_LINE_WEIGHT_MM, CENTER_LINES_LAYER,
        DEFAULT_COLUMNS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_OUTPUT_PATH,
        DEFAULT_ROWS, DEFAULT_UNIT, LEFT_OFFSET_LAYER, OFFSET_LINE_WEIGHT_MM,
        OFFSET_PITCH_FRACTION, RIGHT_OFFSET_LAYER,
    };
    use std::collections::HashSet;
    use std::path::PathBuf;

    // Tests the reference template dimensions
    // Verified by changing constant values
    #[test]
    fn test_reference_template() {
        assert!((DEFAULT_GRID_WIDTH - 9.75).abs() < f64::EPSILON);
        assert!((DEFAULT_GRID_HEIGHT - 7.75).abs() < f64::EPSILON);
        assert_eq!(DEFAULT_COLUMNS, 5);
        assert_eq!(DEFAULT_ROWS, 5);
        assert_eq!(DEFAULT_UNIT, Unit::Inch);
        assert_eq!(DEFAULT_OUTPUT_PATH, ".cache/test.svg");
    }

    // Tests the default drawing config is built from the constants and is valid
    // Verified by swapping width and height in Default
    #[test]
    fn test_default_drawing_config() {
        let config = DrawingConfig::default();

        assert!((config.extent.width - DEFAULT_GRID_WIDTH).abs() < f64::EPSILON);
        assert!((config.extent.height - DEFAULT_GRID_HEIGHT).abs() < f64::EPSILON);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(config.validate().is_ok());
        assert!((config.offset_distance() - 0.4875).abs() < 1e-12);
    }

    // Tests layer names are distinct
    // Verified by duplicating a layer name
    #[test]
    fn test_layer_names_unique() {
        let names: HashSet<&str> = [
            BACKGROUND_LAYER,
            CENTER_LINES_LAYER,
            LEFT_OFFSET_LAYER,
            RIGHT_OFFSET_LAYER,
            ALL_LAYER,
        ]
        .into_iter()
        .collect();

        assert_eq!(names.len(), 5);
    }

    // Tests offset lines are heavier than center lines and shift by a quarter cell
    // Verified by swapping the weights
    #[test]
    fn test_line_weights_and_shift() {
        assert!(OFFSET_LINE_WEIGHT_MM > CENTER_LINE_WEIGHT_MM);
        assert!((OFFSET_PITCH_FRACTION - 0.25).abs() < f64::EPSILON);
    }
}
