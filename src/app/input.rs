//! Batch input parsing.

use log::warn;

use crate::geo::Coordinate;

/// Maximum accepted line length. Real readings are well under 100 characters.
const MAX_LINE_LENGTH: usize = 256;

/// Parses a `lat,lon[,accuracy]` reading.
///
/// Logs a warning and returns `None` for malformed lines or coordinates outside
/// the valid ranges. Callers skip blank and `#` comment lines before calling.
pub fn parse_reading_line(line: &str) -> Option<Coordinate> {
    if line.len() > MAX_LINE_LENGTH {
        warn!(
            "Skipping line exceeding maximum length ({} > {}): {}...",
            line.len(),
            MAX_LINE_LENGTH,
            line.chars().take(50).collect::<String>()
        );
        return None;
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if !(2..=3).contains(&fields.len()) {
        warn!("Skipping line without lat,lon[,accuracy] fields: {line}");
        return None;
    }

    let numbers: Result<Vec<f64>, _> = fields.iter().map(|f| f.parse::<f64>()).collect();
    let Ok(numbers) = numbers else {
        warn!("Skipping line with non-numeric field: {line}");
        return None;
    };

    let mut coordinate = Coordinate::new(numbers[0], numbers[1]);
    if let Some(&accuracy) = numbers.get(2) {
        coordinate = coordinate.with_accuracy(accuracy);
    }

    match coordinate.validate() {
        Ok(()) => Some(coordinate),
        Err(e) => {
            warn!("Skipping invalid reading '{line}': {e}");
            None
        }
    }
}

/// True for lines the batch reader ignores entirely.
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lat_lon() {
        assert_eq!(
            parse_reading_line("33.97121,-84.18066"),
            Some(Coordinate::new(33.97121, -84.18066))
        );
    }

    #[test]
    fn test_parse_with_accuracy_and_spaces() {
        assert_eq!(
            parse_reading_line(" 33.97121 , -84.18066 , 12.5 "),
            Some(Coordinate::new(33.97121, -84.18066).with_accuracy(12.5))
        );
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert_eq!(parse_reading_line("33.97121"), None);
        assert_eq!(parse_reading_line("1,2,3,4"), None);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_reading_line("north,-84.18066"), None);
        assert_eq!(parse_reading_line("33.9,-84.1,close"), None);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(parse_reading_line("95.0,10.0"), None);
        assert_eq!(parse_reading_line("10.0,200.0"), None);
        assert_eq!(parse_reading_line("10.0,20.0,-3"), None);
    }

    #[test]
    fn test_parse_rejects_overlong_line() {
        let line = format!("1.0,{}", "1".repeat(MAX_LINE_LENGTH));
        assert_eq!(parse_reading_line(&line), None);
    }

    #[test]
    fn test_is_skippable() {
        assert!(is_skippable(""));
        assert!(is_skippable("   "));
        assert!(is_skippable("# header"));
        assert!(is_skippable("  # indented comment"));
        assert!(!is_skippable("1.0,2.0"));
    }
}
