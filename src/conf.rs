//! Fixed defaults for the student template.

use std::path::PathBuf;

/// Input CSV looked up in the working directory when no path is given.
pub const DEFAULT_INPUT: &str = "sample-student-template.csv";
/// Output workbook written to the working directory when no path is given.
pub const DEFAULT_OUTPUT: &str = "sample-student-template.xlsx";
/// Display name of the single worksheet.
pub const SHEET_NAME: &str = "Student Template";

/// Header fill, ARGB. Lower-case so umya keeps it as `rgb` instead of mapping
/// it onto an indexed palette entry.
pub const HEADER_FILL_ARGB: &str = "ff4472c4";
/// Header font color, ARGB (white).
pub const HEADER_FONT_ARGB: &str = "ffffffff";
/// Header font size in points.
pub const HEADER_FONT_SIZE: f64 = 11.0;

/// Padding added to the longest text in a column.
pub const WIDTH_PADDING: usize = 2;
/// Upper bound for any column width.
pub const WIDTH_MAX: usize = 50;

/// Visual style applied to every cell of the header row.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStyle {
    pub fill_argb: String,
    pub font_argb: String,
    pub font_size: f64,
    pub bold: bool,
    /// Center horizontally and vertically.
    pub centered: bool,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            fill_argb: HEADER_FILL_ARGB.to_string(),
            font_argb: HEADER_FONT_ARGB.to_string(),
            font_size: HEADER_FONT_SIZE,
            bold: true,
            centered: true,
        }
    }
}

/// Everything one conversion needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sheet_name: String,
    pub header_style: HeaderStyle,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sheet_name: SHEET_NAME.to_string(),
            header_style: HeaderStyle::default(),
        }
    }
}

impl TemplateOptions {
    /// Apply positional overrides `[INPUT [OUTPUT]]`.
    ///
    /// With only INPUT the output sits next to it with an `xlsx` extension.
    pub fn with_args(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.output = output.unwrap_or_else(|| input.with_extension("xlsx"));
            self.input = input;
        } else if let Some(output) = output {
            self.output = output;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_working_directory() {
        let opts = TemplateOptions::default();
        assert_eq!(opts.input, PathBuf::from("sample-student-template.csv"));
        assert_eq!(opts.output, PathBuf::from("sample-student-template.xlsx"));
        assert_eq!(opts.sheet_name, "Student Template");
        assert!(opts.header_style.bold);
    }

    #[test]
    fn input_override_derives_output() {
        let opts = TemplateOptions::default().with_args(Some(PathBuf::from("data/roster.csv")), None);
        assert_eq!(opts.input, PathBuf::from("data/roster.csv"));
        assert_eq!(opts.output, PathBuf::from("data/roster.xlsx"));
    }

    #[test]
    fn explicit_output_wins() {
        let opts = TemplateOptions::default()
            .with_args(Some(PathBuf::from("a.csv")), Some(PathBuf::from("out/b.xlsx")));
        assert_eq!(opts.output, PathBuf::from("out/b.xlsx"));
    }
}
