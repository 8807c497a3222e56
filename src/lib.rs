//! Build the styled student template workbook from its CSV source.
//!
//! - `conf`   : fixed names, colors and width limits
//! - `loader` : CSV to rows of text
//! - `sheet`  : sheet model, header styling, column sizing
//! - `writer` : model to XLSX on disk
pub mod conf;
pub mod loader;
pub mod sheet;
pub mod writer;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

pub use conf::{HeaderStyle, TemplateOptions};
pub use loader::{Row, load_rows};
pub use sheet::{TemplateSheet, cell_text_len, column_width};
pub use writer::{build_workbook, write_xlsx};

/// Load, build, style, size and write. Returns the written path.
pub fn convert(opts: &TemplateOptions) -> Result<PathBuf> {
    let rows = load_rows(&opts.input)?;

    let mut sheet = TemplateSheet::from_rows(opts.sheet_name.as_str(), rows);
    sheet.apply_header_style(opts.header_style.clone());
    sheet.size_columns();

    write_xlsx(&sheet, &opts.output)?;
    Ok(opts.output.clone())
}

pub fn run(args: impl IntoIterator<Item = OsString>) -> Result<()> {
    let mut args = args.into_iter();
    let _exe = args.next();

    let input = args.next().map(PathBuf::from);
    let output = args.next().map(PathBuf::from);
    if let Some(extra) = args.next() {
        return Err(anyhow!(
            "unexpected argument: {}; usage: studenttemplate [INPUT.csv [OUTPUT.xlsx]]",
            extra.to_string_lossy()
        ));
    }
    let opts = TemplateOptions::default().with_args(input, output);
    tracing::debug!(?opts, "starting");

    let out = convert(&opts)?;
    println!("{}", confirmation(&out));
    Ok(())
}

fn confirmation(out: &Path) -> String {
    format!("✓ Created {}", out.display())
}
