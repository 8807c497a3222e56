use std::path::Path;

use anyhow::{Context, Result};
use umya_spreadsheet::structs::{HorizontalAlignmentValues, PatternValues, VerticalAlignmentValues};
use umya_spreadsheet::{Spreadsheet, Style};

use crate::conf::HeaderStyle;
use crate::sheet::TemplateSheet;

fn header_cell_style(header: &HeaderStyle) -> Style {
    let mut style = Style::default();
    let pattern = style.get_fill_mut().get_pattern_fill_mut();
    pattern.set_pattern_type(PatternValues::Solid);
    pattern.get_foreground_color_mut().set_argb(header.fill_argb.as_str());
    pattern.get_background_color_mut().set_argb(header.fill_argb.as_str());

    let font = style.get_font_mut();
    font.set_bold(header.bold);
    font.set_size(header.font_size);
    font.get_color_mut().set_argb(header.font_argb.as_str());

    if header.centered {
        let alignment = style.get_alignment_mut();
        alignment.set_horizontal(HorizontalAlignmentValues::Center);
        alignment.set_vertical(VerticalAlignmentValues::Center);
    }
    style
}

/// Render the model into a one-sheet workbook.
pub fn build_workbook(sheet: &TemplateSheet) -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file();
    let ws = book.get_active_sheet_mut();
    ws.set_name(sheet.name());

    // umya coordinates are (col, row), 1-based
    for (row_idx, row) in sheet.rows().iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            ws.get_cell_mut(((col_idx + 1) as u32, (row_idx + 1) as u32))
                .set_value_string(value);
        }
    }

    if let Some(header) = sheet.header_style() {
        let style = header_cell_style(header);
        for col_idx in 0..sheet.width() {
            ws.get_cell_mut(((col_idx + 1) as u32, 1u32))
                .set_style(style.clone());
        }
    }

    for (col_idx, width) in sheet.column_widths().iter().enumerate() {
        ws.get_column_dimension_by_number_mut(&((col_idx + 1) as u32))
            .set_width(*width);
    }

    book
}

/// Write `sheet` to `path`, replacing any existing file.
///
/// The workbook goes to a temporary file beside `path` first and is renamed
/// into place only once fully written; a failed write leaves `path` as it was.
pub fn write_xlsx(sheet: &TemplateSheet, path: &Path) -> Result<()> {
    let book = build_workbook(sheet);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = tempfile::Builder::new()
        .prefix(".template-")
        .suffix(".xlsx")
        .tempfile_in(dir)
        .with_context(|| format!("cannot create temporary file in: {}", dir.display()))?;

    umya_spreadsheet::writer::xlsx::write(&book, tmp.path())
        .with_context(|| format!("cannot save file: {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("cannot save file: {}", path.display()))?;

    tracing::info!(path = %path.display(), rows = sheet.rows().len(), "wrote workbook");
    Ok(())
}
