// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::date_to_excel_serial;
use crate::export::model::{PayrollExportRow, get_headers, row_to_cells, totals_cells};
use crate::export::notify_export_success;
use crate::models::PayrollEntry;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Columns holding hours or money.
const NUMERIC_COLUMNS: &[usize] = &[4, 5, 6, 7];
/// Columns holding `YYYY-MM-DD` dates.
const DATE_COLUMNS: &[usize] = &[8, 9];

/// Styled payroll sheet with a frozen header and a totals line.
pub(crate) fn export_xlsx(
    rows: &[PayrollExportRow],
    entries: &[PayrollEntry],
    period_start: &str,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(format!("Payroll {period_start}"))
        .map_err(to_export_error)?;

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }
    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in row_to_cells(r).iter().enumerate() {
            write_cell(worksheet, row, col, value, band, false)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    let totals_row = (rows.len() + 1) as u32;
    for (col, value) in totals_cells(entries).iter().enumerate() {
        if value.is_empty() {
            continue;
        }
        write_cell(worksheet, totals_row, col, value, Color::RGB(0xDDEBF7), true)?;
        col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: usize,
    value: &str,
    band: Color,
    bold: bool,
) -> AppResult<()> {
    let mut fmt = Format::new()
        .set_background_color(band)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    if bold {
        fmt = fmt.set_bold();
    }

    let col_u16 = col as u16;

    if DATE_COLUMNS.contains(&col)
        && let Some(serial) = date_to_excel_serial(value)
    {
        let fmt = fmt.set_num_format("yyyy-mm-dd");
        worksheet
            .write_with_format(row, col_u16, serial, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    if NUMERIC_COLUMNS.contains(&col)
        && let Ok(num) = value.parse::<f64>()
    {
        let fmt = fmt.set_num_format("0.00").set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col_u16, num, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col_u16, value, &fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
