// src/export/pdf.rs

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const FONT: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

/// A4 landscape, in points.
struct Layout {
    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            page_w: 842.0,
            page_h: 595.0,
            margin: 40.0,
            row_h: 18.0,
            font_size: 9.0,
            header_font_size: 9.5,
            title_font_size: 14.0,
        }
    }
}

/// Paginated table writer on top of `pdf-writer`, with standard Helvetica fonts.
pub struct PdfTable {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    bold_font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,
    layout: Layout,
}

impl Default for PdfTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfTable {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            bold_font_id,
            page_refs: Vec::new(),
            next_id: 5,
            layout: Layout::default(),
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register a page and return the id its content stream must be written to.
    fn open_page(&mut self) -> Ref {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.layout.page_w, self.layout.page_h))
            .contents(content_id);
        page.resources()
            .fonts()
            .pair(FONT, self.font_id)
            .pair(FONT_BOLD, self.bold_font_id);

        content_id
    }

    fn text(content: &mut Content, font: Name, x: f32, y: f32, size: f32, text: &str) {
        let safe = pdf_safe(text);
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(safe.as_bytes()));
        content.end_text();
    }

    fn band(content: &mut Content, x: f32, y: f32, w: f32, h: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(&self, content: &mut Content, y: f32, widths: &[f32], cells: &[String], font: Name, size: f32) {
        let mut x = self.layout.margin;
        for (cell, w) in cells.iter().zip(widths) {
            Self::text(content, font, x + 3.0, y + 5.0, size, &truncate(cell, *w, size));

            content.save_state();
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, *w, self.layout.row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Widths proportional to the longest cell, scaled to fit the page.
    fn column_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 5.5 + 8.0).collect();
        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(cell.chars().count() as f32 * 5.0 + 8.0);
            }
        }

        let available = self.layout.page_w - 2.0 * self.layout.margin;
        let total: f32 = widths.iter().sum();
        if total > available {
            let scale = available / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }
        widths
    }

    /// Write `rows` over as many pages as needed. Every page repeats the
    /// title and header row; `totals` goes under the last row.
    pub fn write_table(
        &mut self,
        title: &str,
        subtitle: &str,
        headers: &[&str],
        rows: &[Vec<String>],
        totals: Option<&[String]>,
    ) {
        let widths = self.column_widths(headers, rows);
        let table_w: f32 = widths.iter().sum();
        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        let top = self.layout.page_h - self.layout.margin - 40.0;
        // header row + totals row are reserved on every page
        let per_page = (((top - self.layout.margin) / self.layout.row_h) as usize)
            .saturating_sub(2)
            .max(1);

        let chunks: Vec<&[Vec<String>]> = if rows.is_empty() {
            vec![rows]
        } else {
            rows.chunks(per_page).collect()
        };
        let page_count = chunks.len();

        for (page_idx, chunk) in chunks.into_iter().enumerate() {
            let content_id = self.open_page();
            let mut content = Content::new();
            let l = &self.layout;

            Self::text(&mut content, FONT_BOLD, l.margin, l.page_h - l.margin, l.title_font_size, title);
            Self::text(&mut content, FONT, l.margin, l.page_h - l.margin - 16.0, l.font_size, subtitle);
            Self::text(
                &mut content,
                FONT,
                l.page_w - l.margin - 70.0,
                l.margin - 25.0,
                l.font_size,
                &format!("Page {} of {}", page_idx + 1, page_count),
            );

            let mut y = top;
            Self::band(&mut content, l.margin, y, table_w, l.row_h, (0.85, 0.87, 0.90));
            self.draw_row(&mut content, y, &widths, &header_cells, FONT_BOLD, self.layout.header_font_size);
            y -= self.layout.row_h;

            for (i, row) in chunk.iter().enumerate() {
                if i % 2 == 0 {
                    Self::band(&mut content, self.layout.margin, y, table_w, self.layout.row_h, (0.96, 0.96, 0.96));
                }
                self.draw_row(&mut content, y, &widths, row, FONT, self.layout.font_size);
                y -= self.layout.row_h;
            }

            if page_idx + 1 == page_count
                && let Some(t) = totals
            {
                Self::band(&mut content, self.layout.margin, y, table_w, self.layout.row_h, (0.87, 0.92, 0.97));
                self.draw_row(&mut content, y, &widths, t, FONT_BOLD, self.layout.font_size);
            }

            self.pdf.stream(content_id, &content.finish());
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf
            .pages(self.pages_id)
            .count(self.page_refs.len() as i32)
            .kids(self.page_refs.iter().copied());

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Text is written as raw bytes with the standard fonts: keep ASCII only.
fn pdf_safe(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect()
}

fn truncate(text: &str, width: f32, size: f32) -> String {
    let max_chars = ((width - 6.0) / (size * 0.5)).max(1.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut s: String = text.chars().take(max_chars.saturating_sub(2)).collect();
    s.push_str("..");
    s
}
