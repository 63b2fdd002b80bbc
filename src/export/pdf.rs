use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Minimal table writer on top of `pdf_writer`: A4 pages, Helvetica,
/// automatic page breaks, highlighted trailing rows for totals.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    line_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,
            line_h: 14.0,

            next_id: 5,
            font_id,
            bold_font_id,

            font_size: 10.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources()
            .fonts()
            .pair(Name(b"F1"), self.font_id)
            .pair(Name(b"F2"), self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, bold: bool, text: &str) {
        let font = if bold { Name(b"F2") } else { Name(b"F1") };
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&win_ansi(text)));
        content.end_text();
    }

    fn fill_row(&self, content: &mut Content, y: f32, width: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        bold: bool,
    ) {
        let mut x = self.margin;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            self.draw_text(content, x + 4.0, y + 6.0, self.font_size, bold, text);

            content.save_state();
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, w, self.row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Column widths from header + content, scaled down to fit the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5 + 8.0).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = (cell.len() as f32 * 6.0 + 8.0).max(widths[i]);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            true,
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            false,
            &pg,
        );
    }

    /// Multi-page table. The last `highlighted` rows (totals) are drawn bold
    /// on a darker background.
    pub fn write_table(
        &mut self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<String>],
        highlighted: usize,
    ) {
        let col_widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = col_widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let first_highlighted = rows.len().saturating_sub(highlighted);

        let mut done = 0;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, title, page_idx);

            let mut y = self.page_h - self.margin - 30.0;

            self.fill_row(&mut content, y, table_w, 0.85);
            self.draw_row(&mut content, y, &col_widths, &header_row, true);
            y -= self.row_h;

            while done < rows.len() && y - self.row_h >= self.margin {
                let is_total = done >= first_highlighted;

                if is_total {
                    self.fill_row(&mut content, y, table_w, 0.90);
                } else if done % 2 == 0 {
                    self.fill_row(&mut content, y, table_w, 0.96);
                }

                self.draw_row(&mut content, y, &col_widths, &rows[done], is_total);

                y -= self.row_h;
                done += 1;
            }

            self.finalize_page(content);
            page_idx += 1;

            if done >= rows.len() {
                break;
            }
        }
    }

    /// A page of free text, wrapped to the printable width.
    pub fn write_notes(&mut self, heading: &str, text: &str) {
        let lines = textwrap::wrap(text, 90);

        let mut content = self.new_page();
        let mut y = self.page_h - self.margin;

        self.draw_text(&mut content, self.margin, y, self.header_font_size + 2.0, true, heading);
        y -= self.line_h * 1.5;

        for line in lines {
            if y < self.margin {
                self.finalize_page(content);
                content = self.new_page();
                y = self.page_h - self.margin;
            }
            self.draw_text(&mut content, self.margin, y, self.font_size, false, &line);
            y -= self.line_h;
        }

        self.finalize_page(content);
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Text bytes for the WinAnsi-encoded Helvetica fonts. Latin-1 maps directly,
/// typographic punctuation goes to its WinAnsi slot, arrows are spelled out
/// and anything else becomes '?'.
fn win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        let byte = match c {
            ' '..='~' => c as u8,
            '\t' | '\n' | '\r' => b' ',
            '\u{A0}'..='\u{FF}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‰' => 0x89,
            '‹' => 0x8B,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            '›' => 0x9B,
            '→' | '⇒' => {
                out.extend_from_slice(b"->");
                continue;
            }
            '←' | '⇐' => {
                out.extend_from_slice(b"<-");
                continue;
            }
            _ => b'?',
        };
        out.push(byte);
    }
    out
}
