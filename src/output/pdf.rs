//! PDF feedback reports

use crate::error::{Result, ScreenerError};
use crate::output::report::FeedbackReport;
use log::info;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use std::path::{Path, PathBuf};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const LINE_HEIGHT: f32 = 8.0;
const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Writes one feedback PDF per candidate
pub struct FeedbackPdfWriter {
    font_size: f32,
}

impl Default for FeedbackPdfWriter {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE)
    }
}

/// Tracks the write position and starts new pages as lines run out
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> PageCursor<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        if self.y < MARGIN {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
        self.layer.use_text(text, size, Mm(MARGIN), Mm(self.y), font);
        self.y -= LINE_HEIGHT;
    }

    fn skip(&mut self, lines: f32) {
        self.y -= LINE_HEIGHT * lines;
    }
}

impl FeedbackPdfWriter {
    pub fn new(font_size: f32) -> Self {
        Self { font_size }
    }

    /// Render the report to PDF bytes
    pub fn render(&self, report: &FeedbackReport) -> Result<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            "Resume Analyzer Report",
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ScreenerError::ReportGeneration(format!("Failed to load font: {:?}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ScreenerError::ReportGeneration(format!("Failed to load font: {:?}", e)))?;

        {
            let mut cursor = PageCursor::new(&doc, doc.get_page(page).get_layer(layer));
            cursor.line("Resume Analyzer Report", self.font_size + 4.0, &bold);
            cursor.skip(1.0);
            cursor.line(&format!("Candidate: {}", report.candidate), self.font_size, &regular);
            cursor.line(&format!("Job Role: {}", report.role), self.font_size, &regular);
            cursor.line(&format!("Matching Score: {:.2}/100", report.score), self.font_size, &regular);
            cursor.line(
                &format!("Generated: {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")),
                self.font_size - 2.0,
                &regular,
            );
            cursor.skip(0.5);
            cursor.line("Missing Skills:", self.font_size, &bold);

            if report.missing_skills.is_empty() {
                cursor.line("No major skills missing!", self.font_size, &regular);
            }
            for skill in &report.missing_skills {
                cursor.line(&format!("- {}", skill), self.font_size, &regular);
            }
        }

        doc.save_to_bytes()
            .map_err(|e| ScreenerError::ReportGeneration(format!("Failed to write PDF: {:?}", e)))
    }

    /// Render and save into `dir`, returning the written path
    pub fn write(&self, report: &FeedbackReport, dir: &Path) -> Result<PathBuf> {
        let bytes = self.render(report)?;
        std::fs::create_dir_all(dir)?;

        let path = dir.join(report.file_name());
        std::fs::write(&path, bytes)?;
        info!("Feedback report for '{}' saved to {}", report.candidate, path.display());
        Ok(path)
    }
}
