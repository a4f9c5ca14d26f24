//! PDF → text. Extraction failures degrade to an empty document instead of
//! failing the request.

use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, warn};

/// Flat text of a résumé in document order. Empty lines are kept: they count
/// towards the page estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawResumeText(String);

impl RawResumeText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `\n`-separated lines. A trailing newline yields a trailing empty line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('\n')
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

/// Extracts text from an uploaded PDF on the blocking pool.
///
/// Corrupt or unreadable documents (including ones that make the parser
/// panic) come back as empty text.
pub async fn extract_pdf_text(bytes: Bytes) -> RawResumeText {
    let size = bytes.len();
    let result = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
    })
    .await;

    match result {
        Ok(Ok(text)) => {
            debug!(size, chars = text.len(), "Extracted text from PDF");
            RawResumeText::new(text)
        }
        Ok(Err(e)) => {
            warn!(size, "PDF text extraction failed: {e}");
            RawResumeText::empty()
        }
        Err(e) => {
            warn!(size, "PDF text extraction aborted: {e}");
            RawResumeText::empty()
        }
    }
}

/// Minimal single-page PDFs for tests.
#[cfg(test)]
pub mod fixtures {
    /// One Helvetica text line per entry, top to bottom, with a correct xref
    /// table. Fits roughly 60 lines on the page.
    pub fn one_page_pdf(lines: &[&str]) -> Vec<u8> {
        let mut content = String::from("BT\n/F1 10 Tf\n72 760 Td\n");
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                content.push_str("0 -11 Td\n");
            }
            let escaped = line
                .replace('\\', "\\\\")
                .replace('(', "\\(")
                .replace(')', "\\)");
            content.push_str(&format!("({escaped}) Tj\n"));
        }
        content.push_str("ET\n");

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
                .to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}endstream",
                content.len(),
                content
            ),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref_start = pdf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.extend_from_slice(xref.as_bytes());
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_start
            )
            .as_bytes(),
        );
        pdf
    }
}
