//! FILENAME: exporter/src/metadata.rs
//! PURPOSE: Renders the descriptive metadata record onto the second sheet.
//! CONTEXT: The sheet is a fixed-order sequence of sections of label/value
//! pairs and reference entries. A populated section gets a bold header label
//! and a trailing blank separator row; fields and collections that are
//! null/empty are skipped entirely, so no empty section header is ever
//! emitted. Hyperlink-valued fields render as navigable links whose visible
//! text is the URL.

use model::{Alert, Change, CodeList, Contact, Download, Metadata, Reference, UsageNote};
use persistence::{Cell, CellValue, PersistenceError, Row, Sheet, Style, Workbook};

pub const METADATA_SHEET_NAME: &str = "Metadata";

/// Extra character width for the label column.
const LABEL_COLUMN_PADDING: f64 = 2.0;

pub(crate) fn write_metadata_sheet(
    workbook: &mut Workbook,
    metadata: &Metadata,
) -> Result<(), PersistenceError> {
    let mut writer = MetaWriter {
        sheet: workbook.add_sheet(METADATA_SHEET_NAME),
        label_width: 0,
    };

    writer.section(None, |s| headline(s, metadata))?;
    writer.section(Some("Contacts"), |s| contacts(s, &metadata.contacts))?;
    writer.section(Some("Alerts"), |s| alerts(s, &metadata.alerts))?;
    writer.section(Some("Latest changes"), |s| {
        changes(s, &metadata.latest_changes)
    })?;
    writer.section(Some("Dimensions"), |s| dimensions(s, &metadata.dimensions))?;
    writer.section(Some("Methodology"), |s| references(s, &metadata.methodologies))?;
    writer.section(Some("Publications"), |s| references(s, &metadata.publications))?;
    writer.section(Some("Quality and methodology information"), |s| {
        if let Some(qmi) = &metadata.qmi {
            reference(s, qmi);
        }
    })?;
    writer.section(Some("Related datasets"), |s| {
        references(s, &metadata.related_datasets)
    })?;
    writer.section(Some("Links"), |s| references(s, &metadata.links))?;
    writer.section(Some("Available downloads"), |s| {
        downloads(s, &metadata.downloads)
    })?;
    writer.section(Some("Usage notes"), |s| usage_notes(s, &metadata.usage_notes))?;

    writer.finish();
    Ok(())
}

// ============================================================================
// SECTION PLUMBING
// ============================================================================

struct MetaWriter<'a> {
    sheet: &'a mut Sheet,
    label_width: usize,
}

impl MetaWriter<'_> {
    /// Stage a section, emitting it only when it produced at least one row.
    fn section<F>(&mut self, header: Option<&str>, fill: F) -> Result<(), PersistenceError>
    where
        F: FnOnce(&mut SectionBuffer),
    {
        let mut buffer = SectionBuffer { rows: Vec::new() };
        fill(&mut buffer);
        if buffer.rows.is_empty() {
            return Ok(());
        }

        if let Some(header) = header {
            self.sheet
                .append_row(vec![Cell::text_with_style(header, Style::Bold)])?;
            self.label_width = self.label_width.max(header.chars().count());
        }
        for row in buffer.rows {
            if let Some(Cell {
                value: CellValue::Text(label),
                ..
            }) = row.first()
            {
                self.label_width = self.label_width.max(label.chars().count());
            }
            self.sheet.append_row(row)?;
        }
        // Blank separator row after every populated section.
        self.sheet.append_row(Vec::new())?;
        Ok(())
    }

    fn finish(self) {
        if self.label_width > 0 {
            self.sheet
                .set_column_width(0, self.label_width as f64 + LABEL_COLUMN_PADDING);
        }
    }
}

/// Rows staged for one section before we know whether it is populated.
struct SectionBuffer {
    rows: Vec<Row>,
}

impl SectionBuffer {
    /// Label/value pair; skipped when the value is absent or empty.
    fn pair(&mut self, label: &str, value: &Option<String>) {
        if let Some(value) = value {
            if !value.is_empty() {
                self.rows
                    .push(vec![Cell::text(label), Cell::text(value.clone())]);
            }
        }
    }

    /// Label/hyperlink pair; the visible text is the URL itself.
    fn link_pair(&mut self, label: &str, href: &Option<String>) {
        if let Some(href) = href {
            if !href.is_empty() {
                self.rows
                    .push(vec![Cell::text(label), Cell::link(href.clone())]);
            }
        }
    }

    fn flag(&mut self, label: &str, value: &Option<bool>) {
        if let Some(value) = value {
            let rendered = if *value { "Yes" } else { "No" };
            self.rows
                .push(vec![Cell::text(label), Cell::text(rendered)]);
        }
    }

    fn line(&mut self, text: &str) {
        self.rows.push(vec![Cell::text(text)]);
    }

    fn link(&mut self, href: &str) {
        self.rows.push(vec![Cell::link(href)]);
    }

    /// Blank line between repeated entries within one section.
    fn entry(&mut self) {
        if !self.rows.is_empty() {
            self.rows.push(Vec::new());
        }
    }
}

// ============================================================================
// SECTIONS
// ============================================================================

fn headline(s: &mut SectionBuffer, metadata: &Metadata) {
    s.pair("Title", &metadata.title);
    s.pair("Description", &metadata.description);
    s.pair("Release date", &metadata.release_date);
    s.pair("Next release", &metadata.next_release);
    s.pair("Release frequency", &metadata.release_frequency);
    s.link_pair("URL", &metadata.uri);
    s.pair("Licence", &metadata.license);
    s.pair("Theme", &metadata.theme);
    s.pair("Unit of measure", &metadata.unit_of_measure);
    s.flag("National Statistic", &metadata.national_statistic);
}

fn contacts(s: &mut SectionBuffer, contacts: &[Contact]) {
    for contact in contacts {
        s.entry();
        s.pair("Name", &contact.name);
        s.pair("Email", &contact.email);
        s.pair("Telephone", &contact.telephone);
    }
}

fn alerts(s: &mut SectionBuffer, alerts: &[Alert]) {
    for alert in alerts {
        s.entry();
        s.pair("Date", &alert.date);
        s.pair("Type", &alert.alert_type);
        s.pair("Description", &alert.description);
    }
}

fn changes(s: &mut SectionBuffer, changes: &[Change]) {
    for change in changes {
        s.entry();
        s.pair("Title", &change.title);
        s.pair("Type", &change.change_type);
        s.pair("Description", &change.description);
    }
}

fn dimensions(s: &mut SectionBuffer, dimensions: &[CodeList]) {
    for dimension in dimensions {
        let Some(name) = dimension.display_name() else {
            continue;
        };
        match &dimension.description {
            Some(description) if !description.is_empty() => {
                s.rows.push(vec![
                    Cell::text(name),
                    Cell::text(description.clone()),
                ]);
            }
            _ => s.line(name),
        }
    }
}

fn references(s: &mut SectionBuffer, references: &[Reference]) {
    for entry in references {
        s.entry();
        reference(s, entry);
    }
}

fn reference(s: &mut SectionBuffer, entry: &Reference) {
    if let Some(title) = entry.title.as_deref().filter(|t| !t.is_empty()) {
        s.line(title);
    }
    if let Some(href) = entry.href.as_deref().filter(|h| !h.is_empty()) {
        s.link(href);
    }
    if let Some(description) = entry.description.as_deref().filter(|d| !d.is_empty()) {
        s.line(description);
    }
}

fn downloads(s: &mut SectionBuffer, downloads: &[Download]) {
    for download in downloads {
        let Some(extension) = download.extension.as_deref().filter(|e| !e.is_empty()) else {
            continue;
        };
        let label = match download.size.as_deref().filter(|v| !v.is_empty()) {
            Some(size) => format!("{} ({} bytes)", extension.to_uppercase(), size),
            None => extension.to_uppercase(),
        };
        match download.href.as_deref().filter(|h| !h.is_empty()) {
            Some(href) => s.rows.push(vec![Cell::text(label), Cell::link(href)]),
            None => s.line(&label),
        }
    }
}

fn usage_notes(s: &mut SectionBuffer, notes: &[UsageNote]) {
    for usage_note in notes {
        s.entry();
        s.pair("Title", &usage_note.title);
        s.pair("Note", &usage_note.note);
    }
}
