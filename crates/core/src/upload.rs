//! Drag/drop upload area for the product image field.
//!
//! Tracks the drag highlight and the preview of the selected file. The
//! preview shows the file name and size; the file bytes themselves are never
//! touched here.
//!
//! The admin product modal takes an image URL, so nothing in this workspace
//! drives it yet. A host page with a file field forwards its `dragover`,
//! `dragleave`, `drop` and `change` events to the matching [`UploadArea`]
//! methods and renders [`SelectedFile::caption`] and
//! [`SelectedFile::size_line`].
//!
//! ```
//! use flohmarkt_core::upload::{SelectedFile, UploadArea};
//!
//! let mut area = UploadArea::new();
//! area.drag_over();
//! area.drop_files([SelectedFile::new("photo.jpg", 1_572_864)]);
//!
//! assert!(!area.is_drag_over());
//! let file = area.selected().unwrap();
//! assert_eq!(file.caption(), "تم اختيار الملف: photo.jpg");
//! assert_eq!(file.size_line(), "الحجم: 1.50 MB");
//! ```

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Metadata of a file chosen through the picker or dropped on the area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Size in megabytes with two decimals, e.g. `"1.50"`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // file sizes stay far below 2^52 bytes
    pub fn size_mb(&self) -> String {
        format!("{:.2}", self.size_bytes as f64 / BYTES_PER_MB)
    }

    /// Preview caption line, e.g. `تم اختيار الملف: photo.jpg`.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("تم اختيار الملف: {}", self.name)
    }

    /// Preview size line, e.g. `الحجم: 1.50 MB`.
    #[must_use]
    pub fn size_line(&self) -> String {
        format!("الحجم: {} MB", self.size_mb())
    }
}

/// State of the upload area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadArea {
    drag_over: bool,
    selected: Option<SelectedFile>,
}

impl UploadArea {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A drag entered or moved over the area.
    pub const fn drag_over(&mut self) {
        self.drag_over = true;
    }

    /// The drag left the area without dropping.
    pub const fn drag_leave(&mut self) {
        self.drag_over = false;
    }

    /// Files were dropped. The first one becomes the selection; an empty
    /// drop only clears the highlight.
    pub fn drop_files(&mut self, files: impl IntoIterator<Item = SelectedFile>) {
        self.drag_over = false;
        if let Some(first) = files.into_iter().next() {
            self.selected = Some(first);
        }
    }

    /// Files were picked through the file input.
    pub fn select_files(&mut self, files: impl IntoIterator<Item = SelectedFile>) {
        if let Some(first) = files.into_iter().next() {
            self.selected = Some(first);
        }
    }

    /// Whether the drag highlight is on.
    #[must_use]
    pub const fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    /// The file currently previewed.
    #[must_use]
    pub const fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_highlight() {
        let mut area = UploadArea::new();
        area.drag_over();
        assert!(area.is_drag_over());
        area.drag_leave();
        assert!(!area.is_drag_over());
    }

    #[test]
    fn test_drop_selects_first_file() {
        let mut area = UploadArea::new();
        area.drag_over();
        area.drop_files(vec![
            SelectedFile::new("front.jpg", 1_572_864),
            SelectedFile::new("back.jpg", 10),
        ]);

        assert!(!area.is_drag_over());
        let file = area.selected().cloned();
        assert_eq!(file.as_ref().map(|f| f.name.as_str()), Some("front.jpg"));
        assert_eq!(file.map(|f| f.size_mb()), Some("1.50".to_string()));
    }

    #[test]
    fn test_empty_drop_keeps_previous_selection() {
        let mut area = UploadArea::new();
        area.select_files(vec![SelectedFile::new("a.png", 2048)]);
        area.drag_over();
        area.drop_files(Vec::new());

        assert!(!area.is_drag_over());
        assert_eq!(area.selected().map(|f| f.name.as_str()), Some("a.png"));
    }

    #[test]
    fn test_preview_lines() {
        let file = SelectedFile::new("photo.jpg", 524_288);
        assert_eq!(file.caption(), "تم اختيار الملف: photo.jpg");
        assert_eq!(file.size_line(), "الحجم: 0.50 MB");
    }
}
