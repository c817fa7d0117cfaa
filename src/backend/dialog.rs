//! Native Dialoge über `rfd`.

use super::{FileDialog, FileFilter};

/// Dateidialog auf Basis von `rfd::AsyncFileDialog`.
#[derive(Debug, Clone, Default)]
pub struct RfdFileDialog {
    title: Option<String>,
}

impl RfdFileDialog {
    /// Dialog ohne Titel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt den Fenstertitel.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn base(&self) -> rfd::AsyncFileDialog {
        let dialog = rfd::AsyncFileDialog::new();
        match &self.title {
            Some(title) => dialog.set_title(title.as_str()),
            None => dialog,
        }
    }
}

impl FileDialog for RfdFileDialog {
    async fn open_file(&self, filters: &[FileFilter]) -> Option<String> {
        let mut dialog = self.base();
        for filter in filters {
            dialog = dialog.add_filter(filter.name.as_str(), filter.extensions.as_slice());
        }
        dialog
            .pick_file()
            .await
            .map(|handle| handle.path().display().to_string())
    }

    async fn open_directory(&self) -> Option<String> {
        self.base()
            .pick_folder()
            .await
            .map(|handle| handle.path().display().to_string())
    }
}
