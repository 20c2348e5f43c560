//! Observable state of the upload form.
//!
//! [`UploadStore`] is a `Copy` handle over a handful of Leptos signals.
//! Components read it inside reactive closures and re-render when it
//! changes; the submission controller mutates it from its async task.
//! All access happens on the UI thread.

use leptos::*;

use crate::types::{FormContext, ProcessingLog};

/// A file handle the user picked.
///
/// Implemented for `web_sys::File` in the browser; tests use in-memory files.
pub trait PickedFile: Clone + 'static {
    /// Name shown in the preview list and sent as the multipart filename.
    fn file_name(&self) -> String;
}

impl PickedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Form state, processing log and in-flight flag of one upload form.
pub struct UploadStore<F: 'static> {
    context: RwSignal<FormContext>,
    files: RwSignal<Vec<F>>,
    log: RwSignal<ProcessingLog>,
    processing: RwSignal<bool>,
    picker_resets: RwSignal<u32>,
}

impl<F: 'static> Clone for UploadStore<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: 'static> Copy for UploadStore<F> {}

impl<F: PickedFile> UploadStore<F> {
    /// Create the store in the current reactive owner.
    pub fn new(context: FormContext) -> Self {
        Self {
            context: create_rw_signal(context),
            files: create_rw_signal(Vec::new()),
            log: create_rw_signal(ProcessingLog::default()),
            processing: create_rw_signal(false),
            picker_resets: create_rw_signal(0),
        }
    }

    // -------------------------------------------------------------------------
    // Context fields
    // -------------------------------------------------------------------------

    pub fn context(&self) -> FormContext {
        self.context.get()
    }

    pub fn project_name(&self) -> String {
        self.context.with(|ctx| ctx.project_name.clone())
    }

    pub fn job_number(&self) -> String {
        self.context.with(|ctx| ctx.job_number.clone())
    }

    pub fn set_project_name(&self, value: impl Into<String>) {
        let value = value.into();
        self.context.update(|ctx| ctx.project_name = value);
    }

    pub fn set_job_number(&self, value: impl Into<String>) {
        let value = value.into();
        self.context.update(|ctx| ctx.job_number = value);
    }

    // -------------------------------------------------------------------------
    // File selection
    // -------------------------------------------------------------------------

    pub fn files(&self) -> Vec<F> {
        self.files.get()
    }

    pub fn file_count(&self) -> usize {
        self.files.with(Vec::len)
    }

    /// Names of the selected files, in selection order.
    pub fn file_names(&self) -> Vec<String> {
        self.files
            .with(|files| files.iter().map(PickedFile::file_name).collect())
    }

    /// Replace the whole selection, as a file-picker change does.
    pub fn select_files(&self, files: Vec<F>) {
        self.files.set(files);
    }

    /// Drop the selection and ask the view to reset the picker control.
    pub fn reset_selection(&self) {
        self.files.set(Vec::new());
        self.picker_resets.update(|n| *n = n.wrapping_add(1));
    }

    /// Bumped each time the picker control must be cleared.
    pub fn picker_resets(&self) -> u32 {
        self.picker_resets.get()
    }

    // -------------------------------------------------------------------------
    // Processing flag
    // -------------------------------------------------------------------------

    pub fn is_processing(&self) -> bool {
        self.processing.get()
    }

    pub(crate) fn set_processing(&self, processing: bool) {
        self.processing.set(processing);
    }

    // -------------------------------------------------------------------------
    // Log
    // -------------------------------------------------------------------------

    pub fn log(&self) -> ProcessingLog {
        self.log.get()
    }

    pub fn log_text(&self) -> String {
        self.log.with(ProcessingLog::text)
    }

    pub fn has_log(&self) -> bool {
        self.log.with(|log| !log.is_empty())
    }

    pub fn append_log(&self, message: impl Into<String>, is_error: bool) {
        let message = message.into();
        self.log.update(|log| log.append(message, is_error));
    }

    pub fn clear_log(&self) {
        self.log.update(ProcessingLog::clear);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// In-memory stand-in for a browser file.
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct MemoryFile {
        pub name: String,
        pub bytes: Vec<u8>,
    }

    impl MemoryFile {
        pub(crate) fn pdf(name: &str) -> Self {
            Self {
                name: name.to_string(),
                bytes: b"%PDF-1.7\n%%EOF".to_vec(),
            }
        }
    }

    impl PickedFile for MemoryFile {
        fn file_name(&self) -> String {
            self.name.clone()
        }
    }

    #[test]
    fn test_initial_state() {
        let runtime = create_runtime();
        let store = UploadStore::<MemoryFile>::new(FormContext::default());

        assert_eq!(store.project_name(), "_MyFilmProject_YYYYMMDD");
        assert_eq!(store.job_number(), "Job123");
        assert_eq!(store.file_count(), 0);
        assert!(!store.is_processing());
        assert!(!store.has_log());
        assert_eq!(store.picker_resets(), 0);

        runtime.dispose();
    }

    #[test]
    fn test_context_setters() {
        let runtime = create_runtime();
        let store = UploadStore::<MemoryFile>::new(FormContext::default());

        store.set_project_name("Proj_2024");
        store.set_job_number("Job42");
        assert_eq!(store.context(), FormContext::new("Proj_2024", "Job42"));

        runtime.dispose();
    }

    #[test]
    fn test_selection_is_replaced_wholesale() {
        let runtime = create_runtime();
        let store = UploadStore::new(FormContext::default());

        store.select_files(vec![MemoryFile::pdf("a.pdf"), MemoryFile::pdf("b.pdf")]);
        assert_eq!(store.file_names(), vec!["a.pdf", "b.pdf"]);

        store.select_files(vec![MemoryFile::pdf("c.pdf")]);
        assert_eq!(store.file_names(), vec!["c.pdf"]);

        store.reset_selection();
        assert_eq!(store.file_count(), 0);
        assert_eq!(store.picker_resets(), 1);

        runtime.dispose();
    }

    #[test]
    fn test_log_changes_are_observable() {
        let runtime = create_runtime();
        let store = UploadStore::<MemoryFile>::new(FormContext::default());

        let lines = create_memo(move |_| store.log().len());
        assert_eq!(lines.get(), 0);

        store.append_log("hello", false);
        store.append_log("oops", true);
        assert_eq!(lines.get(), 2);

        store.clear_log();
        assert_eq!(lines.get(), 0);

        runtime.dispose();
    }
}
