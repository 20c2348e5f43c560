//! PDF upload form.
//!
//! Binds the context fields and the file picker to an [`UploadStore`] and
//! hands submissions to [`submit_batch`] with the browser transport.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::{FilePreviewList, LogPanel};
use crate::config::{AppConfig, ACCEPTED_FILE_TYPES};
use crate::services::{submit_batch, GlooBackend, SubmitOutcome};
use crate::state::UploadStore;
use crate::types::FormContext;

#[component]
pub fn UploadForm() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let store = UploadStore::<File>::new(FormContext::default());
    let file_input = create_node_ref::<leptos::html::Input>();

    // Clear the picker after a successful batch so the same files can be picked again
    create_effect(move |_| {
        if store.picker_resets() == 0 {
            return;
        }
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    });

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files: Vec<File> = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();

        log::debug!("{} file(s) selected", files.len());
        store.select_files(files);
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let config = config.clone();

        spawn_local(async move {
            if let SubmitOutcome::Rejected(err) = submit_batch(store, &GlooBackend, &config).await {
                if let Err(e) = gloo_utils::window().alert_with_message(err.alert_message()) {
                    log::warn!("Could not show alert: {:?}", e);
                }
            }
        });
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <div class="form-group">
                <label for="projectName">"Project Name (Context):"</label>
                <input
                    type="text"
                    id="projectName"
                    required=true
                    prop:value=move || store.project_name()
                    on:input=move |ev| store.set_project_name(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="jobNo">"Job Number (Context):"</label>
                <input
                    type="text"
                    id="jobNo"
                    required=true
                    prop:value=move || store.job_number()
                    on:input=move |ev| store.set_job_number(event_target_value(&ev))
                />
            </div>

            <div class="form-group file-input-group">
                <label for="fileInput" class="file-input-label">
                    {move || match store.file_count() {
                        0 => "Select PDF(s) to Process".to_string(),
                        n => format!("{} file(s) selected", n),
                    }}
                </label>
                <input
                    type="file"
                    id="fileInput"
                    multiple=true
                    accept=ACCEPTED_FILE_TYPES
                    disabled=move || store.is_processing()
                    node_ref=file_input
                    on:change=on_file_change
                />
                <FilePreviewList names=Signal::derive(move || store.file_names())/>
            </div>

            <button
                type="submit"
                class="submit-button"
                disabled=move || store.is_processing() || store.file_count() == 0
            >
                {move || if store.is_processing() {
                    "Processing..."
                } else {
                    "Upload & Process Files"
                }}
            </button>
        </form>

        <LogPanel text=Signal::derive(move || store.log_text())/>
    }
}
