//! Processing log display.
//!
//! Renders the accumulated log as preformatted text and keeps the newest
//! line in view. Hidden until the first line is written.

use leptos::*;

/// Log panel for the current batch.
#[component]
pub fn LogPanel(
    /// Full log text, one `<time>: <message>` line per entry
    #[prop(into)]
    text: Signal<String>,
) -> impl IntoView {
    let log_area = create_node_ref::<leptos::html::Pre>();

    // Auto-scroll to bottom when lines are added
    create_effect(move |_| {
        let _ = text.get();

        if let Some(area) = log_area.get() {
            // Wait for the new text to be in the DOM
            request_animation_frame(move || {
                area.set_scroll_top(area.scroll_height());
            });
        }
    });

    view! {
        <Show
            when=move || !text.get().is_empty()
            fallback=|| view! { }
        >
            <div class="log-container">
                <h2>"Processing Log:"</h2>
                <pre class="processing-log-area" node_ref=log_area>
                    {move || text.get()}
                </pre>
            </div>
        </Show>
    }
}
