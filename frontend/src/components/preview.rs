//! Selected file list shown under the picker

use leptos::*;

#[component]
pub fn FilePreviewList(
    /// File names in selection order
    #[prop(into)]
    names: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !names.get().is_empty()
            fallback=|| view! { }
        >
            <div class="file-preview-list">
                <strong>"Selected:"</strong>
                <ul>
                    <For
                        each=move || names.get().into_iter().enumerate()
                        key=|(i, name)| (*i, name.clone())
                        children=move |(_, name)| view! { <li>{name}</li> }
                    />
                </ul>
            </div>
        </Show>
    }
}
