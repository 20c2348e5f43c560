//! Page header component

use leptos::*;

use crate::config::APP_TITLE;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="App-header">
            <h1>{APP_TITLE}</h1>
        </header>
    }
}
