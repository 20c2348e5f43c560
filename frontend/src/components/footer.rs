//! Footer component

use chrono::Datelike;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="App-footer">
            <p>"© " {year} " PO Wizard"</p>
        </footer>
    }
}
