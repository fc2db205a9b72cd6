use leptos::prelude::*;
use thaw::*;

/// Covers its children with an opaque layer and a spinner while `visible`
#[component]
pub fn LoadingOverlay(#[prop(into)] visible: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <div class="loading-overlay__host" style="position: relative; min-height: 12rem;">
            <Show when=move || visible.get()>
                <div
                    class="loading-overlay"
                    style="position: absolute; inset: 0; z-index: 10; display: flex; align-items: center; justify-content: center; background: var(--color-bg-primary);"
                >
                    <Spinner />
                </div>
            </Show>
            {children()}
        </div>
    }
}
