use crate::app_shell::StorefrontPage;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    log::info!(
        "catalog version {} ({} products)",
        contracts::catalog::catalog_version(),
        contracts::catalog::catalog().len()
    );

    view! {
        <ThemeProvider>
            <StorefrontPage />
        </ThemeProvider>
    }
}
