//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::components::toolbar::Toolbar;
use crate::pages::{apply::ApplicationPage, case::CasePage, dashboard::DashboardPage};
use crate::state::{
    case_detail::CaseDetailState, cases::CasesState, ui::UiState, wizard::WizardState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let cases = RwSignal::new(CasesState::default());
    let detail = RwSignal::new(CaseDetailState::default());
    let wizard = RwSignal::new(WizardState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(cases);
    provide_context(detail);
    provide_context(wizard);
    provide_context(ui);

    // Restore the persisted theme once the browser takes over.
    Effect::new(move || {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/loandesk.css"/>
        <Title text="LoanDesk"/>

        <Router>
            <Toolbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=(StaticSegment("case"), ParamSegment("id")) view=CasePage/>
                    <Route path=StaticSegment("apply") view=ApplicationPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
