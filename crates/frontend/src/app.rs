use crate::dashboards::SalesOverviewDashboard;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <main class="app-main">
                <SalesOverviewDashboard />
            </main>
        </ConfigProvider>
    }
}
