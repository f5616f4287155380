use crate::dashboards::d100_sales_overview::api;
use crate::dashboards::d100_sales_overview::state::{FetchRequest, SalesOverviewState};
use crate::shared::components::section_card::SectionCard;
use chrono::{Datelike, Utc};
use contracts::enums::ChartMode;
use contracts::shared::format::format_currency;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::chart::SalesChart;
use super::year_selector::YearSelector;

/// Sales Overview dashboard component
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let state = RwSignal::new(SalesOverviewState::default());

    // Only the response of the latest selection is applied
    let run_fetch = move |request: FetchRequest| {
        spawn_local(async move {
            let result = api::get_year_sales(&request.year).await;
            if let Err(e) = &result {
                log::error!("D100 Sales: failed to load {}: {}", request.year, e);
            }
            let applied = state.try_update(|s| s.apply(request.token, result));
            if applied != Some(true) {
                log::debug!("D100 Sales: discarded stale response for {}", request.year);
            }
        });
    };

    let select_year = Callback::new(move |year: String| {
        if let Some(request) = state.try_update(|s| s.select_year(&year)).flatten() {
            run_fetch(request);
        }
    });

    // Load data on mount
    if let Some(request) = state.try_update(|s| s.mount()).flatten() {
        run_fetch(request);
    }

    // Threshold field keeps its own text; the state parses it
    let threshold_text = RwSignal::new(state.with_untracked(|s| s.threshold_input.clone()));
    Effect::new(move |_| {
        let text = threshold_text.get();
        state.update(|s| s.set_threshold_input(text));
    });

    let summary = Memo::new(move |_| state.with(|s| s.summary()));
    let threshold = Memo::new(move |_| state.with(|s| s.threshold()));
    let chart_mode = Memo::new(move |_| state.with(|s| s.chart_mode));
    let selected_year = Memo::new(move |_| state.with(|s| s.selected_year.clone()));
    let year_label = Signal::derive(move || selected_year.get().unwrap_or_default());

    let total_text = move || format!("Total: {}", format_currency(summary.with(|s| s.total)));
    let average_text = move || {
        let average = summary
            .with(|s| s.average)
            .map(format_currency)
            .unwrap_or_else(|| "—".to_string());
        format!("Avg / month: {}", average)
    };
    let shown_text = move || {
        format!(
            "Showing {} of {} months",
            summary.with(|s| s.shown()),
            state.with(|s| s.entries.len())
        )
    };

    view! {
        <div id="d100_sales_overview--dashboard" class="d100-dashboard">
            <header class="d100-dashboard__header">
                <p class="d100-dashboard__eyebrow">"Sales • dashboard"</p>
                <h1 class="d100-dashboard__title">"Sales Overview"</h1>
                <p class="d100-dashboard__lead">
                    "Sales are fetched from the API by year, with controls to set your own threshold and switch between bar, line, or pie charts."
                </p>
            </header>

            <SectionCard
                title={"Select Year".to_string()}
                subtitle={"Data loads on demand from the sales API by year.".to_string()}
            >
                <YearSelector
                    years=Signal::derive(move || state.with(|s| s.available_years.clone()))
                    selected=selected_year
                    on_select=select_year
                />
            </SectionCard>

            <SectionCard
                title=Signal::derive(move || format!("Sales in {}", year_label.get()))
                subtitle={"Filter by threshold and switch chart styles without leaving the page.".to_string()}
                delay_ms=80
            >
                <div class="d100-dashboard__controls">
                    <label class="d100-dashboard__threshold">
                        <span class="d100-dashboard__control-label">"Threshold"</span>
                        <Input input_type=InputType::Number value=threshold_text placeholder="0" />
                    </label>

                    <div class="d100-dashboard__modes">
                        <span class="d100-dashboard__control-label">"Chart"</span>
                        {ChartMode::ALL
                            .into_iter()
                            .map(|mode| {
                                let is_active = Memo::new(move |_| chart_mode.get() == mode);
                                view! {
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=move || {
                                            if is_active.get() {
                                                ButtonAppearance::Primary
                                            } else {
                                                ButtonAppearance::Subtle
                                            }
                                        }
                                        on_click=move |_| state.update(|s| s.set_chart_mode(mode))
                                        attr:aria-pressed=move || is_active.get().to_string()
                                    >
                                        {mode.display_name()}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {total_text}
                    </Badge>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                        {average_text}
                    </Badge>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                        {shown_text}
                    </Badge>
                </div>

                {move || {
                    if let Some(err) = state.with(|s| s.error.clone()) {
                        view! {
                            <div class="d100-dashboard__error" role="alert">{err}</div>
                        }.into_any()
                    } else if state.with(|s| s.is_loading()) {
                        view! {
                            <div class="d100-dashboard__loading" aria-busy="true">
                                <Spinner />
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <SalesChart
                                data=Signal::derive(move || summary.with(|s| s.filtered.clone()))
                                year=year_label
                                mode=chart_mode
                                threshold=threshold
                            />
                        }.into_any()
                    }
                }}
            </SectionCard>

            <footer class="d100-dashboard__footer">
                <span>{format!("© {} Sales Overview.", Utc::now().year())}</span>
                <span>"All rights reserved."</span>
            </footer>
        </div>
    }
}
