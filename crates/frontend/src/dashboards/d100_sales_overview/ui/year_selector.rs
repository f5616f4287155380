use leptos::prelude::*;
use thaw::*;

/// Row of year buttons, the selected one highlighted
#[component]
pub fn YearSelector(
    #[prop(into)] years: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<Option<String>>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="year-selector">
            {move || {
                years
                    .get()
                    .into_iter()
                    .map(|year| {
                        let year_for_check = year.clone();
                        let year_for_click = year.clone();
                        let is_selected = Memo::new(move |_| {
                            selected.with(|s| s.as_deref() == Some(year_for_check.as_str()))
                        });
                        view! {
                            <Button
                                appearance=move || {
                                    if is_selected.get() {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                }
                                on_click=move |_| on_select.run(year_for_click.clone())
                                attr:aria-pressed=move || is_selected.get().to_string()
                            >
                                {year}
                            </Button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
