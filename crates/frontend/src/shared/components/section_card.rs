//! SectionCard: Thaw Card с заголовком, подзаголовком и анимацией появления.
//!
//! ```text
//! <SectionCard title="Select Year" subtitle="Loaded on demand" delay_ms=80>
//!     <p>"Контент"</p>
//! </SectionCard>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn SectionCard(
    /// Card title, may change reactively
    #[prop(into)]
    title: Signal<String>,
    /// Optional subtitle under the title
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card attr:style=style>
            <section class="section-card">
                <div class="section-card__header">
                    <h2 class="section-card__title">{move || title.get()}</h2>
                    {move || subtitle.get().map(|s| view! {
                        <p class="section-card__subtitle">{s}</p>
                    })}
                </div>
                {children()}
            </section>
        </Card>
    }
}
