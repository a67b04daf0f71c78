use leptos::{html, prelude::*};

use crate::content::Stat;

use super::hooks::{use_counter, use_in_view};

const COUNT_DURATION_MS: f64 = 2000.0;

#[component]
pub fn StatsSection(stats: Vec<Stat>) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_in_view(section_ref);

    view! {
        <section node_ref=section_ref class="py-16 px-4">
            <div class="max-w-7xl mx-auto grid grid-cols-2 lg:grid-cols-4 gap-6">
                {stats
                    .into_iter()
                    .enumerate()
                    .map(|(index, stat)| view! { <StatCard stat index visible /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn StatCard(stat: Stat, index: usize, visible: Signal<bool>) -> impl IntoView {
    let count = use_counter(visible, stat.target, COUNT_DURATION_MS);
    let suffix = stat.suffix.clone();

    view! {
        <div
            class=move || {
                if visible.get() {
                    "card-gradient rounded-2xl p-6 text-center animate-fade-in"
                } else {
                    "card-gradient rounded-2xl p-6 text-center opacity-0"
                }
            }
            style=format!("animation-delay: {}ms;", index * 100)
        >
            <div class="text-3xl mb-2">{stat.icon}</div>
            <div class="text-3xl font-black text-gradient">
                {move || format!("{}{}", count.get(), suffix)}
            </div>
            <div class="text-sm text-muted mt-1">{stat.label}</div>
        </div>
    }
}
