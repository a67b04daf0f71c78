use leptos::{html, prelude::*};

use crate::content::{Skill, SkillCategory};

use super::hooks::use_in_view;

#[component]
pub fn SkillsSection(categories: Vec<SkillCategory>) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_in_view(section_ref);
    let (selected, set_selected) = signal(0usize);

    let tabs = categories
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let label = format!("{} {}", category.icon, category.title);
            view! {
                <button
                    class=move || {
                        if selected.get() == index {
                            "px-5 py-2 rounded-xl font-medium bg-accent text-white shadow-lg"
                        } else {
                            "px-5 py-2 rounded-xl font-medium bg-white/5 text-muted hover:bg-white/10"
                        }
                    }
                    aria-selected=move || (selected.get() == index).to_string()
                    on:click=move |_| set_selected.set(index)
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let panel = move || {
        categories
            .get(selected.get())
            .map(|category| {
                category
                    .skills
                    .iter()
                    .cloned()
                    .enumerate()
                    .map(|(index, skill)| view! { <SkillBar skill index visible /> })
                    .collect_view()
            })
    };

    view! {
        <section node_ref=section_ref id="skills" class="py-20 px-4">
            <div class="max-w-5xl mx-auto">
                <div class=move || {
                    if visible.get() {
                        "text-center mb-12 animate-fade-in"
                    } else {
                        "text-center mb-12 opacity-0"
                    }
                }>
                    <h2 class="text-4xl font-black mb-4">
                        "Technical " <span class="text-gradient">"Skills"</span>
                    </h2>
                    <div class="w-24 h-1 bg-accent mx-auto rounded-full"></div>
                </div>
                <div class="flex flex-wrap justify-center gap-3 mb-10" role="tablist">
                    {tabs}
                </div>
                <div class="grid sm:grid-cols-2 gap-6">{panel}</div>
            </div>
        </section>
    }
}

/// Bars fill to the skill level once the section is in view.
#[component]
fn SkillBar(skill: Skill, index: usize, visible: Signal<bool>) -> impl IntoView {
    let level = skill.level.min(100);

    view! {
        <div class="card-gradient rounded-2xl p-5">
            <div class="flex items-center justify-between mb-3">
                <span class="font-medium">
                    <i class=format!("{} mr-2", skill.icon)></i>
                    {skill.name}
                </span>
                <span class="text-sm text-muted">{format!("{level}%")}</span>
            </div>
            <div class="h-2 rounded-full bg-white/10 overflow-hidden">
                <div
                    class="h-full rounded-full bg-accent transition-all duration-1000 ease-out"
                    style=move || {
                        let width = if visible.get() { level } else { 0 };
                        format!("width: {width}%; transition-delay: {}ms;", index * 100)
                    }
                ></div>
            </div>
        </div>
    }
}
