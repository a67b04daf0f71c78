use leptos::{html, prelude::*};

use crate::content::Role;

use super::hooks::use_in_view;

#[component]
pub fn ExperienceSection(roles: Vec<Role>) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_in_view(section_ref);

    view! {
        <section node_ref=section_ref id="experience" class="py-20 px-4">
            <div class="max-w-5xl mx-auto">
                <div class=move || {
                    if visible.get() {
                        "text-center mb-16 animate-fade-in"
                    } else {
                        "text-center mb-16 opacity-0"
                    }
                }>
                    <h2 class="text-4xl font-black mb-4">
                        "Work " <span class="text-gradient">"Experience"</span>
                    </h2>
                    <div class="w-24 h-1 bg-accent mx-auto rounded-full"></div>
                </div>

                <div class="relative border-l-2 border-accent/30 ml-4 space-y-12">
                    {roles
                        .into_iter()
                        .map(|role| view! { <RoleCard role /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Each entry reveals on its own as it scrolls in.
#[component]
fn RoleCard(role: Role) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let visible = use_in_view(card_ref);
    let (dot_class, status_class) = if role.is_current() {
        (
            "absolute -left-[9px] top-2 w-4 h-4 rounded-full bg-success animate-pulse",
            "inline-block mt-1 px-3 py-1 rounded-full text-xs bg-success/20 text-success",
        )
    } else {
        (
            "absolute -left-[9px] top-2 w-4 h-4 rounded-full bg-accent",
            "inline-block mt-1 px-3 py-1 rounded-full text-xs bg-white/10",
        )
    };

    view! {
        <div
            node_ref=card_ref
            class=move || {
                if visible.get() {
                    "relative pl-10 transition-all duration-700 opacity-100 translate-x-0"
                } else {
                    "relative pl-10 transition-all duration-700 opacity-0 -translate-x-8"
                }
            }
        >
            <div class=dot_class></div>
            <div class="card-gradient rounded-2xl p-6">
                <div class="flex flex-wrap items-start justify-between gap-4 mb-4">
                    <div>
                        <h3 class="text-xl font-bold">
                            <span class="mr-2">{role.icon}</span>
                            {role.title}
                        </h3>
                        <p class="text-accent font-medium">{role.company}</p>
                        <p class="text-sm text-muted">{role.kind}</p>
                    </div>
                    <div class="text-right text-sm text-muted">
                        <p>{role.period}</p>
                        <p>{role.location}</p>
                        <span class=status_class>{role.status}</span>
                    </div>
                </div>
                <ul class="space-y-2 mb-4 list-disc list-inside text-muted">
                    {role.description.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
                </ul>
                <div class="flex flex-wrap gap-2">
                    {role
                        .technologies
                        .into_iter()
                        .map(|t| {
                            view! {
                                <span class="px-3 py-1 rounded-lg bg-white/5 border border-white/10 text-xs">
                                    {t}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
