use leptos::{html, prelude::*};

use crate::content::{Owner, SocialLink};

use super::hooks::use_in_view;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer(owner: Owner, socials: Vec<SocialLink>) -> impl IntoView {
    let footer_ref = NodeRef::<html::Footer>::new();
    let visible = use_in_view(footer_ref);

    view! {
        <footer node_ref=footer_ref class="border-t border-white/10 py-10 px-4">
            <div class=move || {
                if visible.get() {
                    "max-w-7xl mx-auto flex flex-col md:flex-row items-center justify-between gap-6 animate-fade-in"
                } else {
                    "max-w-7xl mx-auto flex flex-col md:flex-row items-center justify-between gap-6 opacity-0"
                }
            }>
                <div class="text-center md:text-left">
                    <p class="font-bold text-gradient">{owner.name.clone()}</p>
                    <p class="text-sm text-muted">{owner.tagline}</p>
                </div>
                <div class="flex gap-4">
                    {socials
                        .into_iter()
                        .map(|s| {
                            view! {
                                <a
                                    href=s.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=s.label
                                    class="p-2 rounded-lg hover:bg-accent/20"
                                >
                                    <i class=s.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-sm text-muted">
                    {format!("© {BUILD_YEAR} {}. All rights reserved.", owner.name)}
                </p>
            </div>
        </footer>
    }
}
