use leptos::{html, prelude::*};

use crate::content::About;

use super::hooks::use_in_view;

#[component]
pub fn AboutSection(about: About) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_in_view(section_ref);
    let reveal = move |base: &'static str| {
        if visible.get() {
            format!("{base} animate-fade-in")
        } else {
            format!("{base} opacity-0")
        }
    };

    view! {
        <section node_ref=section_ref id="about" class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <div class=move || reveal("text-center mb-16")>
                    <h2 class="text-4xl font-black mb-4">
                        "About " <span class="text-gradient">"Me"</span>
                    </h2>
                    <div class="w-24 h-1 bg-accent mx-auto rounded-full"></div>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class=move || reveal("space-y-6")>
                        <h3 class="text-2xl font-bold">{about.title}</h3>
                        {about
                            .paragraphs
                            .into_iter()
                            .map(|p| view! { <p class="text-muted leading-relaxed">{p}</p> })
                            .collect_view()}
                        <div class="flex flex-wrap gap-3">
                            {about
                                .badges
                                .into_iter()
                                .map(|b| {
                                    view! {
                                        <span class="px-4 py-2 rounded-full bg-accent/10 border border-accent/30 text-sm">
                                            {b}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="grid sm:grid-cols-2 gap-6">
                        {about
                            .features
                            .into_iter()
                            .enumerate()
                            .map(|(index, f)| {
                                view! {
                                    <div
                                        class=move || reveal("card-gradient rounded-2xl p-6")
                                        style=format!("animation-delay: {}ms;", index * 150)
                                    >
                                        <div class="text-3xl mb-3">{f.icon}</div>
                                        <h4 class="font-bold mb-2">{f.title}</h4>
                                        <p class="text-sm text-muted">{f.desc}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
