use leptos::{html, prelude::*};

use crate::content::Owner;

use super::{
    hooks::{use_in_view, use_pointer, use_scroll, use_typewriter},
    nav::scroll_to,
    particles::ParticlesBackground,
};

const TYPE_INTERVAL_MS: f64 = 100.0;

fn reveal(visible: bool) -> &'static str {
    if visible {
        "animate-fade-in"
    } else {
        "opacity-0"
    }
}

#[component]
pub fn HeroSection(owner: Owner) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_in_view(section_ref);
    let typed = use_typewriter(visible, owner.greeting.clone(), TYPE_INTERVAL_MS);
    let pointer = use_pointer();
    let scroll = use_scroll();

    // background drifts at half the scroll speed
    let parallax = move || format!("transform: translateY({:.0}px);", scroll.get().offset_y * 0.5);

    view! {
        <section
            node_ref=section_ref
            id="home"
            class="relative min-h-[calc(100vh-4rem)] flex items-center pt-20 pb-12 px-4 overflow-hidden"
        >
            <ParticlesBackground />
            <div
                class="absolute inset-0 pointer-events-none"
                style=move || pointer.get().glow_css("rgba(81, 127, 164, 0.15)", 600)
            ></div>
            <div class="absolute inset-0 pointer-events-none opacity-10" style=parallax>
                <div class="absolute top-20 left-10 w-32 h-32 bg-accent rounded-full blur-xl animate-pulse"></div>
                <div class="absolute bottom-20 right-10 w-40 h-40 bg-accent-purple rounded-full blur-xl animate-pulse"></div>
            </div>

            <div class="relative z-10 w-full max-w-7xl mx-auto">
                <div class="max-w-3xl mx-auto text-center space-y-6 sm:space-y-8">
                    <div class=move || {
                        format!(
                            "inline-flex items-center gap-2 px-4 py-2 bg-white/5 rounded-full border border-white/10 {}",
                            reveal(visible.get()),
                        )
                    }>
                        <div class="w-2 h-2 bg-success rounded-full animate-pulse"></div>
                        <span class="text-sm font-medium">"Available for opportunities"</span>
                    </div>

                    <div class=move || format!("space-y-4 {}", reveal(visible.get()))>
                        <h1 class="text-3xl sm:text-5xl lg:text-6xl font-black tracking-tight leading-tight">
                            {move || typed.get()}
                            " "
                            <span class="text-gradient">{owner.name.clone()}</span>
                            <span class="inline-block w-1 h-10 bg-accent ml-2 animate-pulse"></span>
                        </h1>
                        <div class="w-24 h-1 bg-accent mx-auto rounded-full"></div>
                        <p class="text-lg text-muted">{owner.title.clone()}</p>
                    </div>

                    <p class=move || {
                        format!(
                            "max-w-2xl mx-auto text-lg leading-relaxed {}",
                            reveal(visible.get()),
                        )
                    }>{owner.headline.clone()}</p>

                    <div class=move || {
                        format!(
                            "flex flex-col sm:flex-row gap-4 justify-center {}",
                            reveal(visible.get()),
                        )
                    }>
                        <button class="btn-grad" on:click=move |_| scroll_to("projects")>
                            "View My Work"
                        </button>
                        <button
                            class="px-6 py-3 rounded-lg border border-white/10 bg-white/5 hover:bg-white/10"
                            on:click=move |_| scroll_to("contact")
                        >
                            "Get In Touch"
                        </button>
                        <a
                            href=owner.resume.clone()
                            download=""
                            class="px-6 py-3 rounded-lg border border-white/10 bg-white/5 hover:bg-white/10"
                        >
                            "Resume"
                        </a>
                    </div>

                    <div class=move || format!("mt-12 animate-bounce {}", reveal(visible.get()))>
                        "⌄"
                    </div>
                </div>
            </div>
        </section>
    }
}
