use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::hooks::{use_active_section, use_scroll, use_theme};

/// Section ids in document order, paired with their menu labels.
pub const SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

/// Smooth-scrolls to the element with `id`, if there is one.
pub fn scroll_to(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::warn!("no section with id {id}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Navigation(name: String, resume: String) -> impl IntoView {
    let scroll = use_scroll();
    let active = use_active_section(SECTIONS.iter().map(|(id, _)| *id).collect());
    let theme = use_theme();
    let (is_open, set_is_open) = signal(false);

    let go = move |id: &'static str| {
        scroll_to(id);
        set_is_open.set(false);
    };

    let item_class = move |index: usize| {
        if active.get() == index {
            "relative px-4 py-2 text-sm font-medium rounded-xl text-white bg-accent/20"
        } else {
            "relative px-4 py-2 text-sm font-medium rounded-xl text-muted hover:text-white transition-all duration-150"
        }
    };

    view! {
        <nav class=move || {
            if scroll.get().scrolled_past_threshold {
                "fixed w-full z-50 transition-all duration-300 card-gradient backdrop-blur-md shadow-2xl"
            } else {
                "fixed w-full z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <button
                        class=move || {
                            if scroll.get().scrolled_past_threshold {
                                "font-bold text-xl transition-all duration-200 scale-95"
                            } else {
                                "font-bold text-xl transition-all duration-200 scale-100"
                            }
                        }
                        on:click=move |_| go("home")
                    >
                        <span class="text-gradient">{name}</span>
                    </button>

                    <div class="hidden md:flex items-center space-x-2">
                        {SECTIONS
                            .iter()
                            .enumerate()
                            .map(|(index, (id, label))| {
                                let id = *id;
                                view! {
                                    <button
                                        class=move || item_class(index)
                                        aria-current=move || (active.get() == index).then_some("page")
                                        on:click=move |_| go(id)
                                    >
                                        {*label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <a
                            href=resume
                            download=""
                            class="px-4 py-2 text-sm font-medium rounded-xl border border-accent/30 hover:bg-accent/20"
                        >
                            "Resume"
                        </a>
                        <ThemeToggle theme />
                    </div>

                    <div class="md:hidden flex items-center gap-2">
                        <ThemeToggle theme />
                        <button
                            class="p-2 rounded-xl text-muted transition-all duration-150 hover:scale-110"
                            aria-label="Toggle menu"
                            aria-expanded=move || is_open.get().to_string()
                            on:click=move |_| set_is_open.update(|open| *open = !*open)
                        >
                            {move || if is_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                <div class=move || {
                    if is_open.get() {
                        "md:hidden overflow-hidden transition-all duration-300 max-h-96 opacity-100"
                    } else {
                        "md:hidden overflow-hidden transition-all duration-300 max-h-0 opacity-0"
                    }
                }>
                    <div class="py-4 card-gradient backdrop-blur-md rounded-2xl shadow-xl mt-2">
                        {SECTIONS
                            .iter()
                            .enumerate()
                            .map(|(index, (id, label))| {
                                let id = *id;
                                view! {
                                    <button
                                        class=move || {
                                            if active.get() == index {
                                                "block w-full text-left px-6 py-3 text-white bg-accent/20"
                                            } else {
                                                "block w-full text-left px-6 py-3 text-muted hover:text-white"
                                            }
                                        }
                                        on:click=move |_| go(id)
                                    >
                                        {*label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn ThemeToggle(theme: super::hooks::ThemeState) -> impl IntoView {
    view! {
        <button
            class="p-2 rounded-xl text-muted hover:text-white transition-colors duration-150"
            aria-label="Toggle color theme"
            on:click=move |_| theme.toggle()
        >
            {move || if theme.theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
