use leptos::{html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::content::{Owner, SocialLink};

use super::hooks::use_in_view;

const SUBMIT_DELAY_MS: f64 = 800.0;

#[derive(Clone, Copy)]
struct ContactForm {
    name: RwSignal<String>,
    email: RwSignal<String>,
    subject: RwSignal<String>,
    message: RwSignal<String>,
}

impl ContactForm {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            subject: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
        }
    }

    fn reset(&self) {
        for field in [self.name, self.email, self.subject, self.message] {
            field.set(String::new());
        }
    }
}

#[component]
pub fn ContactSection(owner: Owner, socials: Vec<SocialLink>) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_in_view(section_ref);
    let form = ContactForm::new();
    let (is_submitting, set_is_submitting) = signal(false);

    // nothing leaves the browser; the delay stands in for a request
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            if let Err(e) = window().alert_with_message("Thank you for your message! I'll get back to you soon.") {
                log::warn!("couldn't show confirmation: {e:?}");
            }
            form.reset();
            set_is_submitting.set(false);
        },
        SUBMIT_DELAY_MS,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);
        start(());
    };

    let details = [
        ("✉", "Email", owner.email.clone(), Some(format!("mailto:{}", owner.email))),
        ("☎", "Phone", owner.phone.clone(), Some(format!("tel:{}", owner.phone))),
        ("⌖", "Location", owner.location.clone(), None),
    ];

    view! {
        <section node_ref=section_ref id="contact" class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <div class=move || {
                    if visible.get() {
                        "text-center mb-16 animate-fade-in"
                    } else {
                        "text-center mb-16 opacity-0"
                    }
                }>
                    <h2 class="text-4xl font-black mb-4">
                        "Get In " <span class="text-gradient">"Touch"</span>
                    </h2>
                    <div class="w-24 h-1 bg-accent mx-auto rounded-full"></div>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        {details
                            .into_iter()
                            .map(|(icon, label, value, href)| {
                                let value = match href {
                                    Some(href) => {
                                        view! {
                                            <a href=href class="hover:text-accent">
                                                {value}
                                            </a>
                                        }
                                            .into_any()
                                    }
                                    None => view! { <span>{value}</span> }.into_any(),
                                };
                                view! {
                                    <div class="card-gradient rounded-2xl p-5 flex items-center gap-4">
                                        <div class="text-2xl">{icon}</div>
                                        <div>
                                            <p class="text-sm text-muted">{label}</p>
                                            {value}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="flex gap-4">
                            {socials
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <a
                                            href=s.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=s.label.clone()
                                            class="p-3 rounded-xl bg-white/5 hover:bg-accent/20"
                                        >
                                            <i class=s.icon></i>
                                            <span class="sr-only">{s.label}</span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <form class="card-gradient rounded-2xl p-8 space-y-5" on:submit=on_submit>
                        <div class="grid sm:grid-cols-2 gap-5">
                            <input
                                type="text"
                                name="name"
                                placeholder="Your Name"
                                required=true
                                class="w-full px-4 py-3 rounded-xl bg-white/5 border border-white/10"
                                bind:value=form.name
                            />
                            <input
                                type="email"
                                name="email"
                                placeholder="Your Email"
                                required=true
                                class="w-full px-4 py-3 rounded-xl bg-white/5 border border-white/10"
                                bind:value=form.email
                            />
                        </div>
                        <input
                            type="text"
                            name="subject"
                            placeholder="Subject"
                            required=true
                            class="w-full px-4 py-3 rounded-xl bg-white/5 border border-white/10"
                            bind:value=form.subject
                        />
                        <textarea
                            name="message"
                            rows="6"
                            placeholder="Your Message"
                            required=true
                            class="w-full px-4 py-3 rounded-xl bg-white/5 border border-white/10"
                            bind:value=form.message
                        ></textarea>
                        <button
                            type="submit"
                            class="btn-grad w-full disabled:opacity-50"
                            disabled=move || is_submitting.get()
                        >
                            {move || if is_submitting.get() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
