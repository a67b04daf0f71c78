use leptos::{html, prelude::*};

use crate::content::Project;

use super::hooks::use_in_view;

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_in_view(section_ref);

    view! {
        <section node_ref=section_ref id="projects" class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <div class=move || {
                    if visible.get() {
                        "text-center mb-16 animate-fade-in"
                    } else {
                        "text-center mb-16 opacity-0"
                    }
                }>
                    <h2 class="text-4xl font-black mb-4">
                        "Featured " <span class="text-gradient">"Projects"</span>
                    </h2>
                    <div class="w-24 h-1 bg-accent mx-auto rounded-full"></div>
                </div>
                <div class="grid lg:grid-cols-2 gap-8">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index visible /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, visible: Signal<bool>) -> impl IntoView {
    let link = project.link.clone().map(|href| {
        view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="text-sm text-accent hover:underline"
            >
                "View project →"
            </a>
        }
    });

    view! {
        <article
            class=move || {
                if visible.get() {
                    "card-gradient rounded-2xl p-6 flex flex-col gap-4 animate-fade-in"
                } else {
                    "card-gradient rounded-2xl p-6 flex flex-col gap-4 opacity-0"
                }
            }
            style=format!("animation-delay: {}ms;", index * 200)
        >
            <header class="flex items-start justify-between gap-4">
                <div>
                    <h3 class="text-xl font-bold">
                        <span class="mr-2">{project.icon}</span>
                        {project.title}
                    </h3>
                    <p class="text-sm text-muted">{project.kind}</p>
                </div>
                <span class="px-3 py-1 rounded-full text-xs bg-accent/20">{project.status}</span>
            </header>
            <p class="text-muted leading-relaxed">{project.description}</p>
            <div class="grid grid-cols-3 gap-3">
                {project
                    .stats
                    .into_iter()
                    .map(|s| {
                        view! {
                            <div class="text-center rounded-xl bg-white/5 p-3">
                                <div class="font-bold text-gradient">{s.value}</div>
                                <div class="text-xs text-muted">{s.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <ul class="space-y-1 text-sm text-muted list-disc list-inside">
                {project.features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
            </ul>
            <div class="flex flex-wrap gap-2 mt-auto">
                {project
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
            {link}
        </article>
    }
}
