mod about;
mod contact;
mod experience;
mod footer;
mod hero;
pub mod hooks;
mod nav;
mod particles;
mod projects;
mod skills;
mod stats;

use std::sync::Arc;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{self, SiteContent};

use about::AboutSection;
use contact::ContactSection;
use experience::ExperienceSection;
use footer::Footer;
use hero::HeroSection;
use hooks::{provide_theme, provide_trackers};
use nav::Navigation;
use projects::ProjectsSection;
use skills::SkillsSection;
use stats::StatsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

#[component]
fn Portfolio() -> impl IntoView {
    match content::site() {
        Ok(site) => Either::Left(view! { <Page site /> }),
        Err(e) => {
            log::error!("couldn't load site content: {e}");
            Either::Right(
                view! {
                    <main class="min-h-screen flex items-center justify-center">
                        <p class="text-lg">"This page is temporarily unavailable."</p>
                    </main>
                },
            )
        }
    }
}

/// Lays the sections out in document order. Trackers and theme live here so
/// every section shares them.
#[component]
fn Page(site: Arc<SiteContent>) -> impl IntoView {
    provide_trackers(site.trackers.clone());
    let theme = provide_theme();
    let owner = site.owner.clone();
    let name = owner.name.clone();

    view! {
        <Title text=format!("{} - {}", owner.name, owner.title) />
        <div
            class=move || {
                format!(
                    "{} min-h-screen bg-page text-foreground transition-colors duration-300",
                    theme.theme.get().root_class(),
                )
            }
            style=move || format!("color-scheme: {};", theme.theme.get().color_scheme())
        >
            <Navigation name=name.clone() resume=owner.resume.clone() />
            <main class="relative">
                <HeroSection owner=owner.clone() />
                <StatsSection stats=site.stats.clone() />
                <AboutSection about=site.about.clone() />
                <ExperienceSection roles=site.experience.clone() />
                <ProjectsSection projects=site.projects.clone() />
                <SkillsSection categories=site.skills.clone() />
                <ContactSection owner=owner.clone() socials=site.socials.clone() />
            </main>
            <Footer owner=owner.clone() socials=site.socials.clone() />
        </div>
    }
}
