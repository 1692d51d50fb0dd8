use leptos::prelude::*;

use crate::components::{ContactSection, Nav, ScrollHint, ScrollToTop};
use crate::controller::PageFeatures;
use crate::dom::PageHandle;
use crate::models::{Platform, DISPLAY_NAME};

const PARTICLE_COUNT: usize = 12;

const SKILLS: [(&str, &str); 6] = [
    ("Angular", "Component-driven single page applications"),
    ("TypeScript", "Typed, maintainable front-end code"),
    ("Rust", "Fast and reliable back-end services"),
    ("HTML & SCSS", "Responsive, accessible layouts"),
    ("REST APIs", "Designing and consuming HTTP services"),
    ("Git", "Collaborative version control workflows"),
];

const PROJECTS: [(&str, &str); 3] = [
    ("Portfolio", "This site: typewriter hero, scroll reveals and a relayed contact form."),
    ("Task Board", "Kanban board with drag and drop and offline persistence."),
    ("Weather Now", "Forecast dashboard backed by a public weather API."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let page = PageHandle::new();

    // Effects only run in the browser, after hydration
    Effect::new(move |_| page.start(PageFeatures::full()));
    on_cleanup(move || page.stop());

    view! {
        <div class="home-page">
            <Nav page=page/>

            <div class="particles" aria-hidden="true">
                {(0..PARTICLE_COUNT)
                    .map(|_| view! { <span class="floating-particle"></span> })
                    .collect_view()}
            </div>

            <section id="home" class="hero">
                <p class="greeting">"Hello, I'm"</p>
                <h1 class="hero-name">
                    <span class="typewriter">{DISPLAY_NAME}</span>
                </h1>
                <p class="subtitle">"Front-end Developer"</p>
                <div class="cta-buttons">
                    <button class="btn btn-primary" on:click=move |_| page.navigate_to_section("projects")>
                        "View My Work"
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| page.navigate_to_section("contact")>
                        "Contact Me"
                    </button>
                </div>
                <div class="social-links">
                    {Platform::all()
                        .into_iter()
                        .map(|platform| {
                            view! {
                                <button
                                    class="social-btn"
                                    aria-label=platform.label()
                                    on:click=move |_| page.open_external_profile(platform.as_str())
                                >
                                    {platform.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="about" class="about">
                <h2 class="section-title">"About Me"</h2>
                <p>
                    "I build clean, responsive web applications and enjoy turning designs into "
                    "interfaces that feel fast and friendly."
                </p>
            </section>

            <section id="skills" class="skills">
                <h2 class="section-title">"Skills"</h2>
                <div class="skills-grid">
                    {SKILLS
                        .into_iter()
                        .map(|(name, description)| {
                            view! {
                                <div class="skill-card">
                                    <h3>{name}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="projects" class="projects">
                <h2 class="section-title">"Projects"</h2>
                <div class="projects-grid">
                    {PROJECTS
                        .into_iter()
                        .map(|(name, description)| {
                            view! {
                                <div class="project-card">
                                    <h3>{name}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <ContactSection page=page/>

            <ScrollHint/>
            <ScrollToTop page=page/>

            <footer class="footer">
                <p>{format!("© {DISPLAY_NAME}")}</p>
            </footer>
        </div>
    }
}
