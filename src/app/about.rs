use leptos::prelude::*;

use crate::blog::post_count;
use crate::catalog::Catalog;
use crate::section::Section;

use super::context::use_active_section;
use super::header::SectionHeader;

const SKILLS: [(&str, &[&str]); 3] = [
    ("Design", &["Figma", "Design systems", "Prototyping", "Accessibility"]),
    ("Frontend", &["React", "Next.js", "TypeScript", "Tailwind CSS"]),
    ("Tooling", &["Git", "Vite", "Storybook", "Playwright"]),
];

#[component]
pub fn About() -> impl IntoView {
    let sections = use_active_section();
    let catalog = Catalog::builtin();
    let stats = [
        (catalog.len().to_string(), "Featured projects"),
        (catalog.categories().len().to_string(), "Disciplines"),
        (post_count().to_string(), "Articles written"),
    ];

    view! {
        <div class="py-20">
            <div class="container mx-auto px-4">
                <SectionHeader title="ABOUT" highlight="ME" shadow_text="RESUME" />
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div>
                        <h3 class="text-2xl font-bold mb-4">"Personal Info"</h3>
                        <p class="text-base mb-4 leading-relaxed text-muted-foreground">
                            "I design and build interfaces for products people use every day. My work sits between design and engineering: I turn wireframes into components, components into systems, and systems into fast, accessible pages."
                        </p>
                        <p class="text-base mb-6 leading-relaxed text-muted-foreground">
                            "Most of my recent work is freelance: video tools for small classrooms, booking flows for restaurants and dashboards that sales teams actually read."
                        </p>
                        <div class="grid grid-cols-3 gap-4">
                            {stats
                                .into_iter()
                                .map(|(value, label)| {
                                    view! {
                                        <div class="p-4 rounded-xl bg-card shadow-sm text-center">
                                            <p class="text-3xl font-bold text-primary">{value}</p>
                                            <p class="text-sm text-muted-foreground">{label}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h3 class="text-2xl font-bold mb-4">"Skills"</h3>
                        <div class="space-y-6">
                            {SKILLS
                                .iter()
                                .map(|(group, skills)| {
                                    view! {
                                        <div>
                                            <h4 class="font-semibold mb-2">{*group}</h4>
                                            <ul class="flex flex-wrap gap-2">
                                                {skills
                                                    .iter()
                                                    .map(|skill| {
                                                        view! {
                                                            <li class="px-3 py-1 rounded-full bg-primary/10 text-primary text-sm">
                                                                {*skill}
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <a
                            href=Section::Portfolio.href()
                            class="inline-block mt-8 font-semibold text-primary hover:underline"
                            on:click=move |_| sections.navigate(Section::Portfolio)
                        >
                            "See my work →"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
