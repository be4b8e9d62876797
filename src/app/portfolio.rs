use leptos::{html, prelude::*};

use crate::carousel::{Carousel, ImageLoad, Nav};
use crate::catalog::{star_fill, Catalog, Project, ProjectId, MAX_RATING};
use crate::portfolio::{filter_button_class, focus_return, Filter, Grid, PortfolioView};

use super::background::AnimatedBackground;
use super::carousel::ImageCarousel;
use super::header::SectionHeader;
use super::modal::ProjectModal;

/// Badges shown on a card before collapsing into "+N".
const CARD_TECH_BADGES: usize = 3;

#[component]
pub fn Portfolio() -> impl IntoView {
    let view_state = RwSignal::new(PortfolioView::new(Catalog::shared()));
    let open_project = Memo::new(move |_| view_state.with(|v| v.modal().map(|m| m.project_id())));

    view! {
        <div class="relative py-20 overflow-hidden">
            <AnimatedBackground />
            <div class="container relative z-10 mx-auto px-4">
                <SectionHeader title="MY" highlight="PORTFOLIO" shadow_text="WORKS" />
                <FilterBar view_state />
                <ProjectGrid view_state open_project />
            </div>
            {move || open_project.get().map(|id| view! { <ProjectModal view_state id /> })}
        </div>
    }
}

#[component]
fn FilterBar(view_state: RwSignal<PortfolioView>) -> impl IntoView {
    let current = Memo::new(move |_| view_state.with(|v| v.filter()));
    view! {
        <div class="flex flex-wrap justify-center gap-3 mb-12" role="group" aria-label="Filter projects">
            {Filter::options()
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            class=move || {
                                format!(
                                    "px-5 py-2 rounded-full text-sm font-medium transition-all duration-300 {}",
                                    filter_button_class(current.get() == filter),
                                )
                            }
                            aria-pressed=move || (current.get() == filter).to_string()
                            on:click=move |_| view_state.maybe_update(|v| v.set_filter(filter))
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectGrid(
    view_state: RwSignal<PortfolioView>,
    open_project: Memo<Option<ProjectId>>,
) -> impl IntoView {
    let projects = Memo::new(move |_| {
        view_state.with(|v| match v.grid() {
            Grid::Empty => Vec::new(),
            Grid::Projects(projects) => projects.into_iter().cloned().collect::<Vec<Project>>(),
        })
    });

    view! {
        <Show
            when=move || projects.with(|p| !p.is_empty())
            fallback=|| {
                view! {
                    <p class="py-16 text-center text-lg text-muted-foreground">
                        "No projects found in this category."
                    </p>
                }
            }
        >
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                <For each=move || projects.get() key=|project| project.id let:project>
                    <ProjectCard view_state open_project project />
                </For>
            </div>
        </Show>
    }
}

#[component]
fn ProjectCard(
    view_state: RwSignal<PortfolioView>,
    open_project: Memo<Option<ProjectId>>,
    project: Project,
) -> impl IntoView {
    let id = project.id;
    let carousel = RwSignal::new(Carousel::new(project.images.len()));
    let on_nav = Callback::new(move |nav: Nav| carousel.update(|c| c.apply(nav)));
    let on_load = Callback::new(move |(index, load): (usize, ImageLoad)| {
        carousel.maybe_update(|c| {
            let before = c.load(index);
            c.record_load(index, load);
            c.load(index) != before
        });
    });
    let details_ref = NodeRef::<html::Button>::new();
    // hand focus back to this card's trigger once its modal closes
    Effect::new(move |before: Option<Option<ProjectId>>| {
        let after = open_project.get();
        if focus_return(before.flatten(), after) == Some(id) {
            if let Some(button) = details_ref.get_untracked() {
                let _ = button.focus();
            }
        }
        after
    });
    let open_details = move |_| {
        let start = carousel.with_untracked(|c| c.index());
        view_state.maybe_update(|v| v.select_project_at(id, start).is_ok());
    };

    let hidden_badges = project.technologies.len().saturating_sub(CARD_TECH_BADGES);
    let badges = project
        .technologies
        .iter()
        .take(CARD_TECH_BADGES)
        .map(|tech| {
            view! {
                <span class="px-2 py-1 rounded-md bg-primary/10 text-primary text-xs font-medium">
                    {tech.name.clone()}
                </span>
            }
        })
        .collect_view();

    view! {
        <article class="group flex flex-col rounded-xl overflow-hidden bg-card shadow-md hover:shadow-xl transition-shadow duration-300">
            <ImageCarousel project=project.clone() state=carousel on_nav on_load keyboard=true />
            <div class="flex flex-col flex-1 p-6">
                <div class="flex items-center justify-between mb-2 text-sm">
                    <span class="text-primary font-medium">{project.category.label()}</span>
                    <Satisfaction score=project.satisfaction />
                </div>
                <h3 class="text-xl font-bold mb-2">{project.title.clone()}</h3>
                <p class="text-muted-foreground mb-4 line-clamp-3">{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {badges}
                    {(hidden_badges > 0)
                        .then(|| {
                            view! {
                                <span class="px-2 py-1 rounded-md bg-muted/20 text-xs">
                                    {format!("+{hidden_badges}")}
                                </span>
                            }
                        })}
                </div>
                <div class="mt-auto flex items-center justify-between gap-4">
                    <button
                        class="px-4 py-2 rounded-full bg-primary text-primary-foreground text-sm font-semibold hover:bg-primary/90 transition-colors"
                        node_ref=details_ref
                        aria-haspopup="dialog"
                        on:click=open_details
                    >
                        "View Details"
                    </button>
                    <a
                        href=project.link.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-sm font-medium text-primary hover:underline"
                        aria-label=format!("Open {} in a new tab", project.title)
                    >
                        "Visit ↗"
                    </a>
                </div>
            </div>
        </article>
    }
}

/// Five stars, filled for the whole part of `score`.
#[component]
pub fn Stars(score: f32) -> impl IntoView {
    view! {
        <span
            class="inline-flex"
            role="img"
            aria-label=format!("{score:.1} out of {MAX_RATING} stars")
        >
            {star_fill(score)
                .into_iter()
                .map(|filled| {
                    view! {
                        <span class=if filled {
                            "text-yellow-400"
                        } else {
                            "text-muted-foreground/40"
                        }>"★"</span>
                    }
                })
                .collect_view()}
        </span>
    }
}

#[component]
fn Satisfaction(score: f32) -> impl IntoView {
    view! {
        <span class="inline-flex items-center gap-1" title="Client satisfaction">
            <Stars score />
            <span class="text-muted-foreground">{format!("{score:.1}")}</span>
        </span>
    }
}
