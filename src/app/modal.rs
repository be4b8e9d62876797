use leptos::{ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::carousel::{Carousel, ImageLoad, Nav};
use crate::catalog::ProjectId;
use crate::portfolio::{modal_title_id, PortfolioError, PortfolioView};

use super::carousel::ImageCarousel;
use super::portfolio::Stars;

#[component]
pub fn ProjectModal(view_state: RwSignal<PortfolioView>, id: ProjectId) -> impl IntoView {
    let project = view_state
        .with_untracked(|v| v.selected().filter(|p| p.id == id).cloned())
        .ok_or(PortfolioError::UnknownProject(id));

    // escape closes, arrows page through the images; removed when the modal unmounts
    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        let mut handled = false;
        view_state.maybe_update(|v| {
            handled = v.handle_key(&ev.key()).is_some();
            handled
        });
        if handled {
            ev.prevent_default();
        }
    });

    let carousel = Memo::new(move |_| {
        view_state.with(|v| {
            v.modal()
                .map(|m| m.carousel().clone())
                .unwrap_or_else(|| Carousel::new(0))
        })
    });
    let on_nav = Callback::new(move |nav: Nav| {
        view_state.update(|v| {
            if let Some(modal) = v.modal_mut() {
                modal.carousel_mut().apply(nav);
            }
        });
    });
    let on_load = Callback::new(move |(index, load): (usize, ImageLoad)| {
        view_state.maybe_update(|v| {
            let Some(modal) = v.modal_mut() else {
                return false;
            };
            let carousel = modal.carousel_mut();
            let before = carousel.load(index);
            carousel.record_load(index, load);
            carousel.load(index) != before
        });
    });
    let close = move |_: ev::MouseEvent| view_state.update(|v| v.clear_selection());

    let close_ref = NodeRef::<html::Button>::new();
    Effect::new(move |_| {
        if let Some(button) = close_ref.get() {
            let _ = button.focus();
        }
    });

    project.map(|project| {
        let technologies = project
            .technologies
            .iter()
            .map(|tech| {
                view! {
                    <li
                        class="px-3 py-1 rounded-full bg-primary/10 text-primary text-sm"
                        title=tech.description.clone()
                    >
                        {tech.name.clone()}
                    </li>
                }
            })
            .collect_view();
        let challenges = project
            .details
            .challenges
            .iter()
            .map(|c| view! { <li>{c.clone()}</li> })
            .collect_view();
        let solutions = project
            .details
            .solutions
            .iter()
            .map(|s| view! { <li>{s.clone()}</li> })
            .collect_view();
        let reviews = project
            .reviews
            .iter()
            .map(|review| {
                view! {
                    <blockquote class="p-4 rounded-lg bg-muted/10">
                        <Stars score=review.rating />
                        <p class="mt-2 italic">{format!("\"{}\"", review.text)}</p>
                        <footer class="mt-2 text-sm text-muted-foreground">
                            {format!("- {}", review.author)}
                        </footer>
                    </blockquote>
                }
            })
            .collect_view();

        view! {
            <div
                class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/70 backdrop-blur-sm animate-fade-in"
                on:click=close
            >
                <div
                    class="relative w-full max-w-4xl max-h-[90vh] overflow-y-auto rounded-xl bg-background shadow-2xl"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=modal_title_id(id)
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="sticky top-0 z-10 flex items-center justify-between p-6 bg-background border-b border-muted/20">
                        <div>
                            <p class="text-sm text-primary font-medium">
                                {project.category.label()}
                            </p>
                            <h3 id=modal_title_id(id) class="text-2xl font-bold">
                                {project.title.clone()}
                            </h3>
                        </div>
                        <button
                            node_ref=close_ref
                            class="p-2 rounded-full hover:bg-muted/20 text-xl"
                            aria-label="Close project details"
                            on:click=close
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="p-6 space-y-8">
                        <ImageCarousel project=project.clone() state=carousel on_nav on_load tall=true />
                        <section>
                            <h4 class="text-lg font-semibold mb-2">"Overview"</h4>
                            <p class="text-muted-foreground">{project.description.clone()}</p>
                        </section>
                        <section>
                            <h4 class="text-lg font-semibold mb-2">"Technologies"</h4>
                            <ul class="flex flex-wrap gap-2">{technologies}</ul>
                        </section>
                        <section class="grid md:grid-cols-2 gap-6">
                            <div>
                                <h4 class="text-lg font-semibold mb-2">"Challenges"</h4>
                                <ul class="list-disc pl-5 space-y-1">{challenges}</ul>
                            </div>
                            <div>
                                <h4 class="text-lg font-semibold mb-2">"Solutions"</h4>
                                <ul class="list-disc pl-5 space-y-1">{solutions}</ul>
                            </div>
                        </section>
                        <p class="text-sm text-muted-foreground">
                            "Duration: " {project.details.duration.clone()}
                        </p>
                        <section>
                            <h4 class="text-lg font-semibold mb-2">"Client Reviews"</h4>
                            <div class="space-y-4">{reviews}</div>
                        </section>
                        <a
                            href=project.link.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center px-6 py-3 rounded-full bg-primary text-primary-foreground font-semibold hover:bg-primary/90 transition-colors"
                        >
                            "View Project ↗"
                        </a>
                    </div>
                </div>
            </div>
        }
    })
}
