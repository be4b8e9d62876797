use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{reveal_class, RevealMode, SectionReveal};
use crate::section::Section;

use super::context::use_active_section;

const OBSERVER_THRESHOLDS: [f64; 6] = [0.0, 0.1, 0.25, 0.5, 0.75, 1.0];

/// Wraps one page section: reports its visibility, plays its entrance
/// animation and keeps a rendering fault from spreading to its siblings.
#[component]
pub fn SectionLayout(
    section: Section,
    #[prop(optional)] mode: RevealMode,
    children: ChildrenFn,
) -> impl IntoView {
    let sections = use_active_section();
    let reveal = RwSignal::new(SectionReveal::new(section, mode));
    let node_ref = NodeRef::<html::Section>::new();

    Effect::new(move |_| {
        let active = sections.active();
        reveal.maybe_update(|r| r.update(active));
    });

    use_intersection_observer_with_options(
        node_ref,
        move |entries, _| {
            for entry in entries {
                sections.report(section, entry.intersection_ratio());
            }
        },
        UseIntersectionObserverOptions::default().thresholds(OBSERVER_THRESHOLDS.to_vec()),
    );

    view! {
        <section
            id=section.id()
            node_ref=node_ref
            class=move || {
                format!(
                    "relative min-h-screen scroll-mt-16 transition-all duration-700 ease-out {}",
                    reveal_class(reveal.with(|r| r.phase())),
                )
            }
        >
            <ErrorBoundary fallback=move |errors| {
                view! {
                    <div class="container mx-auto px-4 py-16 text-center">
                        <p class="text-lg font-semibold text-red-500">
                            {format!("The {} section couldn't be displayed.", section.label())}
                        </p>
                        <ul class="mt-2 text-sm text-muted-foreground">
                            {move || {
                                errors
                                    .get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </div>
                }
            }>
                <Show when=move || reveal.with(|r| r.should_mount())>{children()}</Show>
            </ErrorBoundary>
        </section>
    }
}
