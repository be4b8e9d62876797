use leptos::prelude::*;

use crate::motion::{particles, PARTICLE_COUNT};

#[component]
pub fn AnimatedBackground() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="absolute inset-0 bg-gradient-to-b from-primary/5 via-transparent to-primary/5"></div>
            {particles(PARTICLE_COUNT)
                .into_iter()
                .map(|p| {
                    view! {
                        <span
                            class="absolute rounded-full bg-primary/30 animate-float"
                            style=p.style()
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}
