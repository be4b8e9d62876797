use leptos::prelude::*;

/// Large faded word behind a title with one highlighted word, e.g. "MY PORTFOLIO" over "WORKS".
#[component]
pub fn SectionHeader(
    title: &'static str,
    highlight: &'static str,
    shadow_text: &'static str,
) -> impl IntoView {
    view! {
        <div class="relative mb-12 md:mb-16 text-center select-none">
            <span
                class="absolute inset-x-0 top-1/2 -translate-y-1/2 text-6xl md:text-8xl lg:text-9xl font-extrabold uppercase tracking-widest text-muted/10"
                aria-hidden="true"
            >
                {shadow_text}
            </span>
            <h2 class="relative text-3xl md:text-5xl font-bold uppercase">
                {title} " " <span class="text-primary">{highlight}</span>
            </h2>
        </div>
    }
}
