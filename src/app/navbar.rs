use leptos::prelude::*;

use crate::section::{nav_link_class, Section};
use crate::theme::Theme;

use super::context::{use_active_section, use_theme};

#[component]
pub fn Navbar() -> impl IntoView {
    let sections = use_active_section();
    let (menu_open, set_menu_open) = signal(false);

    let links = move |mobile: bool| {
        Section::ALL
            .into_iter()
            .map(|section| {
                let base = if mobile {
                    "block py-2 text-lg"
                } else {
                    "relative py-1 text-sm uppercase tracking-wide after:absolute after:left-0 after:-bottom-1 after:h-0.5 after:bg-primary after:transition-all"
                };
                view! {
                    <li>
                        <a
                            href=section.href()
                            class=move || {
                                format!(
                                    "{base} transition-colors duration-200 {}",
                                    nav_link_class(sections.is_active(section)),
                                )
                            }
                            aria-current=move || sections.is_active(section).then_some("page")
                            on:click=move |_| {
                                sections.navigate(section);
                                set_menu_open.set(false);
                            }
                        >
                            {section.label()}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 inset-x-0 z-40 bg-background/80 backdrop-blur-md border-b border-muted/20">
            <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                <a
                    href=Section::Hero.href()
                    class="text-xl font-bold tracking-tight"
                    on:click=move |_| sections.navigate(Section::Hero)
                >
                    "FAVOUR"
                    <span class="text-primary">"."</span>
                </a>
                <ul class="hidden md:flex items-center gap-8">{links(false)}</ul>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        class="md:hidden p-2 rounded-md hover:bg-muted/20"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <ul class="md:hidden px-4 pb-4 bg-background border-b border-muted/20">
                    {links(true)}
                </ul>
            </Show>
        </nav>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class="p-2 rounded-full text-lg hover:bg-muted/20 transition-colors duration-200"
            aria-label=move || theme.get().toggle_label()
            title=move || theme.get().toggle_label()
            aria-pressed=move || (theme.get() == Theme::Dark).to_string()
            on:click=move |_| theme.toggle()
        >
            {move || theme.get().icon()}
        </button>
    }
}
