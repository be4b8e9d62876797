mod about;
mod background;
mod blog;
mod carousel;
mod contact;
mod context;
mod cursor;
mod header;
mod hero;
mod layout;
mod modal;
mod navbar;
mod portfolio;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_preferred_dark;

use crate::section::Section;
use crate::site::FAVICON_SRC;
use crate::theme::theme_root_class;

use about::About;
use blog::BlogTeaser;
use contact::Contact;
use context::{provide_active_section_context, provide_theme_context, use_active_section};
use cursor::CustomCursor;
use hero::Hero;
use layout::SectionLayout;
use navbar::Navbar;
use portfolio::Portfolio;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON_SRC />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme_context();
    provide_active_section_context();

    // storage and media queries only exist in the browser, so the persisted
    // theme is restored after hydration
    let prefers_dark = use_preferred_dark();
    Effect::new(move |_| theme.restore(prefers_dark.get_untracked()));

    view! {
        <Title text="Favour Bawa Portfolio" />
        <Meta name="description" content="A web-design showcase of my work and skills" />

        <Router>
            <div class=move || {
                format!(
                    "relative min-h-screen transition-colors duration-300 {}",
                    theme_root_class(theme.get()),
                )
            }>
                <Navbar />
                <CustomCursor />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let sections = use_active_section();
    Effect::new(move |_| sections.ensure_initialized());

    view! {
        <SectionLayout section=Section::Hero>
            <Hero />
        </SectionLayout>
        <SectionLayout section=Section::About>
            <About />
        </SectionLayout>
        <SectionLayout section=Section::Portfolio>
            <Portfolio />
        </SectionLayout>
        <SectionLayout section=Section::Blog>
            <BlogTeaser />
        </SectionLayout>
        <SectionLayout section=Section::Contact>
            <Contact />
        </SectionLayout>
    }
}
