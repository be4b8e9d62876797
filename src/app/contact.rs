use leptos::prelude::*;

use crate::site::{copyright, last_updated, EMAIL, SOCIAL_LINKS};

use super::header::SectionHeader;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Contact() -> impl IntoView {
    let copy_email = format!(
        "navigator.clipboard.writeText('{EMAIL}').then(() => alert('📋 Email copied: {EMAIL}'))"
    );

    view! {
        <div class="py-20 flex flex-col min-h-screen">
            <div class="container mx-auto px-4 flex-1 flex flex-col items-center justify-center">
                <SectionHeader title="GET IN" highlight="TOUCH" shadow_text="CONTACT" />
                <div class="w-full max-w-2xl p-8 rounded-xl bg-card shadow-md text-center">
                    <p class="text-lg mb-4 text-primary font-medium">
                        "Open to freelance projects and full-time roles"
                    </p>
                    <p class="mb-6 text-muted-foreground">
                        "Have a product that needs a clean, accessible interface? Tell me about it and I'll get back to you within a day."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <a
                            href=format!("mailto:{EMAIL}")
                            class="px-6 py-3 rounded-full bg-primary text-primary-foreground font-semibold hover:bg-primary/90 transition-colors"
                        >
                            "Send an email"
                        </a>
                        <button
                            class="px-6 py-3 rounded-full border border-primary/40 text-primary font-medium hover:bg-primary/10 transition-colors"
                            onclick=copy_email
                        >
                            {format!("📧 {EMAIL}")}
                        </button>
                    </div>
                    <div class="flex justify-center gap-4 mt-8">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-2xl text-muted-foreground hover:text-primary transition-colors"
                                        aria-label=link.label
                                    >
                                        <i class=link.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <footer class="mt-16 text-center text-sm text-muted-foreground">
                <p>{copyright(BUILD_TIME)}</p>
                {last_updated(BUILD_TIME).map(|date| view! { <p>"Last updated " {date}</p> })}
            </footer>
        </div>
    }
}
