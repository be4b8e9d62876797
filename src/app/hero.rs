use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::motion::parallax_offset;
use crate::section::Section;
use crate::site::{OWNER, PORTRAIT_SRC};

use super::context::use_active_section;

#[component]
pub fn Hero() -> impl IntoView {
    let sections = use_active_section();
    let (offset, set_offset) = signal(0.0_f64);

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or_default();
        set_offset.set(parallax_offset(y));
    });

    view! {
        <div class="relative min-h-screen flex items-center py-12 md:py-0 overflow-hidden">
            <div class="absolute inset-0 z-0" aria-hidden="true">
                <div
                    class="absolute inset-0 bg-primary"
                    style="clip-path: polygon(0 0, 45% 0, 35% 100%, 0 100%)"
                ></div>
                <div
                    class="absolute inset-0 bg-background transition-colors duration-300"
                    style="clip-path: polygon(45% 0, 100% 0, 100% 100%, 35% 100%)"
                ></div>
            </div>
            <div class="container relative z-10 mx-auto px-4 md:px-6 lg:px-8">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-12 items-center">
                    <div class="relative order-2 lg:order-1 group animate-slide-in-left">
                        <div class="relative aspect-square w-full max-w-[500px] mx-auto rounded-full overflow-hidden shadow-xl">
                            <div
                                class="relative h-full w-full transition-transform duration-300 ease-out"
                                style=move || format!("transform: translateY({:.1}px)", offset.get())
                            >
                                <img
                                    src=PORTRAIT_SRC
                                    alt=OWNER
                                    class="h-full w-full object-cover rounded-full transition-transform duration-300 group-hover:scale-105"
                                />
                            </div>
                        </div>
                    </div>
                    <div class="order-1 lg:order-2 lg:pl-12 animate-section-enter">
                        <div class="relative mb-6 md:mb-8">
                            <h1 class="text-3xl md:text-5xl lg:text-6xl font-bold mb-4 tracking-tight">
                                <span class="inline-flex items-center">
                                    <span class="hidden md:block w-8 h-[2px] bg-primary mr-4"></span>
                                    "I'M "
                                    <span class="text-primary ml-5">"FAVOUR BAWA."</span>
                                </span>
                            </h1>
                            <h2 class="text-2xl md:text-4xl lg:text-5xl font-bold text-muted-foreground">
                                "FRONTEND DEVELOPER"
                            </h2>
                        </div>
                        <p class="text-base md:text-lg text-muted-foreground mb-8 max-w-2xl">
                            "I'm a passionate web designer & front-end developer focused on crafting clean & user-friendly experiences. I am committed to building excellent software that improves the lives of those around me."
                        </p>
                        <a
                            href=Section::About.href()
                            class="group inline-flex items-center bg-primary text-white text-base md:text-lg font-semibold px-6 py-3 rounded-full hover:bg-primary/90 hover:translate-x-2 transition-all focus:outline-none focus:ring-2 focus:ring-primary/50"
                            on:click=move |_| sections.navigate(Section::About)
                        >
                            "MORE ABOUT ME"
                            <span class="ml-2 transition-transform group-hover:translate-x-1">
                                "→"
                            </span>
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
