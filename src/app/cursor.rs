use leptos::prelude::*;
use leptos_use::{use_mouse, UseMouseReturn};

use crate::motion::{cursor_transform, CURSOR_SIZE_PX};

#[component]
pub fn CustomCursor() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();
    // nothing to follow until the pointer has moved
    let visible = move || x.get() != 0.0 || y.get() != 0.0;

    view! {
        <div
            class="pointer-events-none fixed top-0 left-0 z-50 hidden md:block rounded-full border-2 border-primary mix-blend-difference transition-transform duration-100 ease-out"
            class:opacity-0=move || !visible()
            style:width=format!("{CURSOR_SIZE_PX}px")
            style:height=format!("{CURSOR_SIZE_PX}px")
            style:transform=move || cursor_transform(x.get(), y.get(), CURSOR_SIZE_PX)
            aria-hidden="true"
        ></div>
    }
}
