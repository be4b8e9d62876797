use leptos::{either::*, html, prelude::*};

use crate::carousel::{Carousel, ImageLoad, Nav, Slide, SwipeTracker};
use crate::catalog::Project;

/// Image viewer over one project's screenshots.
///
/// The state lives with the caller (a card or the open modal), so this only
/// renders it and reports navigation and load events back.
#[component]
pub fn ImageCarousel(
    project: Project,
    #[prop(into)] state: Signal<Carousel>,
    on_nav: Callback<Nav>,
    on_load: Callback<(usize, ImageLoad)>,
    #[prop(optional)] tall: bool,
    /// Handle arrow keys while focused. Off when an outer listener already does.
    #[prop(optional)]
    keyboard: bool,
) -> impl IntoView {
    let swipe = StoredValue::new(SwipeTracker::new());
    let height = if tall {
        "h-64 md:h-96"
    } else {
        "h-48 md:h-56"
    };

    if project.images.is_empty() {
        return Either::Left(view! {
            <div class=format!(
                "{height} w-full flex items-center justify-center rounded-lg bg-muted/20 text-muted-foreground",
            )>"No images available"</div>
        });
    }

    let count = project.images.len();
    let slides = project
        .images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let img_ref = NodeRef::<html::Img>::new();
            // the load event can fire before hydration attaches listeners
            Effect::new(move |_| {
                if let Some(img) = img_ref.get() {
                    if img.complete() {
                        let load = if img.natural_width() > 0 {
                            ImageLoad::Loaded
                        } else {
                            ImageLoad::Failed
                        };
                        on_load.run((index, load));
                    }
                }
            });
            view! {
                <img
                    node_ref=img_ref
                    src=image.src.clone()
                    alt=project.image_alt(index)
                    width=image.width.to_string()
                    height=image.height.to_string()
                    loading=if index == 0 { "eager" } else { "lazy" }
                    draggable="false"
                    class="absolute inset-0 h-full w-full object-cover transition-opacity duration-500"
                    class:opacity-0=move || !state.with(|c| c.is_current(index))
                    on:load=move |_| on_load.run((index, ImageLoad::Loaded))
                    on:error=move |_| on_load.run((index, ImageLoad::Failed))
                />
            }
        })
        .collect_view();

    let overlay = move || match state.with(|c| c.slide()) {
        Slide::Image { load: ImageLoad::Loading, .. } => Some(EitherOf3::A(view! {
            <div class="absolute inset-0 flex items-center justify-center bg-muted/20">
                <div
                    class="h-8 w-8 rounded-full border-4 border-primary border-t-transparent animate-spin"
                    role="status"
                    aria-label="Loading image"
                ></div>
            </div>
        })),
        Slide::Image { load: ImageLoad::Failed, .. } => Some(EitherOf3::B(view! {
            <div class="absolute inset-0 flex items-center justify-center bg-muted/30 text-sm text-muted-foreground">
                "Image unavailable"
            </div>
        })),
        Slide::Placeholder => Some(EitherOf3::C(view! {
            <div class="absolute inset-0 bg-muted/20"></div>
        })),
        Slide::Image { .. } => None,
    };

    let controls = (count > 1).then(|| {
        let indicators = (0..count)
            .map(|i| {
                view! {
                    <button
                        class=move || {
                            if state.with(|c| c.is_current(i)) {
                                "h-2 w-6 rounded-full bg-primary transition-all duration-300"
                            } else {
                                "h-2 w-2 rounded-full bg-white/60 transition-all duration-300"
                            }
                        }
                        aria-current=move || state.with(|c| c.is_current(i)).then_some("true")
                        aria-label=format!("Go to image {}", i + 1)
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_nav.run(Nav::To(i));
                        }
                    ></button>
                }
            })
            .collect_view();
        view! {
            <button
                class="absolute left-2 top-1/2 -translate-y-1/2 p-2 rounded-full bg-black/40 text-white hover:bg-black/60"
                aria-label="Previous image"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_nav.run(Nav::Prev);
                }
            >
                "‹"
            </button>
            <button
                class="absolute right-2 top-1/2 -translate-y-1/2 p-2 rounded-full bg-black/40 text-white hover:bg-black/60"
                aria-label="Next image"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_nav.run(Nav::Next);
                }
            >
                "›"
            </button>
            <div class="absolute bottom-3 inset-x-0 flex justify-center gap-2">{indicators}</div>
        }
    });

    Either::Right(view! {
        <div
            class=format!("relative {height} w-full overflow-hidden rounded-lg touch-pan-y")
            role="region"
            aria-roledescription="carousel"
            aria-label=format!("{} screenshots", project.title)
            tabindex="0"
            on:keydown=move |ev| {
                if !keyboard {
                    return;
                }
                if let Some(nav) = Nav::from_key(&ev.key()) {
                    ev.prevent_default();
                    ev.stop_propagation();
                    on_nav.run(nav);
                }
            }
            on:pointerdown=move |ev| {
                swipe.update_value(|s| s.begin(ev.client_x() as f64, ev.client_y() as f64));
            }
            on:pointerup=move |ev| {
                let nav = swipe
                    .try_update_value(|s| s.finish(ev.client_x() as f64, ev.client_y() as f64))
                    .flatten();
                if let Some(nav) = nav {
                    on_nav.run(nav);
                }
            }
            on:pointercancel=move |_| swipe.update_value(|s| s.cancel())
            on:pointerleave=move |_| swipe.update_value(|s| s.cancel())
        >
            {slides}
            {overlay}
            {controls}
            <div class="sr-only" aria-live="polite">
                {move || format!("Image {} of {count}", state.with(|c| c.index()) + 1)}
            </div>
        </div>
    })
}
