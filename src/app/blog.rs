use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

#[cfg(feature = "ssr")]
use crate::blog::recent_posts;
use crate::blog::{post_count, BlogError, PostMeta, GLOBAL_META_CACHE, TEASER_POSTS};

use super::header::SectionHeader;

#[server(input = GetUrl)]
pub async fn get_recent_posts_server(limit: usize) -> Result<Vec<PostMeta>, ServerFnError> {
    recent_posts(limit)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn BlogTeaser() -> impl IntoView {
    let posts = Resource::new(
        || TEASER_POSTS,
        move |limit| async move {
            let cache = &*GLOBAL_META_CACHE;
            if let Some(s) = cache.get(&limit) {
                return Ok((*s).clone());
            }
            let meta = get_recent_posts_server(limit)
                .await
                .map_err(|e| BlogError::Unavailable(e.to_string()))?;
            #[cfg(feature = "hydrate")]
            cache.insert(limit, meta.clone());
            Ok::<_, BlogError>(meta)
        },
    );

    view! {
        <div class="py-20">
            <div class="container mx-auto px-4">
                <SectionHeader title="LATEST" highlight="POSTS" shadow_text="BLOG" />
                <p class="max-w-2xl mx-auto mb-12 text-center text-muted-foreground">
                    {format!(
                        "Notes on design systems, accessibility and front-end engineering. {} posts and counting.",
                        post_count(),
                    )}
                </p>
                <Transition fallback=move || {
                    view! {
                        <div class="grid md:grid-cols-3 gap-8">
                            <div class="loading-skeleton h-48 rounded-xl"></div>
                            <div class="loading-skeleton h-48 rounded-xl"></div>
                            <div class="loading-skeleton h-48 rounded-xl"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        posts
                            .await
                            .map(|posts| {
                                view! {
                                    <div class="grid md:grid-cols-3 gap-8">
                                        {posts
                                            .into_iter()
                                            .map(|post| view! { <PostCard post /> })
                                            .collect_view()}
                                    </div>
                                }
                            })
                    })}
                </Transition>
            </div>
        </div>
    }
}

#[component]
fn PostCard(post: PostMeta) -> impl IntoView {
    let tags = post
        .tags
        .iter()
        .map(|tag| {
            view! {
                <span class="px-2 py-1 rounded-md bg-primary/10 text-primary text-xs">
                    {tag.clone()}
                </span>
            }
        })
        .collect_view();
    view! {
        <article class="flex flex-col p-6 rounded-xl bg-card shadow-md hover:shadow-xl hover:-translate-y-1 transition-all duration-300">
            <p class="text-sm text-muted-foreground mb-2">
                {post.date.format("%b %e, %Y").to_string()} " · " {post.author.clone()}
            </p>
            <h3 class="text-xl font-bold mb-2">{post.title.clone()}</h3>
            <p class="text-muted-foreground mb-4 flex-1">{post.description.clone()}</p>
            <div class="flex flex-wrap gap-2 mb-4">{tags}</div>
            {post
                .link
                .clone()
                .map(|link| {
                    view! {
                        <a
                            href=link
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-sm font-semibold text-primary hover:underline"
                        >
                            "Read more ↗"
                        </a>
                    }
                })}
        </article>
    }
}
