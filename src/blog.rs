use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};

/// Number of posts shown in the blog teaser.
pub const TEASER_POSTS: usize = 3;

pub static GLOBAL_META_CACHE: LazyLock<DashMap<usize, Vec<PostMeta>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "blog"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    description: String,
    author: String,
    date: DateTime<Utc>,
    tags: Vec<String>,
    #[serde(default)]
    link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub name: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub link: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlogError {
    #[error("Blog post not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse front matter of {0}")]
    ParseError(String),
    #[error("Couldn't load blog posts: {0}")]
    Unavailable(String),
}

pub fn post_count() -> usize {
    Assets::iter().count()
}

#[cfg(feature = "ssr")]
fn parse_meta(file: &str, content: &str) -> Result<PostMeta, BlogError> {
    let matter = Matter::<YAML>::new();
    let fm = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| BlogError::ParseError(file.to_string()))?;
    Ok(PostMeta {
        name: file.strip_suffix(".md").unwrap_or(file).to_string(),
        title: fm.data.title,
        description: fm.data.description,
        author: fm.data.author,
        date: fm.data.date,
        tags: fm.data.tags,
        link: fm.data.link,
    })
}

#[cfg(feature = "ssr")]
fn load_post(file: &str) -> Result<PostMeta, BlogError> {
    let asset = Assets::get(file).ok_or_else(|| BlogError::NotFound(file.to_string()))?;
    let content = std::str::from_utf8(&asset.data)
        .map_err(|_| BlogError::ParseError(file.to_string()))?;
    parse_meta(file, content)
}

/// Newest `limit` posts, newest first.
#[cfg(feature = "ssr")]
pub async fn recent_posts(limit: usize) -> Result<Vec<PostMeta>, BlogError> {
    let cache = &*GLOBAL_META_CACHE;
    if let Some(r) = cache.get(&limit) {
        return Ok(r.clone());
    }
    let mut posts = Assets::iter()
        .map(|file| load_post(&file))
        .collect::<Result<Vec<PostMeta>, BlogError>>()?;
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts.truncate(limit);
    tracing::debug!("loaded {} blog posts for teaser", posts.len());
    cache.insert(limit, posts.clone());
    Ok(posts)
}
