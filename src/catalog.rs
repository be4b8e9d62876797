use std::{
    collections::HashSet,
    fmt,
    sync::{Arc, LazyLock},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

static BUILTIN_JSON: &str = include_str!("../data/projects.json");

pub static BUILTIN_CATALOG: LazyLock<Arc<Catalog>> = LazyLock::new(|| {
    Arc::new(Catalog::from_json(BUILTIN_JSON).expect("Embedded project catalog should be valid"))
});

pub const MAX_RATING: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Web Application")]
    WebApplication,
    #[serde(rename = "Dashboard Design")]
    DashboardDesign,
    #[serde(rename = "Cross-Platform Development")]
    CrossPlatform,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::WebApplication,
        Category::DashboardDesign,
        Category::CrossPlatform,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::WebApplication => "Web Application",
            Self::DashboardDesign => "Dashboard Design",
            Self::CrossPlatform => "Cross-Platform Development",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub src: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub duration: String,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
    pub author: String,
    pub rating: f32,
}

impl Review {
    pub fn stars(&self) -> [bool; 5] {
        star_fill(self.rating)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: Category,
    pub images: Vec<ProjectImage>,
    pub description: String,
    pub technologies: Vec<Technology>,
    pub link: String,
    pub satisfaction: f32,
    pub details: ProjectDetails,
    pub reviews: Vec<Review>,
}

impl Project {
    /// Alt text for image `index`, falling back to "<title> - Screenshot N".
    pub fn image_alt(&self, index: usize) -> String {
        self.images
            .get(index)
            .and_then(|img| img.alt.clone())
            .unwrap_or_else(|| format!("{} - Screenshot {}", self.title, index + 1))
    }
}

/// Filled/empty state of five rating stars, filled for `floor(rating)`.
pub fn star_fill(rating: f32) -> [bool; 5] {
    let filled = rating.clamp(0.0, MAX_RATING).floor() as usize;
    std::array::from_fn(|i| i < filled)
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Couldn't parse project catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate project id {0}")]
    DuplicateId(ProjectId),
    #[error("Project {id} has {field} {value} outside 0-5")]
    RatingOutOfRange {
        id: ProjectId,
        field: &'static str,
        value: f32,
    },
    #[error("Project {id} image {index} has zero width or height")]
    EmptyImage { id: ProjectId, index: usize },
}

/// Ordered, immutable set of portfolio projects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        validate(&projects)?;
        Ok(Self { projects })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    /// Shared handle to the embedded catalog. Parsed once, never copied.
    pub fn shared() -> Arc<Catalog> {
        Arc::clone(&BUILTIN_CATALOG)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Distinct categories present, in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for p in &self.projects {
            if !seen.contains(&p.category) {
                seen.push(p.category);
            }
        }
        seen
    }
}

fn in_rating_range(value: f32) -> bool {
    (0.0..=MAX_RATING).contains(&value)
}

fn validate(projects: &[Project]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();
    for p in projects {
        if !ids.insert(p.id) {
            return Err(CatalogError::DuplicateId(p.id));
        }
        if !in_rating_range(p.satisfaction) {
            return Err(CatalogError::RatingOutOfRange {
                id: p.id,
                field: "satisfaction",
                value: p.satisfaction,
            });
        }
        if let Some(r) = p.reviews.iter().find(|r| !in_rating_range(r.rating)) {
            return Err(CatalogError::RatingOutOfRange {
                id: p.id,
                field: "review rating",
                value: r.rating,
            });
        }
        if let Some(index) = p
            .images
            .iter()
            .position(|img| img.width == 0 || img.height == 0)
        {
            return Err(CatalogError::EmptyImage { id: p.id, index });
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::fixtures::project;
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        let first = &catalog.projects()[0];
        assert_eq!(first.id, ProjectId(1));
        assert_eq!(first.category, Category::WebApplication);
        assert_eq!(first.images.len(), 3);
        for p in catalog.iter() {
            assert!(!p.link.is_empty());
            assert!(!p.title.is_empty());
        }
    }

    #[test]
    fn test_shared_catalog_is_not_copied() {
        let a = Catalog::shared();
        let b = Catalog::shared();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(std::ptr::eq(Catalog::builtin(), &*a));
    }

    #[test]
    fn test_builtin_images_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for p in Catalog::builtin().iter() {
            for img in &p.images {
                let path = public.join(img.src.trim_start_matches('/'));
                assert!(path.is_file(), "{} is missing", path.display());
            }
        }
    }

    #[test]
    fn test_category_labels_match_serde() {
        for c in Category::ALL {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.label()));
        }
    }

    #[test]
    fn test_get_and_categories() {
        let catalog = Catalog::new(vec![
            project(1, Category::DashboardDesign, 1),
            project(2, Category::WebApplication, 2),
            project(3, Category::DashboardDesign, 0),
        ])
        .unwrap();
        assert_eq!(catalog.get(ProjectId(2)).map(|p| p.images.len()), Some(2));
        assert!(catalog.get(ProjectId(9)).is_none());
        assert_eq!(
            catalog.categories(),
            vec![Category::DashboardDesign, Category::WebApplication]
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            project(1, Category::WebApplication, 1),
            project(1, Category::DashboardDesign, 1),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ProjectId(1))));
    }

    #[test]
    fn test_rejects_bad_ratings() {
        let mut p = project(4, Category::WebApplication, 1);
        p.satisfaction = 5.5;
        assert!(matches!(
            Catalog::new(vec![p]),
            Err(CatalogError::RatingOutOfRange {
                field: "satisfaction",
                ..
            })
        ));

        let mut p = project(5, Category::WebApplication, 1);
        p.reviews.push(Review {
            text: "meh".to_string(),
            author: "A.".to_string(),
            rating: -1.0,
        });
        assert!(matches!(
            Catalog::new(vec![p]),
            Err(CatalogError::RatingOutOfRange {
                field: "review rating",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_sized_image() {
        let mut p = project(6, Category::CrossPlatform, 2);
        p.images[1].height = 0;
        assert!(matches!(
            Catalog::new(vec![p]),
            Err(CatalogError::EmptyImage { index: 1, .. })
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Catalog::from_json("[{\"id\": 1}]"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            Catalog::from_json("[{\"id\": 1, \"category\": \"Games\"}]"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_star_fill() {
        assert_eq!(star_fill(4.8), [true, true, true, true, false]);
        assert_eq!(star_fill(5.0), [true; 5]);
        assert_eq!(star_fill(0.0), [false; 5]);
        assert_eq!(star_fill(9.0), [true; 5]);
    }

    #[test]
    fn test_image_alt_fallback() {
        let mut p = project(7, Category::WebApplication, 2);
        p.images[0].alt = Some("Login screen".to_string());
        assert_eq!(p.image_alt(0), "Login screen");
        assert_eq!(p.image_alt(1), "Project 7 - Screenshot 2");
    }
}
