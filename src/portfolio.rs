use std::sync::Arc;

use thiserror::Error;

use crate::carousel::{Carousel, Nav};
use crate::catalog::{Catalog, Category, Project, ProjectId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Filter bar entries: "All" then every category, including empty ones.
    pub fn options() -> Vec<Filter> {
        std::iter::once(Filter::All)
            .chain(Category::ALL.into_iter().map(Filter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(c) => c.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => project.category == c,
        }
    }
}

pub fn filter_button_class(active: bool) -> &'static str {
    if active {
        "bg-primary text-primary-foreground shadow-lg"
    } else {
        "bg-secondary hover:bg-secondary/80"
    }
}

/// Element id of the open modal's heading, referenced by `aria-labelledby`.
pub fn modal_title_id(id: ProjectId) -> String {
    format!("project-modal-title-{id}")
}

/// Card whose "View Details" button should take focus back after a modal change.
///
/// Only a close gives focus back. Switching straight to another project keeps
/// focus inside the modal.
pub fn focus_return(before: Option<ProjectId>, after: Option<ProjectId>) -> Option<ProjectId> {
    match (before, after) {
        (Some(closed), None) => Some(closed),
        _ => None,
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("No project with id {0}")]
    UnknownProject(ProjectId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalCommand {
    Navigate(Nav),
    Close,
}

impl ModalCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            _ => Nav::from_key(key).map(Self::Navigate),
        }
    }
}

/// An open project modal. Owns its carousel for as long as it is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSession {
    project: ProjectId,
    carousel: Carousel,
}

impl ModalSession {
    pub fn project_id(&self) -> ProjectId {
        self.project
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }
}

pub enum Grid<'a> {
    Empty,
    Projects(Vec<&'a Project>),
}

/// Filter and selection state of the portfolio section.
#[derive(Debug, Clone)]
pub struct PortfolioView {
    catalog: Arc<Catalog>,
    filter: Filter,
    modal: Option<ModalSession>,
}

impl PortfolioView {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            filter: Filter::All,
            modal: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Returns true if the filter changed. An open modal stays open.
    pub fn set_filter(&mut self, filter: Filter) -> bool {
        if self.filter == filter {
            return false;
        }
        log::debug!("portfolio filter: {}", filter.label());
        self.filter = filter;
        true
    }

    /// Projects matching the current filter, in catalog order.
    pub fn filtered(&self) -> Vec<&Project> {
        self.catalog
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    pub fn grid(&self) -> Grid<'_> {
        let projects = self.filtered();
        if projects.is_empty() {
            Grid::Empty
        } else {
            Grid::Projects(projects)
        }
    }

    pub fn select_project(&mut self, id: ProjectId) -> Result<&Project, PortfolioError> {
        self.select_project_at(id, 0)
    }

    /// Opens the modal for `id` showing image `start` (clamped).
    ///
    /// Unknown ids leave the current selection untouched.
    pub fn select_project_at(
        &mut self,
        id: ProjectId,
        start: usize,
    ) -> Result<&Project, PortfolioError> {
        let Some(project) = self.catalog.get(id) else {
            log::warn!("ignoring selection of unknown project {id}");
            return Err(PortfolioError::UnknownProject(id));
        };
        self.modal = Some(ModalSession {
            project: id,
            carousel: Carousel::starting_at(project.images.len(), start),
        });
        Ok(project)
    }

    pub fn clear_selection(&mut self) {
        self.modal = None;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn selected(&self) -> Option<&Project> {
        self.modal
            .as_ref()
            .and_then(|m| self.catalog.get(m.project))
    }

    pub fn modal(&self) -> Option<&ModalSession> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut ModalSession> {
        self.modal.as_mut()
    }

    /// Routes a key press to the open modal. Does nothing while closed.
    pub fn handle_key(&mut self, key: &str) -> Option<ModalCommand> {
        let modal = self.modal.as_mut()?;
        let cmd = ModalCommand::from_key(key)?;
        match cmd {
            ModalCommand::Navigate(nav) => modal.carousel.apply(nav),
            ModalCommand::Close => self.modal = None,
        }
        Some(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::project;

    fn view(projects: Vec<Project>) -> PortfolioView {
        PortfolioView::new(Arc::new(Catalog::new(projects).unwrap()))
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_filter_options() {
        let opts = Filter::options();
        assert_eq!(opts[0], Filter::All);
        assert_eq!(opts.len(), Category::ALL.len() + 1);
        assert_eq!(
            opts.iter().map(|f| f.label()).collect::<Vec<_>>(),
            vec![
                "All",
                "Web Application",
                "Dashboard Design",
                "Cross-Platform Development"
            ]
        );
    }

    #[test]
    fn test_filtered_matches_category_in_order() {
        let mut v = view(vec![
            project(1, Category::WebApplication, 1),
            project(2, Category::DashboardDesign, 1),
            project(3, Category::WebApplication, 1),
            project(4, Category::CrossPlatform, 1),
            project(5, Category::DashboardDesign, 1),
        ]);
        assert_eq!(ids(&v.filtered()), vec![1, 2, 3, 4, 5]);

        for filter in Filter::options() {
            v.set_filter(filter);
            let expected = v
                .catalog()
                .iter()
                .filter(|p| match filter {
                    Filter::All => true,
                    Filter::Only(c) => p.category == c,
                })
                .map(|p| p.id.0)
                .collect::<Vec<_>>();
            assert_eq!(ids(&v.filtered()), expected);
        }

        v.set_filter(Filter::Only(Category::DashboardDesign));
        assert_eq!(ids(&v.filtered()), vec![2, 5]);
    }

    #[test]
    fn test_empty_category_then_all() {
        let mut v = view(vec![project(1, Category::WebApplication, 3)]);
        assert!(v.set_filter(Filter::Only(Category::DashboardDesign)));
        assert!(matches!(v.grid(), Grid::Empty));
        assert!(v.set_filter(Filter::All));
        match v.grid() {
            Grid::Projects(ps) => assert_eq!(ids(&ps), vec![1]),
            Grid::Empty => panic!("All should restore the project"),
        }
        assert!(!v.set_filter(Filter::All));
    }

    #[test]
    fn test_select_and_clear() {
        let mut v = view(vec![
            project(1, Category::WebApplication, 3),
            project(2, Category::DashboardDesign, 2),
        ]);
        assert!(!v.is_modal_open());
        let title = v.select_project(ProjectId(2)).unwrap().title.clone();
        assert_eq!(title, "Project 2");
        assert_eq!(v.selected().map(|p| p.id), Some(ProjectId(2)));
        assert_eq!(v.modal().unwrap().carousel().index(), 0);
        assert_eq!(v.modal().unwrap().carousel().len(), 2);

        v.clear_selection();
        assert!(v.selected().is_none());
        v.clear_selection();
        assert!(!v.is_modal_open());
    }

    #[test]
    fn test_unknown_selection_is_a_no_op() {
        let mut v = view(vec![project(1, Category::WebApplication, 3)]);
        assert_eq!(
            v.select_project(ProjectId(42)).unwrap_err(),
            PortfolioError::UnknownProject(ProjectId(42))
        );
        assert!(!v.is_modal_open());

        v.select_project(ProjectId(1)).unwrap();
        v.modal_mut().unwrap().carousel_mut().next();
        assert!(v.select_project(ProjectId(42)).is_err());
        assert_eq!(v.selected().map(|p| p.id), Some(ProjectId(1)));
        assert_eq!(v.modal().unwrap().carousel().index(), 1);
    }

    #[test]
    fn test_reopen_resets_carousel() {
        let mut v = view(vec![project(1, Category::WebApplication, 3)]);
        v.select_project(ProjectId(1)).unwrap();
        v.modal_mut().unwrap().carousel_mut().prev();
        assert_eq!(v.modal().unwrap().carousel().index(), 2);

        v.clear_selection();
        v.select_project(ProjectId(1)).unwrap();
        assert_eq!(v.modal().unwrap().carousel().index(), 0);
    }

    #[test]
    fn test_open_index_always_valid() {
        let mut v = view(vec![
            project(1, Category::WebApplication, 3),
            project(2, Category::WebApplication, 0),
        ]);
        v.select_project_at(ProjectId(1), 2).unwrap();
        assert_eq!(v.modal().unwrap().carousel().index(), 2);
        v.select_project_at(ProjectId(1), 10).unwrap();
        assert_eq!(v.modal().unwrap().carousel().index(), 2);

        v.select_project_at(ProjectId(2), 3).unwrap();
        let carousel = v.modal().unwrap().carousel();
        assert!(carousel.is_empty());
        assert_eq!(carousel.slide(), crate::carousel::Slide::Placeholder);
    }

    #[test]
    fn test_filter_keeps_modal_open() {
        let mut v = view(vec![project(1, Category::WebApplication, 1)]);
        v.select_project(ProjectId(1)).unwrap();
        v.set_filter(Filter::Only(Category::CrossPlatform));
        assert!(v.is_modal_open());
    }

    #[test]
    fn test_keys_only_while_open() {
        let mut v = view(vec![project(1, Category::WebApplication, 3)]);
        assert_eq!(v.handle_key("ArrowRight"), None);

        v.select_project(ProjectId(1)).unwrap();
        assert_eq!(
            v.handle_key("ArrowLeft"),
            Some(ModalCommand::Navigate(Nav::Prev))
        );
        assert_eq!(v.modal().unwrap().carousel().index(), 2);
        assert_eq!(
            v.handle_key("ArrowRight"),
            Some(ModalCommand::Navigate(Nav::Next))
        );
        assert_eq!(v.modal().unwrap().carousel().index(), 0);
        assert_eq!(v.handle_key("a"), None);

        assert_eq!(v.handle_key("Escape"), Some(ModalCommand::Close));
        assert!(!v.is_modal_open());
        assert_eq!(v.handle_key("Escape"), None);
    }

    #[test]
    fn test_filter_button_class() {
        assert!(filter_button_class(true).contains("bg-primary"));
        assert!(!filter_button_class(false).contains("bg-primary"));
    }

    #[test]
    fn test_selected_follows_the_open_modal() {
        let mut v = view(vec![
            project(1, Category::WebApplication, 2),
            project(2, Category::DashboardDesign, 1),
        ]);
        v.select_project(ProjectId(1)).unwrap();
        v.set_filter(Filter::Only(Category::DashboardDesign));
        // the modal resolves its project through selected(), not the filtered grid
        assert_eq!(v.selected().map(|p| p.id), v.modal().map(|m| m.project_id()));
        assert_eq!(v.selected().map(|p| p.title.as_str()), Some("Project 1"));

        v.select_project(ProjectId(2)).unwrap();
        assert_eq!(v.selected().map(|p| p.id), Some(ProjectId(2)));
    }

    #[test]
    fn test_modal_title_id_is_per_project() {
        let a = modal_title_id(ProjectId(1));
        let b = modal_title_id(ProjectId(12));
        assert_ne!(a, b);
        assert!(!a.contains(char::is_whitespace));
    }

    #[test]
    fn test_focus_returns_to_card_on_every_close() {
        let mut v = view(vec![
            project(1, Category::WebApplication, 2),
            project(2, Category::DashboardDesign, 1),
        ]);
        let before = v.modal().map(|m| m.project_id());
        v.select_project(ProjectId(2)).unwrap();
        let open = v.modal().map(|m| m.project_id());
        assert_eq!(focus_return(before, open), None);

        v.handle_key("Escape");
        assert_eq!(focus_return(open, v.modal().map(|m| m.project_id())), Some(ProjectId(2)));

        v.select_project(ProjectId(1)).unwrap();
        v.clear_selection();
        assert_eq!(focus_return(Some(ProjectId(1)), None), Some(ProjectId(1)));

        // switching projects keeps focus in the modal
        assert_eq!(focus_return(Some(ProjectId(1)), Some(ProjectId(2))), None);
        assert_eq!(focus_return(None, None), None);
    }
}
