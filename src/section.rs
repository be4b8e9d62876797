use std::{fmt, str::FromStr};

use thiserror::Error;

/// Minimum visible ratio before a section can become the active one.
pub const ACTIVATION_THRESHOLD: f64 = 0.1;

/// Page regions, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Portfolio,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Portfolio,
        Section::Blog,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Portfolio => "portfolio",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Portfolio => "Portfolio",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("unknown section: {0}")]
    Unknown(String),
}

impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}

pub fn nav_link_class(active: bool) -> &'static str {
    if active {
        "text-primary font-semibold after:w-full"
    } else {
        "text-muted-foreground hover:text-foreground after:w-0"
    }
}

/// Source of per-section visibility, e.g. intersection observers in the browser.
pub trait VisibilityReporter {
    /// Visible fraction of the section in `[0, 1]`.
    fn ratio(&self, section: Section) -> f64;
}

/// Last reported visible ratio for every section.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VisibilityMap {
    ratios: [f64; 5],
}

impl VisibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, section: Section, ratio: f64) {
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        self.ratios[section.position()] = ratio;
    }

    pub fn with(mut self, section: Section, ratio: f64) -> Self {
        self.record(section, ratio);
        self
    }
}

impl VisibilityReporter for VisibilityMap {
    fn ratio(&self, section: Section) -> f64 {
        self.ratios[section.position()]
    }
}

/// Which section is currently "in view" for navigation highlighting and reveal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSectionStore {
    active: Option<Section>,
    transitions: usize,
}

impl ActiveSectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<Section> {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == Some(section)
    }

    /// Number of observable changes of the active section.
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    /// Returns true if the active section changed.
    pub fn set(&mut self, section: Section) -> bool {
        if self.active == Some(section) {
            return false;
        }
        log::debug!("active section: {:?} -> {}", self.active, section);
        self.active = Some(section);
        self.transitions += 1;
        true
    }

    /// Sets the active section from an internal navigation id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not one of the fixed section ids. Ids only come from
    /// navigation code, so an unknown id is a bug rather than bad input.
    pub fn set_by_id(&mut self, id: &str) -> bool {
        let section = match id.parse::<Section>() {
            Ok(section) => section,
            Err(e) => panic!("navigation used an invalid section id: {e}"),
        };
        self.set(section)
    }

    pub fn ensure_initialized(&mut self) -> Section {
        match self.active {
            Some(section) => section,
            None => {
                self.set(Section::Hero);
                Section::Hero
            }
        }
    }

    /// Picks the most visible section from `reporter`.
    ///
    /// Returns the newly active section, or `None` if nothing changed.
    pub fn observe<R>(&mut self, reporter: &R) -> Option<Section>
    where
        R: VisibilityReporter + ?Sized,
    {
        let mut best: Option<(Section, f64)> = None;
        for section in Section::ALL {
            let ratio = reporter.ratio(section);
            if ratio < ACTIVATION_THRESHOLD {
                continue;
            }
            match best {
                Some((_, r)) if r >= ratio => {}
                _ => best = Some((section, ratio)),
            }
        }

        match best {
            Some((section, _)) => self.set(section).then_some(section),
            None if self.active.is_none() => Some(self.ensure_initialized()),
            None => None,
        }
    }
}
