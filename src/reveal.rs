use crate::section::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    /// Entrance animation plays on the first activation only.
    #[default]
    Once,
    /// Animation replays every time the section becomes active again.
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Entering,
    Shown,
}

/// Mount and entrance-animation state of a single section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReveal {
    section: Section,
    mode: RevealMode,
    played: bool,
    phase: RevealPhase,
}

impl SectionReveal {
    pub fn new(section: Section, mode: RevealMode) -> Self {
        Self {
            section,
            mode,
            played: false,
            phase: RevealPhase::Hidden,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Content is mounted from the first reveal on, so it keeps its state
    /// when the user scrolls away.
    pub fn should_mount(&self) -> bool {
        self.played
    }

    /// Feeds the current active section. Returns true on an observable transition.
    pub fn update(&mut self, active: Option<Section>) -> bool {
        let is_active = active == Some(self.section);
        let next = match (is_active, self.mode, self.played) {
            (true, RevealMode::Once, true) => match self.phase {
                RevealPhase::Entering => RevealPhase::Entering,
                _ => RevealPhase::Shown,
            },
            (true, _, _) => match self.phase {
                RevealPhase::Hidden => RevealPhase::Entering,
                phase => phase,
            },
            (false, RevealMode::Once, true) => RevealPhase::Shown,
            (false, _, _) => RevealPhase::Hidden,
        };
        if next == self.phase {
            return false;
        }
        if next == RevealPhase::Entering {
            self.played = true;
        }
        log::debug!("{} reveal: {:?} -> {:?}", self.section, self.phase, next);
        self.phase = next;
        true
    }
}

pub fn reveal_class(phase: RevealPhase) -> &'static str {
    match phase {
        RevealPhase::Hidden => "opacity-0 translate-y-8",
        RevealPhase::Entering => "animate-section-enter",
        RevealPhase::Shown => "opacity-100",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_active() {
        let mut reveal = SectionReveal::new(Section::About, RevealMode::Once);
        assert!(!reveal.update(None));
        assert!(!reveal.update(Some(Section::Hero)));
        assert_eq!(reveal.phase(), RevealPhase::Hidden);
        assert!(!reveal.should_mount());
    }

    #[test]
    fn test_once_plays_a_single_time() {
        let mut reveal = SectionReveal::new(Section::About, RevealMode::Once);
        assert!(reveal.update(Some(Section::About)));
        assert_eq!(reveal.phase(), RevealPhase::Entering);

        // same active value twice is one transition
        assert!(!reveal.update(Some(Section::About)));
        assert_eq!(reveal.phase(), RevealPhase::Entering);

        assert!(reveal.update(Some(Section::Blog)));
        assert_eq!(reveal.phase(), RevealPhase::Shown);

        // re-activation does not replay the entrance
        assert!(!reveal.update(Some(Section::About)));
        assert_eq!(reveal.phase(), RevealPhase::Shown);
        assert!(reveal.should_mount());
    }

    #[test]
    fn test_repeat_replays() {
        let mut reveal = SectionReveal::new(Section::Blog, RevealMode::Repeat);
        assert!(reveal.update(Some(Section::Blog)));
        assert!(reveal.update(Some(Section::Contact)));
        assert_eq!(reveal.phase(), RevealPhase::Hidden);
        assert!(reveal.should_mount());
        assert!(reveal.update(Some(Section::Blog)));
        assert_eq!(reveal.phase(), RevealPhase::Entering);
    }

    #[test]
    fn test_reveal_class_per_phase() {
        assert_ne!(
            reveal_class(RevealPhase::Hidden),
            reveal_class(RevealPhase::Entering)
        );
        assert!(reveal_class(RevealPhase::Hidden).contains("opacity-0"));
        assert!(reveal_class(RevealPhase::Shown).contains("opacity-100"));
    }
}
