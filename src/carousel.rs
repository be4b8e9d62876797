/// Minimum horizontal travel, in CSS pixels, for a pointer gesture to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Next,
    Prev,
    To(usize),
}

impl Nav {
    /// Maps a `KeyboardEvent::key` value to a navigation step.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Prev),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLoad {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// What the carousel viewport should draw right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    Placeholder,
    Image { index: usize, load: ImageLoad },
}

/// Wraparound index over a project's images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    loads: Vec<ImageLoad>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self::starting_at(len, 0)
    }

    pub fn starting_at(len: usize, start: usize) -> Self {
        Self {
            index: start.min(len.saturating_sub(1)),
            loads: vec![ImageLoad::Loading; len],
        }
    }

    pub fn len(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + self.len() - 1) % self.len();
        }
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.index = index;
        true
    }

    pub fn apply(&mut self, nav: Nav) {
        match nav {
            Nav::Next => self.next(),
            Nav::Prev => self.prev(),
            Nav::To(i) => {
                self.go_to(i);
            }
        }
    }

    pub fn load(&self, index: usize) -> Option<ImageLoad> {
        self.loads.get(index).copied()
    }

    pub fn mark_loaded(&mut self, index: usize) {
        if let Some(load) = self.loads.get_mut(index) {
            if *load == ImageLoad::Loading {
                *load = ImageLoad::Loaded;
            }
        }
    }

    /// Decode failure is terminal for that image.
    pub fn mark_failed(&mut self, index: usize) {
        if let Some(load) = self.loads.get_mut(index) {
            if *load != ImageLoad::Failed {
                log::warn!("carousel image {index} failed to load");
            }
            *load = ImageLoad::Failed;
        }
    }

    pub fn record_load(&mut self, index: usize, load: ImageLoad) {
        match load {
            ImageLoad::Loaded => self.mark_loaded(index),
            ImageLoad::Failed => self.mark_failed(index),
            ImageLoad::Loading => {}
        }
    }

    pub fn slide(&self) -> Slide {
        match self.load(self.index) {
            Some(load) => Slide::Image {
                index: self.index,
                load,
            },
            None => Slide::Placeholder,
        }
    }

    pub fn is_current(&self, index: usize) -> bool {
        !self.is_empty() && self.index == index
    }
}

/// Turns a pointer down/up pair into a carousel step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    origin: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f64, y: f64) {
        self.origin = Some((x, y));
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }

    #[cfg(test)]
    fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    pub fn finish(&mut self, x: f64, y: f64) -> Option<Nav> {
        let (x0, y0) = self.origin.take()?;
        let dx = x - x0;
        let dy = y - y0;
        if dx.abs() < SWIPE_THRESHOLD_PX || dx.abs() <= dy.abs() {
            return None;
        }
        // content follows the finger, so dragging left reveals the next image
        if dx < 0.0 {
            Some(Nav::Next)
        } else {
            Some(Nav::Prev)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraparound_three_images() {
        let mut c = Carousel::new(3);
        assert_eq!(c.index(), 0);
        c.prev();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_next_prev_inverse() {
        for n in 1..=6 {
            for start in 0..n {
                let mut c = Carousel::starting_at(n, start);
                c.next();
                c.prev();
                assert_eq!(c.index(), start);
                c.prev();
                c.next();
                assert_eq!(c.index(), start);
            }
        }
    }

    #[test]
    fn test_full_cycle_and_range() {
        for n in 1..=6 {
            let mut c = Carousel::starting_at(n, n / 2);
            let start = c.index();
            for _ in 0..n {
                c.next();
                assert!(c.index() < n);
            }
            assert_eq!(c.index(), start);
        }
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut c = Carousel::new(1);
        c.next();
        assert_eq!(c.index(), 0);
        c.prev();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_empty_renders_placeholder() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        assert!(!c.go_to(0));
        assert_eq!(c.index(), 0);
        assert_eq!(c.slide(), Slide::Placeholder);
        assert!(!c.is_current(0));
    }

    #[test]
    fn test_starting_at_clamps() {
        assert_eq!(Carousel::starting_at(3, 7).index(), 2);
        assert_eq!(Carousel::starting_at(0, 7).index(), 0);
    }

    #[test]
    fn test_go_to_indicator() {
        let mut c = Carousel::new(4);
        assert!(c.go_to(3));
        assert_eq!(c.index(), 3);
        assert!(!c.go_to(4));
        assert_eq!(c.index(), 3);
        c.apply(Nav::To(1));
        assert_eq!(c.index(), 1);
        c.apply(Nav::To(9));
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_load_states() {
        let mut c = Carousel::new(2);
        assert_eq!(
            c.slide(),
            Slide::Image {
                index: 0,
                load: ImageLoad::Loading
            }
        );
        c.mark_loaded(0);
        c.mark_failed(1);
        assert_eq!(c.load(0), Some(ImageLoad::Loaded));
        c.next();
        assert_eq!(
            c.slide(),
            Slide::Image {
                index: 1,
                load: ImageLoad::Failed
            }
        );

        // a late load event cannot revive a failed image
        c.mark_loaded(1);
        assert_eq!(c.load(1), Some(ImageLoad::Failed));
        // out of range is ignored
        c.mark_loaded(5);
        assert_eq!(c.load(5), None);
    }

    #[test]
    fn test_record_load() {
        let mut c = Carousel::new(3);
        c.record_load(1, ImageLoad::Loaded);
        c.record_load(2, ImageLoad::Failed);
        c.record_load(0, ImageLoad::Loading);
        assert_eq!(c.load(0), Some(ImageLoad::Loading));
        assert_eq!(c.load(1), Some(ImageLoad::Loaded));
        assert_eq!(c.load(2), Some(ImageLoad::Failed));
    }

    #[test]
    fn test_keys() {
        assert_eq!(Nav::from_key("ArrowRight"), Some(Nav::Next));
        assert_eq!(Nav::from_key("ArrowLeft"), Some(Nav::Prev));
        assert_eq!(Nav::from_key("ArrowUp"), None);
        assert_eq!(Nav::from_key("Enter"), None);
    }

    #[test]
    fn test_swipe_directions() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(300.0, 100.0);
        assert!(swipe.is_tracking());
        assert_eq!(swipe.finish(180.0, 110.0), Some(Nav::Next));
        assert!(!swipe.is_tracking());

        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.finish(220.0, 90.0), Some(Nav::Prev));
    }

    #[test]
    fn test_swipe_rejects_short_or_vertical() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.finish(130.0, 100.0), None);

        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.finish(40.0, 300.0), None);

        // no begin, no swipe
        assert_eq!(swipe.finish(0.0, 0.0), None);

        swipe.begin(100.0, 100.0);
        swipe.cancel();
        assert_eq!(swipe.finish(0.0, 100.0), None);
    }
}
