//! Pure geometry behind the decorative motion: hero parallax, the pointer
//! follower and the portfolio particle field.

/// Scroll distance over which the hero portrait drifts.
pub const PARALLAX_RANGE_PX: f64 = 500.0;
/// Portrait travel at the end of the range.
pub const PARALLAX_SHIFT_PX: f64 = 50.0;

pub const CURSOR_SIZE_PX: f64 = 32.0;

pub const PARTICLE_COUNT: usize = 20;

/// Vertical portrait offset for a window scroll position.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    if !scroll_y.is_finite() {
        return 0.0;
    }
    scroll_y.clamp(0.0, PARALLAX_RANGE_PX) / PARALLAX_RANGE_PX * PARALLAX_SHIFT_PX
}

/// CSS transform centring a `size`-pixel ring on the pointer.
pub fn cursor_transform(x: f64, y: f64, size: f64) -> String {
    let half = size / 2.0;
    format!("translate3d({:.1}px, {:.1}px, 0)", x - half, y - half)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container.
    pub left: f64,
    /// Vertical position, percent of the container.
    pub top: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s",
            self.left, self.top, self.size, self.size, self.duration, self.delay
        )
    }
}

// splitmix64 finaliser
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn unit(seed: u64) -> f64 {
    (mix(seed) >> 11) as f64 / (1u64 << 53) as f64
}

/// Particle `index`, identical on server and client.
pub fn particle(index: usize) -> Particle {
    let base = (index as u64) * 5;
    Particle {
        left: unit(base) * 100.0,
        top: unit(base + 1) * 100.0,
        size: 2.0 + unit(base + 2) * 4.0,
        duration: 10.0 + unit(base + 3) * 10.0,
        delay: unit(base + 4) * 5.0,
    }
}

pub fn particles(count: usize) -> Vec<Particle> {
    (0..count).map(particle).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_offset() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(250.0), 25.0);
        assert_eq!(parallax_offset(500.0), 50.0);
        assert_eq!(parallax_offset(5000.0), 50.0);
        assert_eq!(parallax_offset(-20.0), 0.0);
        assert_eq!(parallax_offset(f64::NAN), 0.0);
    }

    #[test]
    fn test_cursor_transform_centres_ring() {
        assert_eq!(
            cursor_transform(100.0, 40.0, 32.0),
            "translate3d(84.0px, 24.0px, 0)"
        );
    }

    #[test]
    fn test_particles_are_deterministic() {
        assert_eq!(particles(PARTICLE_COUNT), particles(PARTICLE_COUNT));
        assert_ne!(particle(0), particle(1));
    }

    #[test]
    fn test_particle_ranges() {
        for p in particles(200) {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((2.0..6.0).contains(&p.size));
            assert!((10.0..20.0).contains(&p.duration));
            assert!((0.0..5.0).contains(&p.delay));
        }
    }
}
