//! Moving-dot network drawn behind the page.
//!
//! The field is pure geometry; the canvas component owns drawing and the
//! frame loop.

pub const PARTICLE_COUNT: usize = 80;
pub const LINK_DISTANCE: f64 = 120.0;
pub const MAX_SPEED: f64 = 0.6;
/// Trail length, in frames of motion.
pub const TRAIL: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    /// Segment from where the particle was a few frames ago to where it is.
    pub fn trail(&self) -> ((f64, f64), (f64, f64)) {
        (
            (self.x - self.vx * TRAIL, self.y - self.vy * TRAIL),
            (self.x, self.y),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    /// `1 - distance / threshold`, so always in `(0, 1]`.
    pub opacity: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    link_distance: f64,
}

/// Moves `pos` one step and bounces it off `[0, max]`.
fn advance(pos: &mut f64, vel: &mut f64, max: f64) {
    *pos += *vel;
    if *pos < 0.0 {
        *pos = -*pos;
        *vel = -*vel;
    } else if *pos > max {
        *pos = max - (*pos - max);
        *vel = -*vel;
    }
    *pos = pos.clamp(0.0, max);
}

impl ParticleField {
    /// Seeds `count` particles using `random`, which must yield values in `[0, 1)`.
    pub fn new(count: usize, width: f64, height: f64, mut random: impl FnMut() -> f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let particles = (0..count)
            .map(|_| Particle {
                x: random() * width,
                y: random() * height,
                vx: (random() * 2.0 - 1.0) * MAX_SPEED,
                vy: (random() * 2.0 - 1.0) * MAX_SPEED,
            })
            .collect();
        Self {
            particles,
            width,
            height,
            link_distance: LINK_DISTANCE,
        }
    }

    pub fn with_link_distance(mut self, link_distance: f64) -> Self {
        self.link_distance = link_distance;
        self
    }

    #[cfg(test)]
    fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self {
            particles,
            width,
            height,
            link_distance: LINK_DISTANCE,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in self.particles.iter_mut() {
            advance(&mut p.x, &mut p.vx, w);
            advance(&mut p.y, &mut p.vy, h);
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        for p in self.particles.iter_mut() {
            p.x = p.x.clamp(0.0, self.width);
            p.y = p.y.clamp(0.0, self.height);
        }
    }

    /// All pairs closer than the link distance. O(n²) per call.
    pub fn links(&self) -> Vec<Link> {
        let threshold = self.link_distance;
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let dist = (a.x - b.x).hypot(a.y - b.y);
                if dist < threshold {
                    links.push(Link {
                        a: i,
                        b: j,
                        opacity: 1.0 - dist / threshold,
                    });
                }
            }
        }
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle { x, y, vx, vy }
    }

    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn seeds_inside_bounds_with_bounded_speed() {
        let field = ParticleField::new(PARTICLE_COUNT, 800.0, 600.0, lcg(7));
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!(p.vx.abs() <= MAX_SPEED && p.vy.abs() <= MAX_SPEED);
        }
    }

    #[test]
    fn step_advances_by_velocity() {
        let mut field = ParticleField::from_particles(vec![particle(10.0, 20.0, 1.5, -0.5)], 100.0, 100.0);
        field.step();
        assert_eq!(field.particles()[0], particle(11.5, 19.5, 1.5, -0.5));
    }

    #[test]
    fn reflects_off_each_edge() {
        let mut field = ParticleField::from_particles(
            vec![
                particle(0.5, 50.0, -1.0, 0.0),
                particle(99.5, 50.0, 1.0, 0.0),
                particle(50.0, 0.2, 0.0, -1.0),
                particle(50.0, 99.8, 0.0, 1.0),
            ],
            100.0,
            100.0,
        );
        field.step();
        let ps = field.particles();
        assert_eq!((ps[0].x, ps[0].vx), (0.5, 1.0));
        assert_eq!((ps[1].x, ps[1].vx), (99.5, -1.0));
        assert!((ps[2].y - 0.8).abs() < 1e-9 && ps[2].vy == 1.0);
        assert!((ps[3].y - 99.2).abs() < 1e-9 && ps[3].vy == -1.0);
    }

    #[test]
    fn never_leaves_the_field() {
        let mut field = ParticleField::new(40, 320.0, 200.0, lcg(42));
        for _ in 0..5_000 {
            field.step();
            for p in field.particles() {
                assert!((0.0..=320.0).contains(&p.x), "{p:?}");
                assert!((0.0..=200.0).contains(&p.y), "{p:?}");
            }
        }
    }

    #[test]
    fn links_only_close_pairs_with_fading_opacity() {
        let field = ParticleField::from_particles(
            vec![
                particle(0.0, 0.0, 0.0, 0.0),
                particle(30.0, 40.0, 0.0, 0.0),
                particle(0.0, 90.0, 0.0, 0.0),
                particle(500.0, 500.0, 0.0, 0.0),
            ],
            1000.0,
            1000.0,
        );
        let links = field.links();
        let pairs: Vec<_> = links.iter().map(|l| (l.a, l.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);

        let near = links[0].opacity;
        let far = links[1].opacity;
        assert!((near - (1.0 - 50.0 / LINK_DISTANCE)).abs() < 1e-9);
        assert!(far < near);
        assert!(links.iter().all(|l| l.opacity > 0.0 && l.opacity <= 1.0));
    }

    #[test]
    fn no_link_at_exact_threshold() {
        let field = ParticleField::from_particles(
            vec![particle(0.0, 0.0, 0.0, 0.0), particle(10.0, 0.0, 0.0, 0.0)],
            100.0,
            100.0,
        )
        .with_link_distance(10.0);
        assert!(field.links().is_empty());
    }

    #[test]
    fn resize_pulls_particles_inside() {
        let mut field = ParticleField::from_particles(vec![particle(700.0, 500.0, 1.0, 1.0)], 800.0, 600.0);
        field.resize(400.0, 300.0);
        assert_eq!(field.size(), (400.0, 300.0));
        assert_eq!((field.particles()[0].x, field.particles()[0].y), (400.0, 300.0));
    }

    #[test]
    fn trail_points_back_along_velocity() {
        let p = particle(50.0, 50.0, 0.5, -0.25);
        let ((x0, y0), (x1, y1)) = p.trail();
        assert_eq!((x1, y1), (50.0, 50.0));
        assert_eq!((x0, y0), (50.0 - 0.5 * TRAIL, 50.0 + 0.25 * TRAIL));
    }
}
