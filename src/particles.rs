//! Drifting particle field behind the hero section.

pub const PARTICLE_COUNT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// `rand` must return values in `[0, 1)`.
    pub fn new(count: usize, width: f64, height: f64, mut rand: impl FnMut() -> f64) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rand() * width,
                y: rand() * height,
                vx: (rand() - 0.5) * 0.05,
                vy: (rand() - 0.5) * 0.05,
                size: rand() * 2.0 + 1.0,
                opacity: rand() * 0.3 + 0.1,
            })
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advances one frame, reversing velocity at the edges.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(v: f64) -> impl FnMut() -> f64 {
        move || v
    }

    #[test]
    fn test_spawn_ranges() {
        let mut seq = [0.0, 0.25, 0.5, 0.75, 0.99].into_iter().cycle();
        let field = ParticleField::new(PARTICLE_COUNT, 800.0, 600.0, move || {
            seq.next().unwrap_or(0.0)
        });
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((1.0..3.0).contains(&p.size));
            assert!((0.1..0.4).contains(&p.opacity));
        }
    }

    #[test]
    fn test_bounce_at_edge() {
        let mut field = ParticleField::new(1, 100.0, 100.0, fixed(0.0));
        // x = 0, vx = -0.025
        field.step();
        assert!(field.particles()[0].vx > 0.0);
        field.step();
        assert!(field.particles()[0].x > -0.025);
    }

    #[test]
    fn test_resize() {
        let mut field = ParticleField::new(3, 100.0, 100.0, fixed(0.5));
        field.resize(1920.0, 1080.0);
        assert_eq!(field.size(), (1920.0, 1080.0));
    }
}
