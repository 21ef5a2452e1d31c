//! Purely visual effects: creation bursts and the twinkling backdrop.
//!
//! Nothing here touches the scene. Callers own the RNG so runs are
//! reproducible under a fixed seed.

use cb_core::Rgb;
use kurbo::{Point, Size, Vec2};
use rand::Rng;
use std::f64::consts::TAU;

/// Particles emitted per burst.
pub const BURST_SIZE: usize = 15;
const LIFE_DECAY: f64 = 0.02;
const SIZE_DECAY: f64 = 0.98;
const MIN_SIZE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Vec2,
    /// 1.0 at birth, doubles as the draw alpha.
    pub life: f64,
    pub size: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit an evenly spaced ring of particles at `at` (world space).
    pub fn burst<R: Rng + ?Sized>(&mut self, at: Point, color: Rgb, rng: &mut R) {
        for i in 0..BURST_SIZE {
            let angle = TAU * i as f64 / BURST_SIZE as f64;
            let speed = rng.random_range(2.0..5.0);
            self.particles.push(Particle {
                position: at,
                velocity: Vec2::from_angle(angle) * speed,
                life: 1.0,
                size: rng.random_range(2.0..5.0),
                color,
            });
        }
    }

    /// Advance one tick and drop spent particles.
    pub fn step(&mut self) {
        self.particles.retain_mut(|p| {
            p.position += p.velocity;
            p.life -= LIFE_DECAY;
            p.size *= SIZE_DECAY;
            p.life > 0.0 && p.size >= MIN_SIZE
        });
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

/// A decorative background dot in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundStar {
    pub position: Point,
    pub size: f64,
    pub opacity: f64,
    /// Radians per millisecond.
    pub twinkle_speed: f64,
}

impl BackgroundStar {
    /// Opacity at time `t_ms`.
    pub fn alpha_at(&self, t_ms: f64) -> f64 {
        let twinkle = (t_ms * self.twinkle_speed).sin() * 0.3 + 0.7;
        self.opacity * twinkle
    }
}

/// Scatter `count` background dots over a canvas.
pub fn starfield<R: Rng + ?Sized>(canvas: Size, count: usize, rng: &mut R) -> Vec<BackgroundStar> {
    (0..count)
        .map(|_| BackgroundStar {
            position: Point::new(
                rng.random::<f64>() * canvas.width,
                rng.random::<f64>() * canvas.height,
            ),
            size: rng.random_range(0.5..2.0),
            opacity: rng.random_range(0.3..1.0),
            twinkle_speed: rng.random_range(0.01..0.03),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn burst_spreads_in_a_ring_and_fades_out() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut fx = ParticleSystem::new();
        fx.burst(Point::new(10.0, 10.0), Rgb::WHITE, &mut rng);
        assert_eq!(fx.particles().len(), BURST_SIZE);
        for p in fx.particles() {
            let speed = p.velocity.hypot();
            assert!(speed > 2.0 - 1e-9 && speed < 5.0 + 1e-9);
            assert!((2.0..5.0).contains(&p.size));
        }

        fx.step();
        assert!(fx.particles().iter().all(|p| p.life < 1.0 && p.position != Point::new(10.0, 10.0)));

        for _ in 0..60 {
            fx.step();
        }
        assert!(fx.is_empty());
    }

    #[test]
    fn starfield_stays_on_canvas() {
        let mut rng = SmallRng::seed_from_u64(1);
        let canvas = Size::new(320.0, 200.0);
        let stars = starfield(canvas, 100, &mut rng);
        assert_eq!(stars.len(), 100);
        for s in &stars {
            assert!(s.position.x >= 0.0 && s.position.x <= canvas.width);
            assert!(s.position.y >= 0.0 && s.position.y <= canvas.height);
            let a = s.alpha_at(1234.0);
            assert!(a > 0.0 && a <= 1.0);
        }
    }
}
