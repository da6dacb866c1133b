//! Animated background particles
//!
//! Each particle glides toward its own target at a fixed speed. Once it gets
//! closer than one step it snaps onto the target and picks a new one
//! somewhere in the window.

use crate::draw_plan::DrawCommand;
use rand::Rng;

/// One background dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub target_x: f32,
    pub target_y: f32,
}

impl Particle {
    /// Distance from the current position to the target
    pub fn distance_to_target(&self) -> f32 {
        let dx = self.target_x - self.x;
        let dy = self.target_y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Owns every particle for the lifetime of the process
pub struct StarField {
    particles: Vec<Particle>,
    width: u32,
    height: u32,
    speed: f32,
    particle_size: u32,
}

impl StarField {
    /// Scatters `count` particles with random positions and targets
    ///
    /// `width` and `height` must be non-zero and `speed` positive; the config
    /// layer checks this before the field is built.
    pub fn new<R: Rng>(
        count: usize,
        width: u32,
        height: u32,
        speed: f32,
        particle_size: u32,
        rng: &mut R,
    ) -> Self {
        let particles = (0..count)
            .map(|_| {
                let (x, y) = random_point(rng, width, height);
                let (target_x, target_y) = random_point(rng, width, height);
                Particle {
                    x,
                    y,
                    target_x,
                    target_y,
                }
            })
            .collect();

        StarField {
            particles,
            width,
            height,
            speed,
            particle_size,
        }
    }

    /// Builds a field from explicit particles
    pub fn from_particles(
        particles: Vec<Particle>,
        width: u32,
        height: u32,
        speed: f32,
        particle_size: u32,
    ) -> Self {
        StarField {
            particles,
            width,
            height,
            speed,
            particle_size,
        }
    }

    /// Moves every particle one step toward its target
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        for particle in &mut self.particles {
            let distance = particle.distance_to_target();

            // A zero distance also lands here, so the division below never sees 0
            if distance < self.speed {
                particle.x = particle.target_x;
                particle.y = particle.target_y;
                let (target_x, target_y) = random_point(rng, self.width, self.height);
                particle.target_x = target_x;
                particle.target_y = target_y;
            } else {
                particle.x += self.speed * (particle.target_x - particle.x) / distance;
                particle.y += self.speed * (particle.target_y - particle.y) / distance;
            }
        }
    }

    /// One particle directive per particle, in particle order
    pub fn render(&self) -> impl Iterator<Item = DrawCommand> + '_ {
        self.particles.iter().map(|particle| DrawCommand::Particle {
            x: particle.x,
            y: particle.y,
            size: self.particle_size,
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Whole-pixel point inside `[0, width) x [0, height)`
fn random_point<R: Rng>(rng: &mut R, width: u32, height: u32) -> (f32, f32) {
    (
        rng.gen_range(0..width) as f32,
        rng.gen_range(0..height) as f32,
    )
}
