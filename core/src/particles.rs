//! Ember particles rising across the viewport.
//!
//! Particles live in a fixed arena sized once at construction. Particles that
//! leave through the top are recycled at the bottom edge, never reallocated.

/// Small deterministic generator so the field can be replayed under test.
#[derive(Clone, Debug)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        let top = self.next_u64() >> 11;
        top as f64 / ((1u64 << 53) as f64)
    }

    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_unit()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSettings {
    pub count: usize,
    pub radius_min: f64,
    pub radius_max: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    pub green_min: u8,
    pub green_span: u8,
    pub alpha_max: f64,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: 50,
            radius_min: 1.0,
            radius_max: 4.0,
            speed_min: 0.2,
            speed_max: 1.2,
            green_min: 50,
            green_span: 100,
            alpha_max: 0.5,
        }
    }
}

/// Warm color: red fixed at 255, blue at 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmberColor {
    pub green: u8,
    pub alpha: f64,
}

impl EmberColor {
    pub fn to_css(self) -> String {
        format!("rgba(255, {}, 0, {})", self.green, self.alpha)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Upward distance per frame.
    pub speed: f64,
    pub color: EmberColor,
}

pub fn spawn_particle(rng: &mut Rng, settings: &ParticleSettings, width: f64, height: f64) -> Particle {
    let x = rng.next_unit() * width;
    let y = rng.next_unit() * height;
    let radius = rng.range(settings.radius_min, settings.radius_max);
    let speed = rng.range(settings.speed_min, settings.speed_max);
    let green = settings.green_min as f64 + (rng.next_unit() * settings.green_span as f64).floor();
    let alpha = rng.next_unit() * settings.alpha_max;
    Particle {
        x,
        y,
        radius,
        speed,
        color: EmberColor {
            green: green.min(255.0) as u8,
            alpha,
        },
    }
}

/// Moves one particle up a frame. Returns true when it wrapped to the bottom.
pub fn advance_particle(particle: &mut Particle, rng: &mut Rng, width: f64, height: f64) -> bool {
    particle.y -= particle.speed;
    if particle.y < 0.0 {
        particle.y = height;
        particle.x = rng.next_unit() * width;
        return true;
    }
    false
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: Rng,
}

impl ParticleField {
    pub fn new(settings: &ParticleSettings, width: f64, height: f64, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let width = width.max(0.0);
        let height = height.max(0.0);
        let mut particles = Vec::with_capacity(settings.count);
        for _ in 0..settings.count {
            particles.push(spawn_particle(&mut rng, settings, width, height));
        }
        Self {
            particles,
            width,
            height,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Existing positions are kept; they wrap into the new bounds over time.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Advances every particle one frame and returns how many wrapped.
    pub fn step(&mut self) -> usize {
        let mut wrapped = 0;
        for particle in self.particles.iter_mut() {
            if advance_particle(particle, &mut self.rng, self.width, self.height) {
                wrapped += 1;
            }
        }
        wrapped
    }
}
