use crate::core::particle::Particle;

/// Ordered particle collection read by the renderer.
///
/// Appends keep insertion order and removals keep the relative order of the
/// survivors. Caps are enforced by the producers, not here.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<I>(&mut self, particles: I)
    where
        I: IntoIterator<Item = Particle>,
    {
        self.particles.extend(particles);
    }

    /// Removes every matching particle and returns how many were dropped.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Particle) -> bool,
    {
        let before = self.particles.len();
        self.particles.retain(|p| !predicate(p));
        before - self.particles.len()
    }

    /// Swaps the whole sequence in one mutation.
    pub fn replace(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    pub fn all(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Particle) -> bool,
    {
        self.particles.iter().filter(|p| predicate(*p)).count()
    }

    pub fn trail_count(&self) -> usize {
        self.count_where(Particle::is_trail)
    }

    pub fn burst_count(&self) -> usize {
        self.count_where(Particle::is_burst)
    }

    pub(crate) fn take(&mut self) -> Vec<Particle> {
        std::mem::take(&mut self.particles)
    }
}
