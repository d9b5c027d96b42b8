use std::f64::consts::TAU;

use crate::schedule::driver::FrameEffect;

const RINGS: f64 = 3.0;
const BASE_RADIUS: f64 = 1.5;
const RING_SPACING: f64 = 0.3;
const RADIUS_JITTER: f64 = 0.1;
const HEIGHT_SPREAD: f64 = 0.8;
const ORBIT_RADIUS: f64 = 0.08;

/// Deterministic SplitMix64 stream; layouts must be reproducible for a given seed.
#[derive(Clone, Debug)]
struct SplitMix64(u64);

impl SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Particles on three concentric rings around the logo, drifting organically each frame.
#[derive(Clone, Debug)]
pub struct ParticleRing {
    origins: Vec<[f64; 3]>,
    positions: Vec<[f64; 3]>,
    sizes: Vec<f64>,
}

impl ParticleRing {
    pub const DEFAULT_COUNT: usize = 800;

    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = SplitMix64(seed);
        let per_ring = count as f64 / RINGS;
        let mut origins = Vec::with_capacity(count);
        let mut sizes = Vec::with_capacity(count);

        for i in 0..count {
            let fi = i as f64;
            let ring = (fi / per_ring).floor().min(RINGS - 1.0);
            let angle = ((fi % per_ring) / per_ring) * TAU;
            let radius = BASE_RADIUS + ring * RING_SPACING + rng.next_f64() * RADIUS_JITTER;
            let height = (rng.next_f64() - 0.5) * HEIGHT_SPREAD;
            origins.push([radius * angle.cos(), height, radius * angle.sin()]);
            sizes.push(0.04 + rng.next_f64() * 0.02);
        }

        Self {
            positions: origins.clone(),
            origins,
            sizes,
        }
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn origins(&self) -> &[[f64; 3]] {
        &self.origins
    }

    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    /// Offset of particle `i` from its origin at `time`: a per-index wander plus a small orbit.
    pub fn drift(i: usize, time: f64) -> [f64; 3] {
        let fi = i as f64;
        let s = fi * 0.01;
        let wander = [
            (time * 0.8 + s * 7.3).sin() * 0.15,
            (time * 0.6 + s * 5.1).cos() * 0.12,
            (time * 0.7 + s * 3.7).sin() * 0.1,
        ];
        let orbit_speed = 0.3 + (i % 10) as f64 * 0.05;
        let phase = time * orbit_speed + fi * 0.1;
        [
            wander[0] + phase.cos() * ORBIT_RADIUS,
            wander[1],
            wander[2] + phase.sin() * ORBIT_RADIUS,
        ]
    }
}

impl FrameEffect for ParticleRing {
    fn frame(&mut self, time: f64, _dt: f64) {
        for (i, (pos, origin)) in self.positions.iter_mut().zip(&self.origins).enumerate() {
            let d = Self::drift(i, time);
            *pos = [origin[0] + d[0], origin[1] + d[1], origin[2] + d[2]];
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/particles.rs"]
mod tests;
