//! Genome representation for the parameter search.
//!
//! A genome wraps one parameter record together with the set of attribute
//! slots the search may evolve. Physical and encoding parameters stay
//! pinned when a fixed baseline is supplied; only the track layout genes
//! (width, spacing, gap) ever mutate or cross over, each through its own
//! bounds-clamped accessor, so no reflective field lookup is needed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engines::evaluation::fitness::FitnessBreakdown;
use crate::params::EncoderParameters;

/// An evolvable attribute slot with its own mutation bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreeSlot {
    TrackWidth,
    TrackSpacing,
    GapWidth,
}

impl FreeSlot {
    pub const ALL: [FreeSlot; 3] =
        [FreeSlot::TrackWidth, FreeSlot::TrackSpacing, FreeSlot::GapWidth];

    /// Clamp bounds applied after mutation.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            // Minimum of two line widths up to a practical maximum.
            FreeSlot::TrackWidth => (0.32, 8.0),
            FreeSlot::TrackSpacing => (0.2, 3.0),
            FreeSlot::GapWidth => (0.3, 6.0),
        }
    }

    /// Uniform range used at population initialization.
    pub fn init_range(self) -> (f64, f64) {
        match self {
            FreeSlot::TrackWidth => (0.5, 5.0),
            FreeSlot::TrackSpacing => (0.2, 2.0),
            FreeSlot::GapWidth => (0.5, 4.0),
        }
    }

    pub fn get(self, params: &EncoderParameters) -> f64 {
        match self {
            FreeSlot::TrackWidth => params.track_width_mm,
            FreeSlot::TrackSpacing => params.track_spacing_mm,
            FreeSlot::GapWidth => params.gap_width_deg,
        }
    }

    pub fn set(self, params: &mut EncoderParameters, value: f64) {
        match self {
            FreeSlot::TrackWidth => params.track_width_mm = value,
            FreeSlot::TrackSpacing => params.track_spacing_mm = value,
            FreeSlot::GapWidth => params.gap_width_deg = value,
        }
    }
}

/// One candidate parameter configuration with cached fitness.
#[derive(Debug, Clone)]
pub struct Genome {
    pub params: EncoderParameters,
    pub free: Vec<FreeSlot>,
    pub fitness: f64,
    pub components: FitnessBreakdown,
    pub validated: bool,
}

impl Genome {
    pub fn new(params: EncoderParameters) -> Self {
        Self {
            params,
            free: FreeSlot::ALL.to_vec(),
            fitness: 0.0,
            components: FitnessBreakdown::default(),
            validated: false,
        }
    }

    /// Random genome. With a baseline, only the free slots are drawn; the
    /// remaining attributes are copied verbatim. Without one, the full
    /// parameter set is randomized with positions and tracks kept mutually
    /// consistent.
    pub fn random<R: Rng>(baseline: Option<&EncoderParameters>, rng: &mut R) -> Self {
        let params = match baseline {
            Some(base) => {
                let mut params = base.clone();
                for slot in FreeSlot::ALL {
                    let (lo, hi) = slot.init_range();
                    slot.set(&mut params, rng.gen_range(lo..hi));
                }
                params
            }
            None => {
                let position_options = [8u32, 16, 32, 64];
                let num_positions = position_options[rng.gen_range(0..position_options.len())];
                let mut params = EncoderParameters {
                    outer_diameter_mm: rng.gen_range(80.0..150.0),
                    inner_diameter_mm: rng.gen_range(20.0..40.0),
                    disk_thickness_mm: rng.gen_range(2.0..5.0),
                    arc_angle_deg: rng.gen_range(20.0..60.0),
                    num_positions,
                    num_tracks: 0,
                    track_width_mm: rng.gen_range(3.0..8.0),
                    track_spacing_mm: rng.gen_range(1.0..3.0),
                    gap_width_deg: rng.gen_range(1.0..4.0),
                    bump_extension_mm: rng.gen_range(3.0..8.0),
                    bump_width_deg: rng.gen_range(1.0..3.0),
                    ..EncoderParameters::default()
                };
                params.num_tracks = params.required_bits();
                params
            }
        };
        Self::new(params)
    }

    /// Clear cached fitness; the genome must be re-evaluated.
    pub fn invalidate(&mut self) {
        self.fitness = 0.0;
        self.components = FitnessBreakdown::default();
        self.validated = false;
    }

    /// With probability `mutation_rate`, scale one free slot by a factor
    /// drawn from [0.8, 1.2] and clamp it to the slot's bounds. The cache
    /// is cleared either way.
    pub fn mutate<R: Rng>(&mut self, mutation_rate: f64, rng: &mut R) {
        if !self.free.is_empty() && rng.gen::<f64>() < mutation_rate {
            let slot = self.free[rng.gen_range(0..self.free.len())];
            let factor = rng.gen_range(0.8..1.2);
            let (lo, hi) = slot.bounds();
            let value = (slot.get(&self.params) * factor).clamp(lo, hi);
            slot.set(&mut self.params, value);
        }
        self.invalidate();
    }

    /// Uniform crossover over the free slots only. Fixed attributes are
    /// copied from `self` to both children; each free slot is inherited
    /// from one parent or the other with probability 0.5, the two children
    /// receiving opposite choices.
    pub fn crossover<R: Rng>(&self, other: &Genome, rng: &mut R) -> (Genome, Genome) {
        let mut child1 = self.params.clone();
        let mut child2 = self.params.clone();

        for slot in self.free.iter().copied() {
            let (from_a, from_b) = if rng.gen::<f64>() < 0.5 {
                (&self.params, &other.params)
            } else {
                (&other.params, &self.params)
            };
            slot.set(&mut child1, slot.get(from_a));
            slot.set(&mut child2, slot.get(from_b));
        }

        let mut a = Genome::new(child1);
        let mut b = Genome::new(child2);
        a.free = self.free.clone();
        b.free = self.free.clone();
        (a, b)
    }
}
