//! Test helpers.
//!
//! `World::run_system_once` (via the `RunSystemOnce` trait) executes a system without
//! building a full schedule. Systems that use `Commands` only enqueue structural changes,
//! so we call `world.flush()` afterwards to apply them before assertions.

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Tiny deterministic PRNG for property-style tests (xorshift64*).
#[derive(Clone, Copy)]
pub struct TestRng(u64);

impl TestRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        let v = (self.next_u64() >> 40) as u32;
        (v as f32) / ((1u32 << 24) as f32)
    }

    #[inline]
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        debug_assert!(hi >= lo);
        lo + (hi - lo) * self.next_f32()
    }

    pub fn vec2(&mut self, lo: f32, hi: f32) -> Vec2 {
        Vec2::new(self.range_f32(lo, hi), self.range_f32(lo, hi))
    }
}
