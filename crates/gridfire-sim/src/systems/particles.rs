//! Particle system: cosmetic debris integration and lifetime decay.

use hecs::{Entity, World};

use gridfire_core::components::{Particle, Position, Velocity};
use gridfire_core::constants::DT;

use crate::rules::SkinRules;

/// Integrate and age all particles; expired ones go to the despawn
/// buffer. Particles never participate in collision.
pub fn run(world: &mut World, rules: &SkinRules, despawn_buffer: &mut Vec<Entity>) {
    for (entity, (pos, vel, particle)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Particle)>()
    {
        pos.0 += vel.0 * DT;
        vel.0 *= rules.particle_decay;
        particle.life = particle.life.saturating_sub(1);
        if particle.life == 0 {
            despawn_buffer.push(entity);
        }
    }
}
