use hecs::World;

use crate::{component::jumpgate::{GateError, JumpGate, RingSpinUp}, TimeData};

/// System which ramps gate velocities toward their RingSpinUp targets
pub fn jumpgate_spinup_system_update(time: &TimeData, world: &mut World) {
    for (_, (gate, spin)) in world.query_mut::<(&mut JumpGate, &RingSpinUp)>() {
        spin.apply(time.delta_time, gate);
    }
}

/// System which spins the rings of every JumpGate
pub fn jumpgate_system_update(time: &TimeData, world: &mut World) -> Result<(), GateError> {
    // gather gates first, ring transforms are borrowed one at a time while ticking
    let gates = world.query_mut::<&JumpGate>()
        .into_iter()
        .map(|(_, gate)| *gate)
        .collect::<Vec<_>>();

    for gate in gates {
        gate.tick(time.delta_time, world)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use hecs::Entity;

    use super::*;
    use crate::component::transform3d::Transform3D;

    fn spawn_gate(world: &mut World, inner_velocity: f32, outer_velocity: f32) -> Entity {
        let inner = world.spawn((Transform3D::default(),));
        let outer = world.spawn((Transform3D::default(),));
        world.spawn((Transform3D::default(), JumpGate::new(inner, outer).with_velocities(inner_velocity, outer_velocity)))
    }

    fn ring_z(world: &World, gate: Entity) -> f32 {
        let gate = *world.get::<&JumpGate>(gate).unwrap();
        world.get::<&Transform3D>(gate.inner_ring).unwrap().rotation.z
    }

    #[test]
    fn updates_every_gate() {
        let mut world = World::new();
        let a = spawn_gate(&mut world, 1.0, 0.0);
        let b = spawn_gate(&mut world, 2.0, 0.0);
        let time = TimeData { delta_time: 0.5 };

        jumpgate_system_update(&time, &mut world).unwrap();

        assert!((ring_z(&world, a) - 0.25_f32.sin()).abs() < 1e-5);
        assert!((ring_z(&world, b) - 0.5_f32.sin()).abs() < 1e-5);
    }

    #[test]
    fn spinup_then_rotate() {
        let mut world = World::new();
        let gate = spawn_gate(&mut world, 0.0, 0.0);
        let mut spin = RingSpinUp { ring_acceleration: PI, ..Default::default() };
        spin.set_targets(PI, 0.0);
        world.insert_one(gate, spin).unwrap();

        let time = TimeData { delta_time: 0.5 };
        jumpgate_spinup_system_update(&time, &mut world);
        jumpgate_system_update(&time, &mut world).unwrap();

        let state = *world.get::<&JumpGate>(gate).unwrap();
        assert!((state.inner_velocity - PI * 0.5).abs() < 1e-6);
        assert!((ring_z(&world, gate) - (PI * 0.125).sin()).abs() < 1e-5);
    }

    #[test]
    fn missing_ring_stops_the_update() {
        let mut world = World::new();
        let gate = spawn_gate(&mut world, 1.0, 0.0);
        let inner = world.get::<&JumpGate>(gate).unwrap().inner_ring;
        world.despawn(inner).unwrap();

        let time = TimeData { delta_time: 1.0 / 60.0 };
        assert!(matches!(jumpgate_system_update(&time, &mut world), Err(GateError::MissingRing { .. })));
    }
}
