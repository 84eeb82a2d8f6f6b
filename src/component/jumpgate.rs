use std::{f32::consts::PI, fmt};

use hecs::{ComponentError, Entity, World};

use crate::{common::move_toward, component::transform3d::Transform3D};

pub const INNER_VELOCITY_DEFAULT: f32 = PI / 40.0;
pub const RING_ACCELERATION_DEFAULT: f32 = PI / 10.0;

/// Two concentric rings spun about their local axes.
/// The inner ring spins about local Z, the outer ring about local X.
/// Ring entities are owned by the world, the gate only refers to them.
#[derive(Clone, Copy, Debug)]
pub struct JumpGate {
    pub inner_ring: Entity,
    pub outer_ring: Entity,
    /// radians/second; only values > 0 rotate
    pub inner_velocity: f32,
    /// radians/second; only values > 0 rotate
    pub outer_velocity: f32,
}

/// Ramps a gate's velocities toward target values
#[derive(Clone, Copy, Debug)]
pub struct RingSpinUp {
    pub ring_acceleration: f32,
    pub target_inner_velocity: Option<f32>,
    pub target_outer_velocity: Option<f32>,
}

#[derive(Debug)]
pub enum GateError {
    MissingRing { ring: Entity },
    MissingTransform { ring: Entity },
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::MissingRing { ring } => write!(f, "jump gate ring {:?} no longer exists", ring),
            GateError::MissingTransform { ring } => write!(f, "jump gate ring {:?} has no Transform3D", ring),
        }
    }
}

impl std::error::Error for GateError {}

impl GateError {
    fn from_component(ring: Entity, err: ComponentError) -> GateError {
        match err {
            ComponentError::NoSuchEntity => GateError::MissingRing { ring },
            ComponentError::MissingComponent(_) => GateError::MissingTransform { ring },
        }
    }
}

fn rotate_ring<F>(world: &World, ring: Entity, f: F) -> Result<(), GateError> where F: FnOnce(&mut Transform3D) {
    let mut transform = world.get::<&mut Transform3D>(ring)
        .map_err(|e| GateError::from_component(ring, e))?;
    f(&mut *transform);
    Ok(())
}

impl JumpGate {
    pub fn new(inner_ring: Entity, outer_ring: Entity) -> JumpGate {
        JumpGate {
            inner_ring,
            outer_ring,
            inner_velocity: INNER_VELOCITY_DEFAULT,
            outer_velocity: 0.0,
        }
    }

    pub fn with_velocities(self: &Self, inner_velocity: f32, outer_velocity: f32) -> JumpGate {
        let mut result = *self;
        result.inner_velocity = inner_velocity;
        result.outer_velocity = outer_velocity;
        result
    }

    /// Advance both rings by `delta_time` seconds.
    /// A ring whose velocity is zero or negative is left untouched and not looked up.
    pub fn tick(self: &Self, delta_time: f64, world: &World) -> Result<(), GateError> {
        if self.inner_velocity > 0.0 {
            let angle = self.inner_velocity * delta_time as f32;
            rotate_ring(world, self.inner_ring, |t| t.rotate_z(angle))?;
        }

        if self.outer_velocity > 0.0 {
            let angle = self.outer_velocity * delta_time as f32;
            rotate_ring(world, self.outer_ring, |t| t.rotate_x(angle))?;
        }

        Ok(())
    }
}

impl Default for RingSpinUp {
    fn default() -> RingSpinUp {
        RingSpinUp {
            ring_acceleration: RING_ACCELERATION_DEFAULT,
            target_inner_velocity: None,
            target_outer_velocity: None,
        }
    }
}

impl RingSpinUp {
    pub fn set_targets(self: &mut Self, inner: f32, outer: f32) {
        self.target_inner_velocity = Some(inner);
        self.target_outer_velocity = Some(outer);
    }

    pub fn clear_targets(self: &mut Self) {
        self.target_inner_velocity = None;
        self.target_outer_velocity = None;
    }

    /// True when every targeted velocity of `gate` has been reached
    pub fn is_settled(self: &Self, gate: &JumpGate) -> bool {
        self.target_inner_velocity.map_or(true, |v| v == gate.inner_velocity)
            && self.target_outer_velocity.map_or(true, |v| v == gate.outer_velocity)
    }

    /// Step targeted velocities toward their targets.
    /// A negative acceleration is treated as zero.
    pub fn apply(self: &Self, delta_time: f64, gate: &mut JumpGate) {
        let max_delta = self.ring_acceleration * delta_time as f32;

        if let Some(target) = self.target_inner_velocity {
            gate.inner_velocity = move_toward(gate.inner_velocity, target, max_delta);
        }

        if let Some(target) = self.target_outer_velocity {
            gate.outer_velocity = move_toward(gate.outer_velocity, target, max_delta);
        }
    }
}
