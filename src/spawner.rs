use std::{collections::HashMap, fmt};

use glam::Vec3;
use hecs::{Entity, EntityBuilder, World};
use log::{debug, warn};

use crate::{component::{jumpgate::{JumpGate, RingSpinUp}, transform3d::Transform3D}, entity_defs::EntityDefs, parse_utils::{parse_f32, parse_vec3, ParseError}};

pub const JUMPGATE_CLASSNAME: &str = "misc_jumpgate";

#[derive(Debug)]
pub enum SpawnError {
    MissingKey(&'static str),
    InvalidValue { key: String, source: ParseError },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::MissingKey(key) => write!(f, "missing key \"{}\"", key),
            SpawnError::InvalidValue { key, source } => write!(f, "invalid value for \"{}\": {}", key, source),
        }
    }
}

impl std::error::Error for SpawnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpawnError::InvalidValue { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn prop_f32(props: &HashMap<&str, &str>, key: &str) -> Result<Option<f32>, SpawnError> {
    match props.get(key) {
        Some(v) => parse_f32(v)
            .map(Some)
            .map_err(|source| SpawnError::InvalidValue { key: key.to_owned(), source }),
        None => Ok(None)
    }
}

/// Spawn a jump gate and its two rings from map entity properties
pub fn spawn_jumpgate(world: &mut World, props: &HashMap<&str, &str>) -> Result<Entity, SpawnError> {
    let origin = match props.get("origin") {
        Some(v) => parse_vec3(v).map_err(|source| SpawnError::InvalidValue { key: "origin".to_owned(), source })?,
        None => Vec3::ZERO
    };

    let inner_velocity = prop_f32(props, "inner_velocity")?;
    let outer_velocity = prop_f32(props, "outer_velocity")?;
    let ring_acceleration = prop_f32(props, "ring_acceleration")?;
    let target_inner_velocity = prop_f32(props, "target_inner_velocity")?;
    let target_outer_velocity = prop_f32(props, "target_outer_velocity")?;

    let transform = Transform3D::default().with_position(origin);
    let inner_ring = world.spawn((transform,));
    let outer_ring = world.spawn((transform,));

    let mut gate = JumpGate::new(inner_ring, outer_ring);
    if let Some(v) = inner_velocity {
        gate.inner_velocity = v;
    }
    if let Some(v) = outer_velocity {
        gate.outer_velocity = v;
    }

    let mut builder = EntityBuilder::new();
    builder.add(transform).add(gate);

    if ring_acceleration.is_some() || target_inner_velocity.is_some() || target_outer_velocity.is_some() {
        let mut spin = RingSpinUp::default();
        if let Some(v) = ring_acceleration {
            spin.ring_acceleration = v;
        }
        spin.target_inner_velocity = target_inner_velocity;
        spin.target_outer_velocity = target_outer_velocity;
        builder.add(spin);
    }

    let entity = world.spawn(builder.build());

    debug!("Spawned jump gate {:?} (inner ring {:?}, outer ring {:?})", entity, inner_ring, outer_ring);
    Ok(entity)
}

/// Remove a gate spawned by `spawn_jumpgate` along with both of its rings
pub fn despawn_jumpgate(world: &mut World, gate: Entity) {
    let rings = world.get::<&JumpGate>(gate)
        .map(|g| [g.inner_ring, g.outer_ring])
        .ok();

    for e in std::iter::once(gate).chain(rings.into_iter().flatten()) {
        if world.despawn(e).is_err() {
            debug!("Entity {:?} was already despawned", e);
        }
    }
}

/// Spawn every known entity in `defs`, returning the spawned gates.
/// On error every gate spawned so far is removed again, leaving the world as it was.
pub fn spawn_entities(world: &mut World, defs: &EntityDefs) -> Result<Vec<Entity>, SpawnError> {
    let mut gates = Vec::new();
    let mut result = Ok(());

    defs.parse(|props| {
        if result.is_err() {
            return;
        }

        match props.get("classname") {
            Some(&classname) if classname == JUMPGATE_CLASSNAME => {
                match spawn_jumpgate(world, &props) {
                    Ok(e) => gates.push(e),
                    Err(e) => result = Err(e)
                }
            }
            Some(classname) => {
                warn!("Skipping unknown entity class: {}", classname);
            }
            None => {
                result = Err(SpawnError::MissingKey("classname"));
            }
        }
    });

    if let Err(e) = result {
        for gate in gates {
            despawn_jumpgate(world, gate);
        }
        return Err(e);
    }

    Ok(gates)
}
