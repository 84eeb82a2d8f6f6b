use std::sync::Mutex;

use dbsdk_rs::{db, vdp};
use hecs::World;
use lazy_static::lazy_static;
use log::{error, info, LevelFilter};

use crate::{entity_defs::EntityDefs, logger, spawner::spawn_entities, system::jumpgate_system::{jumpgate_spinup_system_update, jumpgate_system_update}, TimeData};

/// vsync runs at 60 Hz
const FRAME_DELTA: f64 = 1.0 / 60.0;

const STATION_ENTITIES: &str = r#"
{
"classname" "misc_jumpgate"
"origin" "0 0 512"
"inner_velocity" "0"
"target_inner_velocity" "0.0785398"
"target_outer_velocity" "0.0392699"
}
"#;

struct GameState {
    world: World,
    time: TimeData,
}

lazy_static! {
    static ref GAME_STATE: Mutex<GameState> = Mutex::new(GameState {
        world: World::new(),
        time: TimeData { delta_time: FRAME_DELTA },
    });
}

fn tick() {
    let mut state = GAME_STATE.lock().unwrap_or_else(|e| e.into_inner());
    let GameState { world, time } = &mut *state;

    jumpgate_spinup_system_update(time, world);
    if let Err(e) = jumpgate_system_update(time, world) {
        error!("{}", e);
        panic!("jump gate update failed: {}", e);
    }
}

#[no_mangle]
pub fn main(_: i32, _: i32) -> i32 {
    db::register_panic();
    if logger::init(LevelFilter::Debug).is_err() {
        db::log("logger already installed");
    }

    {
        let mut state = GAME_STATE.lock().unwrap_or_else(|e| e.into_inner());
        match spawn_entities(&mut state.world, &EntityDefs::new(STATION_ENTITIES)) {
            Ok(gates) => info!("Spawned {} jump gate(s)", gates.len()),
            Err(e) => {
                error!("Failed spawning station entities: {}", e);
                return 1;
            }
        }
    }

    vdp::set_vsync_handler(Some(tick));
    return 0;
}
