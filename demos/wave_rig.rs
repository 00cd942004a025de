// Headless rig demo: edit artist parameters across a few host updates
// and print the derived modifier block after each one.
use bevy::prelude::*;
use waverig::{
    Direction, SceneFrames, TimelineReadout, WaveModifier, WaveParameters, WaveRigPlugin,
};

fn print_rig(world: &World, entity: Entity, label: &str) {
    let params = world.get::<WaveParameters>(entity).unwrap();
    let modifier = world.get::<WaveModifier>(entity).unwrap();
    let readout = TimelineReadout::compute(params, modifier);

    println!("--- {label} ---");
    println!(
        "narrowness={:.3} width={:.3} speed={:.4}",
        modifier.narrowness, modifier.width, modifier.speed
    );
    println!(
        "time_offset={} lifetime={} damping={}",
        modifier.time_offset, modifier.lifetime, modifier.damping_time
    );
    println!(
        "frames {}..{} running {} full stop at {}",
        readout.frame_start, readout.frame_end, readout.sum_frame, readout.stop_frame
    );
}

fn main() {
    let mut app = App::new();
    app.add_plugins(WaveRigPlugin)
        .insert_resource(SceneFrames::new(0, 250));

    let entity = app.world_mut().spawn(WaveModifier::default()).id();
    app.update();
    print_rig(app.world(), entity, "defaults, outward");

    {
        let mut params = app.world_mut().get_mut::<WaveParameters>(entity).unwrap();
        params.width = 2.0;
        params.space = 4.0;
        params.frequency = 4;
    }
    app.update();
    print_rig(app.world(), entity, "wider crests, outward");

    {
        let mut params = app.world_mut().get_mut::<WaveParameters>(entity).unwrap();
        params.direction = Direction::In;
        params.set_frame_zero(12);
    }
    app.update();
    print_rig(app.world(), entity, "inward shrink");

    {
        let mut params = app.world_mut().get_mut::<WaveParameters>(entity).unwrap();
        params.direction = Direction::Out;
        params.cycle = true;
        params.offset = 40;
    }
    app.update();
    print_rig(app.world(), entity, "seamless loop, slid by 40");
}
