use sim::{run_sim, DiveScript, Profile, ScriptPhase, SimConfig};

fn phase(secs: f32) -> ScriptPhase {
    ScriptPhase {
        secs,
        inhale: false,
        inflate_bcd: false,
        vent_bcd: false,
        swim: 0.0,
    }
}

#[test]
fn resting_freediver_sinks_to_the_floor() {
    let cfg = SimConfig {
        profile: Profile::Freedive,
        script: Some(DiveScript { phases: vec![] }),
        ..Default::default()
    };
    let summary = run_sim(&cfg);
    assert_eq!(summary.ticks, 1800);
    assert_eq!(
        summary.final_depth, cfg.world_height,
        "resting lungs at 5 px/s^2 of weight should bottom out"
    );
    let floor_pressure = cfg.world_height / 264.0 + 1.0;
    assert!(
        (summary.final_pressure - floor_pressure).abs() < 1e-3,
        "pressure at the floor = {}",
        summary.final_pressure
    );
    assert!(summary.final_bcd_volume.is_none());
}

#[test]
fn held_inhale_carries_the_diver_to_the_surface() {
    let mut inhale = phase(25.0);
    inhale.inhale = true;
    let cfg = SimConfig {
        profile: Profile::Freedive,
        seconds: 25.0,
        script: Some(DiveScript {
            phases: vec![inhale],
        }),
        ..Default::default()
    };
    let summary = run_sim(&cfg);
    assert_eq!(summary.final_depth, 0.0, "full lungs should surface");
    assert!(
        (summary.final_pressure - 1.0).abs() < 1e-6,
        "surface pressure = {}",
        summary.final_pressure
    );
    // Lungs filled to max volume at the 2 atm spawn (mass ~0.42), and with
    // inhale still held the gate blocks further change, so the preserved
    // mass expands unclamped past the inhale bound on the way up. At 1 atm
    // volume equals mass.
    assert!(
        summary.final_lung_volume > 0.21,
        "ascent should expand the gas past the inhale bound: {}",
        summary.final_lung_volume
    );
    assert!(
        (summary.final_lung_volume - 0.42).abs() < 0.03,
        "surface volume should match the mass banked at 2 atm: {}",
        summary.final_lung_volume
    );
}

#[test]
fn bcd_inflation_lifts_a_sinking_scuba_diver() {
    let mut inflate = phase(30.0);
    inflate.inflate_bcd = true;
    let cfg = SimConfig {
        profile: Profile::Scuba,
        script: Some(DiveScript {
            phases: vec![inflate],
        }),
        ..Default::default()
    };
    let summary = run_sim(&cfg);
    assert!(
        summary.max_depth > cfg.start_y,
        "diver should sink before the bladder fills"
    );
    assert!(
        summary.final_depth < 10.0,
        "a filling bladder should surface the diver, final depth = {}",
        summary.final_depth
    );
    let bcd_volume = summary.final_bcd_volume.expect("scuba profile has a bcd");
    assert!(bcd_volume > 0.05, "bladder volume = {bcd_volume}");
}

#[test]
fn swim_keys_nudge_horizontally_per_tick() {
    let mut swim = phase(4.0);
    swim.swim = 1.0;
    let cfg = SimConfig {
        profile: Profile::Freedive,
        seconds: 4.0,
        script: Some(DiveScript { phases: vec![swim] }),
        ..Default::default()
    };
    let summary = run_sim(&cfg);
    // 240 ticks at 0.25 px each, independent of dt.
    assert!(
        (summary.final_x - (cfg.start_x + 60.0)).abs() < 1e-3,
        "final x = {}",
        summary.final_x
    );
}

#[test]
fn builtin_demo_scripts_stay_inside_the_tank() {
    for profile in [Profile::Freedive, Profile::Scuba] {
        let cfg = SimConfig {
            profile,
            ..Default::default()
        };
        let summary = run_sim(&cfg);
        assert!(summary.min_depth >= 0.0);
        assert!(summary.max_depth <= cfg.world_height);
        assert!(summary.final_x >= 0.0 && summary.final_x <= cfg.world_width);
    }
}
