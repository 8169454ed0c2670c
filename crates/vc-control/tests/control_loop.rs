//! Closed-loop behaviour of the demo tuning.

use vc_control::{ControlLoop, LoopTuning, Process, Time};
use vc_core::{Pressure, Tolerances, cm_h2o, nearly_equal};

#[test]
fn demo_loop_moves_toward_target() {
    let tuning = LoopTuning::default();
    let mut lp: ControlLoop<Pressure> = tuning.build().unwrap();
    let mut process = tuning.process(cm_h2o(0.0)).unwrap();

    let first = lp.tick(&mut process);
    assert!(first.value() > 0.0);

    let mut trace = vec![first];
    for _ in 1..100 {
        trace.push(lp.tick(&mut process));
    }
    assert!(trace.iter().all(|p| p.value().is_finite()));
    assert_eq!(process.measurement, *trace.last().unwrap());
    let settled = Tolerances { abs: 1e-3, rel: 0.0 };
    assert!(nearly_equal(process.measurement.value(), 1.0, settled));
}

#[test]
fn proportional_only_loop_converges() {
    let tuning: LoopTuning = serde_yaml::from_str(
        r#"
target: 10.0
sample_period_s: 0.01
terms:
  - kind: proportional
    gain: 0.5
"#,
    )
    .unwrap();
    let mut lp: ControlLoop<Pressure> = tuning.build().unwrap();
    let mut process = Process::new(cm_h2o(0.0), Time::seconds(0.01));
    for _ in 0..60 {
        lp.tick(&mut process);
    }
    // Error halves every tick.
    assert!(nearly_equal(process.measurement.value(), 10.0, Tolerances::default()));
}

#[test]
fn identical_runs_are_bit_identical() {
    let run = || {
        let tuning = LoopTuning::default();
        let mut lp: ControlLoop<Pressure<f32>> = tuning.build().unwrap();
        let mut process = tuning.process(Pressure::new(0.0_f32)).unwrap();
        (0..50).map(|_| lp.tick(&mut process)).collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
