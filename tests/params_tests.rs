// Clamping behavior of the zero/stop frame marker pair.

use rand::Rng;
use waverig::WaveParameters;

#[test]
fn defaults_keep_the_markers_ordered() {
    let params = WaveParameters::default();
    assert_eq!(params.frame_zero(), 5);
    assert_eq!(params.frame_stop(), 10);
    assert!(params.frame_zero() < params.frame_stop());
}

#[test]
fn raising_zero_past_stop_pushes_stop_forward() {
    let mut params = WaveParameters::default();
    params.set_frame_zero(20);
    assert_eq!(params.frame_zero(), 20);
    assert_eq!(params.frame_stop(), 21);
}

#[test]
fn lowering_stop_past_zero_pulls_zero_back() {
    let mut params = WaveParameters::default();
    params.set_frame_stop(3);
    assert_eq!(params.frame_zero(), 2);
    assert_eq!(params.frame_stop(), 3);
}

#[test]
fn writing_exactly_onto_the_other_marker_still_separates_them() {
    let mut params = WaveParameters::default();
    params.set_frame_zero(10);
    assert_eq!(params.frame_zero(), 10);
    assert_eq!(params.frame_stop(), 11);

    params.set_frame_stop(10);
    assert_eq!(params.frame_zero(), 9);
    assert_eq!(params.frame_stop(), 10);
}

#[test]
fn writes_inside_the_valid_range_leave_the_other_marker_alone() {
    let mut params = WaveParameters::default();
    params.set_frame_zero(7);
    assert_eq!(params.frame_zero(), 7);
    assert_eq!(params.frame_stop(), 10);

    params.set_frame_stop(30);
    assert_eq!(params.frame_zero(), 7);
    assert_eq!(params.frame_stop(), 30);
}

#[test]
fn random_marker_sequences_never_violate_the_ordering() {
    let mut rng = rand::rng();
    let mut params = WaveParameters::default();

    for _ in 0..10_000 {
        let value = rng.random_range(-250..250);
        if rng.random_bool(0.5) {
            params.set_frame_zero(value);
        } else {
            params.set_frame_stop(value);
        }
        assert!(
            params.frame_zero() < params.frame_stop(),
            "markers collided: zero={} stop={}",
            params.frame_zero(),
            params.frame_stop()
        );
    }
}
