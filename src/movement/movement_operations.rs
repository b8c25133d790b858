//! Movement operations - Pure DOP functions
//!
//! Frame-rate gated velocity integration. Input is only sampled when a step
//! actually runs, and every step halves the velocity afterwards, so a
//! released key glides to a stop.

use super::movement_data::{MovementInput, MovementKey, MovementState};
use crate::camera::{translate_and_reorient, CameraData};
use crate::constants::movement::{
    FORWARD_AXIS, LATERAL_AXIS, STEP_THRESHOLD_SECONDS, VELOCITY_DECAY, VERTICAL_AXIS,
};
use cgmath::{Point3, Vector3, Zero};

/// Create an integrator at rest
pub fn create_movement_state(
    move_amount: f32,
    boost_factor: f32,
    target: Point3<f32>,
    world_up: Vector3<f32>,
) -> MovementState {
    MovementState {
        velocity: Vector3::zero(),
        elapsed: 0.0,
        move_amount,
        boost_factor,
        target,
        world_up,
    }
}

/// Record a key press or release
pub fn set_key(input: &mut MovementInput, key: MovementKey, held: bool) {
    match key {
        MovementKey::Left => input.left = held,
        MovementKey::Right => input.right = held,
        MovementKey::Forward => input.forward = held,
        MovementKey::Backward => input.backward = held,
        MovementKey::Down => input.down = held,
        MovementKey::Up => input.up = held,
    }
}

/// Velocity after adding one step worth of held keys
pub fn accumulate_input(state: &MovementState, input: &MovementInput) -> Vector3<f32> {
    let amount = if input.boost {
        state.move_amount * state.boost_factor
    } else {
        state.move_amount
    };
    let axis = |negative: bool, positive: bool| -> f32 {
        (positive as i32 - negative as i32) as f32 * amount
    };

    state.velocity
        + Vector3::new(
            axis(input.left, input.right),
            axis(input.backward, input.forward),
            axis(input.down, input.up),
        )
}

/// World-space displacement for `velocity` over `dt` seconds
pub fn displacement(velocity: Vector3<f32>, dt: f32) -> Vector3<f32> {
    Vector3::from(LATERAL_AXIS) * (velocity.x * dt)
        + Vector3::from(FORWARD_AXIS) * (velocity.y * dt)
        + Vector3::from(VERTICAL_AXIS) * (velocity.z * dt)
}

/// One integration step: move, re-aim, decay
///
/// Returns the new camera and the decayed velocity.
pub fn integrate_step(
    camera: &CameraData,
    velocity: Vector3<f32>,
    dt: f32,
    target: Point3<f32>,
    world_up: Vector3<f32>,
) -> (CameraData, Vector3<f32>) {
    let camera = translate_and_reorient(camera, displacement(velocity, dt), target, world_up);
    (camera, velocity * VELOCITY_DECAY)
}

/// Advance the integrator by one frame
///
/// Returns the moved camera when a step ran, `None` while the accumulated
/// time is still below the step threshold.
pub fn tick(
    camera: &CameraData,
    state: &mut MovementState,
    input: &MovementInput,
    frame_seconds: f32,
) -> Option<CameraData> {
    state.elapsed += frame_seconds;
    if state.elapsed <= STEP_THRESHOLD_SECONDS {
        return None;
    }

    let velocity = accumulate_input(state, input);
    let (camera, velocity) =
        integrate_step(camera, velocity, state.elapsed, state.target, state.world_up);
    state.velocity = velocity;
    state.elapsed = 0.0;

    Some(camera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{init_camera_from_config, look_at, CameraConfig};
    use crate::constants::movement::{BOOST_FACTOR, MOVE_AMOUNT};
    use cgmath::InnerSpace;

    fn default_state() -> MovementState {
        create_movement_state(
            MOVE_AMOUNT,
            BOOST_FACTOR,
            Point3::new(16.0, 16.0, 16.0),
            Vector3::unit_y(),
        )
    }

    fn held(key: MovementKey) -> MovementInput {
        let mut input = MovementInput::default();
        set_key(&mut input, key, true);
        input
    }

    #[test]
    fn test_decay_is_exactly_half() {
        let camera = init_camera_from_config(&CameraConfig::default());
        let velocity = Vector3::new(10.0, -4.0, 6.0);
        let (_, decayed) = integrate_step(&camera, velocity, 0.02, Point3::new(16.0, 16.0, 16.0), Vector3::unit_y());
        assert_eq!(decayed, Vector3::new(5.0, -2.0, 3.0));
    }

    #[test]
    fn test_decay_over_many_steps_never_flips_sign() {
        let mut camera = init_camera_from_config(&CameraConfig::default());
        let mut state = default_state();
        state.velocity = Vector3::new(12.0, -7.0, 3.0);
        let initial = state.velocity;
        let idle = MovementInput::default();

        for n in 1..=20 {
            camera = tick(&camera, &mut state, &idle, 0.02).unwrap();
            let expected = initial * 0.5f32.powi(n);
            assert_eq!(state.velocity, expected);
            assert!(state.velocity.x >= 0.0 && state.velocity.y <= 0.0 && state.velocity.z >= 0.0);
        }
    }

    #[test]
    fn test_below_threshold_is_a_no_op() {
        let camera = init_camera_from_config(&CameraConfig::default());
        let mut state = default_state();
        state.velocity = Vector3::new(4.0, 0.0, 0.0);
        let before = state.velocity;

        assert!(tick(&camera, &mut state, &held(MovementKey::Forward), 0.01).is_none());
        assert_eq!(state.velocity, before);
        assert!((state.elapsed - 0.01).abs() < 1e-7);

        // Time keeps accumulating until a step runs
        assert!(tick(&camera, &mut state, &held(MovementKey::Forward), 0.01).is_some());
        assert_eq!(state.elapsed, 0.0);
    }

    #[test]
    fn test_input_accumulation_and_boost() {
        let state = default_state();
        assert_eq!(accumulate_input(&state, &held(MovementKey::Right)), Vector3::new(10.0, 0.0, 0.0));
        assert_eq!(accumulate_input(&state, &held(MovementKey::Left)), Vector3::new(-10.0, 0.0, 0.0));
        assert_eq!(accumulate_input(&state, &held(MovementKey::Forward)), Vector3::new(0.0, 10.0, 0.0));
        assert_eq!(accumulate_input(&state, &held(MovementKey::Backward)), Vector3::new(0.0, -10.0, 0.0));
        assert_eq!(accumulate_input(&state, &held(MovementKey::Down)), Vector3::new(0.0, 0.0, -10.0));
        assert_eq!(accumulate_input(&state, &held(MovementKey::Up)), Vector3::new(0.0, 0.0, 10.0));

        let mut boosted = held(MovementKey::Up);
        boosted.boost = true;
        assert_eq!(accumulate_input(&state, &boosted), Vector3::new(0.0, 0.0, 30.0));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let state = default_state();
        let mut input = held(MovementKey::Left);
        set_key(&mut input, MovementKey::Right, true);
        assert_eq!(accumulate_input(&state, &input), Vector3::zero());
    }

    #[test]
    fn test_axis_mapping() {
        let v = 10.0;
        let dt = 0.5;
        assert_eq!(displacement(Vector3::new(v, 0.0, 0.0), dt), Vector3::new(-5.0, 0.0, 0.0));
        assert_eq!(displacement(Vector3::new(0.0, v, 0.0), dt), Vector3::new(0.0, 0.0, -5.0));
        assert_eq!(displacement(Vector3::new(0.0, 0.0, v), dt), Vector3::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn test_step_moves_and_reaims() {
        let target = Point3::new(16.0, 16.0, 16.0);
        let camera = init_camera_from_config(&CameraConfig::default());
        let mut state = default_state();

        let moved = tick(&camera, &mut state, &held(MovementKey::Up), 0.02).unwrap();
        assert!((moved.position.y - (camera.position.y + 10.0 * 0.02)).abs() < 1e-5);
        assert_eq!(moved.position.x, camera.position.x);
        assert!((moved.view - (target - moved.position).normalize()).magnitude() < 1e-5);
        assert_eq!(state.velocity, Vector3::new(0.0, 0.0, 5.0));
        assert_eq!(moved, look_at(moved.position, target, Vector3::unit_y()));
    }
}
