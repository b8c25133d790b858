/// Movement Module - DOP style
///
/// - movement_data.rs: held keys and integrator state
/// - movement_operations.rs: accumulation, gating and decay

pub mod movement_data;
pub mod movement_operations;

pub use movement_data::{MovementInput, MovementKey, MovementState};
pub use movement_operations::{
    accumulate_input, create_movement_state, displacement, integrate_step, set_key, tick,
};
