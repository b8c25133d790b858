//! Movement data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in movement_operations.rs

use cgmath::{Point3, Vector3};

/// The six movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKey {
    /// A
    Left,
    /// D
    Right,
    /// W
    Forward,
    /// S
    Backward,
    /// Q
    Down,
    /// E
    Up,
}

/// Keys currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub backward: bool,
    pub down: bool,
    pub up: bool,
    /// Shift multiplies every contribution by the boost factor
    pub boost: bool,
}

/// Velocity integrator state
///
/// `velocity.x` drives the lateral axis, `velocity.y` the forward axis and
/// `velocity.z` the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementState {
    pub velocity: Vector3<f32>,

    /// Seconds accumulated since the last integration step
    pub elapsed: f32,

    /// Velocity added per held key and step
    pub move_amount: f32,

    pub boost_factor: f32,

    /// Point the camera re-aims at after every step
    pub target: Point3<f32>,

    pub world_up: Vector3<f32>,
}
