//! Frame driver
//!
//! Opens the window, uploads the finished grid once, then per redraw runs the
//! movement integrator, packs both uniforms and draws.

use crate::camera::{build_camera_uniform, init_camera_from_config, log_camera_context, CameraData};
use crate::config::AppConfig;
use crate::constants::window::TITLE;
use crate::error::IoContext;
use crate::gpu::{
    build_frame_uniform, validate_shader_interface, validate_voxel_buffer, FrameInputs, GpuStage,
};
use crate::input::{process_window_event, InputState};
use crate::movement::{create_movement_state, tick, MovementState};
use crate::sampling::{compute_ssaa_offsets, SsaaPattern};
use crate::world::{raw_buffer, VoxelGridData};
use anyhow::{Context, Result};
use cgmath::{Point3, Vector3};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Fullscreen, WindowBuilder};

// ============================================================================
// FRAME RATE
// ============================================================================

/// Frames counted over the current one-second window
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    pub frames: u32,
    pub window_start: Instant,
}

pub fn create_fps_counter(now: Instant) -> FpsCounter {
    FpsCounter {
        frames: 0,
        window_start: now,
    }
}

/// Count a frame; returns the rate once a full second has elapsed
pub fn record_frame(counter: &mut FpsCounter, now: Instant) -> Option<f64> {
    counter.frames += 1;
    let elapsed = now.duration_since(counter.window_start);
    if elapsed < Duration::from_secs(1) {
        return None;
    }
    let fps = counter.frames as f64 / elapsed.as_secs_f64();
    counter.frames = 0;
    counter.window_start = now;
    Some(fps)
}

// ============================================================================
// FRAME STATE
// ============================================================================

/// Everything that changes from frame to frame on the host
struct FrameState {
    camera: CameraData,
    movement: MovementState,
    input: InputState,
    ssaa: SsaaPattern,
    start: Instant,
    last_frame: Instant,
    fps: FpsCounter,
    silent: bool,
}

fn create_frame_state(config: &AppConfig, now: Instant) -> FrameState {
    FrameState {
        camera: init_camera_from_config(&config.camera),
        movement: create_movement_state(
            config.move_amount,
            config.boost_factor,
            Point3::from(config.camera.target),
            Vector3::from(config.camera.up),
        ),
        input: InputState::default(),
        ssaa: compute_ssaa_offsets(),
        start: now,
        last_frame: now,
        fps: create_fps_counter(now),
        silent: config.silent,
    }
}

fn redraw(stage: &mut GpuStage, state: &mut FrameState) -> Result<(), wgpu::SurfaceError> {
    let now = Instant::now();
    let frame_seconds = now.duration_since(state.last_frame).as_secs_f32();
    state.last_frame = now;

    if let Some(camera) = tick(&state.camera, &mut state.movement, &state.input.movement, frame_seconds) {
        state.camera = camera;
        log_camera_context(&camera);
    }

    let size = stage.size();
    let frame = build_frame_uniform(
        &FrameInputs {
            time: now.duration_since(state.start).as_secs_f32(),
            mouse: state.input.mouse,
            width: size.width,
            height: size.height,
        },
        &state.ssaa,
    );
    stage.render(&frame, &build_camera_uniform(&state.camera))?;

    if let Some(fps) = record_frame(&mut state.fps, now) {
        if !state.silent {
            log::info!("[App] {:.1} FPS ({:.2}ms/frame)", fps, 1000.0 / fps);
        }
    }
    Ok(())
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Validate the GPU inputs, open the window and render until closed
pub fn run(config: &AppConfig, grid: &VoxelGridData) -> Result<()> {
    let shader_source = std::fs::read_to_string(&config.shader_path).with_path(&config.shader_path)?;
    validate_shader_interface(&shader_source)
        .with_context(|| format!("shader {} does not match the host layout", config.shader_path.display()))?;
    let voxels = raw_buffer(grid);
    validate_voxel_buffer(voxels)?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut builder = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(PhysicalSize::new(config.screen_width, config.screen_height));
    if config.fullscreen {
        builder = builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }
    let window = Arc::new(builder.build(&event_loop).context("failed to create window")?);

    let shader_label = config.shader_path.display().to_string();
    let mut stage = pollster::block_on(GpuStage::new(window, voxels, &shader_source, &shader_label))?;
    let mut state = create_frame_state(config, Instant::now());

    log::info!("[App] Init finished, rendering starts");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { ref event, window_id } if window_id == stage.window().id() => {
            let height = stage.size().height;
            if process_window_event(&mut state.input, event, height) {
                if state.input.exit_requested {
                    elwt.exit();
                }
                return;
            }
            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(physical_size) => stage.resize(*physical_size),
                WindowEvent::RedrawRequested => match redraw(&mut stage, &mut state) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let size = stage.window().inner_size();
                        stage.resize(size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("[App] GPU out of memory, exiting");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("[App] Frame skipped: {:?}", e),
                },
                _ => {}
            }
        }
        Event::AboutToWait => stage.window().request_redraw(),
        _ => {}
    })?;

    log::info!("[App] Window closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_reported_once_per_second() {
        let start = Instant::now();
        let mut counter = create_fps_counter(start);
        for i in 1..60 {
            assert_eq!(record_frame(&mut counter, start + Duration::from_millis(i * 16)), None);
        }
        let fps = record_frame(&mut counter, start + Duration::from_secs(1)).unwrap();
        assert!((fps - 60.0).abs() < 1e-9);
        assert_eq!(counter.frames, 0);
        assert_eq!(record_frame(&mut counter, start + Duration::from_millis(1100)), None);
    }

    #[test]
    fn test_frame_state_from_config() {
        let config = AppConfig::default();
        let state = create_frame_state(&config, Instant::now());
        assert_eq!(state.camera.position, Point3::new(10.0, 5.0, 24.0));
        assert_eq!(state.movement.velocity, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(state.movement.target, Point3::new(16.0, 16.0, 16.0));
        assert_eq!(state.ssaa, compute_ssaa_offsets());
        assert!(!state.silent);
    }
}
