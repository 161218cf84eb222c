//! Live camera preview with an optional curve overlay.
//!
//! The camera driver and the display surface are collaborators implemented
//! outside of this crate through [`CameraSource`] and [`DisplaySink`].
//! [`Preview::run`] reads frames, draws the overlay curve into each of them,
//! shows them and reacts to two keys: one switches between a primary and a
//! secondary camera device, the other ends the preview.
use log::{debug, info};

use crate::control_polygon::ControlPolygon;
use crate::curve::CurveRenderer;
use crate::error::Error;
use crate::pixel_buffer::Frame;
use crate::rasterizer::RasterConfig;
use crate::sampler::SamplerConfig;

/// A key reported by the display surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
    /// Any key without a character representation, by its platform key code.
    Other(u32),
}

/// A source of camera frames addressed by device index.
pub trait CameraSource {
    type Error;

    /// Opens the device with the given index. A previously opened device must
    /// have been released.
    fn open(&mut self, device: usize) -> Result<(), Self::Error>;

    fn read_frame(&mut self) -> Result<Frame, Self::Error>;

    /// Releases the current device. Must tolerate being called when no device is open.
    fn release(&mut self);

    /// Human readable backend name of the open device, used for logging.
    fn name(&self) -> Option<&str> {
        None
    }
}

/// A surface frames are shown on, which also reports key presses.
pub trait DisplaySink {
    type Error;

    fn show(&mut self, frame: &Frame) -> Result<(), Self::Error>;

    /// Waits up to `timeout_ms` milliseconds for a key press.
    fn poll_key(&mut self, timeout_ms: u32) -> Option<Key>;
}

#[derive(Debug, thiserror::Error)]
pub enum PreviewError<C, D> {
    #[error("camera error: {0}")]
    Camera(#[source] C),

    #[error("display error: {0}")]
    Display(#[source] D),

    #[error("failed to draw overlay: {0}")]
    Overlay(#[from] Error),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    pub primary_device: usize,
    /// Device opened by the switch key, pressing it again goes back to the primary one.
    pub secondary_device: usize,
    pub poll_timeout_ms: u32,
    pub switch_key: Key,
    pub quit_key: Key,
    /// Stop after this many frames were shown, runs until the quit key otherwise.
    pub max_frames: Option<usize>,
    /// Curve drawn into every frame before it is shown.
    pub overlay: Option<ControlPolygon>,
    pub sampler: SamplerConfig,
    pub raster: RasterConfig,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            primary_device: 0,
            secondary_device: 1,
            poll_timeout_ms: 1,
            switch_key: Key::Char('c'),
            quit_key: Key::Char('q'),
            max_frames: None,
            overlay: None,
            sampler: SamplerConfig::default(),
            raster: RasterConfig::default(),
        }
    }
}

impl PreviewConfig {
    pub fn with_devices(mut self, primary: usize, secondary: usize) -> Self {
        self.primary_device = primary;
        self.secondary_device = secondary;
        self
    }

    pub fn with_keys(mut self, switch_key: Key, quit_key: Key) -> Self {
        self.switch_key = switch_key;
        self.quit_key = quit_key;
        self
    }

    pub fn with_overlay(mut self, polygon: ControlPolygon) -> Self {
        self.overlay = Some(polygon);
        self
    }

    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    pub fn with_sampler(mut self, sampler: SamplerConfig) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn with_raster(mut self, raster: RasterConfig) -> Self {
        self.raster = raster;
        self
    }
}

pub struct Preview {
    config: PreviewConfig,
    renderer: CurveRenderer,
}

impl Preview {
    pub fn new(config: PreviewConfig) -> Self {
        Preview {
            renderer: CurveRenderer::new(config.sampler, config.raster),
            config,
        }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Runs the preview until the quit key is pressed or `max_frames` frames
    /// were shown and returns the number of frames shown.
    ///
    /// The camera is released before returning, also when an error occurred.
    pub fn run<C, D>(
        &self,
        camera: &mut C,
        display: &mut D,
    ) -> Result<usize, PreviewError<C::Error, D::Error>>
    where
        C: CameraSource,
        D: DisplaySink,
    {
        let result = self.run_inner(camera, display);
        camera.release();
        result
    }

    fn run_inner<C, D>(
        &self,
        camera: &mut C,
        display: &mut D,
    ) -> Result<usize, PreviewError<C::Error, D::Error>>
    where
        C: CameraSource,
        D: DisplaySink,
    {
        let mut device = self.config.primary_device;
        camera.open(device).map_err(PreviewError::Camera)?;
        info!(
            "opened camera device {} ({})",
            device,
            camera.name().unwrap_or("unknown backend")
        );

        let mut shown = 0;
        while self.config.max_frames.map_or(true, |max| shown < max) {
            let mut frame = camera.read_frame().map_err(PreviewError::Camera)?;
            if let Some(polygon) = &self.config.overlay {
                self.renderer.draw(&mut frame, polygon)?;
            }
            display.show(&frame).map_err(PreviewError::Display)?;
            shown += 1;

            match display.poll_key(self.config.poll_timeout_ms) {
                Some(key) if key == self.config.quit_key => {
                    debug!("quit key pressed after {} frames", shown);
                    break;
                }
                Some(key) if key == self.config.switch_key => {
                    device = if device == self.config.primary_device {
                        self.config.secondary_device
                    } else {
                        self.config.primary_device
                    };
                    info!("changing the camera to device {}", device);
                    camera.release();
                    camera.open(device).map_err(PreviewError::Camera)?;
                }
                _ => {}
            }
        }
        Ok(shown)
    }
}
