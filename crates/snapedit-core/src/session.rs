//! The editing session: the original/current image pair and everything that
//! mutates it.
//!
//! `original` is the baseline for every recompute and is replaced only by
//! open, resize and crop commit. `current` is always `recompute(original,
//! params)` or, right after one of those replacements, a copy of `original`.
//!
//! Recomputes may run off-thread: [`EditingSession::begin_recompute`] hands
//! out a [`RecomputeJob`] and [`EditingSession::finish_recompute`] installs
//! its result only if nothing newer has happened since. Each replacement of
//! `original` (and each reset) starts a new epoch, so a job started before a
//! crop commit can never overwrite the cropped image.

use std::path::Path;
use std::sync::Arc;

use crate::adjustments::recompute_with_passes;
use crate::config::EditorConfig;
use crate::crop_session::{CropSession, CropState, PreviewRect};
use crate::decode::{self, PixelBuffer};
use crate::encode::{self, ImageFormat};
use crate::error::EditorError;
use crate::histogram::histogram_of;
use crate::transform::apply_crop;
use crate::viewport::{compute_geometry, render_preview, ViewportGeometry};
use crate::{AdjustmentParameters, Histogram};

#[derive(Debug)]
struct Images {
    original: Arc<PixelBuffer>,
    current: PixelBuffer,
}

/// A pending recompute, detached from the session.
#[derive(Debug, Clone)]
pub struct RecomputeJob {
    generation: u64,
    epoch: u64,
    original: Arc<PixelBuffer>,
    params: AdjustmentParameters,
    blur_passes: u32,
}

/// Output of [`RecomputeJob::run`], to be passed back to the session.
#[derive(Debug)]
pub struct RecomputeResult {
    generation: u64,
    epoch: u64,
    buffer: PixelBuffer,
}

impl RecomputeJob {
    pub fn params(&self) -> &AdjustmentParameters {
        &self.params
    }

    /// Run the pipeline. Pure; safe to call on any thread.
    pub fn run(self) -> RecomputeResult {
        RecomputeResult {
            generation: self.generation,
            epoch: self.epoch,
            buffer: recompute_with_passes(&self.original, &self.params, self.blur_passes),
        }
    }
}

impl RecomputeResult {
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }
}

/// State of one editor window.
#[derive(Debug, Default)]
pub struct EditingSession {
    config: EditorConfig,
    images: Option<Images>,
    params: AdjustmentParameters,
    crop: CropSession,
    canvas: (u32, u32),
    generation: u64,
    epoch: u64,
}

impl EditingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config: config.normalized(),
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn has_image(&self) -> bool {
        self.images.is_some()
    }

    pub fn original(&self) -> Option<&PixelBuffer> {
        self.images.as_ref().map(|i| i.original.as_ref())
    }

    pub fn current(&self) -> Option<&PixelBuffer> {
        self.images.as_ref().map(|i| &i.current)
    }

    /// Parameters that `current` was (or is being) computed with.
    pub fn params(&self) -> &AdjustmentParameters {
        &self.params
    }

    pub fn crop_state(&self) -> CropState {
        self.crop.state()
    }

    pub fn crop_overlay(&self) -> Option<PreviewRect> {
        self.crop.overlay()
    }

    fn images(&self) -> Result<&Images, EditorError> {
        self.images.as_ref().ok_or(EditorError::NoImage)
    }

    /// Decode `bytes` and make the result the new original.
    pub fn open(&mut self, bytes: &[u8]) -> Result<(u32, u32), EditorError> {
        let buffer = decode::decode_image(bytes)?;
        let dims = buffer.dimensions();
        self.load_buffer(buffer);
        Ok(dims)
    }

    /// Read and decode an image file.
    pub fn open_path(&mut self, path: impl AsRef<Path>) -> Result<(u32, u32), EditorError> {
        let buffer = decode::load_image_file(path)?;
        let dims = buffer.dimensions();
        self.load_buffer(buffer);
        Ok(dims)
    }

    /// Install an already decoded buffer as the new original.
    pub fn load_buffer(&mut self, buffer: PixelBuffer) {
        log::info!("opened {}x{} image", buffer.width, buffer.height);
        self.replace_original(buffer);
        self.crop.cancel();
    }

    fn replace_original(&mut self, buffer: PixelBuffer) {
        let current = buffer.clone();
        self.images = Some(Images {
            original: Arc::new(buffer),
            current,
        });
        self.params = AdjustmentParameters::default();
        self.epoch += 1;
    }

    /// Encode `current` in the given format.
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>, EditorError> {
        Ok(encode::encode_image(&self.images()?.current, format)?)
    }

    /// Output format for a file name, using the configured JPEG quality.
    pub fn output_format(&self, path: impl AsRef<Path>) -> Result<ImageFormat, EditorError> {
        Ok(ImageFormat::from_path(path, self.config.jpeg_quality)?)
    }

    /// Write `current` to `path`, choosing the format from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        let images = self.images()?;
        let format = self.output_format(path.as_ref())?;
        encode::save_image(&images.current, path, format)?;
        Ok(())
    }

    /// Recompute `current` synchronously from a new parameter snapshot.
    pub fn on_parameter_changed(
        &mut self,
        params: AdjustmentParameters,
    ) -> Result<&PixelBuffer, EditorError> {
        let job = self.begin_recompute(params)?;
        self.finish_recompute(job.run());
        Ok(&self.images()?.current)
    }

    /// Record `params` and prepare a recompute that can run elsewhere.
    ///
    /// Any job begun earlier becomes stale.
    pub fn begin_recompute(
        &mut self,
        params: AdjustmentParameters,
    ) -> Result<RecomputeJob, EditorError> {
        let original = Arc::clone(&self.images()?.original);
        self.params = params.clamped();
        self.generation += 1;
        Ok(RecomputeJob {
            generation: self.generation,
            epoch: self.epoch,
            original,
            params: self.params,
            blur_passes: self.config.blur_passes,
        })
    }

    /// Install a finished recompute if it is still the newest one.
    ///
    /// Returns `false` (and leaves `current` alone) for superseded results
    /// and for results computed against an original that has since been
    /// replaced.
    pub fn finish_recompute(&mut self, result: RecomputeResult) -> bool {
        if result.generation != self.generation || result.epoch != self.epoch {
            log::debug!(
                "discarding stale recompute (generation {}/{}, epoch {}/{})",
                result.generation,
                self.generation,
                result.epoch,
                self.epoch
            );
            return false;
        }
        match self.images.as_mut() {
            Some(images) => {
                images.current = result.buffer;
                true
            }
            None => false,
        }
    }

    /// Record the new canvas size and return the resulting geometry.
    pub fn on_canvas_resized(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<ViewportGeometry, EditorError> {
        self.canvas = (width, height);
        self.geometry()
    }

    /// Placement of `current` in the canvas.
    pub fn geometry(&self) -> Result<ViewportGeometry, EditorError> {
        let current = &self.images()?.current;
        compute_geometry(current.width, current.height, self.canvas.0, self.canvas.1)
    }

    /// `current` resampled for display.
    pub fn preview(&self) -> Result<PixelBuffer, EditorError> {
        let geometry = self.geometry()?;
        render_preview(&self.images()?.current, &geometry, self.config.preview_filter)
    }

    /// Per-channel histogram of `current`.
    pub fn histogram(&self) -> Result<Histogram, EditorError> {
        Ok(histogram_of(&self.images()?.current))
    }

    /// Enter crop mode.
    pub fn start_crop(&mut self) -> Result<(), EditorError> {
        self.crop.arm(self.has_image())
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.crop.pointer_down(x, y)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<PreviewRect> {
        self.crop.pointer_move(x, y)
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.crop.pointer_up(x, y)
    }

    /// Commit the crop selection: `original := current[region]`.
    ///
    /// Returns the new image size. On error nothing changes, except that a
    /// zero-area selection returns the crop session to `Armed`.
    pub fn apply_crop(&mut self) -> Result<(u32, u32), EditorError> {
        if !self.crop.is_active() {
            log::warn!("crop commit while not cropping");
            return Err(EditorError::NoSelection);
        }
        let geometry = self.geometry()?;
        let region = self.crop.commit(&geometry)?;
        let cropped = apply_crop(&self.images()?.current, region);
        log::info!(
            "cropped to {:?} ({}x{})",
            region,
            cropped.width,
            cropped.height
        );

        let dims = cropped.dimensions();
        self.replace_original(cropped);
        Ok(dims)
    }

    pub fn cancel_crop(&mut self) {
        self.crop.cancel();
    }

    /// Discard adjustments: `current := original`.
    ///
    /// Does not undo a crop or resize.
    pub fn reset(&mut self) -> Result<(), EditorError> {
        let images = self.images.as_mut().ok_or(EditorError::NoImage)?;
        images.current = images.original.as_ref().clone();
        self.params = AdjustmentParameters::default();
        self.epoch += 1;
        log::info!("reset adjustments");
        Ok(())
    }

    /// Resample `current` to `width × height` and make it the new original.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), EditorError> {
        if width == 0 || height == 0 {
            log::warn!("rejected resize to {}x{}", width, height);
            return Err(EditorError::InvalidDimensions(format!(
                "{}x{}: width and height must be positive",
                width, height
            )));
        }
        let resized = decode::resize(
            &self.images()?.current,
            width,
            height,
            self.config.resize_filter,
        )?;
        log::info!("resized to {}x{}", width, height);
        self.replace_original(resized);
        self.crop.cancel();
        Ok(())
    }

    /// [`resize`](Self::resize) from the text of width/height input fields.
    pub fn resize_from_text(&mut self, width: &str, height: &str) -> Result<(), EditorError> {
        let (w, h) = parse_dimensions(width, height)?;
        self.resize(w, h)
    }
}

/// Parse width/height text fields into positive pixel counts.
pub fn parse_dimensions(width: &str, height: &str) -> Result<(u32, u32), EditorError> {
    let parse = |name: &str, text: &str| -> Result<u32, EditorError> {
        let value: u32 = text.trim().parse().map_err(|_| {
            log::warn!("invalid {} input {:?}", name, text);
            EditorError::InvalidDimensions(format!("{} {:?} is not a whole number", name, text))
        })?;
        if value == 0 {
            return Err(EditorError::InvalidDimensions(format!(
                "{} must be positive",
                name
            )));
        }
        Ok(value)
    };
    Ok((parse("width", width)?, parse("height", height)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_png;
    use crate::Channel;

    /// 100x100 image whose pixels encode their coordinates.
    fn coordinate_image(width: u32, height: u32) -> PixelBuffer {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[x as u8, y as u8, ((x + y) % 256) as u8]);
            }
        }
        PixelBuffer::new(width, height, pixels)
    }

    fn session_with(buffer: PixelBuffer, canvas: (u32, u32)) -> EditingSession {
        let mut session = EditingSession::new();
        session.load_buffer(buffer);
        session.on_canvas_resized(canvas.0, canvas.1).unwrap();
        session
    }

    fn drag(session: &mut EditingSession, from: (f64, f64), to: (f64, f64)) {
        session.start_crop().unwrap();
        assert!(session.pointer_down(from.0, from.1));
        session.pointer_move(to.0, to.1);
        assert!(session.pointer_up(to.0, to.1));
    }

    #[test]
    fn test_operations_without_image() {
        let mut session = EditingSession::new();
        assert!(!session.has_image());
        assert!(matches!(session.start_crop(), Err(EditorError::NoImage)));
        assert!(matches!(session.reset(), Err(EditorError::NoImage)));
        assert!(matches!(session.resize(10, 10), Err(EditorError::NoImage)));
        assert!(matches!(session.histogram(), Err(EditorError::NoImage)));
        assert!(matches!(
            session.on_parameter_changed(AdjustmentParameters::default()),
            Err(EditorError::NoImage)
        ));
        assert!(matches!(
            session.encode(ImageFormat::Png),
            Err(EditorError::NoImage)
        ));
        assert!(matches!(session.save("x.png"), Err(EditorError::NoImage)));
        assert!(matches!(
            session.on_canvas_resized(100, 100),
            Err(EditorError::NoImage)
        ));
    }

    #[test]
    fn test_open_decodes_and_resets() {
        let png = encode_png(&coordinate_image(4, 3).pixels, 4, 3).unwrap();
        let mut session = EditingSession::new();
        session.load_buffer(PixelBuffer::filled(2, 2, [0, 0, 0]));
        session
            .on_parameter_changed(AdjustmentParameters {
                tint: 50.0,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(session.open(&png).unwrap(), (4, 3));
        assert!(session.params().is_default());
        assert_eq!(session.current(), session.original());
        assert_eq!(session.current().unwrap(), &coordinate_image(4, 3));
    }

    #[test]
    fn test_open_garbage_keeps_state() {
        let mut session = EditingSession::new();
        session.load_buffer(PixelBuffer::filled(2, 2, [9, 9, 9]));
        assert!(matches!(
            session.open(b"not an image"),
            Err(EditorError::Decode(_))
        ));
        assert_eq!(session.original().unwrap().dimensions(), (2, 2));
    }

    #[test]
    fn test_parameter_change_derives_from_original() {
        let mut session = EditingSession::new();
        session.load_buffer(PixelBuffer::filled(2, 2, [100, 100, 100]));

        let params = AdjustmentParameters {
            red_offset: 50,
            ..Default::default()
        };
        session.on_parameter_changed(params).unwrap();
        // Applying the same parameters again must not compound.
        let current = session.on_parameter_changed(params).unwrap();
        assert_eq!(current, &PixelBuffer::filled(2, 2, [150, 100, 100]));
        assert_eq!(
            session.original().unwrap(),
            &PixelBuffer::filled(2, 2, [100, 100, 100])
        );
    }

    #[test]
    fn test_parameters_are_clamped() {
        let mut session = EditingSession::new();
        session.load_buffer(PixelBuffer::filled(1, 1, [0, 0, 0]));
        session
            .on_parameter_changed(AdjustmentParameters {
                red_offset: 999,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(session.params().red_offset, 255);
    }

    #[test]
    fn test_crop_commit_scenario() {
        let img = coordinate_image(100, 100);
        let mut session = session_with(img.clone(), (100, 100));
        let geometry = session.geometry().unwrap();
        assert_eq!(geometry.scale, 1.0);
        assert_eq!((geometry.offset_x, geometry.offset_y), (0, 0));

        drag(&mut session, (10.0, 10.0), (60.0, 80.0));
        assert_eq!(session.apply_crop().unwrap(), (50, 70));

        let original = session.original().unwrap();
        assert_eq!(original.dimensions(), (50, 70));
        for y in 0..70 {
            for x in 0..50 {
                assert_eq!(original.pixel(x, y), img.pixel(x + 10, y + 10));
            }
        }
        assert_eq!(session.current(), session.original());
        assert_eq!(session.crop_state(), CropState::Idle);
    }

    #[test]
    fn test_crop_takes_adjusted_pixels_and_resets_params() {
        let mut session = session_with(PixelBuffer::filled(10, 10, [100, 100, 100]), (10, 10));
        session
            .on_parameter_changed(AdjustmentParameters {
                green_offset: 20,
                ..Default::default()
            })
            .unwrap();

        drag(&mut session, (0.0, 0.0), (5.0, 5.0));
        session.apply_crop().unwrap();

        assert!(session.params().is_default());
        assert_eq!(
            session.original().unwrap(),
            &PixelBuffer::filled(5, 5, [100, 120, 100])
        );
    }

    #[test]
    fn test_zero_area_crop_rejected() {
        let img = coordinate_image(100, 100);
        let mut session = session_with(img.clone(), (100, 100));

        drag(&mut session, (30.0, 30.0), (30.0, 30.0));
        assert!(matches!(
            session.apply_crop(),
            Err(EditorError::InvalidSelection)
        ));
        assert_eq!(session.crop_state(), CropState::Armed);
        assert_eq!(session.original().unwrap(), &img);
        assert_eq!(session.current().unwrap(), &img);
    }

    #[test]
    fn test_crop_without_selection() {
        let mut session = session_with(coordinate_image(10, 10), (10, 10));
        assert!(matches!(
            session.apply_crop(),
            Err(EditorError::NoSelection)
        ));
        session.start_crop().unwrap();
        assert!(matches!(
            session.apply_crop(),
            Err(EditorError::NoSelection)
        ));
    }

    #[test]
    fn test_crop_before_layout_keeps_selection() {
        let mut session = EditingSession::new();
        session.load_buffer(coordinate_image(10, 10));
        drag(&mut session, (1.0, 1.0), (5.0, 5.0));

        assert!(matches!(
            session.apply_crop(),
            Err(EditorError::GeometryNotReady)
        ));
        assert!(matches!(session.crop_state(), CropState::Selected { .. }));
    }

    #[test]
    fn test_cancel_crop_keeps_images() {
        let img = coordinate_image(20, 20);
        let mut session = session_with(img.clone(), (20, 20));
        drag(&mut session, (1.0, 1.0), (15.0, 15.0));
        assert!(session.crop_overlay().is_some());

        session.cancel_crop();
        assert_eq!(session.crop_state(), CropState::Idle);
        assert_eq!(session.crop_overlay(), None);
        assert_eq!(session.original().unwrap(), &img);
    }

    #[test]
    fn test_resize_then_reset_keeps_new_size() {
        let mut session = session_with(coordinate_image(40, 20), (200, 200));
        session
            .on_parameter_changed(AdjustmentParameters {
                brightness: 1.5,
                ..Default::default()
            })
            .unwrap();

        session.resize(20, 10).unwrap();
        assert_eq!(session.original().unwrap().dimensions(), (20, 10));
        assert!(session.params().is_default());

        session.reset().unwrap();
        assert_eq!(session.current().unwrap().dimensions(), (20, 10));
        assert_eq!(session.current(), session.original());
    }

    #[test]
    fn test_reset_discards_adjustments() {
        let img = coordinate_image(8, 8);
        let mut session = session_with(img.clone(), (8, 8));
        session
            .on_parameter_changed(AdjustmentParameters {
                contrast: 2.0,
                ..Default::default()
            })
            .unwrap();
        assert_ne!(session.current().unwrap(), &img);

        session.reset().unwrap();
        assert_eq!(session.current().unwrap(), &img);
        assert!(session.params().is_default());
    }

    #[test]
    fn test_resize_rejects_zero_and_cancels_crop() {
        let mut session = session_with(coordinate_image(8, 8), (8, 8));
        assert!(matches!(
            session.resize(0, 4),
            Err(EditorError::InvalidDimensions(_))
        ));
        assert_eq!(session.original().unwrap().dimensions(), (8, 8));

        session.start_crop().unwrap();
        session.resize(4, 4).unwrap();
        assert_eq!(session.crop_state(), CropState::Idle);
    }

    #[test]
    fn test_resize_from_text() {
        let mut session = session_with(coordinate_image(8, 8), (8, 8));
        session.resize_from_text(" 6 ", "3").unwrap();
        assert_eq!(session.original().unwrap().dimensions(), (6, 3));
        assert!(matches!(
            session.resize_from_text("abc", "3"),
            Err(EditorError::InvalidDimensions(_))
        ));
        assert_eq!(session.original().unwrap().dimensions(), (6, 3));
    }

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("640", "480").unwrap(), (640, 480));
        for (w, h) in [("0", "10"), ("10", "-1"), ("", "10"), ("1.5", "2"), ("10", "x")] {
            assert!(
                matches!(parse_dimensions(w, h), Err(EditorError::InvalidDimensions(_))),
                "{:?}x{:?} should be rejected",
                w,
                h
            );
        }
    }

    #[test]
    fn test_stale_recompute_discarded_after_crop() {
        let mut session = session_with(coordinate_image(100, 100), (100, 100));
        let job = session
            .begin_recompute(AdjustmentParameters {
                brightness: 2.0,
                ..Default::default()
            })
            .unwrap();

        drag(&mut session, (10.0, 10.0), (60.0, 80.0));
        session.apply_crop().unwrap();

        let result = job.run();
        assert_eq!(result.buffer().dimensions(), (100, 100));
        assert!(!session.finish_recompute(result));
        assert_eq!(session.current().unwrap().dimensions(), (50, 70));
    }

    #[test]
    fn test_superseded_recompute_discarded() {
        let mut session = session_with(PixelBuffer::filled(2, 2, [10, 10, 10]), (2, 2));
        let first = session
            .begin_recompute(AdjustmentParameters {
                red_offset: 1,
                ..Default::default()
            })
            .unwrap();
        let second = session
            .begin_recompute(AdjustmentParameters {
                red_offset: 2,
                ..Default::default()
            })
            .unwrap();

        let second = second.run();
        let first = first.run();
        assert!(session.finish_recompute(second));
        assert!(!session.finish_recompute(first));
        assert_eq!(session.current().unwrap().pixel(0, 0), [12, 10, 10]);
    }

    #[test]
    fn test_recompute_job_runs_on_another_thread() {
        let mut session = session_with(PixelBuffer::filled(3, 3, [50, 50, 50]), (3, 3));
        let job = session
            .begin_recompute(AdjustmentParameters {
                blue_offset: -50,
                ..Default::default()
            })
            .unwrap();
        let result = std::thread::spawn(move || job.run()).join().unwrap();
        assert!(session.finish_recompute(result));
        assert_eq!(session.current().unwrap().pixel(1, 1), [50, 50, 0]);
    }

    #[test]
    fn test_canvas_not_ready() {
        let mut session = EditingSession::new();
        session.load_buffer(coordinate_image(10, 10));
        let err = session.on_canvas_resized(1, 1).unwrap_err();
        assert!(matches!(err, EditorError::GeometryNotReady));
        assert!(!err.is_user_facing());
        assert!(session.preview().is_err());
    }

    #[test]
    fn test_preview_downscales() {
        let mut session = EditingSession::new();
        session.load_buffer(coordinate_image(100, 50));
        let geometry = session.on_canvas_resized(50, 50).unwrap();
        assert_eq!(geometry.scale, 0.5);
        assert_eq!(session.preview().unwrap().dimensions(), (50, 25));
    }

    #[test]
    fn test_histogram_of_current() {
        let mut session = session_with(PixelBuffer::filled(2, 2, [255, 255, 255]), (2, 2));
        let hist = session.histogram().unwrap();
        for channel in [Channel::Red, Channel::Green, Channel::Blue] {
            assert_eq!(hist.get(channel).unwrap()[255], 4);
        }

        session
            .on_parameter_changed(AdjustmentParameters {
                red_offset: -255,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(session.histogram().unwrap().get(Channel::Red).unwrap()[0], 4);
    }

    #[test]
    fn test_save_and_encode() {
        let img = coordinate_image(6, 4);
        let session = session_with(img.clone(), (6, 4));

        let png = session.encode(ImageFormat::Png).unwrap();
        assert_eq!(decode::decode_image(&png).unwrap(), img);

        let path = std::env::temp_dir().join(format!("snapedit-session-{}.jpg", std::process::id()));
        session.save(&path).unwrap();
        let reloaded = decode::load_image_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(reloaded.dimensions(), (6, 4));

        assert!(matches!(
            session.save("out.webp"),
            Err(EditorError::Encode(encode::EncodeError::UnsupportedFormat(_)))
        ));
    }

    #[test]
    fn test_save_keeps_opened_format() {
        let img = coordinate_image(5, 4);
        let session = session_with(img.clone(), (5, 4));

        for ext in ["bmp", "tif", "gif"] {
            let path = std::env::temp_dir()
                .join(format!("snapedit-session-{}.{}", std::process::id(), ext));
            session.save(&path).unwrap();
            let reloaded = decode::load_image_file(&path).unwrap();
            std::fs::remove_file(&path).ok();

            assert_eq!(reloaded.dimensions(), (5, 4), "{}", ext);
            if ext != "gif" {
                assert_eq!(reloaded, img, "{} should be lossless", ext);
            }
        }
    }

    #[test]
    fn test_output_format_uses_configured_quality() {
        let session = EditingSession::with_config(EditorConfig {
            jpeg_quality: 70,
            ..Default::default()
        });
        assert_eq!(
            session.output_format("photo.jpeg").unwrap(),
            ImageFormat::Jpeg { quality: 70 }
        );
        assert_eq!(session.output_format("scan.bmp").unwrap(), ImageFormat::Bmp);
    }

    #[test]
    fn test_with_config_normalizes() {
        let session = EditingSession::with_config(EditorConfig {
            jpeg_quality: 0,
            ..Default::default()
        });
        assert_eq!(session.config().jpeg_quality, 1);
    }
}
