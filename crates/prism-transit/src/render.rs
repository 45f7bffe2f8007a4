//! The renderer collaborator.
//!
//! The animation engine never draws. Each tick, the application walks the
//! live screens, which submit one [`DrawCommand`] per animated region to a
//! [`Renderer`]; what happens to the commands is the backend's business.
//! Two backends are provided: one that records the last frame (tests, demo
//! inspection) and one that logs frames through `tracing`.

use crate::animation::StyleFrame;

/// One animated region's interpolated style values for the current tick.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Stable name of the region being drawn, e.g. `"Main/card2"`.
    pub region: String,
    /// The interpolated style snapshot to draw it with.
    pub frame: StyleFrame,
}

impl DrawCommand {
    /// Create a command for the given region and frame.
    pub fn new(region: impl Into<String>, frame: StyleFrame) -> Self {
        Self {
            region: region.into(),
            frame,
        }
    }
}

/// A backend that consumes interpolated frames.
///
/// Implementations must not call back into the animation engine; they only
/// read the submitted values.
pub trait Renderer {
    /// Begin a new frame, discarding any partially submitted one.
    fn begin_frame(&mut self);

    /// Submit one region's draw command for the current frame.
    fn submit(&mut self, command: DrawCommand);

    /// Finish the current frame.
    fn end_frame(&mut self);
}

/// A renderer that keeps the commands of the most recently completed frame.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    in_flight: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    frames_completed: u64,
}

impl RecordingRenderer {
    /// Create a new recording renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands of the last completed frame, in submission order.
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Find a region's command in the last completed frame.
    pub fn find(&self, region: &str) -> Option<&DrawCommand> {
        self.last_frame.iter().find(|c| c.region == region)
    }

    /// Number of frames completed since creation.
    pub fn frames_completed(&self) -> u64 {
        self.frames_completed
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self) {
        self.in_flight.clear();
    }

    fn submit(&mut self, command: DrawCommand) {
        self.in_flight.push(command);
    }

    fn end_frame(&mut self) {
        self.last_frame = std::mem::take(&mut self.in_flight);
        self.frames_completed += 1;
    }
}

/// A renderer that logs every submitted command at debug level.
#[derive(Debug, Default)]
pub struct TracingRenderer {
    frame: u64,
}

impl TracingRenderer {
    /// Create a new tracing renderer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for TracingRenderer {
    fn begin_frame(&mut self) {
        self.frame += 1;
    }

    fn submit(&mut self, command: DrawCommand) {
        tracing::debug!(
            target: "prism_transit::render",
            frame = self.frame,
            region = %command.region,
            size = command.frame.size,
            elevation = command.frame.elevation,
            padding = command.frame.padding,
            offset_x = command.frame.offset_x,
            offset_y = command.frame.offset_y,
            alpha = command.frame.alpha,
            "draw"
        );
    }

    fn end_frame(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_renderer_keeps_last_frame() {
        let mut renderer = RecordingRenderer::new();

        renderer.begin_frame();
        renderer.submit(DrawCommand::new("a", StyleFrame::VISIBLE));
        renderer.end_frame();

        renderer.begin_frame();
        renderer.submit(DrawCommand::new("b", StyleFrame::HIDDEN));
        renderer.submit(DrawCommand::new("c", StyleFrame::VISIBLE));
        renderer.end_frame();

        assert_eq!(renderer.frames_completed(), 2);
        assert_eq!(renderer.last_frame().len(), 2);
        assert!(renderer.find("a").is_none());
        assert_eq!(renderer.find("b").unwrap().frame, StyleFrame::HIDDEN);
    }

    #[test]
    fn test_begin_frame_discards_partial_submissions() {
        let mut renderer = RecordingRenderer::new();

        renderer.begin_frame();
        renderer.submit(DrawCommand::new("partial", StyleFrame::VISIBLE));
        // No end_frame; the next begin discards it.
        renderer.begin_frame();
        renderer.end_frame();

        assert!(renderer.last_frame().is_empty());
    }
}
