//! Render Pass Abstraction
//!
//! Trait-based render passes. Each pass owns its GPU resources, can be
//! enabled/disabled and has a defined execution order.

use wgpu::{CommandEncoder, Device, Queue, TextureView};

/// Render pass execution priority (lower = earlier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenderPassPriority {
    /// Background sprite
    Background = 0,
    /// UI quads (always on top)
    UI = 400,
}

/// GPU context shared between render passes
pub struct RenderContext<'a> {
    pub device: &'a Device,
    pub queue: &'a Queue,
    pub surface_format: wgpu::TextureFormat,
    pub width: u32,
    pub height: u32,
}

/// Frame context for a single render frame
pub struct FrameContext<'a> {
    pub encoder: &'a mut CommandEncoder,
    pub color_view: &'a TextureView,
}

/// Trait for implementing render passes
pub trait RenderPass {
    /// Unique name for this pass (for debugging)
    fn name(&self) -> &'static str;

    /// Execution priority (determines render order)
    fn priority(&self) -> RenderPassPriority;

    /// Whether this pass draws anything this frame
    fn is_enabled(&self) -> bool {
        true
    }

    fn set_enabled(&mut self, _enabled: bool) {}

    /// Create GPU resources (called once after the device exists)
    fn initialize(&mut self, ctx: &RenderContext);

    /// Upload per-frame data before the encoder is recorded
    fn prepare(&mut self, _ctx: &RenderContext) {}

    /// Record the pass
    fn render(&self, ctx: &RenderContext, frame: &mut FrameContext);
}

/// Sort passes by priority, keeping insertion order for ties
pub fn sort_passes(passes: &mut [&mut dyn RenderPass]) {
    passes.sort_by_key(|p| p.priority());
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NamedPass(&'static str, RenderPassPriority);

    impl RenderPass for NamedPass {
        fn name(&self) -> &'static str {
            self.0
        }

        fn priority(&self) -> RenderPassPriority {
            self.1
        }

        fn initialize(&mut self, _ctx: &RenderContext) {}

        fn render(&self, _ctx: &RenderContext, _frame: &mut FrameContext) {}
    }

    #[test]
    fn test_background_sorts_before_ui() {
        let mut ui = NamedPass("UI", RenderPassPriority::UI);
        let mut bg = NamedPass("Background", RenderPassPriority::Background);
        let mut passes: Vec<&mut dyn RenderPass> = vec![&mut ui, &mut bg];
        sort_passes(&mut passes);
        let names: Vec<_> = passes.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Background", "UI"]);
    }
}
