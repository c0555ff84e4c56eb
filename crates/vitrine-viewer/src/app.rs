use winit::event::WindowEvent;

use vitrine_engine::anim::Animator;
use vitrine_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use vitrine_engine::field::{FieldConfig, ThreadSampler};
use vitrine_engine::render::FieldRenderer;
use vitrine_engine::scene::Scene;
use vitrine_engine::viewport::{ViewportAdapter, ViewportState};

/// The 3D panel: assembles the scene on the first frame, then ticks the
/// animation loop and draws once per redraw.
///
/// All rendering state lives here, owned by the caller and threaded through
/// the runtime callbacks; nothing is global.
pub struct FieldApp {
    config: FieldConfig,
    adapter: ViewportAdapter,
    animator: Animator,
    renderer: FieldRenderer,
    scene: Option<Scene>,
}

impl FieldApp {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            adapter: ViewportAdapter::new(),
            animator: Animator::new(),
            renderer: FieldRenderer::new(),
            scene: None,
        }
    }

    pub fn adapter(&self) -> &ViewportAdapter {
        &self.adapter
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Mirrors the latest host viewport into the camera. Both resizes and
    /// scale-factor changes can alter the drawable size, so both feed here.
    fn apply_viewport(&mut self, viewport: ViewportState) {
        if let Some(scene) = self.scene.as_mut() {
            self.adapter.apply(&mut scene.camera, viewport);
        }
    }

    /// Builds the scene against the current viewport and starts the loop.
    /// Separated from the frame callback so tests can drive it without a
    /// window.
    pub fn assemble(&mut self, viewport: ViewportState) {
        let mut sampler = ThreadSampler::new();
        let scene = Scene::assemble(&self.config, viewport.aspect(), &mut sampler);

        log::info!(
            "field ready: {} instances over spread {}",
            scene.group.len(),
            self.config.spread,
        );

        self.scene = Some(scene);
        self.adapter.mark_ready(viewport);
        self.animator.start();
    }
}

impl App for FieldApp {
    fn on_window_event(&mut self, window: &WindowCtx<'_>, event: &WindowEvent) -> AppControl {
        match event {
            // Stage guard inside the adapter: a signal arriving before the
            // first frame assembled the scene is a defined no-op.
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.apply_viewport(window.viewport());
            }
            _ => {}
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.scene.is_none() {
            self.assemble(ctx.window.viewport());
        }

        let Self {
            animator,
            renderer,
            scene: Some(scene),
            ..
        } = self
        else {
            return AppControl::Continue;
        };

        animator.tick(&mut scene.group);

        if ctx.time.frame_index % 600 == 0 {
            log::debug!(
                "frame {}: dt {:.2} ms, group rotation {:?}",
                ctx.time.frame_index,
                ctx.time.dt * 1000.0,
                scene.group.rotation(),
            );
        }

        ctx.render(scene.background, |rctx, target| {
            renderer.render(rctx, target, scene);
        })
    }
}
