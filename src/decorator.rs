//! The shadow decorator: orchestration over platform, planner and worker.
//!
//! One entry point per strategy, all reduced to a [`ShadowSpec`]-driven
//! submission. Spec problems are rejected synchronously, before a job is
//! enqueued; completed rasters are applied from [`ShadowDecorator::pump`] on
//! the owning context's event loop.

use std::sync::{Arc, mpsc};

use crate::effects::gaussian::GaussianBlurKernel;
use crate::foundation::core::ElementId;
use crate::foundation::error::UmbraResult;
use crate::plan::plan;
use crate::platform::ViewPlatform;
use crate::spec::{MarginCompensation, ShadowSpec, ShadowStrategy};
use crate::worker::{CompletedShadow, LivenessToken, ShadowJob, ShadowWorker};

/// Decorates platform elements with computed drop shadows.
///
/// Owns the platform seam and one serialized background worker; all pixel
/// work for this decorator happens on that single thread, in FIFO order.
pub struct ShadowDecorator<P: ViewPlatform> {
    platform: P,
    worker: ShadowWorker,
    completions: mpsc::Receiver<CompletedShadow>,
    gaussian: Option<Arc<dyn GaussianBlurKernel>>,
    token: LivenessToken,
}

impl<P: ViewPlatform> ShadowDecorator<P> {
    /// Build a decorator over `platform` and spawn its worker.
    ///
    /// The Gaussian capability is probed once, here; requests made after a
    /// probe miss fall back to the box-blur strategy.
    pub fn new(platform: P) -> UmbraResult<Self> {
        let (worker, completions) = ShadowWorker::spawn()?;
        let gaussian = platform.gaussian_kernel();
        Ok(Self {
            platform,
            worker,
            completions,
            gaussian,
            token: LivenessToken::new(),
        })
    }

    /// Layered "stacked silhouette" shadow.
    pub fn drop_shadow(
        &mut self,
        element: ElementId,
        spec: &ShadowSpec,
        margins: Option<MarginCompensation>,
    ) -> UmbraResult<()> {
        self.submit(element, spec, ShadowStrategy::Layered, margins)
    }

    /// Box-blurred shadow.
    pub fn drop_shadow_box_blur(&mut self, element: ElementId, spec: &ShadowSpec) -> UmbraResult<()> {
        self.submit(element, spec, ShadowStrategy::BoxBlur, None)
    }

    /// Gaussian-blurred shadow through the platform's compute kernel, falling
    /// back to the box blur when the platform has none.
    pub fn drop_shadow_gaussian(&mut self, element: ElementId, spec: &ShadowSpec) -> UmbraResult<()> {
        let strategy = if self.gaussian.is_some() {
            ShadowStrategy::Gaussian
        } else {
            tracing::warn!("no Gaussian blur service; substituting box blur");
            ShadowStrategy::BoxBlur
        };
        self.submit(element, spec, strategy, None)
    }

    /// Prefer the platform-native elevation shadow when the capability is
    /// present; otherwise run the layered raster pipeline.
    pub fn drop_shadow_compat(
        &mut self,
        element: ElementId,
        spec: &ShadowSpec,
        elevation: f32,
        margins: Option<MarginCompensation>,
    ) -> UmbraResult<()> {
        if let Some(cap) = self.platform.elevation_capability(element) {
            tracing::debug!(api_version = cap.api_version, "using native elevation");
            self.platform.set_elevation(element, elevation);
            return Ok(());
        }
        self.drop_shadow(element, spec, margins)
    }

    fn submit(
        &mut self,
        element: ElementId,
        spec: &ShadowSpec,
        strategy: ShadowStrategy,
        margins: Option<MarginCompensation>,
    ) -> UmbraResult<()> {
        let (width, height) = self.platform.element_size(element);
        // Reject degenerate requests before any background work starts.
        plan(width, height, spec)?;
        let source = self.platform.render_to_raster(element, width, height)?;
        let gaussian = match strategy {
            ShadowStrategy::Gaussian => self.gaussian.clone(),
            _ => None,
        };
        self.worker.submit(ShadowJob {
            element,
            source,
            spec: *spec,
            strategy,
            gaussian,
            margins,
            token: self.token.clone(),
        })
    }

    /// Apply every completion already delivered, without blocking.
    ///
    /// Returns the number of shadows attached. Stale completions (owning
    /// context revoked) are discarded silently.
    pub fn pump(&mut self) -> UmbraResult<usize> {
        let mut applied = 0;
        while let Ok(done) = self.completions.try_recv() {
            applied += self.apply(done)?;
        }
        Ok(applied)
    }

    /// Block until `jobs` completions have been received, applying each.
    ///
    /// Returns the number of shadows attached, which is smaller than `jobs`
    /// when completions were stale.
    pub fn pump_blocking(&mut self, jobs: usize) -> UmbraResult<usize> {
        let mut applied = 0;
        for _ in 0..jobs {
            let done = self
                .completions
                .recv()
                .map_err(|_| crate::UmbraError::validation("shadow worker is shut down"))?;
            applied += self.apply(done)?;
        }
        Ok(applied)
    }

    fn apply(&mut self, done: CompletedShadow) -> UmbraResult<usize> {
        if done.is_stale() {
            tracing::debug!(element = done.element.0, "discarding stale shadow");
            return Ok(0);
        }
        let raster = done.result?;
        self.platform.attach_raster_as_background(done.element, raster);
        self.platform.apply_padding_adjustment(
            done.element,
            -done.spec.offset_left,
            -done.spec.offset_top,
        );
        if let Some(m) = done.margins {
            let s = done.spec.total_size() as i32;
            self.platform.apply_margin_adjustment(
                done.element,
                if m.left { -s } else { 0 },
                if m.top { -s } else { 0 },
                if m.right { -s } else { 0 },
                if m.bottom { -s } else { 0 },
            );
        }
        Ok(1)
    }

    /// Liveness token for the owning context; revoke it on teardown.
    pub fn liveness(&self) -> LivenessToken {
        self.token.clone()
    }

    /// The platform seam, for callers that need to reach through.
    pub fn platform(&self) -> &P {
        &self.platform
    }
}
