use std::cell::{Cell, RefCell};
use std::time::Duration;

use super::debounce::Debouncer;
use super::options::PreviewOptions;
use super::pipeline::{PreviewPipeline, PreviewResult};
use super::renderer::StreetRenderer;
use super::PreviewError;
use crate::street::Street;

/// Delay between an option change and the regenerated preview.
pub const PREVIEW_DELAY: Duration = Duration::from_millis(100);

/// Drives a [`PreviewPipeline`] from option changes.
///
/// Option handlers call [`mark_loading`](Self::mark_loading) synchronously and
/// then await [`refresh_when_settled`](Self::refresh_when_settled). Of several
/// refreshes scheduled within [`PREVIEW_DELAY`] only the last one renders,
/// and it takes its options from the snapshot closure at the moment it fires,
/// never from the moment it was scheduled.
pub struct PreviewController<R> {
    pipeline: RefCell<PreviewPipeline<R>>,
    debouncer: Debouncer,
    loading: Cell<bool>,
}

impl<R: StreetRenderer> PreviewController<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            pipeline: RefCell::new(PreviewPipeline::new(renderer)),
            debouncer: Debouncer::default(),
            loading: Cell::new(false),
        }
    }

    /// Renders immediately, e.g. when the dialog mounts.
    pub fn refresh(&self, street: &Street, options: &PreviewOptions) -> PreviewResult {
        let result = self.pipeline.borrow_mut().update(street, options).clone();
        self.loading.set(false);
        result
    }

    pub fn mark_loading(&self) {
        self.loading.set(true);
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Waits out [`PREVIEW_DELAY`] and renders with the latest snapshot,
    /// unless a newer refresh was scheduled meanwhile (then `None`).
    pub async fn refresh_when_settled<F>(&self, snapshot: F) -> Option<PreviewResult>
    where
        F: FnOnce() -> (Street, PreviewOptions),
    {
        self.mark_loading();
        if !self.debouncer.settle(PREVIEW_DELAY).await {
            return None;
        }
        let (street, options) = snapshot();
        Some(self.refresh(&street, &options))
    }

    /// Cancels any pending refresh, e.g. when the dialog closes.
    pub fn cancel(&self) {
        self.debouncer.cancel();
        self.loading.set(false);
    }

    pub fn download(&self) -> Result<(String, Vec<u8>), PreviewError> {
        self.pipeline.borrow().download()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::dpi::DpiScale;
    use crate::preview::pipeline::tests::RecordingRenderer;
    use api::prefs::feature_flags::FeatureFlags;
    use api::prefs::user_settings::{SettingsChange, UserSettings};

    const FLAGS: FeatureFlags = FeatureFlags {
        export_watermark: true,
        save_as_image_custom_dpi: true,
        business_plan: false,
    };

    #[tokio::test(start_paused = true)]
    async fn rapid_toggles_render_once_with_the_latest_options() {
        let renderer = RecordingRenderer::default();
        let calls = renderer.calls.clone();
        let controller = PreviewController::new(renderer);
        let street = Street::sample();
        let settings = RefCell::new(UserSettings::default());
        let dpi = Cell::new(DpiScale::default());
        let snapshot = || {
            let options = PreviewOptions::from_settings(&settings.borrow(), &FLAGS, dpi.get());
            (street.clone(), options)
        };

        let (s, o) = snapshot();
        controller.refresh(&s, &o);
        assert_eq!(calls.borrow().len(), 1);

        settings.borrow_mut().apply(SettingsChange::Watermark(false));
        controller.mark_loading();
        assert!(controller.is_loading());

        let (first, second) = tokio::join!(controller.refresh_when_settled(snapshot), async {
            tokio::time::sleep(Duration::from_millis(40)).await;
            settings.borrow_mut().apply(SettingsChange::SegmentNamesAndWidths(false));
            dpi.set(DpiScale::new(6));
            controller.mark_loading();
            controller.refresh_when_settled(snapshot).await
        });

        assert_eq!(first, None);
        assert!(second.is_some());
        assert!(!controller.is_loading());

        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        let last = calls[1];
        assert!(!last.watermark);
        assert!(!last.segment_labels);
        assert_eq!(last.dpi_scale.get(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn options_changed_during_the_delay_are_picked_up() {
        let renderer = RecordingRenderer::default();
        let calls = renderer.calls.clone();
        let controller = PreviewController::new(renderer);
        let street = Street::sample();
        let settings = RefCell::new(UserSettings::default());
        let snapshot = || {
            let options = PreviewOptions::from_settings(&settings.borrow(), &FLAGS, DpiScale::default());
            (street.clone(), options)
        };

        // The change lands after scheduling but before the delay runs out.
        let (result, ()) = tokio::join!(controller.refresh_when_settled(snapshot), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            settings.borrow_mut().apply(SettingsChange::TransparentSky(true));
        });

        assert!(result.is_some());
        assert!(calls.borrow()[0].transparent_sky);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_the_pending_refresh() {
        let renderer = RecordingRenderer::default();
        let calls = renderer.calls.clone();
        let controller = PreviewController::new(renderer);
        let street = Street::sample();
        let snapshot = || (street.clone(), PreviewOptions::default());

        let (result, ()) = tokio::join!(controller.refresh_when_settled(snapshot), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            controller.cancel();
        });

        assert_eq!(result, None);
        assert!(calls.borrow().is_empty());
        assert!(!controller.is_loading());
    }
}
