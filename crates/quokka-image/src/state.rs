//! Commit-time fetch-state management for image views.

use std::sync::{Arc, Mutex};

use quokka_graphics::LayoutMetrics;

use crate::props::ImageProps;
use crate::request::{ImageFetcher, ImageRequest, ImageRequestParams};
use crate::source::{select_source, ImageSource};

/// One settled fetch decision: the selected source, the request issued
/// for it, and the parameters it was issued with.
///
/// Shared immutably once stored; a changed decision replaces the whole
/// state rather than mutating it.
#[derive(Debug)]
pub struct ImageState {
    /// The source chosen by best-fit selection.
    pub image_source: ImageSource,
    /// The fetch issued for that source. Kept alive with the state.
    pub request: ImageRequest,
    /// The decode parameters the fetch was issued with.
    pub request_params: ImageRequestParams,
}

/// One image view's committed props, layout, and fetch state.
pub struct ImageNode {
    props: ImageProps,
    layout: LayoutMetrics,
    state: Mutex<Option<Arc<ImageState>>>,
}

impl ImageNode {
    /// Create a node with no fetch issued yet.
    #[must_use]
    pub fn new(props: ImageProps, layout: LayoutMetrics) -> Self {
        Self {
            props,
            layout,
            state: Mutex::new(None),
        }
    }

    /// The committed props.
    #[must_use]
    pub const fn props(&self) -> &ImageProps {
        &self.props
    }

    /// Best-fit source for the current layout.
    #[must_use]
    pub fn image_source(&self) -> ImageSource {
        select_source(
            &self.props.sources,
            self.layout.content_size(),
            self.layout.point_scale_factor,
        )
    }

    /// The current fetch state, if a fetch has been issued.
    #[must_use]
    pub fn state(&self) -> Option<Arc<ImageState>> {
        self.lock_state().clone()
    }

    /// Issue a fetch for the current (source, parameters) pair unless an
    /// equal pair is already in flight.
    ///
    /// Value equality gates the fetch: recommitting the same props and
    /// layout is a no-op, so redundant commits never duplicate requests
    /// or cancel a fetch that is still wanted.
    pub fn update_state_if_needed(&self, fetcher: &dyn ImageFetcher) {
        let source = self.image_source();
        let params = ImageRequestParams {
            blur_radius: self.props.blur_radius,
            resize_mode: self.props.resize_mode,
        };

        let mut slot = self.lock_state();
        if let Some(current) = slot.as_ref() {
            if current.image_source == source && current.request_params == params {
                return;
            }
        }

        let request = fetcher.request_image(&source, &params);
        *slot = Some(Arc::new(ImageState {
            image_source: source,
            request,
            request_params: params,
        }));
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, Option<Arc<ImageState>>> {
        // The slot is only swapped, never left mid-update, so a poisoned
        // lock still guards a consistent value.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
