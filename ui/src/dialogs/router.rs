//! Resolves the active dialog name to a dialog and contains its failures.

use dioxus::prelude::*;

use super::error::ErrorDialog;
use super::DialogKind;
use crate::app_state_mut::AppStateMut;

/// What the dialog layer shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// No dialog; nothing is rendered.
    Hidden,
    Show(DialogKind),
    /// The generic error dialog.
    Error,
}

/// The router's own state: whether a failure is latched, and what it was.
///
/// Once a lookup miss or render failure is recorded, every non-empty name
/// routes to [`Route::Error`] until [`reset`](Self::reset) is called, so a run
/// of bad names produces one error dialog rather than one each.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogRouter {
    has_render_error: bool,
    /// What the failing dialog reported, when one failed while rendering.
    failure: Option<String>,
}

impl DialogRouter {
    pub fn route(&self, name: Option<&str>) -> Route {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            return Route::Hidden;
        };
        if self.has_render_error {
            return Route::Error;
        }
        match DialogKind::lookup(name) {
            Some(kind) => Route::Show(kind),
            None => Route::Error,
        }
    }

    /// Latches the failure flag if `name` is not a known dialog. Returns
    /// `true` when the state changed.
    pub fn observe(&mut self, name: Option<&str>) -> bool {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            return false;
        };
        if self.has_render_error || DialogKind::lookup(name).is_some() {
            return false;
        }
        dioxus_logger::tracing::error!("[DialogRoot] Unable to find dialog id `{}`", name);
        self.has_render_error = true;
        true
    }

    pub fn record_failure(&mut self, kind: DialogKind, error: &str) {
        dioxus_logger::tracing::error!("[DialogRoot] dialog `{}` failed to render: {}", kind.name(), error);
        self.has_render_error = true;
        self.failure = Some(error.to_string());
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Mounted by the error boundary in place of a dialog that failed; latches
/// the failure so the router takes over with the error dialog.
#[component]
fn RenderFailure(kind: DialogKind, error: String, router: Signal<DialogRouter>) -> Element {
    let mut router = router;
    use_effect(move || {
        router.with_mut(|r| r.record_failure(kind, &error));
    });
    rsx! {}
}

/// The dialog layer. Renders the active dialog, or the error dialog when
/// the name is unknown or the dialog failed to render.
#[component]
pub fn DialogRoot() -> Element {
    rsx! {
        DialogLayer { render: move |kind: DialogKind| kind.render() }
    }
}

/// The router itself, with the dialog set supplied by `render`.
#[component]
fn DialogLayer(render: Callback<DialogKind, Element>) -> Element {
    let mut store = use_context::<AppStateMut>();
    let mut router = use_signal(DialogRouter::default);
    let active_dialog = store.active_dialog;

    // Unknown names are latched after render so the error stays up even
    // if the name changes before it is dismissed.
    use_effect(move || {
        let name = active_dialog.read().clone();
        let mut next = router.peek().clone();
        if next.observe(name.as_deref()) {
            router.set(next);
        }
    });

    let reset = move |_: ()| {
        router.with_mut(|r| r.reset());
        store.clear_dialog();
    };

    let name = active_dialog.read().clone();
    let route = router.read().route(name.as_deref());
    match route {
        Route::Hidden => rsx! {},
        Route::Error => rsx! {
            ErrorDialog { reset, details: router.read().failure().map(str::to_owned) }
        },
        Route::Show(kind) => rsx! {
            ErrorBoundary {
                handle_error: move |errors: ErrorContext| {
                    let error = errors.error().map(|e| e.to_string()).unwrap_or_default();
                    rsx! {
                        RenderFailure { kind, error, router }
                    }
                },
                {render.call(kind)}
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{active_dialog, settle, use_test_contexts, StoreSlot, TestState};
    use dioxus::dioxus_core::VirtualDom;
    use strum::IntoEnumIterator;

    /// Stands in for a dialog whose body fails while rendering.
    #[component]
    fn BrokenDialog() -> Element {
        let _: serde_json::Value = serde_json::from_str("{")?;
        rsx! { p { "never shown" } }
    }

    #[derive(Props, Clone, PartialEq)]
    struct LayerHarnessProps {
        dialog: Option<String>,
        slot: StoreSlot,
    }

    /// The dialog layer with `METADATA` swapped for a dialog that fails.
    #[allow(non_snake_case)]
    fn LayerHarness(props: LayerHarnessProps) -> Element {
        let store = use_test_contexts(TestState {
            active_dialog: props.dialog.clone(),
            ..TestState::default()
        });
        props.slot.fill(store);
        rsx! {
            DialogLayer {
                render: move |kind: DialogKind| match kind {
                    DialogKind::Metadata => rsx! { BrokenDialog {} },
                    other => other.render(),
                },
            }
        }
    }

    async fn mount(dialog: Option<&str>) -> (VirtualDom, AppStateMut) {
        let slot = StoreSlot::default();
        let props = LayerHarnessProps {
            dialog: dialog.map(str::to_string),
            slot: slot.clone(),
        };
        let mut dom = VirtualDom::new_with_props(LayerHarness, props);
        dom.rebuild_in_place();
        settle(&mut dom).await;
        (dom, slot.get())
    }

    #[tokio::test]
    async fn a_known_name_renders_its_dialog() {
        let (dom, _) = mount(Some("ABOUT")).await;
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("A street designer"), "{html}");
        assert!(!html.contains("Oops!"));
    }

    #[tokio::test]
    async fn an_unknown_name_renders_the_error_dialog() {
        let (dom, _) = mount(Some("BOGUS")).await;
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Oops!"), "{html}");
    }

    #[tokio::test]
    async fn a_failing_dialog_is_contained_and_latches_the_error() {
        let (mut dom, store) = mount(Some("METADATA")).await;
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Oops!"), "{html}");
        assert!(html.contains("EOF while parsing"), "the captured error is shown: {html}");
        assert!(!html.contains("never shown"));

        // A valid name while the error is latched still gets the error dialog.
        dom.in_runtime(|| {
            let mut store = store;
            store.show_dialog_named("ABOUT");
        });
        settle(&mut dom).await;
        assert_eq!(active_dialog(&dom, store).as_deref(), Some("ABOUT"));
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Oops!"), "{html}");
        assert!(!html.contains("A street designer"));
    }

    #[tokio::test]
    async fn an_empty_name_renders_no_dialog() {
        for name in [None, Some("")] {
            let (dom, _) = mount(name).await;
            let html = dioxus_ssr::render(&dom);
            assert!(!html.contains("<dialog"), "{name:?}: {html}");
        }
    }

    #[test]
    fn registered_names_show_their_dialog() {
        let mut router = DialogRouter::default();
        for kind in DialogKind::iter() {
            assert!(!router.observe(Some(kind.name())));
            assert_eq!(router.route(Some(kind.name())), Route::Show(kind));
        }
        assert_eq!(router, DialogRouter::default());
    }

    #[test]
    fn no_name_renders_nothing() {
        let mut router = DialogRouter::default();
        assert_eq!(router.route(None), Route::Hidden);
        assert_eq!(router.route(Some("")), Route::Hidden);
        assert!(!router.observe(Some("")));

        // Even with a latched error, no name still means no dialog.
        router.record_failure(DialogKind::About, "boom");
        assert_eq!(router.route(None), Route::Hidden);
    }

    #[test]
    fn unknown_names_latch_the_error_until_reset() {
        let mut router = DialogRouter::default();
        assert_eq!(router.route(Some("BOGUS")), Route::Error);
        assert!(router.observe(Some("BOGUS")));
        assert!(!router.observe(Some("ALSO_BOGUS")), "already latched");

        assert_eq!(router.route(Some("ABOUT")), Route::Error);
        assert_eq!(router.route(Some("ALSO_BOGUS")), Route::Error);

        router.reset();
        assert_eq!(router.route(Some("ABOUT")), Route::Show(DialogKind::About));
    }

    #[test]
    fn render_failures_take_precedence_over_later_names() {
        let mut router = DialogRouter::default();
        router.record_failure(DialogKind::Metadata, "bad payload");
        assert_eq!(router.route(Some("SIGN_IN")), Route::Error);
        assert_eq!(router.failure(), Some("bad payload"));

        router.reset();
        assert_eq!(router, DialogRouter::default());
        assert_eq!(router.route(Some("SIGN_IN")), Route::Show(DialogKind::SignIn));
    }

    #[test]
    fn switching_between_valid_names_goes_straight_across() {
        let router = DialogRouter::default();
        assert_eq!(router.route(Some("ABOUT")), Route::Show(DialogKind::About));
        assert_eq!(router.route(Some("ADMIN")), Route::Show(DialogKind::Admin));
    }
}
