//! Scroll-reveal components
//!
//! - [`AnimatedSection`] owns one [`RevealController`] and one viewport
//!   observer, and fades the whole section in on first intersection.
//! - [`StaggerGroup`] fades in together with its section and hands out
//!   increasing delay slots to the [`RevealItem`]s inside it.
//! - [`RevealItem`] fades up, delayed by its slot.
//!
//! Without `IntersectionObserver` support the sections stay hidden and a
//! warning is logged.

use leptos::context::Provider;
use leptos::html;
use leptos::prelude::*;
use std::time::Duration;

use crate::core::reveal::{RevealConfig, RevealController, RevealStyle};

/// Why a section could not start watching the viewport
#[derive(Debug, thiserror::Error)]
pub enum RevealError {
    #[error("no browser window available")]
    NoWindow,

    #[error("IntersectionObserver unavailable: {0}")]
    Observer(String),
}

/// Reveal state of the nearest enclosing [`AnimatedSection`]
#[derive(Clone, Copy)]
pub struct RevealContext {
    pub revealed: Signal<bool>,
    pub config: RevealConfig,
}

/// Delay slot dispenser of the nearest enclosing [`StaggerGroup`]
#[derive(Clone, Copy)]
struct StaggerContext {
    next: StoredValue<usize>,
}

impl StaggerContext {
    fn claim(&self) -> usize {
        let mut index = 0;
        self.next.update_value(|next| {
            index = *next;
            *next += 1;
        });
        index
    }
}

/// Section that fades up the first time it scrolls into view
#[component]
pub fn AnimatedSection(
    /// Section content
    children: Children,
    /// Anchor id for in-page navigation
    #[prop(optional)]
    id: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Animation tunables
    #[prop(optional)]
    config: Option<RevealConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let controller = RwSignal::new(RevealController::new(config));
    let revealed: Signal<bool> = Memo::new(move |_| controller.with(|c| c.revealed())).into();
    let section_ref = NodeRef::<html::Section>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::core::reveal::{RevealState, WatchId};

        let watch_id = WatchId::next();

        Effect::new(move |_| {
            let Some(element) = section_ref.get() else {
                return;
            };
            if controller.with_untracked(|c| c.state() != RevealState::Unobserved) {
                return;
            }

            match viewport::watch(watch_id, &element, controller) {
                Ok(()) => controller.update(|c| {
                    c.attach();
                }),
                Err(err) => leptos::logging::warn!("scroll reveal disabled: {err}"),
            }
        });

        on_cleanup(move || viewport::release(watch_id));
    }

    let style = RevealStyle::from_config(&config);
    let context = RevealContext { revealed, config };

    view! {
        <section
            id=id
            class=class
            node_ref=section_ref
            style=move || style.render(revealed.get(), Duration::ZERO)
        >
            <Provider value=context>
                {children()}
            </Provider>
        </section>
    }
}

/// Container whose [`RevealItem`] children reveal one after another
#[component]
pub fn StaggerGroup(
    children: Children,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let (revealed, config) = enclosing_reveal();
    let style = RevealStyle::from_config(&config).fade_only();
    let stagger = StaggerContext {
        next: StoredValue::new(0),
    };

    view! {
        <div class=class style=move || style.render(revealed.get(), Duration::ZERO)>
            <Provider value=stagger>
                {children()}
            </Provider>
        </div>
    }
}

/// Block that fades up with its section, delayed by its stagger slot
#[component]
pub fn RevealItem(
    children: Children,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let (revealed, config) = enclosing_reveal();
    let index = use_context::<StaggerContext>()
        .map(|stagger| stagger.claim())
        .unwrap_or(0);
    let delay = config.stagger_delay(index);
    let style = RevealStyle::from_config(&config);

    view! {
        <div class=class style=move || style.render(revealed.get(), delay)>
            {children()}
        </div>
    }
}

/// Reveal signal and config of the enclosing section; outside any section
/// content is simply visible.
fn enclosing_reveal() -> (Signal<bool>, RevealConfig) {
    match use_context::<RevealContext>() {
        Some(ctx) => (ctx.revealed, ctx.config),
        None => (Signal::stored(true), RevealConfig::default()),
    }
}

#[cfg(feature = "hydrate")]
mod viewport {
    //! Browser side of the reveal: one `IntersectionObserver` per section,
    //! kept in a table keyed by the section's [`WatchId`].

    use std::cell::RefCell;

    use leptos::prelude::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::RevealError;
    use crate::core::reveal::{ObserverTable, RevealController, WatchId};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    struct ViewportWatch {
        observer: IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl Drop for ViewportWatch {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    thread_local! {
        static WATCHES: RefCell<ObserverTable<ViewportWatch>> = RefCell::new(ObserverTable::new());
    }

    /// Start observing `element` and register the observer under `id`
    pub(super) fn watch(
        id: WatchId,
        element: &Element,
        controller: RwSignal<RevealController>,
    ) -> Result<(), RevealError> {
        web_sys::window().ok_or(RevealError::NoWindow)?;

        let threshold = controller.with_untracked(|c| c.config().threshold);

        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    // None once the section has been disposed
                    let fired = controller
                        .try_update(|c| {
                            c.on_intersection(entry.is_intersecting(), entry.intersection_ratio())
                        })
                        .unwrap_or(false);

                    if fired {
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| RevealError::Observer(format!("{err:?}")))?;
        observer.observe(element);

        let displaced = WATCHES.with(|watches| {
            watches.borrow_mut().acquire(
                id,
                ViewportWatch {
                    observer,
                    _callback: callback,
                },
            )
        });
        drop(displaced);

        Ok(())
    }

    /// Disconnect and forget the observer registered under `id`
    pub(super) fn release(id: WatchId) {
        let watch = WATCHES.with(|watches| watches.borrow_mut().release(id));
        drop(watch);
    }
}
