use std::{cell::RefCell, rc::Rc};

use leptos::{
    leptos_dom::helpers::{request_animation_frame_with_handle, AnimationFrameRequestHandle},
    prelude::*,
};
use leptos_use::{
    core::IntoElementsMaybeSignal, use_intersection_observer_with_options,
    use_raf_fn_with_options, UseIntersectionObserverOptions, UseRafFnCallbackArgs,
    UseRafFnOptions,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{AddEventListenerOptions, IntersectionObserverEntry};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::{
    config::TrackerConfig,
    motion::{progress, typed_prefix, typing_duration, Timeline},
    theme::Theme,
    track::{
        Hub, IntersectionSample, PointerSnapshot, PointerTracker, Publisher, ScrollSnapshot,
        SectionBounds, Subscription,
    },
};

/// Page-wide trackers. Every hook below reads from the same hubs, so the
/// window carries one scroll and one pointer listener however many sections
/// subscribe.
#[derive(Clone, Copy)]
pub struct Trackers {
    config: StoredValue<TrackerConfig>,
    scroll: StoredValue<Hub<ScrollSnapshot>, LocalStorage>,
    pointer: StoredValue<Hub<PointerSnapshot>, LocalStorage>,
}

pub fn provide_trackers(config: TrackerConfig) -> Trackers {
    let trackers = Trackers {
        scroll: StoredValue::new_local(scroll_hub(&config)),
        pointer: StoredValue::new_local(pointer_hub()),
        config: StoredValue::new(config),
    };
    provide_context(trackers);
    trackers
}

pub fn use_trackers() -> Trackers {
    expect_context::<Trackers>()
}

/// Adds a window listener and returns the closure that removes it.
fn window_listener(
    event: &'static str,
    passive: bool,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> impl FnOnce() {
    let window = window();
    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        listener.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("couldn't listen for {event}: {e:?}");
    } else {
        log::debug!("{event} listener attached");
    }
    move || {
        // removing twice or removing an unknown listener is a no-op in the DOM
        let _ = window.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        log::debug!("{event} listener detached");
    }
}

fn current_scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

fn scroll_hub(config: &TrackerConfig) -> Hub<ScrollSnapshot> {
    let config = config.clone();
    Hub::new(move |publisher: Publisher<ScrollSnapshot>| {
        let tracker = Rc::new(RefCell::new(
            config.scroll_tracker().with_initial_offset(current_scroll_y()),
        ));
        let pending = Rc::new(RefCell::new(None::<AnimationFrameRequestHandle>));
        publisher.publish(tracker.borrow().snapshot());

        let detach = window_listener("scroll", true, {
            let tracker = Rc::clone(&tracker);
            let pending = Rc::clone(&pending);
            move |_| {
                if !tracker.borrow_mut().on_scroll() {
                    return;
                }
                let frame = {
                    let tracker = Rc::clone(&tracker);
                    let pending = Rc::clone(&pending);
                    let publisher = publisher.clone();
                    move || {
                        pending.borrow_mut().take();
                        let snapshot = tracker.borrow_mut().on_frame(current_scroll_y());
                        if let Some(snapshot) = snapshot {
                            publisher.publish(snapshot);
                        }
                    }
                };
                match request_animation_frame_with_handle(frame) {
                    Ok(handle) => *pending.borrow_mut() = Some(handle),
                    Err(e) => {
                        log::warn!("couldn't schedule scroll frame: {e:?}");
                        tracker.borrow_mut().cancel_frame();
                    }
                }
            }
        });
        move || {
            if let Some(handle) = pending.borrow_mut().take() {
                handle.cancel();
            }
            tracker.borrow_mut().cancel_frame();
            detach();
        }
    })
}

fn pointer_hub() -> Hub<PointerSnapshot> {
    Hub::new(|publisher: Publisher<PointerSnapshot>| {
        let mut tracker = PointerTracker::default();
        window_listener("pointermove", true, move |ev| {
            if let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() {
                publisher.publish(tracker.on_move(ev.client_x() as f64, ev.client_y() as f64));
            }
        })
    })
}

/// Keeps a hub subscription alive for as long as the calling component.
fn hold_subscription(subscribe: impl Fn() -> Option<Subscription> + 'static) {
    let held = StoredValue::new_local(None::<Subscription>);
    // effects only run in the browser, so the server never touches `window`
    Effect::new(move |_| {
        held.set_value(subscribe());
    });
    on_cleanup(move || {
        held.try_update_value(|sub| {
            if let Some(sub) = sub.take() {
                sub.cancel();
            }
        });
    });
}

/// Scroll offset and the "scrolled past threshold" flag, updated at most once
/// per animation frame.
pub fn use_scroll() -> ReadSignal<ScrollSnapshot> {
    let scroll = use_trackers().scroll;
    let (snapshot, set_snapshot) = signal(ScrollSnapshot::default());
    hold_subscription(move || {
        scroll.try_with_value(|hub| {
            hub.subscribe(move |s: &ScrollSnapshot| {
                set_snapshot.try_set(*s);
            })
        })
    });
    snapshot
}

/// Viewport-relative pointer position, updated on every move.
pub fn use_pointer() -> ReadSignal<PointerSnapshot> {
    let pointer = use_trackers().pointer;
    let (snapshot, set_snapshot) = signal(PointerSnapshot::default());
    hold_subscription(move || {
        pointer.try_with_value(|hub| {
            hub.subscribe(move |p: &PointerSnapshot| {
                set_snapshot.try_set(*p);
            })
        })
    });
    snapshot
}

/// Whether `target` is in view, using the configured threshold and policy.
pub fn use_in_view<El, M>(target: El) -> Signal<bool>
where
    El: IntoElementsMaybeSignal<web_sys::Element, M>,
{
    let config = use_trackers().config.get_value();
    use_in_view_with_threshold(target, config.visibility_threshold)
}

pub fn use_in_view_with_threshold<El, M>(target: El, threshold: f64) -> Signal<bool>
where
    El: IntoElementsMaybeSignal<web_sys::Element, M>,
{
    let config = use_trackers().config.get_value();
    let mut tracker = config.visibility_tracker();
    // the node is not in the document until after the component body runs;
    // the observer's first reading attaches the request
    tracker.request_with_threshold(threshold, false);
    let margin = tracker.root_margin_css();
    let threshold = tracker.threshold();
    let tracker = StoredValue::new(tracker);
    let (visible, set_visible) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries: Vec<IntersectionObserverEntry>, _| {
            for entry in entries {
                let sample =
                    IntersectionSample::new(entry.is_intersecting(), entry.intersection_ratio());
                let next = tracker.try_update_value(|t| t.on_entry(sample)).flatten();
                if let Some(next) = next {
                    set_visible.try_set(next);
                }
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![threshold])
            .root_margin(margin),
    );

    on_cleanup(move || {
        tracker.try_update_value(|t| t.disconnect());
    });

    visible.into()
}

/// Index into `ids` of the section under the navigation bar.
pub fn use_active_section(ids: Vec<&'static str>) -> ReadSignal<usize> {
    let config = use_trackers().config.get_value();
    let resolver = StoredValue::new(config.section_resolver());
    let scroll = use_scroll();
    let (active, set_active) = signal(0usize);

    Effect::new(move |_| {
        let offset_y = scroll.get().offset_y;
        let bounds = section_bounds(&ids, offset_y);
        let next = resolver
            .try_update_value(|r| r.resolve(offset_y, &bounds))
            .unwrap_or_default();
        if next != active.get_untracked() {
            set_active.set(next);
        }
    });

    active
}

/// Document-space bounds for each id; missing elements get an empty box that
/// never matches.
fn section_bounds(ids: &[&str], offset_y: f64) -> Vec<SectionBounds> {
    let document = document();
    ids.iter()
        .map(|id| {
            document
                .get_element_by_id(id)
                .map(|el| {
                    let rect = el.get_bounding_client_rect();
                    SectionBounds::new(rect.top() + offset_y, rect.height())
                })
                .unwrap_or_default()
        })
        .collect()
}

/// Milliseconds since `active` last became true, sampled once per frame and
/// frozen after `until_ms`.
pub fn use_elapsed_while(active: Signal<bool>, until_ms: f64) -> ReadSignal<f64> {
    let (elapsed, set_elapsed) = signal(0.0);
    let timeline = StoredValue::new(Timeline::default());

    let raf = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let now = args.timestamp;
            let e = timeline
                .try_update_value(|t| {
                    if !t.is_running() {
                        t.start(now);
                    }
                    t.elapsed(now)
                })
                .unwrap_or_default();
            set_elapsed.try_set(e.min(until_ms));
        },
        UseRafFnOptions::default().immediate(false),
    );

    let (pause, resume) = (raf.pause.clone(), raf.resume.clone());
    Effect::new(move |_| {
        if active.get() {
            timeline.update_value(|t| t.reset());
            set_elapsed.set(0.0);
            resume();
        } else {
            pause();
        }
    });

    let pause = raf.pause;
    Effect::new(move |_| {
        if elapsed.get() >= until_ms {
            pause();
        }
    });

    elapsed
}

/// Counts up to `target` over `duration_ms` each time `active` turns on.
pub fn use_counter(active: Signal<bool>, target: u32, duration_ms: f64) -> Signal<u32> {
    let elapsed = use_elapsed_while(active, duration_ms);
    Signal::derive(move || progress(elapsed.get(), duration_ms, target))
}

/// Types `text` one character per `interval_ms` each time `active` turns on.
pub fn use_typewriter(active: Signal<bool>, text: String, interval_ms: f64) -> Signal<String> {
    let elapsed = use_elapsed_while(active, typing_duration(&text, interval_ms));
    Signal::derive(move || typed_prefix(&text, elapsed.get(), interval_ms).to_string())
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeState {
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("theme -> {next:?}");
        self.set_theme.set(next);
    }
}

/// Theme preference, read from local storage in the browser and dark otherwise.
pub fn provide_theme() -> ThemeState {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) =
        use_local_storage::<Theme, JsonSerdeWasmCodec>(crate::theme::THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    let state = ThemeState { theme, set_theme };
    provide_context(state);
    state
}

pub fn use_theme() -> ThemeState {
    expect_context::<ThemeState>()
}
