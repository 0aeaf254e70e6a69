use portfolio_shared::{
    reveal::{HIDDEN_CLASS, REVEALED_CLASS},
    RevealTracker, SectionId, REVEAL_THRESHOLD,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    console, window, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollToOptions,
};
use yew::prelude::*;

/// Attribute carrying a card's position inside its section.
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Fade cards in the first time they enter the viewport.
///
/// Every element under `container` matching `selector` starts with
/// `opacity-0`; once at least [`REVEAL_THRESHOLD`] of it is visible the
/// `animate-fade-in-up` class is added and the element is no longer watched.
///
/// ```ignore
/// #[function_component(Awards)]
/// fn awards() -> Html {
///     let section_ref = use_node_ref();
///     use_scroll_reveal(section_ref.clone(), ".award-card");
///     html! {
///         <section ref={section_ref}>
///             <div class="award-card opacity-0" data-reveal-index="0">{ "..." }</div>
///         </section>
///     }
/// }
/// ```
#[hook]
pub fn use_scroll_reveal(container: NodeRef, selector: &'static str) {
    let tracker = use_mut_ref(RevealTracker::new);

    use_effect_with(selector, move |selector| {
        let observed = observe_cards(&container, selector, tracker);
        if observed.is_none() {
            console::warn_1(&format!("scroll reveal disabled for `{selector}`").into());
        }

        move || {
            if let Some((observer, callback)) = observed {
                observer.disconnect();
                drop(callback);
            }
        }
    });
}

fn observe_cards(
    container: &NodeRef,
    selector: &str,
    tracker: std::rc::Rc<std::cell::RefCell<RevealTracker>>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let root = container.cast::<Element>()?;

    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let index = reveal_index(&target);
                if tracker.borrow_mut().observe(index, entry.is_intersecting()) {
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    let cards = root.query_selector_all(selector).ok()?;
    for i in 0..cards.length() {
        if let Some(card) = cards.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            if card.class_list().contains(HIDDEN_CLASS) {
                observer.observe(&card);
            }
        }
    }

    Some((observer, callback))
}

fn reveal_index(target: &Element) -> usize {
    target
        .get_attribute(REVEAL_INDEX_ATTR)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(usize::MAX)
}

/// Current vertical scroll offset of the window, updated on every scroll.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(current_scroll_y);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                let closure = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        scroll_y.set(window.scroll_y().unwrap_or(0.0));
                    }) as Box<dyn Fn()>)
                };
                let _ = window
                    .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
                (window, closure)
            });

            move || {
                if let Some((window, closure)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *scroll_y
}

fn current_scroll_y() -> f64 {
    window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Prevent the page behind an overlay from scrolling while `locked` is set.
///
/// The lock is released when `locked` turns false and when the calling
/// component unmounts.
#[hook]
pub fn use_body_scroll_lock(locked: bool) {
    use_effect_with(locked, move |locked| {
        set_body_overflow(*locked);
        || set_body_overflow(false)
    });
}

fn set_body_overflow(locked: bool) {
    let Some(body) = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}

/// Invoke `on_escape` whenever Escape is pressed while `active`.
#[hook]
pub fn use_escape_key(active: bool, on_escape: Callback<()>) {
    use_effect_with((active, on_escape), move |(active, on_escape)| {
        let keydown_listener_opt = if *active {
            let on_escape = on_escape.clone();
            let listener = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" {
                    on_escape.emit(());
                }
            }) as Box<dyn FnMut(_)>);

            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
            }
            Some(listener)
        } else {
            None
        };

        move || {
            if let Some(listener) = keydown_listener_opt {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    });
}

/// Smoothly bring a page section into view.
pub fn scroll_to_section(section: SectionId) {
    let Some(element) = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(section.anchor()))
    else {
        console::warn_1(&format!("section `#{}` is not rendered", section.anchor()).into());
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_window_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Document-relative top of every rendered section.
pub fn measure_sections(scroll_y: f64) -> Vec<(SectionId, f64)> {
    let Some(document) = window().and_then(|win| win.document()) else {
        return Vec::new();
    };
    SectionId::ALL
        .iter()
        .filter_map(|section| {
            let element = document.get_element_by_id(section.anchor())?;
            Some((*section, element.get_bounding_client_rect().top() + scroll_y))
        })
        .collect()
}
