//! DOM glue: reads the live edit form, applies the visibility plan, and
//! keeps it applied while the host framework keeps rebuilding the tab strip.
//!
//! Every lookup here is optional. The admin page this runs on may not be the
//! module edit form at all, or the tab markup may not exist yet when we run;
//! both are normal and end in a silent no-op.

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, HtmlSelectElement, MutationObserver, MutationObserverInit};

use crate::classify::{classify, TabCategory};
use crate::level::SetupLevel;
use crate::plan;

/// Field name of the Setup Level select on the edit form.
const LEVEL_FIELD_SELECTOR: &str = "[name=\"jform[params][setup_level]\"]";

/// Tab strip container, newer role-based markup first.
const TAB_CONTAINER_SELECTOR: &str = "[role=\"tablist\"], .nav-tabs";

/// Tab headers inside the container, both markup generations.
const TAB_HEADER_SELECTOR: &str = "[role=\"tab\"], a[data-bs-toggle=\"tab\"]";

/// The host framework finishes building the tab strip some time after
/// DOM-ready without announcing it; retry this many times, this far apart.
const SYNC_ATTEMPTS: u32 = 8;
const SYNC_DELAY_MS: u32 = 150;

/// Collapse bursts of container mutations into one re-application.
const REAPPLY_DEBOUNCE_MS: i32 = 100;

thread_local! {
    static REAPPLY_TIMEOUT: Cell<Option<i32>> = Cell::new(None);
}

/// One tab control: header, the element hidden with it (its `li` wrapper in
/// list markup, the header itself otherwise) and the resolved content pane.
struct TabControl {
    header: HtmlElement,
    wrapper: HtmlElement,
    pane: Option<HtmlElement>,
    category: TabCategory,
}

/// Run `bind` now if the DOM is ready, otherwise defer to DOMContentLoaded.
pub fn bind_on_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::wrap(Box::new(move |_: web_sys::Event| {
            bind();
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
        on_ready.forget();
    } else {
        bind();
    }
}

/// Attach the controller to the current page.
///
/// No-op when the Setup Level select is absent (not the module edit form).
/// Otherwise: listen for level changes, apply once, converge on the tab
/// strip with a bounded retry loop, then keep re-applying on structural
/// mutations of the container.
pub fn bind() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let Some(select) = document.query_selector(LEVEL_FIELD_SELECTOR).ok().flatten() else {
        log::debug!("setup level select not found; controller not attached");
        return;
    };

    // Re-apply on every level change. Listeners are intentionally leaked
    // (.forget()), they live for the page lifetime.
    {
        let document = document.clone();
        let on_change = Closure::wrap(Box::new(move |_: web_sys::Event| {
            apply(&document);
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        on_change.forget();
    }

    let applied = apply(&document);

    spawn_local(async move {
        let mut applied = applied;
        for _ in 0..SYNC_ATTEMPTS {
            if applied {
                break;
            }
            TimeoutFuture::new(SYNC_DELAY_MS).await;
            applied = apply(&document);
        }

        if !applied {
            log::debug!("tab strip never appeared; giving up");
            return;
        }

        observe_tab_container(&document);
    });
}

/// Recompute visibility from the current select value and tab strip.
///
/// Returns true when a tab strip was found and styled. Stateless and
/// idempotent; safe to call any number of times.
pub fn apply(document: &Document) -> bool {
    let Some(level) = current_level(document) else {
        return false;
    };
    let Some((_, controls)) = collect_tabs(document) else {
        return false;
    };

    let categories: Vec<TabCategory> = controls.iter().map(|c| c.category).collect();
    let active = controls.iter().position(is_active);
    let plan = plan::plan(level, &categories, active);

    for (control, &hide) in controls.iter().zip(plan.hidden.iter()) {
        set_display(&control.wrapper, hide);
        if let Some(pane) = &control.pane {
            set_display(pane, hide);
        }
    }

    // The active tab went hidden; hand the selection to the planned one
    // through its native activation behavior.
    if let Some(i) = plan.activate {
        controls[i].header.click();
    }

    true
}

fn current_level(document: &Document) -> Option<SetupLevel> {
    let select = document.query_selector(LEVEL_FIELD_SELECTOR).ok()??;
    let select: HtmlSelectElement = select.dyn_into().ok()?;
    Some(SetupLevel::parse(&select.value()))
}

/// Find the tab container and collect its classified tab controls.
fn collect_tabs(document: &Document) -> Option<(Element, Vec<TabControl>)> {
    let container = document.query_selector(TAB_CONTAINER_SELECTOR).ok()??;
    let headers = container.query_selector_all(TAB_HEADER_SELECTOR).ok()?;

    let mut controls = Vec::new();
    for i in 0..headers.length() {
        let Some(node) = headers.get(i) else { continue };
        let Ok(header) = node.dyn_into::<HtmlElement>() else {
            continue;
        };

        let Some(target_id) = pane_target(&header) else {
            continue;
        };
        let pane = document
            .get_element_by_id(&target_id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());

        let label = header.text_content().unwrap_or_default();
        let category = classify(&target_id, &label);

        let wrapper = header
            .closest("li")
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            .unwrap_or_else(|| header.clone());

        controls.push(TabControl {
            header,
            wrapper,
            pane,
            category,
        });
    }

    if controls.is_empty() {
        None
    } else {
        Some((container, controls))
    }
}

/// Identifier of the pane a header targets: `aria-controls`, or the `href`
/// fragment in older anchor markup.
fn pane_target(header: &HtmlElement) -> Option<String> {
    if let Some(target) = header.get_attribute("aria-controls") {
        if !target.is_empty() {
            return Some(target);
        }
    }

    let href = header.get_attribute("href")?;
    let id = href.trim_start_matches('#');
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

fn is_active(control: &TabControl) -> bool {
    control.header.class_list().contains("active")
        || control.header.get_attribute("aria-selected").as_deref() == Some("true")
}

fn set_display(element: &HtmlElement, hide: bool) {
    if hide {
        let _ = element.style().set_property("display", "none");
    } else {
        let _ = element.style().remove_property("display");
    }
}

/// Watch the tab container for structural changes (the host framework may
/// rebuild headers or panes later) and re-apply, debounced.
fn observe_tab_container(document: &Document) {
    let Some((container, _)) = collect_tabs(document) else {
        return;
    };

    let document = document.clone();
    let callback = Closure::wrap(Box::new(move || {
        schedule_reapply(&document);
    }) as Box<dyn FnMut()>);

    let Ok(observer) = MutationObserver::new(callback.as_ref().unchecked_ref()) else {
        return;
    };
    callback.forget();

    // Structural mutations only; our own style writes must not feed back.
    let init = MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);
    let _ = observer.observe_with_options(&container, &init);
}

fn schedule_reapply(document: &Document) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Some(handle) = REAPPLY_TIMEOUT.with(|t| t.take()) {
        window.clear_timeout_with_handle(handle);
    }

    let document = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        REAPPLY_TIMEOUT.with(|t| t.set(None));
        apply(&document);
    }) as Box<dyn FnMut()>);

    if let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref::<js_sys::Function>(),
        REAPPLY_DEBOUNCE_MS,
    ) {
        REAPPLY_TIMEOUT.with(|t| t.set(Some(handle)));
    }
    closure.forget();
}
