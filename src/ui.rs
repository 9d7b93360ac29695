//! DOM interactions that accompany the backdrop: cursor follower, hover state,
//! smooth in-page scrolling, scroll reveal and the mobile menu.

use crate::constants::*;
use crate::dom;
use crate::frame::AnimationLoop;
use backdrop_core::constants::REVEAL_THRESHOLD;
use backdrop_core::{anchor_click, CursorFollower, MenuState, RevealTracker};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Wire every interaction on `document`.
///
/// The cursor elements are required, and so is the nav list when a burger is
/// present. Returns the loop driving the cursor ring.
pub fn wire_ui(document: &web::Document) -> anyhow::Result<AnimationLoop> {
    let dot = dom::html_element(dom::query(document, CURSOR_DOT_SELECTOR)?, "cursor dot")?;
    let ring = dom::html_element(dom::query(document, CURSOR_RING_SELECTOR)?, "cursor ring")?;
    let menu = match dom::query_optional(document, BURGER_SELECTOR)? {
        Some(burger) => Some((burger, dom::query(document, NAV_SELECTOR)?)),
        None => None,
    };

    let hover_targets = wire_hover(document)?;
    let anchors = wire_smooth_scroll(document)?;
    let revealed = wire_reveal(document)?;
    match menu {
        Some((burger, nav)) => wire_menu(document, burger, nav)?,
        None => log::info!("[ui] no {BURGER_SELECTOR}; menu not wired"),
    }
    let ring_loop = wire_cursor(document, dot, ring);

    log::info!(
        "[ui] cursor, {} hover targets, {} anchors, {} reveal elements",
        hover_targets,
        anchors,
        revealed
    );
    Ok(ring_loop)
}

fn wire_cursor(
    document: &web::Document,
    dot: web::HtmlElement,
    ring: web::HtmlElement,
) -> AnimationLoop {
    let follower = Rc::new(RefCell::new(CursorFollower::default()));

    let f = follower.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        let p = f
            .borrow_mut()
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
        dom::set_px_position(&dot, p.x, p.y);
    });

    let ring_loop = AnimationLoop::new();
    ring_loop.start(move || {
        let r = follower.borrow_mut().step();
        dom::set_px_position(&ring, r.x, r.y);
    });
    ring_loop
}

fn wire_hover(document: &web::Document) -> anyhow::Result<usize> {
    let Some(body) = document.body() else {
        anyhow::bail!("document has no body");
    };
    let targets = dom::query_all(document, HOVER_TARGETS_SELECTOR)?;
    for el in &targets {
        let b = body.clone();
        dom::listen(el, "mouseenter", move |_: web::MouseEvent| {
            _ = b.class_list().add_1(HOVERING_CLASS);
        });
        let b = body.clone();
        dom::listen(el, "mouseleave", move |_: web::MouseEvent| {
            _ = b.class_list().remove_1(HOVERING_CLASS);
        });
    }
    Ok(targets.len())
}

fn wire_smooth_scroll(document: &web::Document) -> anyhow::Result<usize> {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR)?;
    for a in &anchors {
        let link = a.clone();
        let doc = document.clone();
        dom::add_click_listener(a, move |ev| {
            let href = link.get_attribute("href");
            let click = anchor_click(href.as_deref());
            if click.prevent_default {
                ev.prevent_default();
            }
            let Some(selector) = click.scroll_to else {
                return;
            };
            // fragments that are not valid selectors are treated as missing
            let Ok(Some(target)) = dom::query_optional(&doc, selector) else {
                return;
            };
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
    Ok(anchors.len())
}

fn wire_reveal(document: &web::Document) -> anyhow::Result<usize> {
    let elements = dom::query_all(document, REVEAL_SELECTOR)?;
    if elements.is_empty() {
        return Ok(0);
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    for (i, el) in elements.iter().enumerate() {
        let id = i as u32;
        _ = el.set_attribute(REVEAL_ID_ATTR, &id.to_string());
        tracker.borrow_mut().observe(id);
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = target
                    .get_attribute(REVEAL_ID_ATTR)
                    .and_then(|v| v.parse::<u32>().ok())
                else {
                    continue;
                };
                if tracker.borrow_mut().intersected(id, entry.is_intersecting()) {
                    _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
            if tracker.borrow().pending() == 0 {
                observer.disconnect();
                log::debug!("[ui] all reveal elements shown");
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {e:?}"))?;
    callback.forget();
    for el in &elements {
        observer.observe(el);
    }
    Ok(elements.len())
}

fn wire_menu(
    document: &web::Document,
    burger: web::Element,
    nav: web::Element,
) -> anyhow::Result<()> {
    let state = Rc::new(Cell::new(MenuState::default()));
    let apply = {
        let burger = burger.clone();
        move |s: MenuState| {
            _ = nav.class_list().toggle_with_force(NAV_OPEN_CLASS, s.is_open());
            _ = burger
                .class_list()
                .toggle_with_force(BURGER_OPEN_CLASS, s.is_open());
        }
    };
    let apply = Rc::new(apply);

    {
        let state = state.clone();
        let apply = apply.clone();
        dom::add_click_listener(&burger, move |_| {
            let next = state.get().toggled();
            state.set(next);
            apply(next);
        });
    }

    let links = dom::query_all(document, NAV_LINK_SELECTOR)?;
    for li in &links {
        let state = state.clone();
        let apply = apply.clone();
        dom::add_click_listener(li, move |_| {
            let next = state.get().closed();
            state.set(next);
            apply(next);
        });
    }
    log::info!("[ui] menu with {} links", links.len());
    Ok(())
}
