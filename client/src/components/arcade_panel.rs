//! Bridge component between Leptos state and the imperative `arcade` engine.
//!
//! ARCHITECTURE
//! ============
//! The arcade crate owns the simulation; this host wires DOM events into it
//! and drives one tick per animation frame. The frame loop is explicit about
//! its lifecycle: every callback first checks that the widget is still open
//! and that the game is still running before rescheduling, so closing the
//! widget or losing pointer capture stops the loop instead of leaking a
//! self-rescheduling callback. Game-over fires exactly once (the core is
//! idempotent), which is what makes the single score submission safe.

use leptos::prelude::*;

use records::GameScore;

#[cfg(feature = "hydrate")]
use crate::state::widgets::{WidgetId, WidgetRegistry};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use arcade::engine::Engine;
#[cfg(feature = "hydrate")]
use arcade::game::{Phase, StepOutcome};
#[cfg(feature = "hydrate")]
use arcade::input::Capture;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
fn schedule_frame(
    engine: Rc<RefCell<Option<Engine>>>,
    registry: RwSignal<WidgetRegistry>,
    on_end: Rc<dyn Fn(u32)>,
) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let engine_for_cb = Rc::clone(&engine);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        holder_for_cb.borrow_mut().take();

        // Stop the loop outright when the widget is gone.
        if !registry.get_untracked().is_open(WidgetId::Arcade) {
            return;
        }

        let outcome = engine_for_cb.borrow_mut().as_mut().map(Engine::tick);
        match outcome {
            Some(StepOutcome::Ended { score }) => on_end(score),
            Some(_) => {
                let running = engine_for_cb
                    .borrow()
                    .as_ref()
                    .is_some_and(|e| e.core.phase == Phase::Running);
                if running {
                    schedule_frame(Rc::clone(&engine_for_cb), registry, Rc::clone(&on_end));
                }
            }
            None => {}
        }
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    }
}

/// Arcade panel: canvas, pointer-lock paddle control, and the leaderboard.
#[component]
pub fn ArcadePanel() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let registry = expect_context::<RwSignal<WidgetRegistry>>();
    let leaderboard = RwSignal::new(Vec::<GameScore>::new());
    let player = RwSignal::new(String::new());
    let last_score = RwSignal::new(None::<u32>);
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let engine: Rc<RefCell<Option<Engine>>> = Rc::new(RefCell::new(None));

    #[cfg(feature = "hydrate")]
    let on_end: Rc<dyn Fn(u32)> = {
        use crate::net::api;

        Rc::new(move |score: u32| {
            last_score.set(Some(score));
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.exit_pointer_lock();
            }

            let name = {
                let trimmed = player.get_untracked().trim().to_owned();
                if trimmed.is_empty() { "anonymous".to_owned() } else { trimmed }
            };
            wasm_bindgen_futures::spawn_local(async move {
                let _ = api::post_score(&records::NewScore { player: name, score: i64::from(score) }).await;
                if !registry.get_untracked().is_open(WidgetId::Arcade) {
                    return;
                }
                if let Ok(scores) = api::fetch_top_scores().await {
                    leaderboard.set(scores);
                }
            });
        })
    };

    // Pause when pointer capture is lost (Esc, tab switch, etc.).
    #[cfg(feature = "hydrate")]
    {
        let engine_for_lock = Rc::clone(&engine);
        Effect::new(move || {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let engine_cb = Rc::clone(&engine_for_lock);
            let cb = Closure::<dyn FnMut()>::new(move || {
                let locked = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.pointer_lock_element())
                    .is_some();
                if !locked {
                    if let Some(e) = engine_cb.borrow_mut().as_mut() {
                        e.capture_changed(Capture::Released);
                        e.render();
                    }
                }
            });
            let _ = document.add_event_listener_with_callback("pointerlockchange", cb.as_ref().unchecked_ref());
            cb.forget();
        });
    }

    // Initial leaderboard.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(scores) = api::fetch_top_scores().await {
                    if registry.get_untracked().is_open(WidgetId::Arcade) {
                        leaderboard.set(scores);
                    }
                }
            });
        }
    });

    let on_canvas_click = {
        #[cfg(feature = "hydrate")]
        let engine = Rc::clone(&engine);
        #[cfg(feature = "hydrate")]
        let on_end = Rc::clone(&on_end);
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let Some(canvas) = canvas_ref.get_untracked() else {
                    return;
                };

                if engine.borrow().is_none() {
                    let mut fresh = Engine::new(canvas.clone());
                    fresh.sync_viewport();
                    fresh.render();
                    *engine.borrow_mut() = Some(fresh);
                }

                canvas.request_pointer_lock();

                let was_running = {
                    let mut borrowed = engine.borrow_mut();
                    let Some(e) = borrowed.as_mut() else { return };
                    let was_running = e.core.phase == Phase::Running;
                    match e.core.phase {
                        Phase::Ready => e.core.start(),
                        Phase::Paused => e.core.resume(),
                        Phase::Ended => {
                            last_score.set(None);
                            e.core.reset();
                            e.core.start();
                        }
                        Phase::Running => {}
                    }
                    was_running
                };

                // Only one frame loop at a time: if the game was already
                // running, a loop is already scheduled.
                if !was_running {
                    schedule_frame(Rc::clone(&engine), registry, Rc::clone(&on_end));
                }
            }
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            #[cfg(feature = "hydrate")]
            {
                if let Some(e) = engine.borrow_mut().as_mut() {
                    e.pointer_moved(f64::from(ev.movement_x()));
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = ev;
            }
        }
    };

    view! {
        <div class="arcade">
            <canvas
                class="arcade__canvas"
                width="480"
                height="320"
                node_ref=canvas_ref
                on:click=on_canvas_click
                on:pointermove=on_pointer_move
            ></canvas>
            <div class="arcade__meta">
                <input
                    class="arcade__player"
                    type="text"
                    placeholder="player name"
                    prop:value=move || player.get()
                    on:input=move |ev| player.set(event_target_value(&ev))
                />
                {move || {
                    last_score
                        .get()
                        .map(|score| view! { <span class="arcade__last">"final score: " {score}</span> })
                }}
            </div>
            <ol class="arcade__leaderboard">
                {move || {
                    leaderboard
                        .get()
                        .iter()
                        .take(10)
                        .map(|entry| {
                            let player_name = entry.player.clone();
                            let score = entry.score;
                            view! {
                                <li class="arcade__rank">
                                    <span>{player_name}</span>
                                    <span>{score}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ol>
        </div>
    }
}
