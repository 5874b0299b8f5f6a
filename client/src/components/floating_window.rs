//! Floating window shell: generic chrome around one open widget.
//!
//! DESIGN
//! ======
//! The shell owns its window geometry for as long as the widget is open.
//! Dragging the title bar moves the window (unconstrained — it may leave the
//! viewport); the corner handle resizes with a per-axis minimum. Minimizing
//! hides the shell with `display: none` but keeps it mounted, so the widget
//! inside keeps its state and pointer events fall through to the page;
//! closing unmounts it. Any pointer-down on the shell raises it.

use leptos::prelude::*;

use crate::state::widgets::{WidgetId, WidgetRegistry};
use crate::util::pointer;
use crate::util::window_geometry::{Anchor, drag_position, initial_rect, resize_size};

/// Generic draggable/resizable window chrome hosting a widget's content.
#[component]
pub fn FloatingWindow(
    id: WidgetId,
    #[prop(default = 440.0)] init_width: f64,
    #[prop(default = 340.0)] init_height: f64,
    children: Children,
) -> impl IntoView {
    let registry = expect_context::<RwSignal<WidgetRegistry>>();

    let slot = registry.get_untracked().stack_index(id).unwrap_or(0);
    let rect = RwSignal::new(initial_rect(slot, init_width, init_height));
    let drag = RwSignal::new(None::<Anchor>);
    let resize = RwSignal::new(None::<Anchor>);

    let minimized = move || registry.get().is_minimized(id);

    let on_title_down = move |ev: leptos::ev::PointerEvent| {
        pointer::capture(&ev);
        let r = rect.get_untracked();
        drag.set(Some(Anchor {
            pointer_x: f64::from(ev.client_x()),
            pointer_y: f64::from(ev.client_y()),
            start_a: r.x,
            start_b: r.y,
        }));
    };
    let on_title_move = move |ev: leptos::ev::PointerEvent| {
        if let Some(anchor) = drag.get_untracked() {
            let (x, y) = drag_position(anchor, f64::from(ev.client_x()), f64::from(ev.client_y()));
            rect.update(|r| {
                r.x = x;
                r.y = y;
            });
        }
    };
    let on_title_up = move |ev: leptos::ev::PointerEvent| {
        pointer::release(&ev);
        drag.set(None);
    };

    let on_resize_down = move |ev: leptos::ev::PointerEvent| {
        ev.stop_propagation();
        pointer::capture(&ev);
        let r = rect.get_untracked();
        resize.set(Some(Anchor {
            pointer_x: f64::from(ev.client_x()),
            pointer_y: f64::from(ev.client_y()),
            start_a: r.width,
            start_b: r.height,
        }));
    };
    let on_resize_move = move |ev: leptos::ev::PointerEvent| {
        if let Some(anchor) = resize.get_untracked() {
            let (width, height) = resize_size(anchor, f64::from(ev.client_x()), f64::from(ev.client_y()));
            rect.update(|r| {
                r.width = width;
                r.height = height;
            });
        }
    };
    let on_resize_up = move |ev: leptos::ev::PointerEvent| {
        pointer::release(&ev);
        resize.set(None);
    };

    view! {
        <section
            class="floating-window"
            class:floating-window--minimized=minimized
            style:display=move || if minimized() { "none" } else { "flex" }
            style:left=move || format!("{}px", rect.get().x)
            style:top=move || format!("{}px", rect.get().y)
            style:width=move || format!("{}px", rect.get().width)
            style:height=move || format!("{}px", rect.get().height)
            style:z-index=move || (100 + registry.get().stack_index(id).unwrap_or(0)).to_string()
            on:pointerdown=move |_| registry.update(|r| r.raise(id))
        >
            <header
                class="floating-window__titlebar"
                on:pointerdown=on_title_down
                on:pointermove=on_title_move
                on:pointerup=on_title_up
            >
                <span class="floating-window__title">{id.title()}</span>
                <div
                    class="floating-window__controls"
                    on:pointerdown=move |ev: leptos::ev::PointerEvent| ev.stop_propagation()
                >
                    <button
                        class="floating-window__button"
                        title="minimize"
                        on:click=move |_| registry.update(|r| r.minimize(id))
                    >
                        "–"
                    </button>
                    <button
                        class="floating-window__button"
                        title="close"
                        on:click=move |_| registry.update(|r| r.close(id))
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="floating-window__body">{children()}</div>
            <div
                class="floating-window__resize"
                on:pointerdown=on_resize_down
                on:pointermove=on_resize_move
                on:pointerup=on_resize_up
            ></div>
        </section>
    }
}
