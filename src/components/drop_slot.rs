//! Drop Slot Component
//!
//! Gap between two lists or two cards that accepts a drop while dragging.

use leptos::prelude::*;
use leptos_dragdrop::*;

#[component]
pub fn DropSlot(
    dnd: DndSignals,
    kind: DragKind,
    /// Board id for list slots, list id for card slots
    container: String,
    index: usize,
) -> impl IntoView {
    let target = DropTarget::Slot { kind, container, index };
    let on_mouseenter = make_on_target_mouseenter(dnd, target.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let zone_class = move || {
        let mut c = String::from(match kind {
            DragKind::List => "drop-slot list-slot",
            DragKind::Card => "drop-slot card-slot",
        });
        if !dnd.is_dragging_kind(kind) { c.push_str(" hidden"); }
        if dnd.is_target(&target) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
