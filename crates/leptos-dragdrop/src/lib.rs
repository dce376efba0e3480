//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Lists are dragged between list slots of a board, cards between card
//! slots of lists.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// What is being dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragKind {
    List,
    Card,
}

/// Drag payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragItem {
    pub kind: DragKind,
    pub id: String,
}

impl DragItem {
    pub fn new(kind: DragKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }
}

/// Drop target types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Gap between siblings of `container` (board for lists, list for cards)
    Slot { kind: DragKind, container: String, index: usize },
    /// Body of a container, append at the end
    Container { kind: DragKind, container: String },
}

impl DropTarget {
    pub fn kind(&self) -> DragKind {
        match self {
            DropTarget::Slot { kind, .. } | DropTarget::Container { kind, .. } => *kind,
        }
    }

    pub fn container(&self) -> &str {
        match self {
            DropTarget::Slot { container, .. } | DropTarget::Container { container, .. } => container,
        }
    }

    /// Whether `item` may be dropped here
    pub fn accepts(&self, item: &DragItem) -> bool {
        if self.kind() != item.kind {
            return false;
        }
        // A list can't be dropped into itself as a container
        !(item.kind == DragKind::Card && self.container() == item.id)
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragItem>>,
    pub dragging_write: WriteSignal<Option<DragItem>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragItem>>,
    pub pending_write: WriteSignal<Option<DragItem>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// True once the pointer moved far enough from the mousedown point
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragItem>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<DragItem>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
    }
}

impl DndSignals {
    /// Is `id` of `kind` currently being dragged
    pub fn is_dragging(&self, kind: DragKind, id: &str) -> bool {
        self.dragging_read
            .with(|d| matches!(d, Some(item) if item.kind == kind && item.id == id))
    }

    /// Is anything of `kind` being dragged
    pub fn is_dragging_kind(&self, kind: DragKind) -> bool {
        self.dragging_read.with(|d| matches!(d, Some(item) if item.kind == kind))
    }

    pub fn is_target(&self, target: &DropTarget) -> bool {
        self.drop_target_read.with(|t| t.as_ref() == Some(target))
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    let was_dragging = dnd.dragging_read.with_untracked(Option::is_some);
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    if !was_dragging {
        return;
    }
    // Swallow the click that follows the drop
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable lists and cards
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item: DragItem) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        // Cards sit inside draggable lists; the innermost handler wins
        ev.stop_propagation();
        dnd.pending_write.set(Some(item.clone()));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if pending.is_some() && dnd.dragging_read.with_untracked(Option::is_none) {
            let start = dnd.start_read.get_untracked();
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a drop target
pub fn make_on_target_mouseenter(dnd: DndSignals, target: DropTarget) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        let accepted = dnd
            .dragging_read
            .with_untracked(|d| d.as_ref().map(|item| target.accepts(item)).unwrap_or(false));
        if accepted {
            // Slots inside a container take precedence over the container
            ev.stop_propagation();
            dnd.drop_target_write.set(Some(target.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragItem, DropTarget) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);

        // Click event will fire naturally on the element when not dragging
        if let (Some(dragged), Some(target)) = (dragging, drop_target) {
            if target.accepts(&dragged) {
                on_drop(dragged, target);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 15)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_kind_must_match() {
        let card = DragItem::new(DragKind::Card, "c1");
        let list_slot = DropTarget::Slot { kind: DragKind::List, container: "b1".into(), index: 0 };
        let card_slot = DropTarget::Slot { kind: DragKind::Card, container: "l1".into(), index: 2 };
        assert!(!list_slot.accepts(&card));
        assert!(card_slot.accepts(&card));
    }

    #[test]
    fn test_container_target() {
        let list = DragItem::new(DragKind::List, "l1");
        let board = DropTarget::Container { kind: DragKind::List, container: "b1".into() };
        assert!(board.accepts(&list));
        assert_eq!(board.container(), "b1");

        let card = DragItem::new(DragKind::Card, "l2");
        let same_id_list = DropTarget::Container { kind: DragKind::Card, container: "l2".into() };
        assert!(!same_id_list.accepts(&card));
    }
}
