//! Mouse mapping from terminal events to board pointer events.
//!
//! Each mouse button is its own pointer, so a drag with the left button and a
//! stray right click never get mixed up. Positions are converted to
//! board-local points through a [`BoardLayout`]; presses outside the board
//! still produce a point (the game decides whether it lands on a tile).

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{BoardLayout, Point, PointerId};

/// A framework-independent pointer event in board-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(PointerId, Point),
    Move(PointerId, Point),
    Up(PointerId, Point),
}

impl PointerEvent {
    pub fn id(&self) -> PointerId {
        match *self {
            PointerEvent::Down(id, _) | PointerEvent::Move(id, _) | PointerEvent::Up(id, _) => id,
        }
    }

    pub fn point(&self) -> Point {
        match *self {
            PointerEvent::Down(_, p) | PointerEvent::Move(_, p) | PointerEvent::Up(_, p) => p,
        }
    }
}

/// Pointer id used for a mouse button
pub fn pointer_id(button: MouseButton) -> PointerId {
    match button {
        MouseButton::Left => PointerId(0),
        MouseButton::Right => PointerId(1),
        MouseButton::Middle => PointerId(2),
    }
}

/// Map a mouse event. Wheel and bare motion events produce nothing.
pub fn map_mouse(event: MouseEvent, layout: &BoardLayout) -> Option<PointerEvent> {
    let point = layout.to_point(event.column, event.row);
    match event.kind {
        MouseEventKind::Down(button) => Some(PointerEvent::Down(pointer_id(button), point)),
        MouseEventKind::Drag(button) => Some(PointerEvent::Move(pointer_id(button), point)),
        MouseEventKind::Up(button) => Some(PointerEvent::Up(pointer_id(button), point)),
        _ => None,
    }
}
