//! The drag-to-rotate state machine.
//!
//! The canvas is either idle or dragging exactly one shape; the drag is held
//! as an explicit [`DragState`] value rather than ambient mutable state, so
//! the machine is testable without a real input surface. Every handler
//! returns whether visual state changed, and the host re-renders the whole
//! scene after any transition that reports `true` (a full clear precedes
//! each redraw, so partial invalidation is never needed).

use super::types::{DragState, PointerEvent};
use super::Canvas;
use spinboard_core::geometry::{pointer_angle, Point};

impl Canvas {
    /// Dispatches a pointer event to the matching transition handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Pressed(p) => self.pointer_pressed(p),
            PointerEvent::Moved(p) => self.pointer_moved(p),
            PointerEvent::Released(p) => self.pointer_released(p),
            PointerEvent::Cancelled => self.pointer_cancelled(),
        }
    }

    /// Idle -> Dragging, if the press lands inside a shape.
    ///
    /// The grab angle bakes in the shape's rotation at press time, so the
    /// subsequent drag is relative: the shape turns by the pointer's angle
    /// delta, not to its absolute direction. A miss changes nothing and
    /// reports no redraw.
    pub fn pointer_pressed(&mut self, p: Point) -> bool {
        let Some(id) = self.pick_shape_at(p) else {
            return false;
        };
        // pick_shape_at only returns ids that are present
        let Some(obj) = self.get_shape_mut(id) else {
            return false;
        };

        let grab_angle = pointer_angle(p, obj.polygon.center()) - obj.polygon.angle();
        obj.selected = true;
        self.drag = Some(DragState {
            shape_id: id,
            grab_angle,
        });
        tracing::debug!(
            "drag started on shape {} (grab angle {:.2} deg)",
            id,
            grab_angle
        );
        true
    }

    /// Dragging -> Dragging: retarget the shape's rotation from the live
    /// pointer angle. A move while idle is a no-op.
    pub fn pointer_moved(&mut self, p: Point) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let Some(obj) = self.get_shape_mut(drag.shape_id) else {
            return false;
        };

        let current = pointer_angle(p, obj.polygon.center());
        obj.polygon.set_angle(current - drag.grab_angle);
        true
    }

    /// Dragging -> Idle. The release may land anywhere; the shape keeps the
    /// rotation assigned by the last move as its resting angle.
    pub fn pointer_released(&mut self, _p: Point) -> bool {
        self.finish_drag("drag finished")
    }

    /// Pointer capture loss mid-drag, treated as an implicit release.
    pub fn pointer_cancelled(&mut self) -> bool {
        self.finish_drag("drag cancelled")
    }

    /// Picks the first shape in insertion order whose filled region contains
    /// `p`. Insertion order is paint order, so overlapping shapes resolve to
    /// the one painted first; this is a documented simplification.
    pub fn pick_shape_at(&self, p: Point) -> Option<u64> {
        self.shapes().find(|obj| obj.contains_point(p)).map(|obj| obj.id)
    }

    /// Id of the shape currently being dragged, if any.
    pub fn active_shape_id(&self) -> Option<u64> {
        self.drag.as_ref().map(|d| d.shape_id)
    }

    /// The in-progress drag, if any.
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    fn finish_drag(&mut self, what: &str) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        if let Some(obj) = self.get_shape_mut(drag.shape_id) {
            obj.selected = false;
            tracing::debug!(
                "{} on shape {} (resting angle {:.2} deg)",
                what,
                drag.shape_id,
                obj.polygon.angle()
            );
        }
        true
    }
}
