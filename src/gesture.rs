//! Drag tracking shared by every picker shape.
//!
//! A press is hit-tested once; later moves only accumulate translation, so a
//! drag that leaves the region keeps driving the same target (the geometry
//! functions clamp or wrap as appropriate).

use floem::kurbo::{Point, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    Started,
    Delta,
    Completed,
}

/// Emitted for each phase of an active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate<T> {
    pub phase: DragPhase,
    pub target: T,
    /// Pointer position relative to the shape center.
    pub position: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag<T> {
    position: Vec2,
    target: Option<T>,
}

impl<T> Default for Drag<T> {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            target: None,
        }
    }
}

impl<T: Copy> Drag<T> {
    /// Begin a drag at `pointer`. `hit` picks the target for the
    /// center-relative position; a miss leaves the drag idle.
    pub fn start(
        &mut self,
        pointer: Point,
        center: Point,
        hit: impl FnOnce(Vec2) -> Option<T>,
    ) -> Option<DragUpdate<T>> {
        self.position = pointer - center;
        self.target = hit(self.position);
        self.emit(DragPhase::Started)
    }

    /// Move by `translation` since the last event.
    pub fn update(&mut self, translation: Vec2) -> Option<DragUpdate<T>> {
        self.target?;
        self.position += translation;
        self.emit(DragPhase::Delta)
    }

    /// Release; the drag goes idle afterwards.
    pub fn complete(&mut self) -> Option<DragUpdate<T>> {
        let update = self.emit(DragPhase::Completed);
        self.target = None;
        update
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    fn emit(&self, phase: DragPhase) -> Option<DragUpdate<T>> {
        self.target.map(|target| DragUpdate {
            phase,
            target,
            position: self.position,
        })
    }
}

#[cfg(test)]
mod tests {
    use floem::kurbo::Size;

    use super::*;
    use crate::color::Hsv;
    use crate::palette::{PaletteAxis, PaletteSquare};
    use crate::wheel::{WheelLayout, WheelRegion};

    #[test]
    fn test_phases_in_order() {
        let layout = WheelLayout::from_size(Size::new(200.0, 200.0));
        let mut drag = Drag::default();
        let mut hsv = Hsv::new(255, 0.0, 50.0, 50.0);

        let started = drag
            .start(Point::new(192.0, 100.0), layout.center(), |v| layout.hit(v))
            .expect("press on the ring");
        assert_eq!(started.phase, DragPhase::Started);
        assert_eq!(started.target, WheelRegion::Ring);
        hsv = layout.apply(started.target, hsv, started.position);
        assert_eq!(hsv.h(), 0.0);

        // a quarter turn: down and to the left
        let moved = drag.update(Vec2::new(-92.0, 92.0)).expect("active drag");
        assert_eq!(moved.phase, DragPhase::Delta);
        hsv = layout.apply(moved.target, hsv, moved.position);
        assert!((hsv.h() - 90.0).abs() < 1e-9);

        let done = drag.complete().expect("active drag");
        assert_eq!(done.phase, DragPhase::Completed);
        assert_eq!(done.position, Vec2::new(0.0, 92.0));
        assert!(!drag.is_active());
        assert_eq!(drag.update(Vec2::new(1.0, 1.0)), None);
        assert_eq!(drag.complete(), None);
    }

    #[test]
    fn test_missed_press_stays_idle() {
        let layout = WheelLayout::from_size(Size::new(200.0, 200.0));
        let mut drag = Drag::default();
        assert_eq!(
            drag.start(Point::new(175.0, 100.0), layout.center(), |v| layout.hit(v)),
            None
        );
        assert_eq!(drag.update(Vec2::new(17.0, 0.0)), None);
        assert_eq!(drag.complete(), None);
    }

    #[test]
    fn test_drag_keeps_target_outside_region() {
        let square = PaletteSquare::from_size(Size::new(124.0, 124.0));
        let mut drag = Drag::default();
        drag.start(Point::new(62.0, 62.0), square.center(), |v| {
            square.contains(v).then_some(PaletteAxis::Hue)
        });
        let update = drag.update(Vec2::new(400.0, -400.0)).expect("active drag");
        let hsv = square.delta(update.target, Hsv::default().with_s(0.0), update.position);
        assert_eq!(hsv.s(), 100.0);
        assert_eq!(hsv.v(), 100.0);
    }
}
