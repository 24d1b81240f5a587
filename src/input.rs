use egui::Pos2;

/// Tagged pointer events delivered by the UI layer, in canvas pixel
/// coordinates. The chrome translates whatever widget/window events it
/// receives into these; the core never references the chrome back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down { pos: Pos2 },
    /// Pointer moved while the gesture is in progress
    Move { pos: Pos2 },
    /// Primary button released
    Up { pos: Pos2 },
}

impl PointerEvent {
    pub fn pos(&self) -> Pos2 {
        match *self {
            PointerEvent::Down { pos } | PointerEvent::Move { pos } | PointerEvent::Up { pos } => {
                pos
            }
        }
    }
}
