pub(crate) mod drag;
pub(crate) mod event;
pub(crate) mod spawn;

pub(crate) use drag::{DragOutcome, DragTracker, SwipeDirection};
pub(crate) use event::InputEvent;
pub(crate) use spawn::spawn_input_thread;
