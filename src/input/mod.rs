//! Input handling: drag event types, the pointer processor that detects
//! drags, and the event source controllers subscribe to.

/// Drag and raw pointer event types.
pub mod event;
/// Converts raw pointer events into drag events.
pub mod processor;
/// Event broadcast with RAII subscriptions.
pub mod source;

pub use event::{InputEvent, PointerEvent};
pub use processor::PointerProcessor;
pub use source::{EventSource, Subscription};
