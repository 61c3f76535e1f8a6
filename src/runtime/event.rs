use crate::core::NodeId;
use crate::runtime::scheduler::TimerId;

/// Events dispatched by the runtime down to widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A debounce timer armed by `target` reached its deadline.
    TimerElapsed { target: NodeId, timer: TimerId },
}
