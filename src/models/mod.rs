pub mod clock_event;
pub mod employee;
pub mod event_kind;
pub mod location;
pub mod wire;

pub use clock_event::ClockEvent;
pub use employee::Employee;
pub use event_kind::EventKind;
pub use location::Location;
