pub mod bridge;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod page;
pub mod schedule;
pub mod transport;

pub use bridge::FormBridge;
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use form::{ControlKind, FormControl, FormElement, FormInputSet, SubmitEvent};
pub use page::{Container, DisplayElement, MemoryPage, ResultView};
pub use schedule::Schedules;
pub use transport::{MockReply, Transport};
