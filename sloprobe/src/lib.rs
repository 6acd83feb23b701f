pub mod capability;
pub mod clock;
pub mod emit;
pub mod fallback;
pub mod sample;
pub mod settings;
pub mod stub;

pub use capability::CapabilityReport;
pub use clock::{Clock, SystemClock};
pub use fallback::{BccFallback, FallbackError};
pub use sample::{SampleError, SampleValue, SignalSample};
pub use sloprobe_common::{CapabilityMode, Signal};
