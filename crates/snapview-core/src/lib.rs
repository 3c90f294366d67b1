pub mod selector;
pub mod session;

pub use selector::{RegionSelector, SelectorState};
pub use session::CaptureSession;
