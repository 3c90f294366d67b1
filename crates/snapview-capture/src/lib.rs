mod capture;
mod encode;

pub use capture::{capture_primary_screen, capture_screen_region};
pub use encode::encode_png;
