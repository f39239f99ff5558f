pub mod detect;
pub mod repeats;

pub use detect::{run_detect, DetectArgs};
pub use repeats::{run_repeats, RepeatsArgs};
