pub mod schedule;
pub mod timer;

pub use schedule::{get_show_date, FeedbackContext, FeedbackDelays};
pub use timer::FeedbackTimer;
