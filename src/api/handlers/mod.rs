mod capacity;
mod settings;
mod sse;
mod status;

pub(super) use capacity::{get_chart, get_samples, get_summary, put_samples};
pub(super) use settings::{get_settings, update_settings};
pub(super) use sse::sse_events;
pub(super) use status::get_status;
