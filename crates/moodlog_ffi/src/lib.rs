//! Flutter bridge for `moodlog_core`.

pub mod api;
