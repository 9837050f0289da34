pub mod event_reader;
pub mod status_writer;
