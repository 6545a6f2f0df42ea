pub mod adts_writer;
