//! Integration tests for lyrsync

mod cli_test;
mod controller_test;
mod helpers;
mod timeline_test;
