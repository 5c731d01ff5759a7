//! Integration tests for the seek bar.


mod accessibility_test;
mod cli_test;
mod lifecycle_test;
