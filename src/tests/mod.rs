//! Internal test modules.

mod cli_tests;
mod io_tests;
mod select_tests;
mod source_tests;
