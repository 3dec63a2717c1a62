//! Integration test modules.

mod export_flow;
mod problems_flow;
mod test_utils;
