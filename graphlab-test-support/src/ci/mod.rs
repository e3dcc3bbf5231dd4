//! Helpers that let CI tune test suites through the environment.

pub mod property_test_profile;
