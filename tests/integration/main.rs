//! In-process HTTP tests for the front desk API

mod api_tests;
