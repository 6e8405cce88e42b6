//! Integration tests for layered configuration loading

mod loader_integration;
