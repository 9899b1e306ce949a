mod common;
mod postgres_api_tests;
