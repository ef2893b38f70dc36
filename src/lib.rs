//! Configuration registry for a multi-model LLM council chat backend.
//!
//! Build a [`Config`](config::Config) once at startup with
//! [`Config::load`](config::Config::load) and pass it by reference to the
//! components that query the council.

pub mod config;
