pub mod commands;
pub mod engine;
pub mod readlex;
pub mod trace_init;
