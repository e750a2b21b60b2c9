#![allow(dead_code)]

pub mod config_env;
pub mod stub_server;
