#![allow(dead_code)]

pub mod artifact_server;
