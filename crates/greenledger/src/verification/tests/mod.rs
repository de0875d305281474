mod common;
mod service;
mod workflow;
