//! Command-line interface for asc.
//!
//! Every command reads one describe document (from `--input` or stdin),
//! renders it once and writes the table to stdout.

pub mod error;

// Shared plumbing
pub mod config;
pub mod context;
pub mod input;
pub mod list;
pub mod show;

// Services
pub mod asg;
pub mod cloudformation;
pub mod ec2;
pub mod elb;
pub mod vpc;

pub use error::HelpfulError;
