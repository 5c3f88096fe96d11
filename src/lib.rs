//! Core library for the aws-model-sync command line application.
//!
//! The binary refreshes the Smithy models checked into a local `aws-models`
//! directory from a checkout of the upstream model repository. Path
//! derivation lives in [`aws::models::layout`], the copy orchestration in
//! [`aws::models::sync`] and the error type in [`aws::models::error`].

pub mod aws;

pub use aws::models::{Result, SyncError, error, layout, sync};
