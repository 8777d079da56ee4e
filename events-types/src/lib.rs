//! # events-types
//!
//! Shared vocabulary for the Veterinaria system-event controller.
//!
//! This crate provides the foundational types used across all crates:
//! - [`RawEvent`], [`ExtraValue`] - Loosely typed deliveries as the host hands them over
//! - [`SystemEvent`] - The closed, strongly typed event variant the dispatcher routes on
//! - [`NotificationChannelDescriptor`], [`NotificationRequest`], [`Notification`] - Notification values
//! - [`JobCommand`], [`ExecutionMode`], [`SyncJobState`] - Background job lifecycle values
//! - [`EventError`] - Error types

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod actions;
mod error;
mod event;
mod job;
mod notification;

pub use error::EventError;
pub use event::{ExtraValue, RawEvent, SystemEvent};
pub use job::{ExecutionMode, JobCommand, SyncJobState};
pub use notification::{
    Importance, Notification, NotificationChannelDescriptor, NotificationRequest, Priority,
    CHANNEL_DESCRIPTION, CHANNEL_ID, CHANNEL_NAME, NOTIFICATION_ID, SMALL_ICON,
};
