//! Button edge → indicator control loop for the STM32F103 "Blue Pill".
//!
//! An edge captured in interrupt context (or by a sampling task) is handed to a
//! consumer task through a signal channel, and the consumer drives the LED.
//! Two signaling modes share the same pieces:
//!
//! - **Shared flag**: the EXTI handler flips an atomic [`ButtonFlag`], a poller
//!   task follows the level with `Set`/`Clear`.
//! - **Notification**: a sampling task debounces the button and notifies a
//!   toggler task through a single-slot [`Notification`].
//!
//! Everything outside [`app`] and [`hardware::exti`] is hardware-agnostic and
//! runs on the host under the test harness.
//!
//! [`ButtonFlag`]: signal::flag::ButtonFlag
//! [`Notification`]: signal::notify::Notification

#![cfg_attr(not(test), no_std)]

// Must stay first so the logging macros are visible to every module below.
mod fmt;

pub mod config;
pub mod consumer;
mod delay;
pub mod edge;
pub mod error;
pub mod hardware;
pub mod signal;

#[cfg(target_os = "none")]
pub mod app;

pub use error::Error;
