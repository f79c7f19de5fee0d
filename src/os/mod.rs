//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system's cryptographically secure random number generator.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same surface:
//!
//! ```text
//! fn sys_random(buf: &mut [u8]) -> std::io::Result<()>
//! ```
//!
//! A failing OS source is reported to the caller as an error. Nothing in
//! this layer retries a failed draw or panics on one.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
compile_error!("no secure OS random source is wired up for this target");
