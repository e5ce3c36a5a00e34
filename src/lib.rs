//! Pad multiplexing and configuration for NXP i.MX6 processors
//!
//! `imx6-iomuxc` wraps the three IOMUX controller registers that make up
//! one pad: the mux control register selects which peripheral function the
//! pin carries, the pad control register sets its electrical
//! characteristics, and the optional daisy (select input) register picks
//! which physical pad feeds a shared peripheral input. Register addresses
//! are validated against the IOMUXC window once, at construction; every
//! operation afterwards is a direct, infallible register access.
//!
//! Pad configuration belongs in board bring-up, before concurrent
//! execution contexts exist. The crate takes no locks and never blocks;
//! if pads can be reconfigured concurrently, serialize the access
//! yourself.
//!
//! # Examples
//!
//! Route UART1 TX on an i.MX6UL, with the register addresses from the
//! reference manual:
//!
//! ```no_run
//! use imx6_iomuxc::{
//!     config::{DriveStrength, Hysteresis, PullKeep, PullKeepSelect, PullUpDown, Speed},
//!     Config, Pad,
//! };
//!
//! let mut tx = unsafe { Pad::new(0x020e_0084, 0x020e_0310, 0) }.unwrap();
//! tx.mode(0);
//! tx.configure(
//!     Config::zero()
//!         .set_hysteresis(Hysteresis::Enabled)
//!         .set_pull(PullUpDown::Up100k)
//!         .set_pull_keep_select(PullKeepSelect::Pull)
//!         .set_pull_keep(PullKeep::Enabled)
//!         .set_speed(Speed::MHz100)
//!         .set_drive_strength(DriveStrength::R0_6),
//! );
//! ```
//!
//! Peripheral inputs reachable from several pads carry a daisy register;
//! [`Pad::select`](Pad::select) chooses the driving pad, and is a no-op on
//! pads without one:
//!
//! ```no_run
//! use imx6_iomuxc::Pad;
//!
//! let mut rx = unsafe { Pad::new(0x020e_0088, 0x020e_0314, 0x020e_0624) }.unwrap();
//! rx.mode(0);
//! rx.select(3);
//! ```
//!
//! Tests substitute the memory-mapped accessor with anything implementing
//! [`reg::RegisterAccess`]; see [`Pad::with_access`](Pad::with_access).
//!
//! ## License
//!
//! Licensed under either of
//!
//! - [Apache License, Version 2.0](http://www.apache.org/licenses/LICENSE-2.0)
//! - [MIT License](http://opensource.org/licenses/MIT)
//!
//! at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted
//! for inclusion in the work by you, as defined in the Apache-2.0 license, shall be
//! dual licensed as above, without any additional terms or conditions.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
mod pad;
pub mod reg;

pub use config::Config;
pub use pad::{Error, Pad, IOMUXC_END, IOMUXC_START};
pub use reg::{Mmio, RegisterAccess};
