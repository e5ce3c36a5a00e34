//! Pad instances
//!
//! A [`Pad`] owns the three IOMUX controller registers that describe one
//! physical pin: the mux control register (`IOMUXC_SW_MUX_CTL_PAD_*`), the
//! pad control register (`IOMUXC_SW_PAD_CTL_PAD_*`), and, for pins that
//! feed a shared peripheral input, the daisy chain register
//! (`IOMUXC_*_SELECT_INPUT`). Addresses are checked against the IOMUXC
//! window once, at construction. Configuration calls never fail; field
//! values are masked to their register width, which is what the hardware
//! would do with them anyway.
//!
//! ```no_run
//! use imx6_iomuxc::Pad;
//!
//! // UART1 RX on the i.MX6UL. The receiver input is daisy chained, so
//! // this pad carries a select input register.
//! let mut rx = unsafe { Pad::new(0x020e_0088, 0x020e_0314, 0x020e_0624) }.unwrap();
//! rx.mode(0);
//! rx.select(3);
//! ```

use crate::reg::{Mmio, RegisterAccess};

/// Start of the IOMUX controller register window.
pub const IOMUXC_START: u32 = 0x020e_0000;
/// End of the IOMUX controller register window, inclusive.
pub const IOMUXC_END: u32 = 0x020e_3fff;

/// Mux mode field offset (bits 3:0) in the mux control register.
pub const SW_MUX_CTL_MUX_MODE: u32 = 0;
/// Mux mode field mask.
pub const SW_MUX_CTL_MUX_MODE_MASK: u32 = 0b1111;
/// SION (software input on) bit in the mux control register.
pub const SW_MUX_CTL_SION: u32 = 4;

/// An invalid pad register address.
///
/// Raised only at construction, identifying which register fell outside
/// the IOMUXC window. A bad address table is a programming error, so
/// bring-up code typically treats this as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The mux control register is outside the IOMUXC window
    #[error("invalid mux register {0:#010x}")]
    InvalidMux(u32),
    /// The pad control register is outside the IOMUXC window
    #[error("invalid pad register {0:#010x}")]
    InvalidPad(u32),
    /// The daisy register is non-zero and outside the IOMUXC window
    #[error("invalid daisy register {0:#010x}")]
    InvalidDaisy(u32),
}

/// One pin's multiplexing control unit.
///
/// Construct a `Pad` with [`new`](Pad::new) during board bring-up and hold
/// it for as long as the pin needs reconfiguration. The addresses are
/// fixed for the life of the pad. `Pad` takes no locks; it assumes the
/// serial, single-context access that bring-up code has naturally.
///
/// Every operation is an independent, immediately applied register write.
/// Repeating a call with the same argument leaves the hardware in the
/// same state.
pub struct Pad<R = Mmio> {
    /// Mux control register (IOMUXC_SW_MUX_CTL_PAD_*)
    mux: u32,
    /// Pad control register (IOMUXC_SW_PAD_CTL_PAD_*)
    pad: u32,
    /// Daisy chain register (IOMUXC_*_SELECT_INPUT), if the pin has one
    daisy: Option<u32>,
    access: R,
}

impl Pad {
    /// Create a pad from its three register addresses.
    ///
    /// `daisy` may be `0` for pins with no select input register;
    /// [`select`](Pad::select) is then a no-op. Returns an [`Error`]
    /// naming the first address that falls outside the IOMUXC window.
    /// Construction only validates; it does not touch the hardware.
    ///
    /// # Safety
    ///
    /// The addresses must name this pad's registers per the reference
    /// manual, and the caller must have exclusive access to them while
    /// the pad is configured.
    pub unsafe fn new(mux: u32, pad: u32, daisy: u32) -> Result<Self, Error> {
        Pad::with_access(mux, pad, daisy, Mmio::new())
    }
}

impl<R> Pad<R>
where
    R: RegisterAccess,
{
    /// Create a pad over a caller-supplied register accessor.
    ///
    /// Same contract as [`new`](Pad::new), without committing to
    /// memory-mapped access. Tests use this to configure pads against an
    /// in-memory register file.
    pub fn with_access(mux: u32, pad: u32, daisy: u32, access: R) -> Result<Self, Error> {
        if mux < IOMUXC_START || mux > IOMUXC_END {
            return Err(Error::InvalidMux(mux));
        }
        if pad < IOMUXC_START || pad > IOMUXC_END {
            return Err(Error::InvalidPad(pad));
        }
        let daisy = match daisy {
            0 => None,
            addr if addr < IOMUXC_START || addr > IOMUXC_END => {
                return Err(Error::InvalidDaisy(addr))
            }
            addr => Some(addr),
        };
        tracing::trace!(
            "pad mux={:#010x} pad={:#010x} daisy={:#010x}",
            mux,
            pad,
            daisy.unwrap_or(0)
        );
        Ok(Pad {
            mux,
            pad,
            daisy,
            access,
        })
    }

    /// Configure the pad mux mode.
    ///
    /// Only the low four bits of `mode` are used; the rest of the mux
    /// register is preserved. Legal mode values are pad and chip
    /// specific, see the datasheet.
    pub fn mode(&mut self, mode: u32) {
        tracing::trace!("mux {:#010x}: mode {}", self.mux, mode & SW_MUX_CTL_MUX_MODE_MASK);
        self.access
            .set_field(self.mux, SW_MUX_CTL_MUX_MODE, SW_MUX_CTL_MUX_MODE_MASK, mode);
    }

    /// Configure the pad SION bit, forcing the input path on regardless
    /// of the selected mux mode. The mode field is untouched.
    pub fn software_input(&mut self, enabled: bool) {
        tracing::trace!("mux {:#010x}: SION {}", self.mux, enabled);
        if enabled {
            self.access.set(self.mux, SW_MUX_CTL_SION);
        } else {
            self.access.clear(self.mux, SW_MUX_CTL_SION);
        }
    }

    /// Write the pad control register.
    ///
    /// The register is overwritten wholesale: assemble the complete
    /// electrical profile first, with [`Config`](crate::Config) or from
    /// the raw field offsets in [`config`](crate::config), then write it
    /// once.
    pub fn ctl(&mut self, ctl: u32) {
        tracing::trace!("pad {:#010x}: ctl {:#010x}", self.pad, ctl);
        self.access.write(self.pad, ctl);
    }

    /// Write the pad control register from a [`Config`](crate::Config).
    pub fn configure(&mut self, config: crate::config::Config) {
        self.ctl(config.raw());
    }

    /// Configure the daisy chain register, selecting which physical pad
    /// drives this pin's peripheral input.
    ///
    /// Does nothing on pads without a daisy register, so callers may
    /// configure pads uniformly without checking for one first.
    pub fn select(&mut self, input: u32) {
        if let Some(daisy) = self.daisy {
            tracing::trace!("daisy {:#010x}: input {}", daisy, input);
            self.access.write(daisy, input);
        }
    }

    /// Returns the register accessor.
    pub fn release(self) -> R {
        self.access
    }
}
