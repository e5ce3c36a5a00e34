//! Pad control register values
//!
//! The pad control register (`IOMUXC_SW_PAD_CTL_PAD_*`) holds one pin's
//! complete electrical profile, and [`Pad::ctl`](crate::Pad::ctl) writes
//! it wholesale. [`Config`] assembles that value from typed fields; the
//! raw field offsets are also exported for values taken straight from the
//! datasheet. All the builders are `const fn`, so a board support crate
//! can keep its pad profiles in constants:
//!
//! ```
//! use imx6_iomuxc::config::{
//!     Config, DriveStrength, Hysteresis, PullKeep, PullKeepSelect, PullUpDown, Speed,
//! };
//!
//! const UART: Config = Config::zero()
//!     .set_hysteresis(Hysteresis::Enabled)
//!     .set_pull(PullUpDown::Up100k)
//!     .set_pull_keep_select(PullKeepSelect::Pull)
//!     .set_pull_keep(PullKeep::Enabled)
//!     .set_speed(Speed::MHz100)
//!     .set_drive_strength(DriveStrength::R0_6);
//! assert_eq!(UART.raw(), 0x0001_b0b0);
//! ```

/// Hysteresis (HYS) field offset.
pub const HYS: u32 = 16;
/// Pull up/down configuration (PUS) field offset.
pub const PUS: u32 = 14;
/// Pull/keep select (PUE) field offset.
pub const PUE: u32 = 13;
/// Pull/keep enable (PKE) field offset.
pub const PKE: u32 = 12;
/// Open drain enable (ODE) field offset.
pub const ODE: u32 = 11;
/// Output speed (SPEED) field offset.
pub const SPEED: u32 = 6;
/// Drive strength (DSE) field offset.
pub const DSE: u32 = 3;
/// Slew rate (SRE) field offset.
pub const SRE: u32 = 0;

/// Input hysteresis on the Schmitt trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Hysteresis {
    Disabled = 0,
    Enabled = 1,
}

/// Pull up/down resistor selection.
///
/// Takes effect when the pull/keeper block is enabled and switched to
/// pull; see [`PullKeep`] and [`PullKeepSelect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum PullUpDown {
    /// 100KOhm pull down
    Down100k = 0b00,
    /// 47KOhm pull up
    Up47k = 0b01,
    /// 100KOhm pull up
    Up100k = 0b10,
    /// 22KOhm pull up
    Up22k = 0b11,
}

/// Chooses between the keeper and the pull resistor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum PullKeepSelect {
    /// Keep the previous output value when the driver is disabled
    Keeper = 0,
    /// Pull towards the [`PullUpDown`] selection
    Pull = 1,
}

/// Enables the pull/keeper block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum PullKeep {
    Disabled = 0,
    Enabled = 1,
}

/// Open drain output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum OpenDrain {
    Disabled = 0,
    Enabled = 1,
}

/// Output driver speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Speed {
    MHz50 = 0b00,
    MHz100 = 0b10,
    MHz200 = 0b11,
}

/// Drive strength (DSE).
///
/// The variants express the output impedance as a fraction of R0,
/// nominally 260 Ohm at 3.3V.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
#[repr(u32)]
pub enum DriveStrength {
    /// Output driver disabled
    Disabled = 0b000,
    R0_2 = 0b010,
    R0_3 = 0b011,
    R0_4 = 0b100,
    R0_5 = 0b101,
    R0_6 = 0b110,
    R0_7 = 0b111,
}

/// Output slew rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum SlewRate {
    Slow = 0,
    Fast = 1,
}

/// A complete pad control register value.
///
/// Start from [`zero`](Config::zero), set the fields the pin needs, and
/// pass the result to [`Pad::configure`](crate::Pad::configure) or its
/// [`raw`](Config::raw) value to [`Pad::ctl`](crate::Pad::ctl).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config(u32);

impl Config {
    /// A configuration with every field zeroed.
    pub const fn zero() -> Self {
        Config(0)
    }

    /// The raw register value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    const fn field(self, offset: u32, mask: u32, value: u32) -> Self {
        Config((self.0 & !(mask << offset)) | ((value & mask) << offset))
    }

    pub const fn set_hysteresis(self, hys: Hysteresis) -> Self {
        self.field(HYS, 0b1, hys as u32)
    }

    pub const fn set_pull(self, pull: PullUpDown) -> Self {
        self.field(PUS, 0b11, pull as u32)
    }

    pub const fn set_pull_keep_select(self, select: PullKeepSelect) -> Self {
        self.field(PUE, 0b1, select as u32)
    }

    pub const fn set_pull_keep(self, enable: PullKeep) -> Self {
        self.field(PKE, 0b1, enable as u32)
    }

    pub const fn set_open_drain(self, od: OpenDrain) -> Self {
        self.field(ODE, 0b1, od as u32)
    }

    pub const fn set_speed(self, speed: Speed) -> Self {
        self.field(SPEED, 0b11, speed as u32)
    }

    pub const fn set_drive_strength(self, dse: DriveStrength) -> Self {
        self.field(DSE, 0b111, dse as u32)
    }

    pub const fn set_slew_rate(self, sre: SlewRate) -> Self {
        self.field(SRE, 0b1, sre as u32)
    }
}

impl From<Config> for u32 {
    fn from(config: Config) -> u32 {
        config.raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_land_at_their_documented_offsets() {
        assert_eq!(Config::zero().raw(), 0);
        assert_eq!(
            Config::zero().set_hysteresis(Hysteresis::Enabled).raw(),
            1 << 16
        );
        assert_eq!(Config::zero().set_pull(PullUpDown::Up22k).raw(), 0b11 << 14);
        assert_eq!(
            Config::zero()
                .set_pull_keep_select(PullKeepSelect::Pull)
                .raw(),
            1 << 13
        );
        assert_eq!(Config::zero().set_pull_keep(PullKeep::Enabled).raw(), 1 << 12);
        assert_eq!(Config::zero().set_open_drain(OpenDrain::Enabled).raw(), 1 << 11);
        assert_eq!(Config::zero().set_speed(Speed::MHz200).raw(), 0b11 << 6);
        assert_eq!(
            Config::zero().set_drive_strength(DriveStrength::R0_7).raw(),
            0b111 << 3
        );
        assert_eq!(Config::zero().set_slew_rate(SlewRate::Fast).raw(), 1);
    }

    #[test]
    fn setters_preserve_unrelated_fields() {
        let config = Config::zero()
            .set_hysteresis(Hysteresis::Enabled)
            .set_pull(PullUpDown::Up100k)
            .set_pull_keep_select(PullKeepSelect::Pull)
            .set_pull_keep(PullKeep::Enabled)
            .set_speed(Speed::MHz100)
            .set_drive_strength(DriveStrength::R0_6)
            .set_slew_rate(SlewRate::Slow);
        assert_eq!(config.raw(), 0x0001_b0b0);

        // rewriting one field leaves the rest alone
        assert_eq!(config.set_pull(PullUpDown::Down100k).raw(), 0x0001_30b0);
    }
}
