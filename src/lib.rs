//! # VCNL4040 Driver
//!
//! This is a driver for the Vishay VCNL4040 combined ambient light and
//! proximity sensor.
//!
//! Specifically, this driver reads the raw measurement registers of the
//! VCNL4040 over I²C - it does not cover interrupt thresholds, LED current
//! or integration-time configuration, and it applies no scaling: consumers
//! get the 16-bit register contents back as a plain integer.
//!
//! The VCNL4040 exposes two measurement channels:
//!
//! * Ambient light level, from the ALS output register (`0x09`)
//! * Proximity, from the PS output register (`0x08`)
//!
//! The device answers on a single fixed 7-bit bus address, `0x60`. Each call
//! to [`Vcnl4040::read_raw`] issues one fresh register-read transaction; the
//! driver caches nothing, retries nothing, and reports every bus failure to
//! the caller unchanged.
//!
//! The driver does not read a product or revision identifier before use - it
//! trusts that whatever answers at `0x60` is a VCNL4040. Callers that need
//! device identity must check it themselves.
//!
//! A [`Vcnl4040`] owns its bus handle and reads take `&mut self`, so there is
//! at most one in-flight transaction per sensor. To share one sensor between
//! threads, wrap it in a mutex held for the duration of each read.
//!
//! # Example
//!
//! ```rust
//! use vcnl4040::{ChannelKind, Vcnl4040};
//! # use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
//! # let i2c = Mock::new(&[
//! #     Transaction::write_read(0x60, vec![0x08], vec![0x41, 0x00]),
//! #     Transaction::write_read(0x60, vec![0x09], vec![0x00, 0x02]),
//! # ]);
//! let mut sensor = Vcnl4040::new(i2c);
//! let proximity = sensor.read_raw(ChannelKind::Proximity)?;
//! let light = sensor.read_raw(ChannelKind::Light)?;
//! # assert_eq!(proximity, 65);
//! # assert_eq!(light, 512);
//! # sensor.release().done();
//! # Ok::<(), vcnl4040::Error<embedded_hal::i2c::ErrorKind>>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![deny(missing_docs)]

//
// Public Types
//

/// The measurement channels the VCNL4040 offers.
///
/// This set is closed: the hardware has exactly one ambient light output and
/// one proximity output, and every kind here is handled exhaustively in the
/// read path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChannelKind {
    /// Ambient light level
    Light,
    /// Proximity
    Proximity,
}

/// Describes one measurement channel: what it measures and which output
/// register backs it.
///
/// The full set of channels is [`CHANNELS`]; hand that to whatever framework
/// registers the sensor's channels with consumers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Channel {
    /// What this channel measures
    pub kind: ChannelKind,
    /// The output register read for a sample on this channel
    pub register: u8,
}

/// Errors returned by this driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error<E> {
    /// The underlying I²C transaction failed.
    ///
    /// Carries the bus error unchanged, so callers can still tell a no-ACK
    /// from a timeout if their bus implementation distinguishes them.
    Bus(E),
}

/// Represents one attached VCNL4040.
///
/// Owns the I²C bus handle for as long as the sensor is attached. Call
/// [`Vcnl4040::release`] on detach to get the handle back.
pub struct Vcnl4040<B> {
    bus: B,
}

//
// Private Types
//

/// The output registers this driver reads.
#[derive(Copy, Clone, Debug)]
enum Register {
    ProximityOutput = 0x08,
    AmbientLightOutput = 0x09,
}

//
// Public Data
//

/// The fixed 7-bit I²C address of the VCNL4040.
pub const BUS_ADDRESS: u8 = 0x60;

/// The channels this sensor supports, in registration order.
pub const CHANNELS: [Channel; 2] = [
    Channel {
        kind: ChannelKind::Light,
        register: ChannelKind::Light.register() as u8,
    },
    Channel {
        kind: ChannelKind::Proximity,
        register: ChannelKind::Proximity.register() as u8,
    },
];

//
// impls on Public Types
//

impl ChannelKind {
    /// The output register backing this channel.
    const fn register(self) -> Register {
        match self {
            ChannelKind::Light => Register::AmbientLightOutput,
            ChannelKind::Proximity => Register::ProximityOutput,
        }
    }
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Error<E> {
        Error::Bus(e)
    }
}

impl<B> Vcnl4040<B> {
    /// Create a new VCNL4040 proxy object around an open bus handle.
    ///
    /// No transaction is issued here: the device is not probed and no
    /// product/revision identifier is checked. Callers that need to verify
    /// device identity must do so themselves before trusting samples.
    pub fn new(bus: B) -> Vcnl4040<B> {
        Vcnl4040 { bus }
    }

    /// Release the sensor, handing the bus handle back to the caller.
    ///
    /// The driver holds no other resources, so this is the whole detach
    /// path.
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B> Vcnl4040<B>
where
    B: embedded_hal::i2c::I2c,
{
    /// Take one raw sample from the given channel.
    ///
    /// Issues a single register-read transaction and returns the 16-bit
    /// register contents zero-extended to `i32` - no scale, no unit. Two
    /// consecutive calls issue two independent transactions and may return
    /// different values.
    pub fn read_raw(&mut self, kind: ChannelKind) -> Result<i32, Error<B::Error>> {
        let word = self.read_register(kind.register())?;
        Ok(i32::from(word))
    }

    /// Read one 16-bit register: register address written, then two data
    /// bytes read back, low byte first.
    fn read_register(&mut self, register: Register) -> Result<u16, Error<B::Error>> {
        let mut buffer = [0u8; 2];
        self.bus
            .write_read(BUS_ADDRESS, &[register as u8], &mut buffer)?;
        let word = u16::from_le_bytes(buffer);
        #[cfg(feature = "defmt")]
        defmt::debug!("VCNL4040 0x{:02x} read 0x{:04x}", register as u8, word);
        Ok(word)
    }
}

//
// impls on Private Types
//

// None

//
// Tests
//


//
// End of file
//
