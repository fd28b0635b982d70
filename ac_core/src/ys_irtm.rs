//! Driver for the YS-IRTM serial infrared module.
//!
//! The module builds the NEC frame itself; the host only writes a five byte
//! request `[address, 0xF1, user code high, user code low, command]` over a
//! 9600 baud UART.

use embedded_io_async::Write;

pub const DEFAULT_ADDRESS: u8 = 0xA1;

pub const BAUDRATE: u32 = 9600;

const OP_TRANSMIT: u8 = 0xF1;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NecCode {
    pub user_hi: u8,
    pub user_lo: u8,
    pub command: u8,
}

impl NecCode {
    pub const AC_POWER_ON: NecCode = NecCode {
        user_hi: 0xC8,
        user_lo: 0xF5,
        command: 0x00,
    };
}

pub struct YsIrtm<W>
where
    W: Write,
{
    serial: W,
    address: u8,
}

impl<W> YsIrtm<W>
where
    W: Write,
{
    pub fn new(serial: W) -> Self {
        Self::with_address(serial, DEFAULT_ADDRESS)
    }

    pub fn with_address(serial: W, address: u8) -> Self {
        YsIrtm { serial, address }
    }

    pub fn frame(&self, code: NecCode) -> [u8; 5] {
        [
            self.address,
            OP_TRANSMIT,
            code.user_hi,
            code.user_lo,
            code.command,
        ]
    }

    /// Ask the module to transmit `code` once.
    pub async fn send(&mut self, code: NecCode) -> Result<(), W::Error> {
        let frame = self.frame(code);

        trace!("irtm frame {:?}", frame);

        self.serial.write_all(&frame).await?;
        self.serial.flush().await
    }

    pub fn release(self) -> W {
        self.serial
    }
}
