#![no_std]

#[cfg(test)]
extern crate std;

// Must come first so the logging macros are visible to the other modules
#[macro_use]
mod fmt;

mod bsp;
mod buttons;
mod command;
mod macros;
mod remote;
mod transmitter;
mod types;
pub mod ys_irtm;

pub use bsp::Bsp;
pub use buttons::ButtonPad;
pub use command::{AcLayout, CommandState, CommandWord, BASELINE, COMMAND_BITS};
pub use remote::{Remote, RemoteError, Timeline, AC_TIMING, TIMELINE_LEN};
pub use transmitter::IrTransmitter;
pub use types::*;

pub use nec_ir;

use embassy_executor::Spawner;
use embassy_time::Timer;
use embedded_hal::digital::InputPin;

/// Button scan period
pub const POLL_PERIOD_MS: u64 = 100;

/// Resend period when running without buttons
pub const BEACON_PERIOD_MS: u64 = 2000;

pub struct Core<TX, PIN>
where
    TX: IrTransmitter,
    PIN: InputPin,
{
    pub bsp: Bsp<TX, PIN>,
    pub spawner: Spawner,
}

impl<TX, PIN> Core<TX, PIN>
where
    TX: IrTransmitter,
    PIN: InputPin,
{
    pub fn new(spawner: Spawner, bsp: Bsp<TX, PIN>) -> Self {
        Core { bsp, spawner }
    }

    pub async fn input_task(mut buttons: ButtonPad<PIN>, out_channel: ActionSender) -> ! {
        loop {
            for action in buttons.poll() {
                out_channel.send(action).await;
            }

            Timer::after_millis(POLL_PERIOD_MS).await;
        }
    }

    pub async fn remote_task(mut remote: Remote<TX>, in_channel: ActionReceiver) -> ! {
        info!("remote ready, command {:#x}", remote.state().word().to_u64());

        loop {
            let action = in_channel.receive().await;

            match remote.handle(action) {
                Ok(()) => {}
                Err(RemoteError::Timeline(e)) => {
                    error!("frame needs {} items, buffer holds {}", e.needed, e.capacity)
                }
                Err(RemoteError::Transmit(_)) => error!("transmission of {:?} failed", action),
            }
        }
    }
}
