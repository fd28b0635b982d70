use ac_core::nec_ir::{self, PulseItem};
use ac_core::{IrTransmitter, AC_TIMING};
use defmt::{error, trace};
use esp_hal::gpio::Level;
use esp_hal::rmt::{Error as RmtError, PulseCode, TxChannel};
use heapless::Vec;

/// Longest run of items without a zero-length half (the lead code)
const SEGMENT_CAPACITY: usize = AC_TIMING.max_segment_len();

#[derive(Debug, defmt::Format)]
pub enum Error {
    Rmt(RmtError),
    /// A previous transaction failed without giving the channel back
    ChannelLost,
    SegmentTooLong,
}

/// Plays encoded frames on an RMT channel clocked at 1 MHz.
///
/// The RMT stops at the first zero-length half, so the frame is sent one
/// segment at a time.
pub struct RmtTransmitter<TX>
where
    TX: TxChannel,
{
    channel: Option<TX>,
    segment: Vec<u32, SEGMENT_CAPACITY>,
}

impl<TX> RmtTransmitter<TX>
where
    TX: TxChannel,
{
    pub fn new(channel: TX) -> Self {
        RmtTransmitter {
            channel: Some(channel),
            segment: Vec::new(),
        }
    }

    fn level(level: nec_ir::Level) -> Level {
        match level {
            nec_ir::Level::Low => Level::Low,
            nec_ir::Level::High => Level::High,
        }
    }

    fn pulse_code(item: &PulseItem) -> u32 {
        PulseCode::new(
            Self::level(item.level0),
            item.duration0,
            Self::level(item.level1),
            item.duration1,
        )
    }

    fn transmit_segment(&mut self) -> Result<(), Error> {
        let channel = self.channel.take().ok_or(Error::ChannelLost)?;

        let transaction = channel
            .transmit(self.segment.as_slice())
            .map_err(Error::Rmt)?;

        match transaction.wait() {
            Ok(channel) => {
                self.channel = Some(channel);
                Ok(())
            }
            Err((e, channel)) => {
                self.channel = Some(channel);
                Err(Error::Rmt(e))
            }
        }
    }
}

impl<TX> IrTransmitter for RmtTransmitter<TX>
where
    TX: TxChannel,
{
    type Error = Error;

    fn emit(&mut self, timeline: &[PulseItem]) -> Result<(), Error> {
        for segment in timeline.split_inclusive(PulseItem::ends_segment) {
            self.segment.clear();

            for item in segment {
                self.segment
                    .push(Self::pulse_code(item))
                    .map_err(|_| Error::SegmentTooLong)?;
            }

            trace!("rmt segment of {} items", self.segment.len());

            self.transmit_segment().inspect_err(|e| error!("rmt: {}", e))?;
        }

        Ok(())
    }
}
