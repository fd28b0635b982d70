use heapless::Vec;
use nec_ir::{encode_into, CapacityError, NecTiming, PulseItem};

use crate::command::{CommandState, COMMAND_BITS};
use crate::transmitter::IrTransmitter;
use crate::types::Action;

pub const AC_TIMING: NecTiming = NecTiming::AC_REMOTE;

pub const TIMELINE_LEN: usize = AC_TIMING.timeline_len(COMMAND_BITS);

pub type Timeline = Vec<PulseItem, TIMELINE_LEN>;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RemoteError<E> {
    /// The frame does not fit the timeline buffer
    Timeline(CapacityError),
    Transmit(E),
}

/// Owns the command state and the transmitter. Every action is applied,
/// encoded and sent before the next one is looked at.
pub struct Remote<TX>
where
    TX: IrTransmitter,
{
    state: CommandState,
    transmitter: TX,
    timing: NecTiming,
    timeline: Timeline,
}

impl<TX> Remote<TX>
where
    TX: IrTransmitter,
{
    pub fn new(state: CommandState, transmitter: TX) -> Self {
        Remote {
            state,
            transmitter,
            timing: AC_TIMING,
            timeline: Vec::new(),
        }
    }

    pub fn state(&self) -> &CommandState {
        &self.state
    }

    pub fn transmitter(&self) -> &TX {
        &self.transmitter
    }

    /// Apply `action` and transmit the resulting word.
    ///
    /// A rejected mutation leaves the state as it was; the unchanged word is
    /// still sent.
    pub fn handle(&mut self, action: Action) -> Result<(), RemoteError<TX::Error>> {
        info!("action {:?}", action);

        match self.state.apply(action) {
            Ok(true) => {}
            Ok(false) => debug!("{:?} left the command unchanged", action),
            Err(e) => warn!("{:?} rejected: {:?}", action, e),
        }

        self.send()
    }

    pub fn send(&mut self) -> Result<(), RemoteError<TX::Error>> {
        let word = self.state.snapshot();

        debug!("sending {:#x}", word.to_u64());

        encode_into(&word, self.timing, &mut self.timeline).map_err(RemoteError::Timeline)?;

        self.transmitter
            .emit(&self.timeline)
            .map_err(RemoteError::Transmit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::command::BASELINE;
    use nec_ir::{encode, Level};
    use std::vec::Vec as StdVec;

    #[derive(Default)]
    struct Recorder {
        frames: StdVec<StdVec<PulseItem>>,
        fail: bool,
    }

    impl IrTransmitter for Recorder {
        type Error = ();

        fn emit(&mut self, timeline: &[PulseItem]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.frames.push(timeline.to_vec());

            Ok(())
        }
    }

    /// Rebuild the bits from the gap that closes each bit burst
    fn decode(frame: &[PulseItem]) -> StdVec<bool> {
        frame
            .iter()
            .filter(|item| item.ends_segment())
            .skip(1)
            .filter(|item| item.level1 == Level::Low)
            .map(|item| item.duration0 == AC_TIMING.one_us)
            .collect()
    }

    #[test]
    fn test_timeline_len() {
        assert_eq!(TIMELINE_LEN, 1337);
    }

    #[test]
    fn test_power_on_from_baseline() {
        let mut remote = Remote::new(CommandState::init(), Recorder::default());

        remote.handle(Action::PowerOn).unwrap();

        let frame = &remote.transmitter().frames[0];
        assert_eq!(frame.len(), TIMELINE_LEN);
        assert!(frame[..346]
            .iter()
            .all(|item| *item == PulseItem::carrier(&AC_TIMING)));
        assert_eq!(frame[346], PulseItem::gap(4500));
        assert_eq!(decode(frame), BASELINE.bits());
    }

    #[test]
    fn test_power_off_frame() {
        let mut remote = Remote::new(CommandState::init(), Recorder::default());

        remote.handle(Action::PowerOff).unwrap();

        let bits = decode(&remote.transmitter().frames[0]);
        assert_eq!(&bits[4..8], &[false; 4]);
        assert_eq!(&bits[..4], &BASELINE.bits()[..4]);
        assert_eq!(&bits[8..], &BASELINE.bits()[8..]);
    }

    #[test]
    fn test_frame_matches_encoder() {
        let mut remote = Remote::new(CommandState::init(), Recorder::default());

        remote.handle(Action::TempDown).unwrap();

        let expected: StdVec<PulseItem> = encode(remote.state().word(), AC_TIMING).collect();
        assert_eq!(remote.transmitter().frames[0], expected);
    }

    #[test]
    fn test_every_action_transmits() {
        let mut remote = Remote::new(CommandState::init(), Recorder::default());

        for action in Action::ALL {
            remote.handle(action).unwrap();
        }

        assert_eq!(remote.transmitter().frames.len(), 4);
    }

    #[test]
    fn test_limit_still_transmits() {
        let mut word = BASELINE;
        word.write_field(12, 15, 0).unwrap();
        let mut remote = Remote::new(
            CommandState::new(word, crate::AcLayout::DEFAULT),
            Recorder::default(),
        );

        remote.handle(Action::TempDown).unwrap();

        assert_eq!(*remote.state().word(), word);
        assert_eq!(decode(&remote.transmitter().frames[0]), word.bits());
    }

    #[test]
    fn test_send_repeats_current_word() {
        let mut remote = Remote::new(CommandState::init(), Recorder::default());

        remote.send().unwrap();
        remote.send().unwrap();

        let frames = &remote.transmitter().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], frames[1]);
        assert_eq!(decode(&frames[0]), BASELINE.bits());
        assert_eq!(*remote.state().word(), BASELINE);
    }

    #[test]
    fn test_transmit_error() {
        let mut recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let mut remote = Remote::new(CommandState::init(), &mut recorder);

        assert_eq!(remote.handle(Action::TempUp), Err(RemoteError::Transmit(())));
        // The state still moved
        assert_eq!(remote.state().temperature(), Ok(9));
    }
}
