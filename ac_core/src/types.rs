use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

pub const ACTION_CHANNEL_SIZE: usize = 8;

pub type ActionChannel = Channel<CriticalSectionRawMutex, Action, ACTION_CHANNEL_SIZE>;
pub type ActionSender = Sender<'static, CriticalSectionRawMutex, Action, ACTION_CHANNEL_SIZE>;
pub type ActionReceiver = Receiver<'static, CriticalSectionRawMutex, Action, ACTION_CHANNEL_SIZE>;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    PowerOn,
    PowerOff,
    TempUp,
    TempDown,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::PowerOn,
        Action::PowerOff,
        Action::TempUp,
        Action::TempDown,
    ];
}
