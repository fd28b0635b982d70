use embedded_hal::digital::InputPin;
use heapless::Vec;

use crate::types::Action;

/// Four active-low buttons, one per [`Action`].
pub struct ButtonPad<PIN>
where
    PIN: InputPin,
{
    buttons: [(Action, PIN); 4],
    held: [bool; 4],
}

impl<PIN> ButtonPad<PIN>
where
    PIN: InputPin,
{
    pub fn new(power_on: PIN, power_off: PIN, temp_up: PIN, temp_down: PIN) -> Self {
        ButtonPad {
            buttons: [
                (Action::PowerOn, power_on),
                (Action::PowerOff, power_off),
                (Action::TempUp, temp_up),
                (Action::TempDown, temp_down),
            ],
            held: [false; 4],
        }
    }

    /// Actions whose button went down since the previous poll. A button that
    /// stays down is reported once.
    pub fn poll(&mut self) -> Vec<Action, 4> {
        let mut pressed = Vec::new();

        for ((action, pin), held) in self.buttons.iter_mut().zip(self.held.iter_mut()) {
            let down = match pin.is_low() {
                Ok(down) => down,
                Err(_) => {
                    warn!("failed to read button {:?}", action);
                    false
                }
            };

            if down && !*held {
                // One slot per button
                let _ = pressed.push(*action);
            }

            *held = down;
        }

        pressed
    }
}
