use embedded_hal::digital::InputPin;

use crate::buttons::ButtonPad;
use crate::transmitter::IrTransmitter;

pub struct Bsp<TX, PIN>
where
    TX: IrTransmitter,
    PIN: InputPin,
{
    pub transmitter: TX,
    pub buttons: ButtonPad<PIN>,
}

impl<TX, PIN> Bsp<TX, PIN>
where
    TX: IrTransmitter,
    PIN: InputPin,
{
    pub fn new(transmitter: TX, buttons: ButtonPad<PIN>) -> Self {
        Bsp {
            transmitter,
            buttons,
        }
    }

    pub fn new_with_pins(transmitter: TX, pins: [PIN; 4]) -> Self {
        let [power_on, power_off, temp_up, temp_down] = pins;

        Bsp::new(
            transmitter,
            ButtonPad::new(power_on, power_off, temp_up, temp_down),
        )
    }

    pub fn split(self) -> (TX, ButtonPad<PIN>) {
        (self.transmitter, self.buttons)
    }
}
