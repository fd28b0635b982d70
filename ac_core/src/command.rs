use nec_ir::{BitWord, BitWordError, Field};

use crate::types::Action;

pub const COMMAND_BITS: usize = 44;

pub type CommandWord = BitWord<COMMAND_BITS>;

/// Word loaded at power-up
#[rustfmt::skip]
pub const BASELINE: CommandWord = BitWord::from_bits([
    0, 0, 1, 0, 1, 0, 0, 0,
    0, 1, 0, 0, 1, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    1, 0, 0, 1,
]);

/// Where the air conditioner expects each setting, and the literal codes it
/// accepts.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AcLayout {
    pub power: Field,
    pub temperature: Field,
    /// Moves opposite to `temperature` on every step
    pub mirror: Field,
    pub power_on: &'static [bool],
    pub power_off: &'static [bool],
    pub temperature_max: &'static [bool],
    pub temperature_min: &'static [bool],
}

impl AcLayout {
    pub const DEFAULT: AcLayout = AcLayout {
        power: Field::new(4, 7),
        temperature: Field::new(12, 15),
        mirror: Field::new(40, 43),
        power_on: &[true, false, false, false],
        power_off: &[false, false, false, false],
        temperature_max: &[true, false, true, true],
        temperature_min: &[false, false, false, false],
    };
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CommandState {
    word: CommandWord,
    layout: AcLayout,
}

impl Default for CommandState {
    fn default() -> Self {
        Self::init()
    }
}

impl CommandState {
    pub const fn new(word: CommandWord, layout: AcLayout) -> Self {
        CommandState { word, layout }
    }

    pub const fn init() -> Self {
        Self::new(BASELINE, AcLayout::DEFAULT)
    }

    pub fn word(&self) -> &CommandWord {
        &self.word
    }

    /// Copy of the word, safe to hand to an encoder while this state moves on
    pub fn snapshot(&self) -> CommandWord {
        self.word
    }

    pub fn layout(&self) -> &AcLayout {
        &self.layout
    }

    pub fn temperature(&self) -> Result<u32, BitWordError> {
        self.word.read(self.layout.temperature)
    }

    pub fn mirror(&self) -> Result<u32, BitWordError> {
        self.word.read(self.layout.mirror)
    }

    pub fn is_power_on(&self) -> bool {
        self.word.matches(self.layout.power, self.layout.power_on)
    }

    pub fn set_power(&mut self, on: bool) -> Result<(), BitWordError> {
        let code = if on {
            self.layout.power_on
        } else {
            self.layout.power_off
        };

        self.word.replace(self.layout.power, code)
    }

    /// One step up, unless the temperature already reads the upper limit.
    ///
    /// The temperature wraps past its top value; the mirror stops at zero.
    pub fn increase_temperature(&mut self) -> Result<(), BitWordError> {
        let layout = self.layout;

        if self.word.matches(layout.temperature, layout.temperature_max) {
            debug!("temperature at upper limit");
            return Ok(());
        }

        // Both fields change or neither does
        let mut word = self.word;
        word.add_to_field(layout.temperature.start, layout.temperature.end, 1)?;
        word.sub_from_field(layout.mirror.start, layout.mirror.end, 1)?;
        self.word = word;

        Ok(())
    }

    /// One step down, unless the temperature already reads the lower limit.
    ///
    /// The temperature stops at zero; the mirror wraps past its top value.
    pub fn decrease_temperature(&mut self) -> Result<(), BitWordError> {
        let layout = self.layout;

        if self.word.matches(layout.temperature, layout.temperature_min) {
            debug!("temperature at lower limit");
            return Ok(());
        }

        let mut word = self.word;
        word.sub_from_field(layout.temperature.start, layout.temperature.end, 1)?;
        word.add_to_field(layout.mirror.start, layout.mirror.end, 1)?;
        self.word = word;

        Ok(())
    }

    /// Run the mutator for `action`. Returns whether the word changed.
    pub fn apply(&mut self, action: Action) -> Result<bool, BitWordError> {
        let before = self.word;

        match action {
            Action::PowerOn => self.set_power(true)?,
            Action::PowerOff => self.set_power(false)?,
            Action::TempUp => self.increase_temperature()?,
            Action::TempDown => self.decrease_temperature()?,
        }

        Ok(self.word != before)
    }
}
