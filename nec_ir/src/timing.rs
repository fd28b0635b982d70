/// NEC-style timing profile, all durations in microseconds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NecTiming {
    pub carrier_high_us: u16,
    pub carrier_low_us: u16,
    pub lead_us: u16,
    /// High period that follows the lead burst
    pub lead_gap_us: u16,
    /// Burst length of every bit, and the gap after a 0
    pub zero_us: u16,
    pub one_us: u16,
}

impl NecTiming {
    /// 38 kHz carrier, 9 ms lead, 4.5 ms lead gap, 560/1680 us bit gaps
    pub const AC_REMOTE: NecTiming = NecTiming {
        carrier_high_us: 13,
        carrier_low_us: 13,
        lead_us: 9000,
        lead_gap_us: 4500,
        zero_us: 560,
        one_us: 1680,
    };

    pub const fn carrier_period(&self) -> u32 {
        self.carrier_high_us as u32 + self.carrier_low_us as u32
    }

    // Truncating: the burst lasts `count * period`, never longer than asked.
    const fn carriers_in(&self, duration_us: u16) -> usize {
        let period = self.carrier_period();

        if period == 0 {
            0
        } else {
            (duration_us as u32 / period) as usize
        }
    }

    pub const fn lead_pulses(&self) -> usize {
        self.carriers_in(self.lead_us)
    }

    /// Carrier sub-pulses in every bit burst and in the end-of-frame burst.
    /// Always derived from the zero-bit duration.
    pub const fn burst_pulses(&self) -> usize {
        self.carriers_in(self.zero_us)
    }

    /// Number of [`PulseItem`](crate::PulseItem)s in a frame of `num_bits` bits
    pub const fn timeline_len(&self, num_bits: usize) -> usize {
        let segment = self.burst_pulses() + 1;

        (self.lead_pulses() + 1) + num_bits * segment + segment
    }

    /// Longest run of items up to and including a segment terminator
    pub const fn max_segment_len(&self) -> usize {
        let lead = self.lead_pulses() + 1;
        let burst = self.burst_pulses() + 1;

        if lead > burst {
            lead
        } else {
            burst
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ac_remote_counts() {
        let timing = NecTiming::AC_REMOTE;

        assert_eq!(timing.carrier_period(), 26);
        assert_eq!(timing.lead_pulses(), 346);
        assert_eq!(timing.burst_pulses(), 21);
        assert_eq!(timing.timeline_len(44), 347 + 44 * 22 + 22);
        assert_eq!(timing.max_segment_len(), 347);
    }

    #[test]
    fn test_zero_carrier_period() {
        let timing = NecTiming {
            carrier_high_us: 0,
            carrier_low_us: 0,
            ..NecTiming::AC_REMOTE
        };

        assert_eq!(timing.lead_pulses(), 0);
        assert_eq!(timing.burst_pulses(), 0);
        assert_eq!(timing.timeline_len(4), 1 + 4 + 1);
    }
}
