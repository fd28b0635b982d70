use heapless::Vec;

use crate::timing::NecTiming;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

/// Drive the emitter to `level0` for `duration0` us, then to `level1` for
/// `duration1` us.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseItem {
    pub level0: Level,
    pub duration0: u16,
    pub level1: Level,
    pub duration1: u16,
}

impl PulseItem {
    /// Zero-length marker closing a frame
    pub const END_OF_FRAME: PulseItem = PulseItem::new(Level::High, 0, Level::High, 0);

    pub const fn new(level0: Level, duration0: u16, level1: Level, duration1: u16) -> Self {
        PulseItem {
            level0,
            duration0,
            level1,
            duration1,
        }
    }

    pub const fn carrier(timing: &NecTiming) -> Self {
        PulseItem::new(
            Level::High,
            timing.carrier_high_us,
            Level::Low,
            timing.carrier_low_us,
        )
    }

    /// Terminator of the lead code and of every bit burst
    pub const fn gap(duration_us: u16) -> Self {
        PulseItem::new(Level::High, duration_us, Level::Low, 0)
    }

    /// Items with a zero-length half close a segment; pulse hardware stops
    /// playback on them.
    pub const fn ends_segment(&self) -> bool {
        self.duration0 == 0 || self.duration1 == 0
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapacityError {
    pub needed: usize,
    pub capacity: usize,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Tail {
    Gap(u16),
    EndOfFrame,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Stage {
    Lead { carriers: usize },
    Burst { carriers: usize, tail: Tail },
    Done,
}

/// Lazily generated pulse timeline for one frame.
///
/// The frame is the lead code (`n` carriers and the lead gap), one burst per
/// bit (`m` carriers and a 0/1 gap) and a final burst closed by
/// [`PulseItem::END_OF_FRAME`].
pub struct Pulses<I> {
    timing: NecTiming,
    bits: I,
    stage: Stage,
    remaining: usize,
}

impl<I> Pulses<I>
where
    I: ExactSizeIterator<Item = bool>,
{
    fn new(bits: I, timing: NecTiming) -> Self {
        Pulses {
            remaining: timing.timeline_len(bits.len()),
            stage: Stage::Lead {
                carriers: timing.lead_pulses(),
            },
            timing,
            bits,
        }
    }

    fn next_burst(&mut self) -> Stage {
        let tail = match self.bits.next() {
            Some(true) => Tail::Gap(self.timing.one_us),
            Some(false) => Tail::Gap(self.timing.zero_us),
            None => Tail::EndOfFrame,
        };

        Stage::Burst {
            carriers: self.timing.burst_pulses(),
            tail,
        }
    }
}

impl<I> Iterator for Pulses<I>
where
    I: ExactSizeIterator<Item = bool>,
{
    type Item = PulseItem;

    fn next(&mut self) -> Option<PulseItem> {
        let item = match self.stage {
            Stage::Lead { carriers: 0 } => {
                self.stage = self.next_burst();
                PulseItem::gap(self.timing.lead_gap_us)
            }
            Stage::Lead { carriers } => {
                self.stage = Stage::Lead {
                    carriers: carriers - 1,
                };
                PulseItem::carrier(&self.timing)
            }
            Stage::Burst { carriers: 0, tail } => match tail {
                Tail::Gap(duration) => {
                    self.stage = self.next_burst();
                    PulseItem::gap(duration)
                }
                Tail::EndOfFrame => {
                    self.stage = Stage::Done;
                    PulseItem::END_OF_FRAME
                }
            },
            Stage::Burst { carriers, tail } => {
                self.stage = Stage::Burst {
                    carriers: carriers - 1,
                    tail,
                };
                PulseItem::carrier(&self.timing)
            }
            Stage::Done => return None,
        };

        self.remaining = self.remaining.saturating_sub(1);

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I> ExactSizeIterator for Pulses<I> where I: ExactSizeIterator<Item = bool> {}

/// Turn `bits` into the pulse timeline of one frame.
pub fn encode<B>(bits: B, timing: NecTiming) -> Pulses<B::IntoIter>
where
    B: IntoIterator<Item = bool>,
    B::IntoIter: ExactSizeIterator,
{
    Pulses::new(bits.into_iter(), timing)
}

/// Like [`encode`], collected into `out`.
///
/// `out` is cleared first. If the timeline does not fit, `out` is left empty.
pub fn encode_into<B, const CAP: usize>(
    bits: B,
    timing: NecTiming,
    out: &mut Vec<PulseItem, CAP>,
) -> Result<(), CapacityError>
where
    B: IntoIterator<Item = bool>,
    B::IntoIter: ExactSizeIterator,
{
    let pulses = encode(bits, timing);
    let error = CapacityError {
        needed: pulses.len(),
        capacity: CAP,
    };

    out.clear();

    if pulses.len() > CAP {
        return Err(error);
    }

    for item in pulses {
        out.push(item).map_err(|_| error)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMING: NecTiming = NecTiming::AC_REMOTE;
    const LEAD: usize = 347;
    const SEGMENT: usize = 22;

    fn carrier() -> PulseItem {
        PulseItem::new(Level::High, 13, Level::Low, 13)
    }

    #[test]
    fn test_lead_code() {
        let mut pulses = encode([false; 44], TIMING);

        for _ in 0..346 {
            assert_eq!(pulses.next(), Some(carrier()));
        }
        assert_eq!(pulses.next(), Some(PulseItem::new(Level::High, 4500, Level::Low, 0)));
    }

    #[test]
    fn test_lead_burst_is_truncated() {
        let burst: u32 = encode([false; 0], TIMING)
            .take(346)
            .map(|item| u32::from(item.duration0) + u32::from(item.duration1))
            .sum();

        assert_eq!(burst, 8996);
    }

    #[test]
    fn test_bit_gaps() {
        let items: std::vec::Vec<PulseItem> = encode([false, true], TIMING).collect();
        let zero = &items[LEAD..LEAD + SEGMENT];
        let one = &items[LEAD + SEGMENT..LEAD + 2 * SEGMENT];

        assert!(zero[..21].iter().all(|item| *item == carrier()));
        assert_eq!(zero[21], PulseItem::new(Level::High, 560, Level::Low, 0));
        // A 1 has the same burst, only a longer gap
        assert!(one[..21].iter().all(|item| *item == carrier()));
        assert_eq!(one[21], PulseItem::new(Level::High, 1680, Level::Low, 0));
    }

    #[test]
    fn test_end_of_frame() {
        let items: std::vec::Vec<PulseItem> = encode([true], TIMING).collect();
        let end = &items[LEAD + SEGMENT..];

        assert_eq!(end.len(), SEGMENT);
        assert!(end[..21].iter().all(|item| *item == carrier()));
        assert_eq!(end[21], PulseItem::END_OF_FRAME);
        assert_eq!(end[21].level1, Level::High);
    }

    #[test]
    fn test_length_ignores_bit_values() {
        let zeros = encode([false; 44], TIMING);
        let ones = encode([true; 44], TIMING);

        assert_eq!(zeros.len(), 1337);
        assert_eq!(ones.len(), 1337);
        assert_eq!(zeros.count(), 1337);
        assert_eq!(ones.count(), 1337);
    }

    #[test]
    fn test_exact_size_tracks_progress() {
        let mut pulses = encode([true, false, true], TIMING);
        let total = TIMING.timeline_len(3);

        assert_eq!(pulses.len(), total);
        pulses.next();
        pulses.next();
        assert_eq!(pulses.len(), total - 2);
        assert_eq!(pulses.by_ref().count(), total - 2);
        assert_eq!(pulses.next(), None);
        assert_eq!(pulses.len(), 0);
    }

    #[test]
    fn test_segments() {
        let bits = [true, false, false, true, true];
        let ends = encode(bits, TIMING).filter(PulseItem::ends_segment).count();

        assert_eq!(ends, 1 + bits.len() + 1);
    }

    /// Yields one bit while reporting none
    struct ShortCounted(Option<bool>);

    impl Iterator for ShortCounted {
        type Item = bool;

        fn next(&mut self) -> Option<bool> {
            self.0.take()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (0, Some(0))
        }
    }

    impl ExactSizeIterator for ShortCounted {}

    #[test]
    fn test_under_reported_length() {
        let mut pulses = encode(ShortCounted(Some(true)), TIMING);

        assert_eq!(pulses.len(), TIMING.timeline_len(0));
        assert_eq!(pulses.by_ref().count(), LEAD + 2 * SEGMENT);
        assert_eq!(pulses.len(), 0);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let bits = [true, true, false, true, false, false, true, false];

        assert!(encode(bits, TIMING).eq(encode(bits, TIMING)));
    }

    #[test]
    fn test_encode_into() {
        let mut out: Vec<PulseItem, 1337> = Vec::new();

        encode_into([false; 44], TIMING, &mut out).unwrap();
        assert_eq!(out.len(), 1337);
        assert_eq!(out[LEAD - 1], PulseItem::gap(4500));
        assert_eq!(out[1336], PulseItem::END_OF_FRAME);
    }

    #[test]
    fn test_encode_into_too_small() {
        let mut out: Vec<PulseItem, 400> = Vec::new();
        out.push(carrier()).unwrap();

        assert_eq!(
            encode_into([false; 44], TIMING, &mut out),
            Err(CapacityError {
                needed: 1337,
                capacity: 400
            })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_no_carrier() {
        let timing = NecTiming {
            carrier_high_us: 0,
            carrier_low_us: 0,
            ..TIMING
        };
        let items: std::vec::Vec<PulseItem> = encode([true], timing).collect();

        assert_eq!(
            items,
            [
                PulseItem::gap(4500),
                PulseItem::gap(1680),
                PulseItem::END_OF_FRAME
            ]
        );
    }
}
