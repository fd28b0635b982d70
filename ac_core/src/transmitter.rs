use nec_ir::PulseItem;

pub trait IrTransmitter {
    type Error;

    /// Play `timeline` in order. Blocks until the whole timeline is queued.
    fn emit(&mut self, timeline: &[PulseItem]) -> Result<(), Self::Error>;
}

impl<T> IrTransmitter for &mut T
where
    T: IrTransmitter + ?Sized,
{
    type Error = T::Error;

    fn emit(&mut self, timeline: &[PulseItem]) -> Result<(), Self::Error> {
        (**self).emit(timeline)
    }
}
