use odt_core::{
    geometry::Voltage2,
    link::{ImageSource, LinkError, TriggerSink, VoltageSink},
};

/// A link that does nothing.
///
/// This link is mainly used for explanation.
#[derive(Default)]
pub struct Nop {
    is_open: bool,
}

impl Nop {
    /// Creates a new [`Nop`].
    #[must_use]
    pub const fn new() -> Self {
        Self { is_open: false }
    }
}

impl VoltageSink for Nop {
    fn open(&mut self) -> Result<(), LinkError> {
        self.is_open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.is_open = false;
        Ok(())
    }

    fn apply_voltage(&mut self, _voltage: Voltage2) -> Result<(), LinkError> {
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}

impl TriggerSink for Nop {
    fn trigger_camera(&mut self) -> Result<(), LinkError> {
        Ok(())
    }
}

impl ImageSource for Nop {
    fn read_frame(&mut self) -> Result<Vec<u8>, LinkError> {
        Ok(Vec::new())
    }
}
