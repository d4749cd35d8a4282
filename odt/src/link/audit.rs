use odt_core::{
    geometry::Voltage2,
    link::{ImageSource, LinkError, TriggerSink, VoltageSink},
};

/// A link that records every command it receives.
///
/// Used in tests and diagnostics to observe the exact voltage sequence,
/// trigger cadence and frame requests a controller produces; it can be broken
/// to inject link failures.
#[derive(Default)]
pub struct Audit {
    is_open: bool,
    broken: bool,
    voltages: Vec<Voltage2>,
    triggers: usize,
    frames_read: usize,
    frame: Vec<u8>,
}

impl Audit {
    /// Creates a new [`Audit`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent command fail with a [`LinkError`].
    pub fn break_down(&mut self) {
        self.broken = true;
    }

    /// Undoes [`Audit::break_down`].
    pub fn repair(&mut self) {
        self.broken = false;
    }

    /// The recorded voltage commands, in emission order.
    #[must_use]
    pub fn voltages(&self) -> &[Voltage2] {
        &self.voltages
    }

    /// The number of camera triggers fired.
    #[must_use]
    pub fn triggers(&self) -> usize {
        self.triggers
    }

    /// The number of frames read back.
    #[must_use]
    pub fn frames_read(&self) -> usize {
        self.frames_read
    }

    /// Sets the pixel buffer returned by every frame read.
    pub fn set_frame(&mut self, frame: Vec<u8>) {
        self.frame = frame;
    }
}

impl VoltageSink for Audit {
    fn open(&mut self) -> Result<(), LinkError> {
        if self.broken {
            return Err(LinkError::new("broken"));
        }
        self.is_open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.is_open = false;
        Ok(())
    }

    fn apply_voltage(&mut self, voltage: Voltage2) -> Result<(), LinkError> {
        if self.broken {
            return Err(LinkError::new("broken"));
        }
        if !self.is_open {
            return Err(LinkError::closed());
        }
        self.voltages.push(voltage);
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}

impl TriggerSink for Audit {
    fn trigger_camera(&mut self) -> Result<(), LinkError> {
        if self.broken {
            return Err(LinkError::new("broken"));
        }
        self.triggers += 1;
        Ok(())
    }
}

impl ImageSource for Audit {
    fn read_frame(&mut self) -> Result<Vec<u8>, LinkError> {
        if self.broken {
            return Err(LinkError::new("broken"));
        }
        self.frames_read += 1;
        Ok(self.frame.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands() {
        let mut audit = Audit::new();
        audit.open().unwrap();
        audit.apply_voltage(Voltage2::new(1.0, -1.0)).unwrap();
        audit.trigger_camera().unwrap();
        audit.set_frame(vec![0xAB; 4]);
        assert_eq!(vec![0xAB; 4], audit.read_frame().unwrap());
        assert_eq!(&[Voltage2::new(1.0, -1.0)], audit.voltages());
        assert_eq!(1, audit.triggers());
        assert_eq!(1, audit.frames_read());
    }

    #[test]
    fn closed_link_rejects_commands() {
        let mut audit = Audit::new();
        assert_eq!(
            Err(LinkError::closed()),
            audit.apply_voltage(Voltage2::ZERO)
        );
    }

    #[test]
    fn break_down_and_repair() {
        let mut audit = Audit::new();
        audit.open().unwrap();
        audit.break_down();
        assert_eq!(
            Err(LinkError::new("broken")),
            audit.apply_voltage(Voltage2::ZERO)
        );
        audit.repair();
        assert!(audit.apply_voltage(Voltage2::ZERO).is_ok());
    }
}
