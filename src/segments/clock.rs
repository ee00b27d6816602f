use crate::host::Host;

pub struct ClockSegment {
    pub date_format: String,
}

impl ClockSegment {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    pub fn get_time(&self, host: &impl Host) -> String {
        host.strftime(&self.date_format)
    }
}
