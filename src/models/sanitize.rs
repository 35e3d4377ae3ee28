use crate::models::{filter_invalid_unit, MetricDatum};

pub(crate) trait Sanitize {
    fn sanitize(&mut self);
}

impl Sanitize for MetricDatum {
    fn sanitize(&mut self) {
        let unit = self.unit.take();
        self.unit = filter_invalid_unit(unit.clone());
        if self.unit.is_none() {
            if let Some(unit) = unit {
                crate::debug!(
                    "Cleared invalid unit {:?} of metric {}",
                    unit,
                    self.metric_name
                );
            }
        }
    }
}
