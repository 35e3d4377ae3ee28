mod dimension;
mod metric_datum;
mod put_metric_data;
mod sanitize;
mod statistic_set;
mod unit;

pub use dimension::*;
pub use metric_datum::*;
pub use put_metric_data::*;
pub(crate) use sanitize::*;
pub use statistic_set::*;
pub use unit::*;
