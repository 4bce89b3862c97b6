mod engineer;
mod ids;
mod provider;
mod timesheet;
mod work_item;

pub use engineer::*;
pub use ids::*;
pub use provider::*;
pub use timesheet::*;
pub use work_item::*;
