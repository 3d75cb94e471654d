//! Quote accumulation - line items, totals, and money handling

pub mod line;
pub mod money;
pub mod project;
pub mod reference;
pub mod state;
pub mod totals;

pub use line::{LaborLine, LineId, MaterialLine};
pub use project::{ProjectInfo, ServiceType, SystemArea};
pub use reference::QuoteRef;
pub use state::QuoteState;
pub use totals::{BreakdownSlice, Totals};
