mod model;
mod repository;

pub use model::{HoldingDB, NewHoldingDB};
pub use repository::HoldingRepository;
pub(crate) use repository::find_by_symbol;
