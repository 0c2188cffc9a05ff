pub mod scenario;
pub mod util;

pub use util::{artifacts_dir, capture_artifacts, parse_price_label, split_csv};
