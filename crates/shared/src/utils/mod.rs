mod filters;
mod gracefull;
mod logs;
mod mark;
mod order_no;
mod parse_datetime;

pub use self::filters::{non_empty, non_zero};
pub use self::gracefull::shutdown_signal;
pub use self::logs::init_logger;
pub use self::mark::mask_phone;
pub use self::order_no::generate_order_id;
pub use self::parse_datetime::format_datetime;
