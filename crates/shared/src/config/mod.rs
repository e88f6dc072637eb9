mod alipay;
mod database;
mod myconfig;

pub use self::alipay::AlipayConfig;
pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::myconfig::Config;
