pub mod alipay;
pub mod sandbox;
