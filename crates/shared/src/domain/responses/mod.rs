mod api;
mod customer;
mod file;
mod pagination;
mod payment;
mod product;
mod transaction;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::customer::CustomerResponse;
pub use self::file::{FileChunkResponse, FileResponse};
pub use self::pagination::Pagination;
pub use self::payment::{AlipayCreateResponse, PaymentStatusResponse};
pub use self::product::ProductResponse;
pub use self::transaction::TransactionResponse;
