use anyhow::{Context, Result};
use shared::{
    abstract_trait::{
        customer::{
            repository::{
                command::DynCustomerCommandRepository, query::DynCustomerQueryRepository,
            },
            service::{command::DynCustomerCommandService, query::DynCustomerQueryService},
        },
        file::{
            repository::{command::DynFileCommandRepository, query::DynFileQueryRepository},
            service::{command::DynFileCommandService, query::DynFileQueryService},
        },
        payment::{client::DynAlipayClient, service::DynAlipayService},
        product::{
            repository::{command::DynProductCommandRepository, query::DynProductQueryRepository},
            service::{command::DynProductCommandService, query::DynProductQueryService},
        },
        transaction::{
            repository::{
                command::DynTransactionCommandRepository, query::DynTransactionQueryRepository,
            },
            service::{command::DynTransactionCommandService, query::DynTransactionQueryService},
        },
    },
    config::{AlipayConfig, ConnectionPool},
    repository::{
        customer::{command::CustomerCommandRepository, query::CustomerQueryRepository},
        file::{command::FileCommandRepository, query::FileQueryRepository},
        product::{command::ProductCommandRepository, query::ProductQueryRepository},
        transaction::{command::TransactionCommandRepository, query::TransactionQueryRepository},
    },
    service::{
        customer::{command::CustomerCommandService, query::CustomerQueryService},
        file::{command::FileCommandService, query::FileQueryService},
        payment::{alipay::AlipayService, sandbox::SandboxAlipayClient},
        product::{command::ProductCommandService, query::ProductQueryService},
        transaction::{command::TransactionCommandService, query::TransactionQueryService},
    },
};
use std::sync::Arc;

/// Wires repositories into services once at startup; handlers receive the
/// trait objects through axum extensions.
#[derive(Clone)]
pub struct DependenciesInject {
    pub transaction_query: DynTransactionQueryService,
    pub transaction_command: DynTransactionCommandService,
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub customer_query: DynCustomerQueryService,
    pub customer_command: DynCustomerCommandService,
    pub file_query: DynFileQueryService,
    pub file_command: DynFileCommandService,
    pub alipay: DynAlipayService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("transaction_query", &"DynTransactionQueryService")
            .field("transaction_command", &"DynTransactionCommandService")
            .field("product_query", &"DynProductQueryService")
            .field("product_command", &"DynProductCommandService")
            .field("customer_query", &"DynCustomerQueryService")
            .field("customer_command", &"DynCustomerCommandService")
            .field("file_query", &"DynFileQueryService")
            .field("file_command", &"DynFileCommandService")
            .field("alipay", &"DynAlipayService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, alipay_config: AlipayConfig) -> Result<Self> {
        let transaction_query_repo: DynTransactionQueryRepository =
            Arc::new(TransactionQueryRepository::new(pool.clone()));
        let transaction_command_repo: DynTransactionCommandRepository =
            Arc::new(TransactionCommandRepository::new(pool.clone()));
        let product_query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool.clone()));
        let customer_query_repo: DynCustomerQueryRepository =
            Arc::new(CustomerQueryRepository::new(pool.clone()));
        let customer_command_repo: DynCustomerCommandRepository =
            Arc::new(CustomerCommandRepository::new(pool.clone()));
        let file_query_repo: DynFileQueryRepository =
            Arc::new(FileQueryRepository::new(pool.clone()));
        let file_command_repo: DynFileCommandRepository =
            Arc::new(FileCommandRepository::new(pool.clone()));

        let alipay_client: DynAlipayClient = Arc::new(
            SandboxAlipayClient::new(alipay_config)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .context("failed to initialize alipay client")?,
        );

        let transaction_query: DynTransactionQueryService = Arc::new(
            TransactionQueryService::new(Arc::clone(&transaction_query_repo)),
        );
        let transaction_command: DynTransactionCommandService =
            Arc::new(TransactionCommandService::new(
                transaction_command_repo,
                Arc::clone(&transaction_query_repo),
            ));

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(product_query_repo));
        let product_command: DynProductCommandService =
            Arc::new(ProductCommandService::new(product_command_repo));

        let customer_query: DynCustomerQueryService =
            Arc::new(CustomerQueryService::new(customer_query_repo));
        let customer_command: DynCustomerCommandService =
            Arc::new(CustomerCommandService::new(customer_command_repo));

        let file_query: DynFileQueryService =
            Arc::new(FileQueryService::new(Arc::clone(&file_query_repo)));
        let file_command: DynFileCommandService =
            Arc::new(FileCommandService::new(file_command_repo, file_query_repo));

        let alipay: DynAlipayService = Arc::new(AlipayService::new(
            alipay_client,
            transaction_query_repo,
        ));

        Ok(Self {
            transaction_query,
            transaction_command,
            product_query,
            product_command,
            customer_query,
            customer_command,
            file_query,
            file_command,
            alipay,
        })
    }
}
