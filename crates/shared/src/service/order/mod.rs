mod command;
mod query;

use self::command::OrderCommandService;
use self::query::OrderQueryService;
use crate::abstract_trait::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, DynProductQueryRepository,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct OrderService {
    pub query: DynOrderQueryService,
    pub command: DynOrderCommandService,
}

pub struct OrderServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub product_query: DynProductQueryRepository,
}

impl fmt::Debug for OrderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderService")
            .field("query", &"Arc<dyn OrderQueryServiceTrait>")
            .field("command", &"Arc<dyn OrderCommandServiceTrait>")
            .finish()
    }
}

impl OrderService {
    pub fn new(deps: OrderServiceDeps) -> Self {
        let OrderServiceDeps {
            query,
            command,
            product_query,
        } = deps;

        let query_service = Arc::new(OrderQueryService::new(query)) as DynOrderQueryService;
        let command_service =
            Arc::new(OrderCommandService::new(command, product_query)) as DynOrderCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}
