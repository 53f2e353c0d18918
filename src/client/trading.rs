use crate::auth::create_l2_headers;
use crate::client::{MarketDataSource, OrderTransport};
use crate::error::Result;
use crate::orders::OrderBuilder;
use crate::types::{
    ApiCreds, CreateOrderOptions, MarketOrderArgs, OrderArgs, OrderType, PostOrder,
    PostOrderResponse, SignedOrder,
};
use tracing::debug;

const ORDER_PATH: &str = "/order";
const ORDERS_PATH: &str = "/orders";

/// Client for order creation and submission
///
/// All submissions are L2-authenticated with the API credentials; the
/// headers are recomputed for every request over the exact body sent.
pub struct TradingClient {
    transport: Box<dyn OrderTransport>,
    api_creds: ApiCreds,
    order_builder: OrderBuilder,
}

impl TradingClient {
    /// Create a new TradingClient
    ///
    /// # Arguments
    /// * `transport` - Sends the order requests
    /// * `api_creds` - API credentials for authentication
    /// * `order_builder` - OrderBuilder instance for creating orders
    pub fn new(
        transport: impl OrderTransport + 'static,
        api_creds: ApiCreds,
        order_builder: OrderBuilder,
    ) -> Self {
        Self {
            transport: Box::new(transport),
            api_creds,
            order_builder,
        }
    }

    pub fn order_builder(&self) -> &OrderBuilder {
        &self.order_builder
    }

    /// Create a limit order (local operation, not posted)
    pub async fn create_order<M>(
        &self,
        order_args: &OrderArgs,
        options: CreateOrderOptions,
        market: &M,
    ) -> Result<SignedOrder>
    where
        M: MarketDataSource + ?Sized,
    {
        self.order_builder
            .create_order(order_args, options, market)
            .await
    }

    /// Create a market order (local operation, not posted)
    pub async fn create_market_order<M>(
        &self,
        order_args: &MarketOrderArgs,
        options: CreateOrderOptions,
        market: &M,
    ) -> Result<SignedOrder>
    where
        M: MarketDataSource + ?Sized,
    {
        self.order_builder
            .create_market_order_resolved(order_args, options, market)
            .await
    }

    /// Post an order to the exchange
    pub async fn post_order(
        &self,
        order: SignedOrder,
        order_type: OrderType,
    ) -> Result<PostOrderResponse> {
        let post_order = PostOrder::new(order, self.api_creds.api_key.clone(), order_type);
        self.submit(post_order).await
    }

    /// Post a prepared envelope, e.g. one marked post-only
    pub async fn submit(&self, post_order: PostOrder) -> Result<PostOrderResponse> {
        let body = serde_json::to_string(&post_order)?;
        let headers = create_l2_headers(
            self.order_builder.signer(),
            &self.api_creds,
            "POST",
            ORDER_PATH,
            Some(&body),
        )?;

        debug!(
            token_id = %post_order.order.token_id,
            order_type = %post_order.order_type,
            "posting order"
        );
        self.transport.post_order(ORDER_PATH, body, headers).await
    }

    /// Post several orders in one request
    pub async fn post_orders(
        &self,
        orders: Vec<(SignedOrder, OrderType)>,
    ) -> Result<Vec<PostOrderResponse>> {
        let owner = &self.api_creds.api_key;
        let batch: Vec<PostOrder> = orders
            .into_iter()
            .map(|(order, order_type)| PostOrder::new(order, owner.clone(), order_type))
            .collect();

        let body = serde_json::to_string(&batch)?;
        let headers = create_l2_headers(
            self.order_builder.signer(),
            &self.api_creds,
            "POST",
            ORDERS_PATH,
            Some(&body),
        )?;

        debug!(count = batch.len(), "posting order batch");
        self.transport.post_orders(ORDERS_PATH, body, headers).await
    }

    /// Create and post a limit order in one step
    pub async fn create_and_post_order<M>(
        &self,
        order_args: &OrderArgs,
        options: CreateOrderOptions,
        market: &M,
        order_type: OrderType,
    ) -> Result<PostOrderResponse>
    where
        M: MarketDataSource + ?Sized,
    {
        let order = self.create_order(order_args, options, market).await?;
        self.post_order(order, order_type).await
    }

    /// Resolve, sign and post a market order with its own time in force
    pub async fn create_and_post_market_order<M>(
        &self,
        order_args: &MarketOrderArgs,
        options: CreateOrderOptions,
        market: &M,
    ) -> Result<PostOrderResponse>
    where
        M: MarketDataSource + ?Sized,
    {
        let order = self
            .create_market_order(order_args, options, market)
            .await?;
        self.post_order(order, order_args.order_type).await
    }
}
