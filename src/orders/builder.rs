use crate::client::MarketDataSource;
use crate::config::ExchangeConfig;
use crate::error::{Error, Result};
use crate::orders::price::calculate_market_price;
use crate::orders::rounding::{limit_order_amounts, market_order_amounts, to_wei, validate_price};
use crate::signing::OrderSigner;
use crate::types::{
    CreateOrderOptions, MarketOrderArgs, OrderArgs, OrderData, SignatureType, SignedOrder,
    TickSize, TokenId,
};
use alloy_primitives::Address;
use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;

/// Largest salt the exchange accepts as a JSON number
pub const MAX_SALT: u64 = 999_999_999_999;

/// Amounts are scaled to the 6 decimals of USDC and conditional tokens
const TOKEN_DECIMALS: u32 = 6;

/// Market parameters a market order is built against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMarket {
    pub tick_size: TickSize,
    pub price: Decimal,
    pub neg_risk: bool,
    pub fee_rate_bps: u32,
}

/// Builds and signs orders for one wallet
///
/// For proxy and Safe wallets the funder holds the funds and is the order
/// maker, while the signer key authorises the order.
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    signer: OrderSigner,
    signature_type: SignatureType,
    funder: Option<Address>,
    config: ExchangeConfig,
}

impl OrderBuilder {
    /// Create a builder for Polygon mainnet.
    pub fn new(
        signer: OrderSigner,
        signature_type: Option<SignatureType>,
        funder: Option<Address>,
    ) -> Self {
        Self {
            signer,
            signature_type: signature_type.unwrap_or_default(),
            funder,
            config: ExchangeConfig::polygon(),
        }
    }

    pub fn with_config(mut self, config: ExchangeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn signer(&self) -> &OrderSigner {
        &self.signer
    }

    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// The funder if set, otherwise the signer
    pub fn maker(&self) -> Address {
        self.funder.unwrap_or_else(|| self.signer.address())
    }

    pub fn exchange_address(&self, neg_risk: bool) -> Address {
        self.config.exchange_address(neg_risk)
    }

    /// Uniformly random salt in `[0, MAX_SALT]`
    pub fn generate_salt() -> String {
        rand::thread_rng().gen_range(0..=MAX_SALT).to_string()
    }

    /// Create and sign a limit order, looking up the neg-risk flag unless
    /// `options` supplies it.
    pub async fn create_order<M>(
        &self,
        args: &OrderArgs,
        options: CreateOrderOptions,
        market: &M,
    ) -> Result<SignedOrder>
    where
        M: MarketDataSource + ?Sized,
    {
        let neg_risk = match options.neg_risk {
            Some(neg_risk) => neg_risk,
            None => market.neg_risk(&args.token_id).await?,
        };

        let order = self.build_limit_order(args, options)?;
        self.sign_with_salt(&order, neg_risk, Self::generate_salt())
    }

    /// Create and sign a limit order against a known neg-risk flag.
    pub fn create_order_with(&self, args: &OrderArgs, neg_risk: bool) -> Result<SignedOrder> {
        let order = self.build_limit_order(args, CreateOrderOptions::default())?;
        self.sign_with_salt(&order, neg_risk, Self::generate_salt())
    }

    /// Unsigned limit order.
    ///
    /// The price must lie strictly between 0 and 1, and inside the tick range
    /// when `options.tick_size` is given.
    pub fn build_limit_order(
        &self,
        args: &OrderArgs,
        options: CreateOrderOptions,
    ) -> Result<OrderData> {
        if let Some(tick_size) = options.tick_size {
            validate_price(args.price, tick_size)?;
        }

        let (maker_amount, taker_amount) = limit_order_amounts(args.side, args.size, args.price)?;
        let fee_rate_bps = options.fee_rate_bps.unwrap_or(args.fee_rate_bps);

        self.order_data(
            &args.token_id,
            args.side,
            maker_amount,
            taker_amount,
            fee_rate_bps,
            args.nonce,
            args.expiration,
            args.taker,
        )
    }

    /// Create and sign a market order without any lookups.
    ///
    /// Tick size, neg-risk flag and fee rate must come from `options` and the
    /// price from `args`; a missing value fails before anything is signed. A
    /// price of zero or below counts as missing. `options.fee_rate_bps` is
    /// signed as given and `args.fee_rate_bps` is ignored.
    pub fn create_market_order_strict(
        &self,
        args: &MarketOrderArgs,
        options: CreateOrderOptions,
    ) -> Result<SignedOrder> {
        let tick_size = options.tick_size.ok_or(Error::MissingField("tick_size"))?;
        let price = args
            .price
            .filter(|price| *price > Decimal::ZERO)
            .ok_or(Error::MissingField("price"))?;
        let neg_risk = options.neg_risk.ok_or(Error::MissingField("neg_risk"))?;
        let fee_rate_bps = options
            .fee_rate_bps
            .ok_or(Error::MissingField("fee_rate_bps"))?;

        validate_price(price, tick_size)?;

        let resolved = ResolvedMarket {
            tick_size,
            price,
            neg_risk,
            fee_rate_bps,
        };
        let order = self.build_market_order(args, &resolved)?;
        self.sign_with_salt(&order, resolved.neg_risk, Self::generate_salt())
    }

    /// Create and sign a market order, resolving every value `options` and
    /// `args` leave out.
    pub async fn create_market_order_resolved<M>(
        &self,
        args: &MarketOrderArgs,
        options: CreateOrderOptions,
        market: &M,
    ) -> Result<SignedOrder>
    where
        M: MarketDataSource + ?Sized,
    {
        let resolved = self.resolve_market(args, options, market).await?;
        let order = self.build_market_order(args, &resolved)?;
        self.sign_with_salt(&order, resolved.neg_risk, Self::generate_salt())
    }

    /// Resolve tick size, price, neg-risk flag and fee rate, in that order.
    ///
    /// Stops at the first failing stage; later lookups are not made. A fee
    /// rate in `options` is used as given, without comparing it to
    /// `args.fee_rate_bps` or the market's rate.
    pub async fn resolve_market<M>(
        &self,
        args: &MarketOrderArgs,
        options: CreateOrderOptions,
        market: &M,
    ) -> Result<ResolvedMarket>
    where
        M: MarketDataSource + ?Sized,
    {
        let token_id = &args.token_id;

        let tick_size = match options.tick_size {
            Some(tick_size) => tick_size,
            None => market.tick_size(token_id).await?,
        };
        debug!(token_id = %token_id, tick_size = %tick_size, "resolved tick size");

        let price = match args.price {
            Some(price) if price > Decimal::ZERO => price,
            _ => {
                let book = market.order_book(token_id).await?;
                calculate_market_price(
                    book.opposing_levels(args.side),
                    args.amount,
                    args.side,
                    args.order_type,
                )?
            }
        };
        validate_price(price, tick_size)?;
        debug!(token_id = %token_id, price = %price, "resolved price");

        let neg_risk = match options.neg_risk {
            Some(neg_risk) => neg_risk,
            None => market.neg_risk(token_id).await?,
        };
        debug!(token_id = %token_id, neg_risk, "resolved neg risk");

        let fee_rate_bps = match options.fee_rate_bps {
            Some(fee_rate_bps) => fee_rate_bps,
            None => {
                let market_fee = market.fee_rate_bps(token_id).await?;
                check_fee_rate(args.fee_rate_bps, market_fee)?
            }
        };
        debug!(token_id = %token_id, fee_rate_bps, "resolved fee rate");

        Ok(ResolvedMarket {
            tick_size,
            price,
            neg_risk,
            fee_rate_bps,
        })
    }

    /// Unsigned market order for already resolved market parameters.
    pub fn build_market_order(
        &self,
        args: &MarketOrderArgs,
        resolved: &ResolvedMarket,
    ) -> Result<OrderData> {
        let round_config = resolved.tick_size.round_config();
        let (maker_amount, taker_amount) =
            market_order_amounts(args.side, args.amount, resolved.price, &round_config)?;

        self.order_data(
            &args.token_id,
            args.side,
            maker_amount,
            taker_amount,
            resolved.fee_rate_bps,
            args.nonce,
            args.expiration,
            args.taker,
        )
    }

    /// Sign `order` with a caller-chosen salt.
    pub fn sign_with_salt(
        &self,
        order: &OrderData,
        neg_risk: bool,
        salt: String,
    ) -> Result<SignedOrder> {
        let exchange = self.exchange_address(neg_risk);
        let signed = self
            .signer
            .sign_order(order, salt, &exchange, self.config.chain_id)?;

        debug!(
            token_id = %order.token_id,
            side = %order.side,
            maker_amount = %order.maker_amount,
            taker_amount = %order.taker_amount,
            exchange = %exchange,
            "signed order"
        );

        Ok(signed)
    }

    #[allow(clippy::too_many_arguments)]
    fn order_data(
        &self,
        token_id: &TokenId,
        side: crate::types::Side,
        maker_amount: Decimal,
        taker_amount: Decimal,
        fee_rate_bps: u32,
        nonce: u64,
        expiration: u64,
        taker: Address,
    ) -> Result<OrderData> {
        Ok(OrderData {
            maker: self.maker(),
            signer: self.signer.address(),
            taker,
            token_id: token_id.clone(),
            maker_amount: to_wei(maker_amount, TOKEN_DECIMALS, true)?,
            taker_amount: to_wei(taker_amount, TOKEN_DECIMALS, true)?,
            side,
            fee_rate_bps,
            nonce,
            expiration,
            signature_type: self.signature_type,
        })
    }
}

/// Fee rate to sign with, given the caller's value and the market's.
///
/// A non-zero market fee wins; a non-zero caller fee that differs from it is
/// rejected. With no market fee the caller's value is used.
fn check_fee_rate(provided: u32, market: u32) -> Result<u32> {
    if market == 0 {
        return Ok(provided);
    }
    if provided != 0 && provided != market {
        return Err(Error::InvalidFeeRate { provided, market });
    }
    Ok(market)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockMarketDataSource;
    use crate::signing::{order_digest, recover_address_hex};
    use crate::types::{OrderBookSummary, OrderType, PriceLevel, Side};
    use std::str::FromStr;

    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TOKEN_ID: &str =
        "71321045679252212594626385532706912750332728571942532289631379312455583992563";

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn builder() -> OrderBuilder {
        OrderBuilder::new(
            OrderSigner::from_private_key(TEST_PRIVATE_KEY).unwrap(),
            None,
            None,
        )
    }

    fn recover(
        builder: &OrderBuilder,
        order: &OrderData,
        signed: &SignedOrder,
        neg_risk: bool,
    ) -> Address {
        let digest = order_digest(
            order,
            &signed.salt,
            &builder.exchange_address(neg_risk),
            builder.config().chain_id,
        )
        .unwrap();
        recover_address_hex(&digest, &signed.signature).unwrap()
    }

    #[test]
    fn test_exchange_address_selection() {
        let builder = builder();
        assert_eq!(
            builder.exchange_address(false),
            "0x4bFb41d5B3570DeFd03C39a9A4D8dE6Bd8B8982E".parse::<Address>().unwrap()
        );
        assert_eq!(
            builder.exchange_address(true),
            "0xC5d563A36AE78145C45a50134d48A1215220f80a".parse::<Address>().unwrap()
        );
        let amoy = builder.with_config(ExchangeConfig::amoy());
        assert_eq!(amoy.exchange_address(false), ExchangeConfig::amoy().exchange_address);
    }

    #[test]
    fn test_maker_defaults_to_signer() {
        let builder = builder();
        assert_eq!(builder.maker(), builder.signer().address());

        let funder: Address = "0x1111111111111111111111111111111111111111".parse().unwrap();
        let proxy = OrderBuilder::new(
            OrderSigner::from_private_key(TEST_PRIVATE_KEY).unwrap(),
            Some(SignatureType::PolyProxy),
            Some(funder),
        );
        let order = proxy
            .build_limit_order(
                &OrderArgs::new(TOKEN_ID, d("0.5"), d("10"), Side::Buy),
                CreateOrderOptions::default(),
            )
            .unwrap();
        assert_eq!(order.maker, funder);
        assert_eq!(order.signer, proxy.signer().address());
        assert_eq!(order.signature_type, SignatureType::PolyProxy);
    }

    #[test]
    fn test_salt_range() {
        for _ in 0..100 {
            let salt: u64 = OrderBuilder::generate_salt().parse().unwrap();
            assert!(salt <= MAX_SALT);
        }
    }

    #[test]
    fn test_limit_buy_end_to_end() {
        let builder = builder();
        let args = OrderArgs::new(TOKEN_ID, d("0.5"), d("10"), Side::Buy);

        let order = builder
            .build_limit_order(&args, CreateOrderOptions::default())
            .unwrap();
        assert_eq!(order.maker_amount, "5000000");
        assert_eq!(order.taker_amount, "10000000");

        let first = builder.create_order_with(&args, false).unwrap();
        let second = builder.create_order_with(&args, false).unwrap();
        assert_eq!(first.maker_amount, "5000000");
        assert_eq!(first.taker_amount, "10000000");
        assert_eq!(first.maker, "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        assert_eq!(first.side, Side::Buy);
        assert_ne!(first.salt, second.salt);
        assert_ne!(first.signature, second.signature);

        assert_eq!(recover(&builder, &order, &first, false), builder.signer().address());
    }

    #[test]
    fn test_limit_sell_amounts() {
        let order = builder()
            .build_limit_order(
                &OrderArgs::new(TOKEN_ID, d("0.5"), d("10"), Side::Sell),
                CreateOrderOptions::default(),
            )
            .unwrap();
        assert_eq!(order.maker_amount, "10000000");
        assert_eq!(order.taker_amount, "5000000");
    }

    #[test]
    fn test_sign_with_salt_is_reproducible() {
        let builder = builder();
        let order = builder
            .build_limit_order(
                &OrderArgs::new(TOKEN_ID, d("0.5"), d("10"), Side::Buy),
                CreateOrderOptions::default(),
            )
            .unwrap();

        let a = builder.sign_with_salt(&order, false, "12345".into()).unwrap();
        let b = builder.sign_with_salt(&order, false, "12345".into()).unwrap();
        assert_eq!(a, b);

        let neg_risk = builder.sign_with_salt(&order, true, "12345".into()).unwrap();
        assert_ne!(a.signature, neg_risk.signature);
        assert_eq!(recover(&builder, &order, &neg_risk, true), builder.signer().address());
    }

    #[test]
    fn test_limit_price_checked_against_tick() {
        let result = builder().build_limit_order(
            &OrderArgs::new(TOKEN_ID, d("0.995"), d("10"), Side::Buy),
            CreateOrderOptions::default().tick_size(TickSize::Hundredth),
        );
        assert!(matches!(result, Err(Error::InvalidPrice { .. })));
    }

    #[test]
    fn test_limit_price_out_of_range_without_tick() {
        let builder = builder();
        for price in ["0", "1", "1.5", "10000000000"] {
            let args = OrderArgs::new(TOKEN_ID, d(price), d("100000000000000000000"), Side::Buy);
            let result = builder.create_order_with(&args, false);
            assert!(
                matches!(result, Err(Error::InvalidPrice { .. })),
                "price {} was accepted",
                price
            );
        }
    }

    #[tokio::test]
    async fn test_create_order_looks_up_neg_risk() {
        let mut market = MockMarketDataSource::new();
        market.expect_neg_risk().times(1).returning(|_| Ok(true));

        let builder = builder();
        let args = OrderArgs::new(TOKEN_ID, d("0.5"), d("10"), Side::Buy);
        let signed = builder
            .create_order(&args, CreateOrderOptions::default(), &market)
            .await
            .unwrap();

        let order = builder
            .build_limit_order(&args, CreateOrderOptions::default())
            .unwrap();
        assert_eq!(recover(&builder, &order, &signed, true), builder.signer().address());
    }

    #[tokio::test]
    async fn test_create_order_neg_risk_override_skips_lookup() {
        let mut market = MockMarketDataSource::new();
        market.expect_neg_risk().never();

        let signed = builder()
            .create_order(
                &OrderArgs::new(TOKEN_ID, d("0.5"), d("10"), Side::Buy),
                CreateOrderOptions::default().neg_risk(false),
                &market,
            )
            .await
            .unwrap();
        assert_eq!(signed.maker_amount, "5000000");
    }

    #[test]
    fn test_strict_requires_every_field() {
        let builder = builder();
        let args = MarketOrderArgs::new(TOKEN_ID, d("7"), Side::Buy).price(d("0.03"));
        let full = CreateOrderOptions::default()
            .tick_size(TickSize::Hundredth)
            .neg_risk(false)
            .fee_rate_bps(0);

        let missing = |options: CreateOrderOptions, args: &MarketOrderArgs| {
            match builder.create_market_order_strict(args, options) {
                Err(Error::MissingField(name)) => name,
                other => panic!("expected MissingField, got {:?}", other),
            }
        };

        let mut options = full;
        options.tick_size = None;
        assert_eq!(missing(options, &args), "tick_size");

        let mut options = full;
        options.neg_risk = None;
        assert_eq!(missing(options, &args), "neg_risk");

        let mut options = full;
        options.fee_rate_bps = None;
        assert_eq!(missing(options, &args), "fee_rate_bps");

        let no_price = MarketOrderArgs::new(TOKEN_ID, d("7"), Side::Buy);
        assert_eq!(missing(full, &no_price), "price");
        let zero_price = MarketOrderArgs::new(TOKEN_ID, d("7"), Side::Buy).price(Decimal::ZERO);
        assert_eq!(missing(full, &zero_price), "price");

        let signed = builder.create_market_order_strict(&args, full).unwrap();
        assert_eq!(signed.maker_amount, "7000000");
        assert_eq!(signed.taker_amount, "233333300");
        assert_eq!(signed.fee_rate_bps, "0");

        let with_args_fee = args.clone().fee_rate_bps(100);
        let signed = builder
            .create_market_order_strict(&with_args_fee, full)
            .unwrap();
        assert_eq!(signed.fee_rate_bps, "0");
    }

    #[tokio::test]
    async fn test_resolved_market_buy() {
        let mut market = MockMarketDataSource::new();
        market
            .expect_tick_size()
            .times(1)
            .returning(|_| Ok(TickSize::Hundredth));
        market.expect_order_book().never();
        market.expect_neg_risk().times(1).returning(|_| Ok(true));
        market.expect_fee_rate_bps().times(1).returning(|_| Ok(0));

        let builder = builder();
        let args = MarketOrderArgs::new(TOKEN_ID, d("7"), Side::Buy).price(d("0.03"));
        let signed = builder
            .create_market_order_resolved(&args, CreateOrderOptions::default(), &market)
            .await
            .unwrap();

        assert_eq!(signed.maker_amount, "7000000");
        assert_eq!(signed.taker_amount, "233333300");
        assert_eq!(signed.fee_rate_bps, "0");

        let resolved = ResolvedMarket {
            tick_size: TickSize::Hundredth,
            price: d("0.03"),
            neg_risk: true,
            fee_rate_bps: 0,
        };
        let order = builder.build_market_order(&args, &resolved).unwrap();
        assert_eq!(recover(&builder, &order, &signed, true), builder.signer().address());
    }

    #[tokio::test]
    async fn test_resolved_price_swept_from_book() {
        let mut market = MockMarketDataSource::new();
        market
            .expect_tick_size()
            .returning(|_| Ok(TickSize::Hundredth));
        market.expect_order_book().times(1).returning(|_| {
            Ok(OrderBookSummary {
                bids: vec![PriceLevel::new(d("0.40"), d("100"))],
                asks: vec![
                    PriceLevel::new(d("0.50"), d("100")),
                    PriceLevel::new(d("0.60"), d("100")),
                ],
                ..Default::default()
            })
        });
        market.expect_neg_risk().returning(|_| Ok(false));
        market.expect_fee_rate_bps().returning(|_| Ok(0));

        let args = MarketOrderArgs::new(TOKEN_ID, d("100"), Side::Buy);
        let resolved = builder()
            .resolve_market(&args, CreateOrderOptions::default(), &market)
            .await
            .unwrap();
        // 60 from the worst level, 110 once the best is added
        assert_eq!(resolved.price, d("0.50"));
        assert_eq!(resolved.tick_size, TickSize::Hundredth);
        assert!(!resolved.neg_risk);
    }

    #[tokio::test]
    async fn test_first_failing_stage_aborts() {
        let mut market = MockMarketDataSource::new();
        market
            .expect_tick_size()
            .times(1)
            .returning(|_| Err(Error::network("tick_size", "connection reset")));
        market.expect_order_book().never();
        market.expect_neg_risk().never();
        market.expect_fee_rate_bps().never();

        let result = builder()
            .create_market_order_resolved(
                &MarketOrderArgs::new(TOKEN_ID, d("10"), Side::Buy),
                CreateOrderOptions::default(),
                &market,
            )
            .await;
        assert!(matches!(result, Err(Error::Network { .. })));
    }

    #[tokio::test]
    async fn test_fok_sweep_without_liquidity() {
        let mut market = MockMarketDataSource::new();
        market
            .expect_tick_size()
            .returning(|_| Ok(TickSize::Hundredth));
        market.expect_order_book().times(1).returning(|_| {
            Ok(OrderBookSummary {
                asks: vec![PriceLevel::new(d("0.5"), d("10"))],
                ..Default::default()
            })
        });
        market.expect_neg_risk().never();
        market.expect_fee_rate_bps().never();

        let builder = builder();
        let fok = MarketOrderArgs::new(TOKEN_ID, d("100"), Side::Buy);
        let result = builder
            .resolve_market(&fok, CreateOrderOptions::default(), &market)
            .await;
        assert!(matches!(result, Err(Error::NoMatch { .. })));
    }

    #[tokio::test]
    async fn test_fak_sweep_falls_back_to_best_price() {
        let mut market = MockMarketDataSource::new();
        market.expect_order_book().times(1).returning(|_| {
            Ok(OrderBookSummary {
                asks: vec![PriceLevel::new(d("0.5"), d("10"))],
                ..Default::default()
            })
        });
        market.expect_fee_rate_bps().returning(|_| Ok(0));

        let fak = MarketOrderArgs::new(TOKEN_ID, d("100"), Side::Buy).order_type(OrderType::Fak);
        let options = CreateOrderOptions::default()
            .tick_size(TickSize::Hundredth)
            .neg_risk(false);
        let resolved = builder()
            .resolve_market(&fak, options, &market)
            .await
            .unwrap();
        assert_eq!(resolved.price, d("0.5"));
    }

    #[tokio::test]
    async fn test_invalid_price_stops_before_neg_risk() {
        let mut market = MockMarketDataSource::new();
        market.expect_neg_risk().never();
        market.expect_fee_rate_bps().never();

        let args = MarketOrderArgs::new(TOKEN_ID, d("10"), Side::Buy).price(d("0.999"));
        let result = builder()
            .resolve_market(
                &args,
                CreateOrderOptions::default().tick_size(TickSize::Hundredth),
                &market,
            )
            .await;
        assert!(matches!(result, Err(Error::InvalidPrice { .. })));
    }

    async fn resolve_fee(provided: u32, market_fee: u32) -> Result<u32> {
        let mut market = MockMarketDataSource::new();
        market
            .expect_fee_rate_bps()
            .times(1)
            .returning(move |_| Ok(market_fee));

        let args = MarketOrderArgs::new(TOKEN_ID, d("10"), Side::Buy)
            .price(d("0.5"))
            .fee_rate_bps(provided);
        let options = CreateOrderOptions::default()
            .tick_size(TickSize::Hundredth)
            .neg_risk(false);
        builder()
            .resolve_market(&args, options, &market)
            .await
            .map(|resolved| resolved.fee_rate_bps)
    }

    #[tokio::test]
    async fn test_fee_rate_rules() {
        assert_eq!(resolve_fee(0, 100).await.unwrap(), 100);
        assert_eq!(resolve_fee(100, 100).await.unwrap(), 100);
        assert_eq!(resolve_fee(30, 0).await.unwrap(), 30);
        assert!(matches!(
            resolve_fee(50, 100).await,
            Err(Error::InvalidFeeRate {
                provided: 50,
                market: 100
            })
        ));
    }

    #[tokio::test]
    async fn test_fee_override_skips_lookup() {
        let mut market = MockMarketDataSource::new();
        market.expect_fee_rate_bps().never();

        let args = MarketOrderArgs::new(TOKEN_ID, d("10"), Side::Buy)
            .price(d("0.5"))
            .fee_rate_bps(50);
        let options = CreateOrderOptions::default()
            .tick_size(TickSize::Hundredth)
            .neg_risk(false)
            .fee_rate_bps(25);
        let resolved = builder()
            .resolve_market(&args, options, &market)
            .await
            .unwrap();
        assert_eq!(resolved.fee_rate_bps, 25);
    }
}
