//! In-memory chain used by the integration tests

#![allow(dead_code)]

use alloy_primitives::aliases::U112;
use alloy_primitives::{address, Address, Bytes, U256};
use alloy_sol_types::SolCall;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use honeypot_radar::core::contracts::{
    IERC20Ext, IHoneypotDetector, IUniswapV2Factory, IUniswapV2Pair, IUniswapV2Router,
};
use honeypot_radar::{ChainReader, NetworkProfile, ReadError, RouterVersion};

pub const TOKEN: Address = address!("1111111111111111111111111111111111111111");
pub const WETH: Address = address!("4200000000000000000000000000000000000006");
pub const FACTORY: Address = address!("5c69bee701ef814a2b6a3edd4b1652cb9cc5aa6f");
pub const PAIR: Address = address!("2222222222222222222222222222222222222222");
pub const ROUTER_V2: Address = address!("3333333333333333333333333333333333333333");
pub const ROUTER_V3: Address = address!("4444444444444444444444444444444444444444");
pub const QUOTER: Address = address!("5555555555555555555555555555555555555555");
pub const DETECTOR: Address = address!("b1ffbab3836908459f6f0f795dd1d978e9cb8818");
pub const OTHER: Address = address!("6666666666666666666666666666666666666666");

/// Canned answer for one call
#[derive(Debug, Clone)]
pub enum Reply {
    Return(Bytes),
    Revert,
    Fail(ReadError),
}

/// Fake node: answers `eth_call` by exact calldata first, then by selector.
/// Unknown calls revert, unknown accounts have no code.
#[derive(Debug, Default)]
pub struct FakeChain {
    chain_id: u64,
    chain_id_delay: Option<Duration>,
    code: HashMap<Address, Reply>,
    exact: HashMap<(Address, Vec<u8>), Reply>,
    by_selector: HashMap<(Address, [u8; 4]), Reply>,
    calls: AtomicUsize,
}

impl FakeChain {
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            ..Default::default()
        }
    }

    /// Number of `eth_getCode` + `eth_call` requests served
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn slow_chain_id(mut self, delay: Duration) -> Self {
        self.chain_id_delay = Some(delay);
        self
    }

    pub fn code(mut self, account: Address, code: Vec<u8>) -> Self {
        self.code.insert(account, Reply::Return(code.into()));
        self
    }

    pub fn code_fails(mut self, account: Address, err: ReadError) -> Self {
        self.code.insert(account, Reply::Fail(err));
        self
    }

    /// Answer this exact call (selector + arguments)
    pub fn on<C: SolCall>(mut self, to: Address, call: C, ret: Vec<u8>) -> Self {
        self.exact
            .insert((to, call.abi_encode()), Reply::Return(ret.into()));
        self
    }

    /// Answer every call of `C` on `to`, whatever the arguments
    pub fn on_any<C: SolCall>(mut self, to: Address, ret: Vec<u8>) -> Self {
        self.by_selector
            .insert((to, C::SELECTOR), Reply::Return(ret.into()));
        self
    }

    pub fn revert_any<C: SolCall>(mut self, to: Address) -> Self {
        self.by_selector.insert((to, C::SELECTOR), Reply::Revert);
        self
    }

    pub fn fail_any<C: SolCall>(mut self, to: Address, err: ReadError) -> Self {
        self.by_selector.insert((to, C::SELECTOR), Reply::Fail(err));
        self
    }

    fn reply(reply: Option<&Reply>) -> Result<Bytes, ReadError> {
        match reply {
            Some(Reply::Return(data)) => Ok(data.clone()),
            Some(Reply::Fail(err)) => Err(err.clone()),
            Some(Reply::Revert) | None => Err(ReadError::Reverted(String::new())),
        }
    }
}

impl ChainReader for FakeChain {
    async fn chain_id(&self) -> Result<u64, ReadError> {
        if let Some(delay) = self.chain_id_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.chain_id)
    }

    async fn get_code(&self, address: Address) -> Result<Bytes, ReadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.code.get(&address) {
            None => Ok(Bytes::new()),
            other => Self::reply(other),
        }
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ReadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(reply) = self.exact.get(&(to, data.to_vec())) {
            return Self::reply(Some(reply));
        }
        let selector: [u8; 4] = match data.get(..4).and_then(|s| s.try_into().ok()) {
            Some(selector) => selector,
            None => return Self::reply(None),
        };
        Self::reply(self.by_selector.get(&(to, selector)))
    }
}

// ============================================
// Profiles and canned data
// ============================================

pub fn profile(routers: &[(RouterVersion, Address)]) -> NetworkProfile {
    NetworkProfile {
        key: "testnet".to_string(),
        chain_id: 1301,
        name: "Test Network".to_string(),
        native_symbol: "ETH".to_string(),
        wrapped_native: WETH,
        rpc_urls: vec!["https://rpc.test".to_string()],
        factory: FACTORY,
        routers: routers.iter().copied().collect::<BTreeMap<_, _>>(),
        quoter: Some(QUOTER),
        detector: Some(DETECTOR),
    }
}

pub fn clean_info() -> IHoneypotDetector::TokenInfo {
    IHoneypotDetector::TokenInfo {
        canTransfer: true,
        hasBlacklist: false,
        hasPauseFunction: false,
        hasOwner: false,
        hasSellRestriction: false,
        hasAntiWhale: false,
        liquidity: U256::from(5_000u64),
        hasLiquidity: true,
        error: String::new(),
    }
}

pub fn units(amount: u64, decimals: u32) -> U256 {
    U256::from(amount) * U256::from(10u64).pow(U256::from(decimals))
}

pub fn address_ret(value: Address) -> Vec<u8> {
    IERC20Ext::ownerCall::abi_encode_returns(&(value,))
}

pub fn uint_ret(value: U256) -> Vec<u8> {
    IERC20Ext::totalSupplyCall::abi_encode_returns(&(value,))
}

pub fn detector_ret(info: IHoneypotDetector::TokenInfo) -> Vec<u8> {
    IHoneypotDetector::detectHoneypotCall::abi_encode_returns(&(info,))
}

pub fn reserves_ret(reserve0: u128, reserve1: u128) -> Vec<u8> {
    IUniswapV2Pair::getReservesCall::abi_encode_returns(&(
        U112::from(reserve0),
        U112::from(reserve1),
        0u32,
    ))
}

pub fn amounts_ret(amounts: Vec<U256>) -> Vec<u8> {
    IUniswapV2Router::getAmountsOutCall::abi_encode_returns(&(amounts,))
}

pub fn pair_lookup(chain: FakeChain, token_a: Address, token_b: Address, pair: Address) -> FakeChain {
    chain.on(
        FACTORY,
        IUniswapV2Factory::getPairCall {
            tokenA: token_a,
            tokenB: token_b,
        },
        address_ret(pair),
    )
}

/// A healthy token: renounced, 5% sell fee, deep pool, v2 router quoting a 4% buy tax
pub fn healthy_chain() -> FakeChain {
    let chain = FakeChain::new(1301)
        .code(TOKEN, vec![0x60, 0x80, 0x60, 0x40, 0x52])
        .on_any::<IHoneypotDetector::detectHoneypotCall>(DETECTOR, detector_ret(clean_info()))
        .on_any::<IERC20Ext::nameCall>(TOKEN, IERC20Ext::nameCall::abi_encode_returns(&("Test Token".to_string(),)))
        .on_any::<IERC20Ext::symbolCall>(TOKEN, IERC20Ext::symbolCall::abi_encode_returns(&("TEST".to_string(),)))
        .on_any::<IERC20Ext::decimalsCall>(TOKEN, IERC20Ext::decimalsCall::abi_encode_returns(&(18u8,)))
        .on_any::<IERC20Ext::totalSupplyCall>(TOKEN, uint_ret(units(1_000_000, 18)))
        .on_any::<IERC20Ext::ownerCall>(TOKEN, address_ret(Address::ZERO))
        .on_any::<IERC20Ext::sellFeeCall>(TOKEN, uint_ret(U256::from(500u64)))
        .on_any::<IERC20Ext::balanceOfCall>(TOKEN, uint_ret(U256::from(96u64)))
        .on_any::<IUniswapV2Router::WETHCall>(ROUTER_V2, address_ret(WETH))
        .on_any::<IUniswapV2Router::getAmountsOutCall>(
            ROUTER_V2,
            amounts_ret(vec![units(1, 18), U256::from(100u64)]),
        )
        .on_any::<IUniswapV2Pair::token0Call>(PAIR, address_ret(TOKEN))
        .on_any::<IUniswapV2Pair::getReservesCall>(
            PAIR,
            reserves_ret(5_000 * 10u128.pow(18), 10 * 10u128.pow(18)),
        );
    pair_lookup(chain, TOKEN, WETH, PAIR)
}
