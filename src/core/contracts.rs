//! ABI surface of every contract the engine reads

use alloy_sol_types::sol;

sol! {
    /// ERC20 plus the optional extension reads common in fee/anti-bot tokens
    interface IERC20Ext {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);

        function owner() external view returns (address);
        function getOwner() external view returns (address);

        function sellFee() external view returns (uint256);

        function maxTransactionAmount() external view returns (uint256);
        function maxWalletSize() external view returns (uint256);
    }

    interface IUniswapV2Factory {
        function getPair(address tokenA, address tokenB) external view returns (address pair);
    }

    interface IUniswapV2Pair {
        function token0() external view returns (address);
        function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
    }

    interface IUniswapV2Router {
        function WETH() external view returns (address);
        function getAmountsOut(uint256 amountIn, address[] calldata path) external view returns (uint256[] memory amounts);
    }

    interface IUniswapV3Router {
        function WETH9() external view returns (address);
    }

    interface IQuoter {
        function quoteExactInputSingle(
            address tokenIn,
            address tokenOut,
            uint24 fee,
            uint256 amountIn,
            uint160 sqrtPriceLimitX96
        ) external returns (uint256 amountOut);
    }

    interface IHoneypotDetector {
        struct TokenInfo {
            bool canTransfer;
            bool hasBlacklist;
            bool hasPauseFunction;
            bool hasOwner;
            bool hasSellRestriction;
            bool hasAntiWhale;
            uint256 liquidity;
            bool hasLiquidity;
            string error;
        }

        function detectHoneypot(address tokenAddress) external view returns (TokenInfo memory);
    }
}
