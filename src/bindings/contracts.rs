use alloy_sol_types::sol;

sol! {
    /// Governor: records proposals for later voting and execution.
    #[sol(all_derives)]
    interface IGovernor {
        function getProposalsCount() external view returns (uint256);

        function create(
            address executor,
            address[] memory targets,
            uint256[] memory values,
            string[] memory signatures,
            bytes[] memory calldatas,
            bool[] memory withDelegatecalls,
            bytes32 ipfsHash
        ) external returns (uint256);
    }

    /// Community treasury: holds tokens released by governance.
    #[sol(all_derives)]
    interface ITreasury {
        function transfer(address token, address recipient, uint256 amount) external;
    }

    #[sol(all_derives)]
    interface IERC20 {
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function transfer(address recipient, uint256 amount) external returns (bool);
    }

    /// Staking contract with epoch-scoped accounting and a withdrawal blackout window.
    #[sol(all_derives)]
    interface ISafetyModule {
        struct EpochParameters {
            uint128 interval;
            uint128 offset;
        }

        function getEpochParameters() external view returns (EpochParameters memory);
        function getCurrentEpoch() external view returns (uint256);
        function getTimeRemainingInCurrentEpoch() external view returns (uint256);
        function getBlackoutWindow() external view returns (uint256);
        function DISTRIBUTION_START() external view returns (uint256);
        function getRewardsPerSecond() external view returns (uint256);
        function setRewardsPerSecond(uint256 emissionPerSecond) external;

        function balanceOf(address account) external view returns (uint256);
        function getTotalActiveBalanceCurrentEpoch() external view returns (uint256);
        function getActiveBalanceCurrentEpoch(address staker) external view returns (uint256);
        function getInactiveBalanceCurrentEpoch(address staker) external view returns (uint256);
        function getInactiveBalanceNextEpoch(address staker) external view returns (uint256);
        function getStakeAvailableToWithdraw(address staker) external view returns (uint256);

        function stake(uint256 amount) external;
        function requestWithdrawal(uint256 stakeAmount) external;
        function withdrawStake(address recipient, uint256 stakeAmount) external;
        function withdrawMaxStake(address recipient) external returns (uint256);
        function claimRewards(address recipient) external returns (uint256);
    }
}
