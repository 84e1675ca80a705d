use safety_gov_tools::chain::{ChainClient, SendOptions, TxSender};
use safety_gov_tools::cli::Cli;
use safety_gov_tools::governance::{
    submit_proposal, DeploymentConfig, IpfsHash, ProposalRequest, SubmitOptions,
};
use safety_gov_tools::logging::{self, LogFormat};
use safety_gov_tools::output;
use safety_gov_tools::rpc::RpcClient;
use safety_gov_tools::signer::SignerManager;

use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(LogFormat::from_json_flag(cli.log_json), &cli.log_level)?;

    let config = DeploymentConfig::load(&cli.config)?;
    let ipfs_hash: IpfsHash = cli.ipfs_hash.parse()?;

    let client = Arc::new(RpcClient::with_timeout(
        &cli.rpc_url,
        Duration::from_secs(cli.rpc_timeout_secs),
    )?);
    let chain_id = client.chain_id().await?;
    output::print_banner(client.url(), chain_id);

    // An explicit key takes precedence over the config's deployer key
    let signers = Arc::new(SignerManager::new());
    let explicit_signer = match &cli.private_key {
        Some(key) => Some(signers.import_hex_key(key).await?),
        None => None,
    };

    let options = SendOptions {
        gas_multiplier_pct: cli.gas_multiplier_pct,
        poll_interval: Duration::from_millis(cli.receipt_poll_ms),
        max_polls: cli.receipt_max_polls,
    };
    let sender = TxSender::new(client, signers, options);

    let request = ProposalRequest {
        ipfs_hash,
        token: cli.token,
        governor: cli.governor,
        timelock: cli.timelock,
        treasury: cli.treasury,
        signer: explicit_signer,
    };
    output::print_funding(
        &config.multisig_address,
        config.funding_amount_base_units()?,
        config.token_decimals,
    );

    let submission =
        submit_proposal(&sender, &config, &request, &SubmitOptions { dry_run: cli.dry_run })
            .await?;

    output::print_proposer(&submission.proposer);
    output::print_proposal(&submission.proposal);
    output::print_calldata(&submission);
    output::print_submission(&submission);

    Ok(())
}
