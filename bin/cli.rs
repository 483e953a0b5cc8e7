//! CLI tool for deploying and driving the token distributor.

use token_distributor::distribution::shares::pair_recipients;
use token_distributor::distribution::Distributor;
use token_distributor::token::StableToken;
use odra::casper_types::U256;
use odra::host::{HostEnv, NoArgs};
use odra::prelude::{Address, Addressable};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

/// Gas for deploying either contract.
const DEPLOY_GAS: u64 = 400_000_000_000;

/// Gas for initialization; the share table is stored in one named key.
const INITIALIZE_GAS: u64 = 20_000_000_000;

/// Gas for a round paying out to `MAX_RECIPIENTS + 1` accounts.
const DISTRIBUTE_GAS: u64 = 60_000_000_000;

/// Deploys an uninitialized distributor.
pub struct DistributorDeployScript;

impl DeployScript for DistributorDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        let distributor = Distributor::load_or_deploy(
            &env,
            NoArgs,
            container,
            DEPLOY_GAS
        )?;

        println!("Distributor deployed to: {:?}", distributor.address());
        Ok(())
    }
}

/// Deploys a 6-decimal stable token for local and test networks.
pub struct StableTokenDeployScript;

impl DeployScript for StableTokenDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use token_distributor::token::StableTokenInitArgs;

        let token = StableToken::load_or_deploy(
            &env,
            StableTokenInitArgs {
                name: String::from("USD Coin"),
                symbol: String::from("USDC"),
                decimals: 6,
            },
            container,
            DEPLOY_GAS
        )?;

        println!("Stable token deployed to: {:?}", token.address());
        Ok(())
    }
}

fn config_args(recipient_args: Vec<CommandArg>) -> Vec<CommandArg> {
    let mut args = vec![CommandArg::new(
        "token",
        "Address of the CEP-18 token to distribute",
        NamedCLType::Key,
    )];
    args.extend(recipient_args);
    args.extend([
        CommandArg::new(
            "reward_target",
            "Account receiving the reward share and the rounding residual",
            NamedCLType::Key,
        ),
        CommandArg::new(
            "reward_share",
            "Reward share in basis points",
            NamedCLType::U32,
        ),
        CommandArg::new(
            "amount",
            "Amount distributed per round, in base units",
            NamedCLType::U256,
        ),
    ]);
    args
}

/// Scenario initializing the distributor with an explicit share table.
pub struct InitializeScenario;

impl Scenario for InitializeScenario {
    fn args(&self) -> Vec<CommandArg> {
        config_args(vec![
            CommandArg::new(
                "recipient",
                "Recipient account, repeated once per recipient",
                NamedCLType::Key,
            )
            .list(),
            CommandArg::new(
                "share",
                "Recipient share in basis points, in recipient order",
                NamedCLType::U32,
            )
            .list(),
        ])
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut distributor = container.contract_ref::<Distributor>(env)?;
        let token = args.get_single::<Address>("token")?;
        let accounts = args.get_many::<Address>("recipient")?;
        let shares = args.get_many::<u32>("share")?;
        let reward_target = args.get_single::<Address>("reward_target")?;
        let reward_share = args.get_single::<u32>("reward_share")?;
        let amount = args.get_single::<U256>("amount")?;

        let (recipient_count, share_count) = (accounts.len(), shares.len());
        let recipients = pair_recipients(accounts, shares).ok_or_else(|| Error::OdraError {
            message: format!(
                "invalid arguments: got {} recipients but {} shares",
                recipient_count, share_count
            ),
        })?;

        env.set_gas(INITIALIZE_GAS);
        distributor.try_initialize(token, recipients, reward_target, reward_share, amount)?;

        println!("Distributor initialized");
        Ok(())
    }
}

impl ScenarioMetadata for InitializeScenario {
    const NAME: &'static str = "initialize";
    const DESCRIPTION: &'static str =
        "Configures the distributor with per-recipient shares (one time only)";
}

/// Scenario initializing the distributor with one share split equally
/// across the recipient group.
pub struct InitializeEqualSplitScenario;

impl Scenario for InitializeEqualSplitScenario {
    fn args(&self) -> Vec<CommandArg> {
        config_args(vec![
            CommandArg::new(
                "recipient",
                "Recipient account, repeated once per recipient",
                NamedCLType::Key,
            )
            .list(),
            CommandArg::new(
                "recipients_share",
                "Share of the whole recipient group in basis points",
                NamedCLType::U32,
            ),
        ])
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut distributor = container.contract_ref::<Distributor>(env)?;
        let token = args.get_single::<Address>("token")?;
        let recipients = args.get_many::<Address>("recipient")?;
        let recipients_share = args.get_single::<u32>("recipients_share")?;
        let reward_target = args.get_single::<Address>("reward_target")?;
        let reward_share = args.get_single::<u32>("reward_share")?;
        let amount = args.get_single::<U256>("amount")?;

        env.set_gas(INITIALIZE_GAS);
        distributor.try_initialize_equal_split(
            token,
            recipients,
            recipients_share,
            reward_target,
            reward_share,
            amount,
        )?;

        println!("Distributor initialized");
        Ok(())
    }
}

impl ScenarioMetadata for InitializeEqualSplitScenario {
    const NAME: &'static str = "initialize-equal-split";
    const DESCRIPTION: &'static str =
        "Configures the distributor with an equally split recipient share (one time only)";
}

/// Scenario running one distribution round.
pub struct DistributeScenario;

impl Scenario for DistributeScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args
    ) -> Result<(), Error> {
        let mut distributor = container.contract_ref::<Distributor>(env)?;

        env.set_gas(DISTRIBUTE_GAS);
        distributor.try_distribute()?;

        println!("Distribution round {} complete", distributor.try_rounds()?);
        Ok(())
    }
}

impl ScenarioMetadata for DistributeScenario {
    const NAME: &'static str = "distribute";
    const DESCRIPTION: &'static str = "Runs one distribution round";
}

/// Scenario printing configuration and holdings.
pub struct StatusScenario;

impl Scenario for StatusScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args
    ) -> Result<(), Error> {
        let distributor = container.contract_ref::<Distributor>(env)?;

        if !distributor.try_is_initialized()? {
            println!("Distributor is not initialized");
            return Ok(());
        }

        println!("Token:               {:?}", distributor.try_token()?);
        for recipient in distributor.try_recipients()? {
            println!("Recipient:           {:?} ({} bps)", recipient.account, recipient.share);
        }
        println!(
            "Reward target:       {:?} ({} bps)",
            distributor.try_reward_target()?,
            distributor.try_reward_share()?
        );
        println!("Amount per round:    {}", distributor.try_distribution_amount()?);
        println!("Balance:             {}", distributor.try_token_balance()?);
        println!("Rounds completed:    {}", distributor.try_rounds()?);
        println!("Total distributed:   {}", distributor.try_total_distributed()?);
        Ok(())
    }
}

impl ScenarioMetadata for StatusScenario {
    const NAME: &'static str = "status";
    const DESCRIPTION: &'static str = "Prints the distributor configuration and holdings";
}

/// Main function to run the CLI tool.
pub fn main() {
    OdraCli::new()
        .about("CLI tool for the token distributor")
        // Deploy scripts
        .deploy(DistributorDeployScript)
        .deploy(StableTokenDeployScript)
        // Contract references
        .contract::<Distributor>()
        .contract::<StableToken>()
        // Scenarios
        .scenario(InitializeScenario)
        .scenario(InitializeEqualSplitScenario)
        .scenario(DistributeScenario)
        .scenario(StatusScenario)
        .build()
        .run();
}
