use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use learnhub::learnhub_auth::{Identity, IdentityId, Role, create_token, verify_token};
use learnhub::learnhub_config::JwtConfig;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "learnhub-cli")]
#[command(about = "LearnHub CLI - Developer tools for the LearnHub API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a bearer token with the configured JWT_SECRET
    IssueToken {
        /// Account id (numeric ids are encoded as JSON numbers)
        #[arg(short = 'i', long)]
        id: String,

        /// Role claim, e.g. student, instructor, admin
        #[arg(short = 'r', long)]
        role: Option<String>,

        /// Token lifetime in seconds (defaults to JWT_ACCESS_EXPIRY)
        #[arg(long)]
        ttl: Option<i64>,

        /// Extra identity claims as key=value, repeatable
        #[arg(short = 'c', long = "claim", value_name = "KEY=VALUE")]
        claims: Vec<String>,
    },
    /// Verify a token and print the identity it carries
    InspectToken {
        /// The token to inspect
        token: String,
    },
}

fn parse_id(raw: &str) -> IdentityId {
    raw.parse::<i64>()
        .map(IdentityId::Int)
        .unwrap_or_else(|_| IdentityId::Text(raw.to_string()))
}

/// Parses a `KEY=VALUE` claim. `id` and `role` are set by their own flags and
/// would otherwise be written twice into the token.
fn parse_claim(raw: &str) -> anyhow::Result<(String, Value)> {
    let (key, value) = raw
        .split_once('=')
        .with_context(|| format!("Claim {raw:?} is not KEY=VALUE"))?;

    if matches!(key, "id" | "role") {
        bail!("Claim key {key:?} is reserved, use --{key} instead");
    }

    Ok((key.to_string(), Value::String(value.to_string())))
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let mut jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;

    match cli.command {
        Commands::IssueToken {
            id,
            role,
            ttl,
            claims,
        } => {
            if id.is_empty() || id == "0" {
                bail!("id must identify an account");
            }

            let mut identity = Identity::new(parse_id(&id), role.as_deref().map(Role::from));
            for claim in claims {
                let (key, value) = parse_claim(&claim)?;
                identity.attributes.insert(key, value);
            }

            if let Some(ttl) = ttl {
                jwt_config.access_token_expiry = ttl;
            }

            let token = create_token(&identity, &jwt_config)?;
            println!("{token}");
        }
        Commands::InspectToken { token } => match verify_token(&token, &jwt_config) {
            Ok(identity) => println!("{}", serde_json::to_string_pretty(&identity)?),
            Err(err) => bail!("{err}"),
        },
    }

    Ok(())
}
