#[cfg(feature = "with-http")]
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use mailsift::{Metric, Settings};

#[derive(Parser)]
#[command(name = "mailsift-cli", version)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// write report to file (écriture atomique, format selon --format)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// configuration des listes allow/deny (INI)
    #[arg(long, env = "MAILSIFT_LISTS", global = true)]
    pub lists: Option<PathBuf>,

    /// table de typos remplaçant la table intégrée (`typo,correction` par ligne)
    #[arg(long, env = "MAILSIFT_TYPO_MAP", global = true)]
    pub typo_map: Option<PathBuf>,

    /// domaines de référence pour les suggestions (un par ligne)
    #[arg(long, env = "MAILSIFT_DOMAINS", global = true)]
    pub domains: Option<PathBuf>,

    /// distance metric: levenshtein|damerau
    #[arg(long, default_value = "levenshtein", global = true)]
    pub metric: Metric,

    /// désactive les requêtes DNS
    #[arg(long, global = true)]
    pub no_dns: bool,

    /// plus de logs sur stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    Validate {
        /// adresses e-mail à valider
        #[arg(required = true)]
        emails: Vec<String>,
    },
    /// sert l'API JSON
    #[cfg(feature = "with-http")]
    Serve {
        /// adresse d'écoute
        #[arg(long, default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn settings(&self) -> Settings {
        Settings {
            lists: self.lists.clone(),
            typo_map: self.typo_map.clone(),
            reference_domains: self.domains.clone(),
            metric: self.metric,
            dns: !self.no_dns,
        }
    }
}
