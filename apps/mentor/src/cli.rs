use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::pager::DEFAULT_PAGE_SIZE;

#[derive(Parser, Debug)]
#[command(name = "mentor", version, about = "Project mentor chat proxy and terminal page")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the POST /chat proxy in front of the LLM API
    Serve {
        /// Listen port (defaults to $PORT, then 8080)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Page through a recommended project list and chat about a project
    Browse {
        /// JSON file holding the full recommended project list
        #[arg(long)]
        projects: PathBuf,
        /// Chat endpoint the page talks to
        #[arg(long, env = "MENTOR_CHAT_URL", default_value = "http://127.0.0.1:8080/chat")]
        endpoint: String,
        /// Cards rendered with the page before any "load more"
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        initial: usize,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
}
