use anyhow::Result;
use clap::Parser;

use affected_base::actions;
use affected_base::branch::{branch_name_from_ref, BranchContext};
use affected_base::config;
use affected_base::git::{Git2Repository, Repository};
use affected_base::logger;
use affected_base::provider::GithubRunsClient;
use affected_base::resolver::resolve_base;

#[derive(clap::Parser)]
#[command(
    name = "affected-base",
    about = "Resolve the base and head commits for incremental affected analysis in CI"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Override the configured main branch name")]
    main_branch_name: Option<String>,

    #[arg(long, help = "Override the version bump commit subject matcher")]
    version_bump_matcher: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("affected-base {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = run(args) {
        // Exactly one of {outputs written, failure signaled} per run; the
        // failure path writes nothing.
        actions::set_failed(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = config::load_config(args.config.as_deref())?;
    config.apply_inputs(&actions::action_inputs());
    if let Some(name) = args.main_branch_name {
        config.main_branch_name = name;
    }
    if let Some(matcher) = args.version_bump_matcher {
        config.version_bump_commit_message_summary_matcher = matcher;
    }

    let bump_matcher = config.compiled_bump_matcher()?;

    let ctx = actions::github_context()?;

    let current_ref = actions::github_ref();
    let branch_name = branch_name_from_ref(current_ref.as_deref())?;
    let branch = BranchContext::new(branch_name, &config.main_branch_name);
    logger::debug(&format!(
        "Resolving base for branch '{}' (main branch: '{}')",
        branch.name, config.main_branch_name
    ));

    let repo = Git2Repository::open(".")?;
    let head_sha = repo.head_sha()?;

    let runs = GithubRunsClient::from_env()?;

    let base_sha = resolve_base(
        &repo,
        &runs,
        &ctx,
        &branch,
        &config.main_branch_name,
        bump_matcher.as_ref(),
    )?;

    actions::set_output("base", &base_sha)?;
    actions::set_output("head", &head_sha)?;
    logger::debug(&format!("Resolved base={} head={}", base_sha, head_sha));

    Ok(())
}
