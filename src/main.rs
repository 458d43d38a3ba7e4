use devfolio::config::PortfolioConfig;
use devfolio::fetcher::PortfolioFetcher;
use devfolio::view_model::{build_view_model, FilterCriteria};

use tracing_subscriber::EnvFilter;

/// Account shown when no argument is given.
const DEFAULT_ACCOUNT: &str = "LilMortal";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ACCOUNT.to_string());

    let fetcher = PortfolioFetcher::new(PortfolioConfig::new(&username));
    fetcher.fetch_all().await;
    let snapshot = fetcher.snapshot().await;

    if let Some(message) = snapshot.status.error() {
        eprintln!("{}: {}", username, message);
        std::process::exit(1);
    }

    if let Some(user) = &snapshot.user {
        let name = user.name.as_deref().unwrap_or(&user.login);
        println!("{} (@{})", name, user.login);
        if let Some(bio) = &user.bio {
            println!("  {}", bio);
        }
        println!(
            "  {} public repos · {} followers",
            user.public_repos, user.followers
        );
    }

    let vm = build_view_model(&snapshot.repos, &FilterCriteria::default());
    println!(
        "\n{} repositories · {} stars · {} forks · languages: {}",
        vm.repos.len(),
        vm.total_stars,
        vm.total_forks,
        vm.languages.join(", ")
    );
    for repo in &vm.repos {
        println!(
            "  {:<30} {:>6}★  {}",
            repo.name,
            repo.stargazers_count,
            repo.language.as_deref().unwrap_or("-")
        );
    }
}
