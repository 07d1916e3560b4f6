//! A terminal walkthrough of the Connectify client core.
//!
//! Signs in as the seeded demo account, browses the feed, votes,
//! comments, and checks the leaderboard — then leaves the session
//! stored, so a second run restores it through `bootstrap` instead of
//! logging in again (until the token expires).
//!
//! Run with `RUST_LOG=debug` to watch the layers underneath.

use std::error::Error;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use connectify::prelude::*;

/// Where the session token and activity marker live between runs.
const SESSION_FILE: &str = ".connectify-session.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = ClientBuilder::new()
        .medium(FileMedium::new(SESSION_FILE))
        .build();

    walkthrough(&client).await?;

    println!("\nThe session stays stored in {SESSION_FILE};");
    println!("run again to see it restored without a login.");
    Ok(())
}

/// The demo scenario, generic over the medium so tests can run it
/// in memory.
async fn walkthrough<M: KeyValueMedium + Clone>(
    client: &Client<M>,
) -> Result<(), ConnectifyError> {
    match client.bootstrap().await {
        AuthState::Authenticated(session) => {
            println!("Welcome back, {}!", session.user.username);
        }
        _ => {
            println!("Signing in as the demo account...");
            let session = client.login("taha@connectify.com", MOCK_PASSWORD).await?;
            println!("Signed in as {}.", session.user.username);
        }
    }

    println!("\nLatest posts:");
    let posts = client.posts().await;
    for post in posts.iter().take(5) {
        println!(
            "  [{:>3}] {}: {}",
            post.likes,
            post.username,
            first_line(&post.content)
        );
    }

    let first = &posts[0];
    client.vote(first.id).await?;
    client.record_activity(ActivitySignal::Click).await;
    println!(
        "\nVoted on {}'s post (likes go up by {}).",
        first.username, VOTE_WEIGHT
    );

    let comment = client
        .add_comment(first.id, "Love where this is going!")
        .await?;
    client.record_activity(ActivitySignal::KeyDown).await;
    println!("Commented as {}: {}", comment.username, comment.content);

    println!("\nLeaderboard:");
    for (rank, entry) in client.leaderboard().await.iter().take(3).enumerate() {
        println!(
            "  #{} {} with {} points",
            rank + 1,
            entry.user.username,
            entry.points
        );
    }

    Ok(())
}

/// First line of a post, capped for terminal output. Cuts on char
/// boundaries; the seeded dataset is full of emoji.
fn first_line(content: &str) -> String {
    const MAX_CHARS: usize = 56;
    let line = content.lines().next().unwrap_or_default();
    if line.chars().count() > MAX_CHARS {
        let cut: String = line.chars().take(MAX_CHARS).collect();
        format!("{cut}…")
    } else {
        line.to_string()
    }
}
