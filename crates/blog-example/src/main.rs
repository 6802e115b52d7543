use anyhow::Result;
use blog_example::{build_renderer, render_home, render_post, sample_posts};

const SITE: &str = "The Borrowed Blog";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let renderer = build_renderer();
    let posts = sample_posts();

    println!("=== {SITE}: home ===");
    println!("{}", render_home(&renderer, SITE, &posts)?);

    println!("=== {SITE}: {} ===", posts[0].slug);
    println!("{}", render_post(&renderer, SITE, &posts[0])?);

    Ok(())
}
