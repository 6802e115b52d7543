//! The blog's pages: template bodies and how they fit together.
//!
//! The site is three templates deep at most:
//!
//! - `layout` is the HTML shell. It places the `title` and `head`
//!   sections and the extending page's own output.
//! - `home` extends `layout` and lists the posts.
//! - `blog.post` extends `layout`, fills the `title` section, and
//!   pulls the `blog.meta` partial into the `head` section.
//!
//! Page data is plain serde structs; string fields are escaped by the
//! engine on access, and the one place a body digs into an array
//! itself ([`escape_html`] in the home listing) escapes by hand.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use viewstack::{escape_html, Renderer, Scope};

/// One blog post, used both for the post page and the home listing.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub published: String,
    pub body: String,
}

#[derive(Serialize)]
struct HomePage<'a> {
    site: &'a str,
    posts: &'a [Post],
}

#[derive(Serialize)]
struct PostPage<'a> {
    site: &'a str,
    #[serde(flatten)]
    post: &'a Post,
}

/// Directory of the `.view` files that anchor the template tree.
pub fn templates_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Builds the site renderer with every page body registered.
pub fn build_renderer() -> Renderer {
    let mut renderer = Renderer::new(templates_root());

    renderer.add_template("layout", |scope: &mut Scope| {
        scope.write("<!doctype html>\n<html>\n<head>\n<title>");
        match scope.section("title") {
            Some(title) => scope.write(&title),
            None => scope.show("site"),
        }
        scope.write("</title>\n");
        if let Some(head) = scope.section("head") {
            scope.write(&head);
        }
        scope.write("</head>\n<body>\n<header><a href=\"/\">");
        scope.show("site");
        scope.write("</a></header>\n<main>\n");
        if let Some(content) = scope.content() {
            scope.write(&content);
        }
        scope.write("</main>\n</body>\n</html>\n");
        Ok(())
    });

    renderer.add_template("home", |scope: &mut Scope| {
        scope.extend("layout");
        scope.write("<h1>Latest posts</h1>\n<ul>\n");
        if let Value::Array(posts) = scope.get("posts") {
            for post in &posts {
                let slug = post.get("slug").and_then(Value::as_str).unwrap_or_default();
                let title = post.get("title").and_then(Value::as_str).unwrap_or_default();
                scope.write("<li><a href=\"/blog/");
                scope.write(slug);
                scope.write("\">");
                // Values inside arrays are not auto-escaped.
                scope.write(&escape_html(title));
                scope.write("</a></li>\n");
            }
        }
        scope.write("</ul>\n");
        Ok(())
    });

    renderer.add_template("blog.post", |scope: &mut Scope| {
        scope.extend("layout");

        scope.start("title")?;
        scope.show("title");
        scope.write(" | ");
        scope.show("site");
        scope.end();

        scope.start("head")?;
        scope.include("blog.meta")?;
        scope.end();

        scope.write("<article>\n<h1>");
        scope.show("title");
        scope.write("</h1>\n<p class=\"byline\">by ");
        scope.show("author");
        scope.write("</p>\n<p>");
        scope.show("body");
        scope.write("</p>\n</article>\n");
        Ok(())
    });

    renderer.add_template("blog.meta", |scope: &mut Scope| {
        scope.write("<meta name=\"author\" content=\"");
        scope.show("author");
        scope.write("\">\n<meta name=\"date\" content=\"");
        scope.show("published");
        scope.write("\">\n");
        Ok(())
    });

    renderer
}

/// Renders the home page listing `posts`.
pub fn render_home(renderer: &Renderer, site: &str, posts: &[Post]) -> viewstack::Result<String> {
    renderer.render_with("home", HomePage { site, posts })
}

/// Renders the page for one post.
pub fn render_post(renderer: &Renderer, site: &str, post: &Post) -> viewstack::Result<String> {
    renderer.render_with("blog.post", PostPage { site, post })
}

/// Demo content for the binary and the tests.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            slug: "hello-world".into(),
            title: "Hello, World!".into(),
            author: "Mara".into(),
            published: "2025-11-03".into(),
            body: "First post on the new engine.".into(),
        },
        Post {
            slug: "ownership-and-borrowing".into(),
            title: "Ownership & Borrowing <in practice>".into(),
            author: "Sasha".into(),
            published: "2025-11-17".into(),
            body: "Why the borrow checker is your friend.".into(),
        },
    ]
}
