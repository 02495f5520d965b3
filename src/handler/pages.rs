//! HTML pages
//!
//! The home page lists the joke endpoints and offers a picker that calls the
//! JSON API from the browser. About and contact are static text.

use crate::api::{JokeLink, JOKE_LINKS};
use crate::handler::RequestContext;
use crate::http::{self, HttpResponse};

/// Site pages served outside `/api/` and `/static/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Contact,
}

impl Page {
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" | "/index.html" => Some(Self::Home),
            "/about" => Some(Self::About),
            "/contact" => Some(Self::Contact),
            _ => None,
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

pub fn serve_page(ctx: &RequestContext<'_>, page: Page, site_name: &str) -> HttpResponse {
    let body = match page {
        Page::Home => render_home(JOKE_LINKS),
        Page::About => render_about(),
        Page::Contact => render_contact(),
    };
    http::build_html_response(render_layout(site_name, page, &body), ctx.is_head)
}

fn render_layout(site_name: &str, page: Page, body: &str) -> String {
    let site = escape_html(site_name);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | {site}</title>
    <link rel="icon" type="image/svg+xml" href="/favicon.svg">
    <link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
        <a href="/contact">Contact</a>
    </nav>
    <main>
        <h1>{site}</h1>
{body}
    </main>
    <script src="/static/js/jokes.js"></script>
</body>
</html>"#,
        title = page.title(),
    )
}

fn render_home(links: &[JokeLink]) -> String {
    let list: String = links
        .iter()
        .map(|link| {
            format!(
                "            <li><a href=\"{url}\">{name}</a></li>\n",
                url = link.url,
                name = link.name,
            )
        })
        .collect();
    let options: String = links
        .iter()
        .map(|link| {
            format!(
                "                <option value=\"{value}\">{name}</option>\n",
                value = link.url.trim_start_matches("/api/"),
                name = link.name,
            )
        })
        .collect();

    format!(
        r#"        <p>Pick a category and get a freshly generated joke.</p>
        <form id="jokeForm">
            <label for="joke-type">Category</label>
            <select id="joke-type">
{options}            </select>
            <button type="submit">Tell me a joke</button>
        </form>
        <section id="resultSection" hidden>
            <p id="randomJokeDisplay"></p>
            <button type="button" id="copyBtn">Copy</button>
        </section>
        <h2>JSON API</h2>
        <ul>
{list}        </ul>"#
    )
}

fn render_about() -> String {
    r#"        <p>Every joke is assembled on the spot from a subject, something it did,
        and a punchline that suits it, dropped into one of a handful of sentence
        patterns. Tech jokes star programmers, servers and robots; family jokes
        star cats, dogs and grandmas.</p>
        <p>The same jokes are available as JSON from <code>/api/tech-joke</code>,
        <code>/api/family-joke</code> and <code>/api/random-joke</code>.</p>"#
        .to_string()
}

fn render_contact() -> String {
    r#"        <p>Found a joke that fell flat, or have a subject worth adding?
        Open an issue in the project repository.</p>"#
        .to_string()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
