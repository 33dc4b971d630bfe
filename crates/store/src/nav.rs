//! Page access gating and query-parameter reading.
//!
//! Pages are static HTML surfaces; the only cross-page channels are the
//! query string and the in-memory session. This module decides redirects
//! and decodes the three parameters the pages exchange.

use monsoon_core::{Category, OrderId};

/// The storefront's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Products,
    Cart,
    Checkout,
    Orders,
    Analytics,
    Login,
    Signup,
}

impl Page {
    /// Whether a page is only reachable with a logged-in user.
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        !matches!(self, Self::Login | Self::Signup)
    }
}

/// Where to send a visitor, if their session doesn't fit the page.
///
/// Unauthenticated visitors on protected pages go to login;
/// authenticated visitors on login/signup go home.
#[must_use]
pub const fn access_redirect(page: Page, logged_in: bool) -> Option<Page> {
    if page.requires_auth() && !logged_in {
        return Some(Page::Login);
    }
    if !page.requires_auth() && logged_in {
        return Some(Page::Home);
    }
    None
}

/// Decode the first occurrence of a query parameter.
#[must_use]
pub fn query_param(query: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

/// Resolve the `category` parameter into a category filter value.
///
/// The slug resolves to the matching loaded category's display name; an
/// unknown slug is used verbatim. Either way the first letter is
/// uppercased, matching the display-name convention.
#[must_use]
pub fn category_filter_from_query(query: &str, categories: &[Category]) -> Option<String> {
    let slug = query_param(query, "category")?;
    let name = categories
        .iter()
        .find(|category| category.slug.as_str() == slug)
        .map_or(slug, |category| category.name.clone());
    Some(capitalize_first(&name))
}

/// The `placed` parameter: the freshly placed order to banner.
#[must_use]
pub fn placed_order_from_query(query: &str) -> Option<OrderId> {
    query_param(query, "placed").map(OrderId::new)
}

/// The `message` parameter: a notice to show above the login form.
#[must_use]
pub fn login_notice_from_query(query: &str) -> Option<String> {
    query_param(query, "message")
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
