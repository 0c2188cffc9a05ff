//! Static asset and router paths that respect the deployment base path.
//!
//! When `PUBLIC_URL` is set at compile time (e.g. `/strike` on GitHub Pages)
//! every generated URL is prefixed with it.

pub const LOGO: &str = "static/img/logo.svg";
pub const NAV_ICON: &str = "static/img/navicon.svg";

#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, public_url())
}

/// Basename for the router, `None` when the app is served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(public_url())
}

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let rel = relative.trim_start_matches('/');
    match base.trim_end_matches('/') {
        "" => format!("/{rel}"),
        base => format!("{base}/{rel}"),
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assets_are_root_anchored_without_base() {
        assert_eq!(asset_path(NAV_ICON), "/static/img/navicon.svg");
        assert_eq!(asset_path_with_base("/static/img/logo.svg", ""), "/static/img/logo.svg");
    }

    #[test]
    fn assets_are_prefixed_with_public_base() {
        assert_eq!(
            asset_path_with_base(LOGO, "/strike/"),
            "/strike/static/img/logo.svg"
        );
    }

    #[test]
    fn router_base_is_trimmed_or_absent() {
        assert_eq!(router_base(), None);
        assert_eq!(router_base_with_base(" /strike/ "), Some(String::from("/strike")));
        assert_eq!(router_base_with_base("/"), None);
    }
}
