//! Helpers for constructing URLs to static assets that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/trip` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// keep the path relative, as the string templates emit it.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        rel.to_string()
    } else {
        format!("{base}/{rel}")
    }
}
