use anyhow::{Context, Result};

/// Open a listing link in the user's default browser
///
/// # Arguments
/// * `url` - The listing URL to open (e.g., a finn.no ad)
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_url(url: &str) -> Result<()> {
    webbrowser::open(url)
        .with_context(|| format!("Failed to open browser for listing link: {}", url))?;
    Ok(())
}
