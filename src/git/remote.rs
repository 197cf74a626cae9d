/// Convert a remote URL into a browsable https URL.
///
/// SSH-style remotes (`git@host:path`) become `https://host/path` and a
/// trailing `.git` is removed. Other URLs only lose the `.git` suffix.
pub fn normalize_remote_url(url: &str) -> String {
    let url = url.trim();

    let https = match url.strip_prefix("git@").and_then(|rest| rest.split_once(':')) {
        Some((host, path)) => format!("https://{}/{}", host, path.trim_start_matches('/')),
        None => url.to_string(),
    };

    match https.strip_suffix(".git") {
        Some(stripped) => stripped.to_string(),
        None => https,
    }
}
