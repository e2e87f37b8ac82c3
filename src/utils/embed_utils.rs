/// Rewrite a Google Drive share link into its embeddable `/preview` form.
///
/// `https://drive.google.com/file/d/<id>/view?usp=drive_link`
/// becomes
/// `https://drive.google.com/file/d/<id>/preview`
///
/// Anything that does not end in a `/view` segment is returned unchanged.
pub fn google_drive_embed_url(url: &str) -> String {
    if let Some(pos) = url.rfind("/view") {
        let tail = &url[pos + "/view".len()..];
        if tail.is_empty() || tail.starts_with('?') {
            return format!("{}/preview", &url[..pos]);
        }
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_share_link_with_query() {
        let url = "https://drive.google.com/file/d/1iwxpq3Pw1uLzODaavPi_5tsd0XL2W7d6/view?usp=drive_link";
        assert_eq!(
            google_drive_embed_url(url),
            "https://drive.google.com/file/d/1iwxpq3Pw1uLzODaavPi_5tsd0XL2W7d6/preview"
        );
    }

    #[test]
    fn rewrites_bare_view_link() {
        let url = "https://drive.google.com/file/d/abc123/view";
        assert_eq!(
            google_drive_embed_url(url),
            "https://drive.google.com/file/d/abc123/preview"
        );
    }

    #[test]
    fn leaves_other_urls_alone() {
        let url = "https://example.com/clips/viewer.mp4";
        assert_eq!(google_drive_embed_url(url), url);

        let already = "https://drive.google.com/file/d/abc123/preview";
        assert_eq!(google_drive_embed_url(already), already);
    }
}
