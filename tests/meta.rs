#![cfg(not(miri))]

#[test]
fn html_root_url() {
	version_sync::assert_html_root_url_updated!("src/lib.rs");
}

#[test]
fn installation() {
	version_sync::assert_contains_regex!("README.md", "cargo add {name}");
	version_sync::assert_markdown_deps_updated!("README.md");
}

#[test]
fn versioning() {
	version_sync::assert_contains_regex!(
		"README.md",
		r"^`{name}` strictly follows \[Semantic Versioning 2\.0\.0\]"
	);
}
