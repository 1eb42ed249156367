// README-to-rustdoc transformation shared by the crate build scripts.
// Include with: include!("../build_common.rs");
//
// The including file must import std::env, std::fs and std::path::Path.

/// Copy the crate README into `OUT_DIR/README_GENERATED.md` with links
/// rewritten for rustdoc.
///
/// `src/foo.rs` links become module links and `../../README.md` links point at
/// the workspace repository URL. A crate without a README gets a one-line
/// placeholder so `include_str!` still resolves.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("README_GENERATED.md");

    let Ok(content) = fs::read_to_string(Path::new(crate_dir).join("README.md")) else {
        let name = env::var("CARGO_PKG_NAME").unwrap_or_default();
        fs::write(dest_path, format!("# {name}\n")).unwrap();
        return;
    };

    let mut rustdoc_content = content.replace("](src/", "](").replace(".rs)", ")");
    if let Some(url) = workspace_repo_url(crate_dir) {
        rustdoc_content = rustdoc_content.replace("](../../README.md", &format!("]({url}"));
    }

    fs::write(dest_path, rustdoc_content).unwrap();
}

/// `repository = "..."` from the workspace Cargo.toml, if present.
fn workspace_repo_url(crate_dir: &str) -> Option<String> {
    let workspace_toml = Path::new(crate_dir).parent()?.parent()?.join("Cargo.toml");
    let content = fs::read_to_string(workspace_toml).ok()?;

    content.lines().map(str::trim).find_map(|line| {
        if !line.starts_with("repository") || !line.contains('=') {
            return None;
        }
        let start = line.find('"')?;
        let end = line.rfind('"')?;
        (start < end).then(|| line[start + 1..end].to_string())
    })
}
