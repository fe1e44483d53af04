//! Stages the frontend bundle that `assets.rs` embeds with `include_dir!`.
//!
//! `static/dist` mirrors `../frontend/dist` after a `trunk build`. Without a
//! bundle a one-page notice is written there instead, so the host still
//! compiles and answers every route.

use std::fs;
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};

const BUNDLE: &str = "../frontend/dist";
const STAGED: &str = "static/dist";

const NOTICE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8" /><title>Zairza Badges</title></head>
<body>
<p>The frontend bundle has not been built. Run <code>trunk build --release</code>
in <code>frontend/</code>, then rebuild the backend.</p>
</body>
</html>
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={BUNDLE}");

    let bundle = Path::new(BUNDLE);
    let staged = Path::new(STAGED);

    if bundle.join("index.html").is_file() {
        if staged.exists() {
            fs::remove_dir_all(staged)?;
        }
        fs::create_dir_all(staged)?;
        copy(bundle, staged, &CopyOptions::new().overwrite(true).content_only(true))?;
    } else if !staged.join("index.html").is_file() {
        println!("cargo:warning=no frontend bundle at {BUNDLE}, embedding a notice page");
        fs::create_dir_all(staged)?;
        fs::write(staged.join("index.html"), NOTICE)?;
    }
    Ok(())
}
