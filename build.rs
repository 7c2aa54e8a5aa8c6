//! Stamps dev builds of `ftl` with the short git SHA.
//!
//! `ftl --version` prints `<pkg version> (<sha>)` unless the `release` feature
//! is on, in which case nothing is emitted and the plain version is used.

#[cfg(not(feature = "release"))]
fn emit_git_sha() -> Result<(), Box<dyn std::error::Error>> {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let git = GitclBuilder::default().sha(true).build()?;
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(not(feature = "release"))]
    if let Err(e) = emit_git_sha() {
        // Source tarballs have no .git
        println!("cargo:warning=git SHA unavailable: {}", e);
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}
