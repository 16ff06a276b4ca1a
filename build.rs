use fs_extra::copy_items;
use fs_extra::dir::CopyOptions;
use std::env;
use std::path::PathBuf;

fn main() {
    // Rerun when anything inside resources/ changes.
    println!("cargo:rerun-if-changed=resources");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let resources_src = manifest_dir.join("resources");
    if !resources_src.exists() {
        // The demo degrades gracefully without assets; nothing to copy.
        return;
    }

    // OUT_DIR is target/<profile>/build/<pkg>-<hash>/out; three ancestors up
    // is the profile directory the binary lands in. Copying resources there
    // lets the application-directory branch of the resource lookup find them.
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR"));
    let Some(profile_dir) = out_dir.ancestors().nth(3) else {
        return;
    };

    let mut copy_options = CopyOptions::new();
    copy_options.overwrite = true;
    if let Err(err) = copy_items(&["resources/"], profile_dir, &copy_options) {
        println!("cargo:warning=failed to copy resources: {err}");
    }
}
