use std::fs;
use std::path::Path;

// Embeds the trunk output of `frontend/` when it has been built; otherwise the
// placeholder page committed under `static/dist` is served.
fn main() {
    let static_dir = Path::new("static");
    let frontend_dist = Path::new("../frontend/dist");

    if frontend_dist.join("index.html").exists() {
        let _ = fs::remove_dir_all(static_dir);
        fs::create_dir_all(static_dir).expect("create static dir");
        fs_extra::dir::copy(
            frontend_dist,
            static_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("copy frontend dist into static dir");
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
}
