use std::env;
use std::path::Path;

// ffmpeg-sys-next finds the FFmpeg libraries on its own via pkg-config on
// Unix-likes. Windows builds routinely fail with an unhelpful linker error
// instead, so surface the vcpkg situation as build warnings up front.
fn main() {
    for var in ["FFMPEG_DIR", "VCPKG_ROOT", "VCPKGRS_DYNAMIC", "VCPKGRS_TRIPLET"] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }
    if env::var_os("FFMPEG_DIR").is_some() {
        return;
    }

    let Ok(vcpkg_root) = env::var("VCPKG_ROOT") else {
        warn(
            "FFMPEG_DIR is not set. Install FFmpeg via vcpkg and set VCPKG_ROOT \
             and FFMPEG_DIR so ffmpeg-sys-next can find the libraries.",
        );
        return;
    };

    let triplet = env::var("VCPKGRS_TRIPLET").unwrap_or_else(|_| "x64-windows".to_string());
    let install_dir = Path::new(&vcpkg_root).join("installed").join(&triplet);

    if !install_dir.exists() {
        warn(&format!(
            "VCPKG_ROOT is set but {} does not exist; no FFmpeg install found.",
            install_dir.display()
        ));
        return;
    }

    warn(&format!(
        "Found vcpkg packages at {}. Set FFMPEG_DIR to that path to make \
         ffmpeg-sys-next discovery explicit.",
        install_dir.display()
    ));
    if env::var_os("VCPKGRS_DYNAMIC").is_none() {
        warn("For vcpkg dynamic FFmpeg builds, also set VCPKGRS_DYNAMIC=1.");
    }
}

fn warn(message: &str) {
    println!("cargo:warning={message}");
}
