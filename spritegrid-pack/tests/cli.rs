use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{Rgba, RgbaImage};
use spritegrid::{Mapping, Rect};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("spritegrid-cli-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spritegrid-pack"))
        .current_dir(dir)
        .env("RUST_LOG", "warn")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn prints_mapping_and_writes_sheet() {
    let dir = scratch("ok");
    RgbaImage::from_pixel(10, 20, Rgba([1, 0, 0, 255])).save(dir.join("A.png")).unwrap();
    RgbaImage::from_pixel(15, 5, Rgba([0, 1, 0, 255])).save(dir.join("B.png")).unwrap();
    RgbaImage::from_pixel(10, 20, Rgba([0, 0, 1, 255])).save(dir.join("C.png")).unwrap();

    let out = run(&dir, &["-o", "atlas", "--pfx", "img/", "A.png", "B.png", "C.png", "gone.png"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let mapping = Mapping::from_json(&String::from_utf8(out.stdout).unwrap()).unwrap();
    assert_eq!(mapping.len(), 3);
    assert_eq!(mapping.get("img/B.png"), Some(&Rect::new(0, 0, 15, 5)));
    assert_eq!(mapping.get("img/A.png"), Some(&Rect::new(17, 0, 10, 20)));
    assert_eq!(mapping.get("img/C.png"), Some(&Rect::new(0, 22, 10, 20)));
    assert!(String::from_utf8_lossy(&out.stderr).contains("gone.png"));

    let sheet = image::open(dir.join("atlas.png")).unwrap();
    assert_eq!((sheet.width(), sheet.height()), (32, 42));
    assert!(!dir.join("atlas.json").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unwritable_output_fails() {
    let dir = scratch("fail");
    RgbaImage::new(2, 2).save(dir.join("a.png")).unwrap();

    let out = run(&dir, &["-o", "missing/dir/sprite", "a.png"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to write sprite sheet"));
    fs::remove_dir_all(&dir).unwrap();
}
