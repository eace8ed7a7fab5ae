use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUT_DIR: &str = "assets/dist";
const OUT_FILE: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all(OUT_DIR).expect("Failed to create assets/dist directory");

    // Resolve @import chain from main.css into one stylesheet
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .unwrap_or_else(|e| panic!("Failed to bundle {}: {}", ENTRY, e));

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    // Only touch the file when the output changed, so dx does not reload for nothing
    let unchanged = fs::read_to_string(OUT_FILE)
        .map(|existing| existing == css.code)
        .unwrap_or(false);
    if !unchanged {
        fs::write(OUT_FILE, &css.code).expect("Failed to write bundle.css");
    }
}
