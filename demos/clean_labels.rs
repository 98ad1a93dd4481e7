use std::error::Error;

use stp::{
    CutAtSeparator, ExtractByPattern, REMOVE_PARENTHESES, TRIM_SPACE, Tasks, TrimCharset,
    locale::{self, ConvertText},
    preset,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG=stp=trace shows every convergence pass.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ────────────────────────────────────────────────────────────────
    // Preset – first bare token of a noisy label
    // ────────────────────────────────────────────────────────────────
    let label = preset::clean_label();
    for input in [" abc(123)\n", "abc (123)", "(123)abc"] {
        println!("clean_label  : {input:?} → {:?}", label.process(input));
    }
    // → "abc" for all three

    // ────────────────────────────────────────────────────────────────
    // Custom – track titles from a music catalogue
    // ────────────────────────────────────────────────────────────────
    let title = Tasks::builder()
        .add(CutAtSeparator::new(" / ")) // runs on the first pass only
        .flatten(&REMOVE_PARENTHESES)
        .add(TrimCharset::new(" -–"))
        .build();

    let titles = title.process_all([
        "Yesterday (Remastered 2009) / Parlophone",
        "Blue in Green (Take 3) – ",
        "青い珊瑚礁（ライブ）",
    ]);
    println!("titles       : {titles:?}");
    // → ["Yesterday", "Blue in Green", "青い珊瑚礁"]

    // ────────────────────────────────────────────────────────────────
    // Extraction – invalid patterns fail here, not while processing
    // ────────────────────────────────────────────────────────────────
    let catalogue_no = Tasks::builder()
        .flatten(&REMOVE_PARENTHESES)
        .add(ExtractByPattern::new(r"[A-Z]{2,4}-\d+")?)
        .build();
    println!(
        "catalogue no : {:?}",
        catalogue_no.process("Kind of Blue (CL 1355) CK-64935 reissue")
    );
    // → "CK-64935"

    // ────────────────────────────────────────────────────────────────
    // Locale hook – any `Fn(&str) -> String` converter plugs in
    // ────────────────────────────────────────────────────────────────
    let to_simplified: ConvertText = Box::new(|s: &str| s.replace('東', "东").replace('體', "体"));
    let mut zh = Tasks::new();
    zh.push(TRIM_SPACE).push(locale::processor(to_simplified));
    println!("locale       : {:?}", zh.process("  東京 繁體  "));
    // → "东京 繁体"

    Ok(())
}
