use crosswind_core::FileStorage;
use crosswind_transform::{transform_css, DictionaryStore, TransformOptions};

fn main() {
    // 字典保存在临时目录下，重复运行会读到上次写入的内容
    let dir = std::env::temp_dir().join("crosswind-demo");
    let mut store = DictionaryStore::load(FileStorage::new(&dir));
    println!("📚 Dictionary at {} ({} entries)\n", dir.display(), store.len());

    let css = "\
/* Button/Primary */
color: var(--Text-On-Brand, #FFFFFF);
font-family: var(--Font-Body, \"Inter\");
font-size: 14px;
font-weight: 600;
line-height: 20px;
padding: 8px 16px;
border-radius: 8px;
background: var(--Brand, #2563EB);
box-shadow: 0px 1px 2px 0px rgba(0, 0, 0, 0.05);
";

    let cases = vec![
        ("plain", TransformOptions::new()),
        ("hover", TransformOptions::new().with_prefixes("hover")),
        (
            "existing",
            TransformOptions::new().with_existing_classes("inline-flex items-center text-sm"),
        ),
    ];

    println!("🔄 Without dictionary entries:");
    for (name, options) in &cases {
        let result = transform_css(css, &store, options);
        println!("   [{}] {}", name, result.classes);
    }

    if let Err(e) = store.set("--Brand", "brand") {
        println!("   ❌ {}", e);
    }
    if let Err(e) = store.set("--Font-Body", "font-sans") {
        println!("   ❌ {}", e);
    }

    println!("\n🔄 With dictionary entries:");
    for (name, options) in &cases {
        let result = transform_css(css, &store, options);
        println!("   [{}] {}", name, result.classes);
        for diagnostic in &result.diagnostics {
            println!("      ⚠️  {:?}: {}", diagnostic.level, diagnostic.message);
        }
    }
}
