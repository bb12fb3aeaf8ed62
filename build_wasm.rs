use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    println!("🚀 Building article-actions WASM with demo pages...");

    // 1. wasm-pack でビルド
    println!("📦 Running wasm-pack build...");
    let status = Command::new("wasm-pack")
        .env("CARGO_INCREMENTAL", "1") // 差分ビルドON🔥
        .args(&[
            "build",
            "--dev", // devビルドで高速化
            "--target",
            "web",
            "--out-dir",
            "pkg",
            "--no-default-features",
            "--features",
            "wasm",
        ])
        .status()
        .expect("Failed to execute wasm-pack");

    if !status.success() {
        eprintln!("❌ wasm-pack build failed");
        std::process::exit(1);
    }

    println!("✅ WASM build completed");

    // 2. 絶対パスまたは相対パスを正しく解決
    let pkg_dir = if Path::new("pkg").exists() {
        Path::new("pkg")
    } else {
        // カレントディレクトリがpkgの場合
        Path::new(".")
    };

    // 3. article_actions.js のwasmパスを絶対パスに修正
    println!("🔧 Fixing asset paths...");
    fix_asset_paths(pkg_dir);

    // 4. デモページを生成
    println!("📝 Generating demo pages...");
    generate_demo_pages(pkg_dir);

    println!("✅ Demo pages generated:");
    println!("   - pkg/index.html");
    println!("   - pkg/article.html");
    println!("   - pkg/new-article.html");
    println!("   - pkg/edit-article.html");

    println!("\n🎉 Build complete! To test:");
    println!("   cd demo_server ; cargo run --release");
    println!("   Then open: http://localhost:8000");
}

/// どのデモページでも同じ形でWASMモジュールを読み込む
const MODULE_LOADER: &str = r#"    <script type="module">
        import init from '/article_actions.js';
        init().catch(console.error);
    </script>"#;

fn demo_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>
        body {{
            font-family: sans-serif;
            max-width: 640px;
            margin: 40px auto;
            padding: 0 16px;
        }}
        input, textarea {{
            display: block;
            width: 100%;
            margin: 8px 0 16px;
            padding: 8px;
            box-sizing: border-box;
        }}
        button {{
            padding: 8px 24px;
        }}
    </style>
</head>
<body>
{}
{}
</body>
</html>
"#,
        title, body, MODULE_LOADER
    )
}

fn generate_demo_pages(pkg_dir: &Path) {
    // 記事一覧・個別記事への遷移先はこのデモには存在しないため、
    // demo_serverが拡張子なしのルートをindex.htmlへフォールバックさせる
    let index = demo_page(
        "article-actions demo",
        r#"    <h1>article-actions デモ</h1>
    <p>遷移先（/articles など）はこのページにフォールバックします。</p>
    <ul>
        <li><a href="/article.html">article.html — 削除ボタン（article-id=42）</a></li>
        <li><a href="/new-article.html">new-article.html — 登録フォーム</a></li>
        <li><a href="/edit-article.html?id=42">edit-article.html?id=42 — 修正フォーム</a></li>
    </ul>"#,
    );

    // 個別記事ページ相当: 隠しフィールドのIDと削除ボタンだけを持つ
    let article = demo_page(
        "article-actions demo: delete",
        r#"    <h1>記事の削除</h1>
    <input type="hidden" id="article-id" value="42">
    <button id="delete-btn" type="button">삭제</button>"#,
    );

    // 登録フォーム: create-btnのみ
    let new_article = demo_page(
        "article-actions demo: create",
        r#"    <h1>記事の登録</h1>
    <input type="text" id="title" placeholder="제목">
    <textarea id="content" rows="8" placeholder="내용"></textarea>
    <button id="create-btn" type="button">등록</button>"#,
    );

    // 修正フォーム: IDはURLの?idから読まれる
    let edit_article = demo_page(
        "article-actions demo: modify",
        r#"    <h1>記事の修正</h1>
    <input type="text" id="title" placeholder="제목">
    <textarea id="content" rows="8" placeholder="내용"></textarea>
    <button id="modify-btn" type="button">수정</button>"#,
    );

    fs::write(pkg_dir.join("index.html"), index).expect("Failed to write index.html");
    fs::write(pkg_dir.join("article.html"), article).expect("Failed to write article.html");
    fs::write(pkg_dir.join("new-article.html"), new_article)
        .expect("Failed to write new-article.html");
    fs::write(pkg_dir.join("edit-article.html"), edit_article)
        .expect("Failed to write edit-article.html");
}

fn fix_asset_paths(pkg_dir: &Path) {
    let loader_path = pkg_dir.join("article_actions.js");

    if !loader_path.exists() {
        eprintln!("⚠️  Warning: article_actions.js not found, skipping path fix");
        return;
    }

    let content = fs::read_to_string(&loader_path).expect("Failed to read article_actions.js");

    // new URL('article_actions_bg.wasm', import.meta.url) を
    // new URL('/article_actions_bg.wasm', window.location.origin) に置換
    let fixed_content = content.replace(
        "new URL('article_actions_bg.wasm', import.meta.url)",
        "new URL('/article_actions_bg.wasm', window.location.origin)",
    );

    fs::write(&loader_path, fixed_content).expect("Failed to write fixed article_actions.js");

    println!("   ✓ Fixed WASM path in article_actions.js");
}
